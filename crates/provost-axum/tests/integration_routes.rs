//! Integration tests for the Axum web server.
//!
//! These tests run the real router over an in-memory database, so they
//! verify route wiring, the Basic-auth extractor, and the error mapping
//! in one pass.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use base64::Engine;
use http_body_util::BodyExt;
use tower::ServiceExt;

use provost_axum::bootstrap::{AxumContext, CorsConfig};
use provost_axum::routes::create_router;
use provost_core::workbook::plan_to_table;
use provost_core::{
    AppCore, Course, CourseKind, CoursePlan, HourBreakdown, NewUser, Role, SemesterTerm,
    WorkbookCodec, hash_password,
};
use provost_db::TestDb;
use provost_xlsx::XlsxCodec;
use serde_json::{Value, json};

const ADMIN_PASSWORD: &str = "swordfish";

/// Router over a fresh in-memory database seeded with one superadmin.
async fn seeded_app() -> Router {
    let db = TestDb::new().await.expect("in-memory database");
    let repos = db.repos();
    repos
        .users
        .insert(&NewUser {
            username: "root".to_string(),
            password_hash: hash_password(ADMIN_PASSWORD).expect("hash"),
            email: "root@example.edu".to_string(),
            first_name: "Root".to_string(),
            last_name: "Admin".to_string(),
            role: Role::Superadmin,
        })
        .await
        .expect("seed superadmin");

    let core = Arc::new(AppCore::new(repos, Arc::new(XlsxCodec::new())));
    create_router(AxumContext { core }, &CorsConfig::AllowAll)
}

fn admin_auth() -> String {
    let encoded =
        base64::engine::general_purpose::STANDARD.encode(format!("root:{ADMIN_PASSWORD}"));
    format!("Basic {encoded}")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, admin_auth())
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, admin_auth())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let app = seeded_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn api_requires_credentials() {
    let app = seeded_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/departments")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok()),
        Some("Basic realm=\"provost\"")
    );
}

#[tokio::test]
async fn login_returns_the_profile() {
    let app = seeded_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"username": "root", "password": ADMIN_PASSWORD}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["username"], "root");
    assert_eq!(body["user"]["is_superuser"], true);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"username": "root", "password": "guess"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn department_creation_and_roster() {
    let app = seeded_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/departments",
            &json!({"code": "CS", "title": "Computer Science"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let department = body_json(response).await;
    assert_eq!(department["code"], "CS");

    // Duplicate code answers 409
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/departments",
            &json!({"code": "CS", "title": "Computer Science"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .clone()
        .oneshot(get_request("/api/departments/CS/professors"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));

    // A department head may hire into their own department
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/users/department-heads",
            &json!({
                "username": "cs_head",
                "password": "103203303A",
                "email": "cs_head@example.edu",
                "first_name": "Grace",
                "last_name": "Hopper",
                "department_code": "CS"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let head = body_json(response).await;
    assert_eq!(head["user_type"], "DH");
    assert_eq!(head["department_info"]["code"], "CS");

    let head_auth = format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode("cs_head:103203303A")
    );
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/users/professors")
                .header(header::AUTHORIZATION, head_auth)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "username": "prof_a",
                        "password": "103203303A",
                        "email": "prof_a@example.edu",
                        "first_name": "Alan",
                        "last_name": "Kay",
                        "department_code": "CS",
                        "phone_number": "+1-555-0001",
                        "years_of_experience": 7,
                        "has_phd": true
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let professor = body_json(response).await;
    assert_eq!(professor["professor_info"]["experience_level"], "EX");

    let response = app
        .oneshot(get_request("/api/departments/CS/professors"))
        .await
        .unwrap();
    let roster = body_json(response).await;
    assert_eq!(roster.as_array().unwrap().len(), 1);
    assert_eq!(roster[0]["full_name"], "Alan Kay");
}

fn course_body(code: &str, prerequisites: &[&str]) -> Value {
    json!({
        "code": code,
        "name": format!("Course {code}"),
        "type": "mandatory",
        "semesters": [
            {"semester": 1, "credits": 3,
             "hours": {"lecture": 30, "lab": 15, "practice": 15, "seminar": 0, "individual": 30}}
        ],
        "prerequisites": prerequisites
    })
}

#[tokio::test]
async fn curriculum_lifecycle_over_http() {
    let app = seeded_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/departments",
            &json!({"code": "CS", "title": "Computer Science"}),
        ))
        .await
        .unwrap();
    let department_id = body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/curricula",
            &json!({
                "curriculum_code": "60610800",
                "major_code": "CS2024",
                "classification": "ICT Engineer",
                "degree_type": "BSC",
                "total_credits": 120,
                "department_id": department_id
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Below the credit floor for the degree
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/curricula",
            &json!({
                "curriculum_code": "60610801",
                "major_code": "CS2024",
                "degree_type": "BSC",
                "total_credits": 60,
                "department_id": department_id
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/curricula/60610800/courses",
            &course_body("CS101", &[]),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/curricula/60610800/courses",
            &course_body("CS201", &["CS101"]),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let curriculum = body_json(response).await;
    assert!(curriculum["courses_data"]["CS201"].is_object());

    // CS101 is a prerequisite of CS201, so it cannot be removed
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/curricula/60610800/courses/CS101")
                .header(header::AUTHORIZATION, admin_auth())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(get_request("/api/curricula/60610800/semesters/1"))
        .await
        .unwrap();
    let semester = body_json(response).await;
    assert_eq!(semester.as_array().unwrap().len(), 2);

    let response = app
        .clone()
        .oneshot(get_request(
            "/api/curricula/60610800/courses/CS201/prerequisites",
        ))
        .await
        .unwrap();
    let tree = body_json(response).await;
    assert_eq!(tree["code"], "CS201");
    assert_eq!(tree["prerequisites"]["CS101"]["code"], "CS101");

    // Unknown course in the tree lookup is a 404
    let response = app
        .clone()
        .oneshot(get_request(
            "/api/curricula/60610800/courses/CS999/prerequisites",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/curricula/60610800")
                .header(header::AUTHORIZATION, admin_auth())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(get_request("/api/curricula/60610800"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Multipart body with a workbook file plus a `preview` field.
fn import_body(boundary: &str, file_name: &str, bytes: &[u8], preview: &str) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
             filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(
        format!(
            "\r\n--{boundary}\r\nContent-Disposition: form-data; name=\"preview\"\r\n\r\n\
             {preview}\r\n--{boundary}--\r\n"
        )
        .as_bytes(),
    );
    body
}

fn sample_workbook_bytes() -> Vec<u8> {
    let plan = CoursePlan::from_courses([Course {
        code: "CS101".to_string(),
        name: "Introduction to Programming".to_string(),
        kind: CourseKind::Mandatory,
        semesters: vec![SemesterTerm {
            semester: 1,
            credits: 3,
            hours: HourBreakdown {
                lecture: 30,
                lab: 15,
                practice: 15,
                seminar: 0,
                individual: 30,
            },
        }],
        prerequisites: Vec::new(),
    }]);
    XlsxCodec::new().encode(&plan_to_table(&plan)).unwrap()
}

#[tokio::test]
async fn import_previews_then_commits() {
    let app = seeded_app().await;
    let boundary = "provost-test-boundary";

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/departments",
            &json!({"code": "CS", "title": "Computer Science"}),
        ))
        .await
        .unwrap();
    let department_id = body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/curricula",
            &json!({
                "curriculum_code": "60610800",
                "major_code": "CS2024",
                "degree_type": "BSC",
                "total_credits": 120,
                "department_id": department_id
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let bytes = sample_workbook_bytes();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/curricula/import")
                .header(header::AUTHORIZATION, admin_auth())
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(import_body(
                    boundary,
                    "60610800.xlsx",
                    &bytes,
                    "true",
                )))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let preview = body_json(response).await;
    assert_eq!(preview["status"], "preview");
    assert!(preview["data"]["CS101"].is_object());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/curricula/import")
                .header(header::AUTHORIZATION, admin_auth())
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(import_body(
                    boundary,
                    "60610800.xlsx",
                    &bytes,
                    "false",
                )))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let commit = body_json(response).await;
    assert_eq!(commit["status"], "success");
    assert_eq!(commit["message"], "Updated curriculum 60610800");
    assert_eq!(commit["curriculum_code"], "60610800");

    let response = app
        .oneshot(get_request("/api/curricula/60610800"))
        .await
        .unwrap();
    let stored = body_json(response).await;
    assert_eq!(stored["courses_data"]["CS101"]["name"], "Introduction to Programming");
}

#[tokio::test]
async fn export_and_template_are_xlsx_attachments() {
    let app = seeded_app().await;

    let response = app
        .clone()
        .oneshot(get_request("/api/curricula/template"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok()),
        Some("attachment; filename=\"curriculum_template.xlsx\"")
    );
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..2], b"PK");

    // Export of a missing curriculum is a 404
    let response = app
        .oneshot(get_request("/api/curricula/99999999/export"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
