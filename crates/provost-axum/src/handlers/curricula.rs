//! Curriculum handlers - CRUD, course operations, and workbook exchange.

use std::path::Path as FsPath;

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::auth::AuthedUser;
use crate::dto::{ImportCommitResponse, ImportPreviewResponse};
use crate::error::HttpError;
use crate::state::AppState;
use provost_core::{Course, Curriculum, CurriculumUpdate, NewCurriculum, PrereqTree};

/// MIME type for xlsx attachments.
const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// List all curricula.
pub async fn list(
    State(state): State<AppState>,
    _user: AuthedUser,
) -> Result<Json<Vec<Curriculum>>, HttpError> {
    Ok(Json(state.core.curricula().list().await?))
}

/// Create a curriculum.
pub async fn create(
    State(state): State<AppState>,
    user: AuthedUser,
    Json(req): Json<NewCurriculum>,
) -> Result<(StatusCode, Json<Curriculum>), HttpError> {
    let curriculum = state.core.curricula().create(&user.actor, req).await?;
    Ok((StatusCode::CREATED, Json(curriculum)))
}

/// Get a single curriculum by code.
pub async fn get(
    State(state): State<AppState>,
    _user: AuthedUser,
    Path(code): Path<String>,
) -> Result<Json<Curriculum>, HttpError> {
    Ok(Json(state.core.curricula().get(&code).await?))
}

/// Apply a metadata update and return the stored result.
pub async fn update(
    State(state): State<AppState>,
    user: AuthedUser,
    Path(code): Path<String>,
    Json(req): Json<CurriculumUpdate>,
) -> Result<Json<Curriculum>, HttpError> {
    Ok(Json(
        state.core.curricula().update(&user.actor, &code, req).await?,
    ))
}

/// Delete a curriculum. Superadmins only.
pub async fn remove(
    State(state): State<AppState>,
    user: AuthedUser,
    Path(code): Path<String>,
) -> Result<StatusCode, HttpError> {
    state.core.curricula().delete(&user.actor, &code).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a course to a curriculum's plan.
pub async fn add_course(
    State(state): State<AppState>,
    user: AuthedUser,
    Path(code): Path<String>,
    Json(course): Json<Course>,
) -> Result<(StatusCode, Json<Curriculum>), HttpError> {
    let curriculum = state
        .core
        .curricula()
        .add_course(&user.actor, &code, course)
        .await?;
    Ok((StatusCode::CREATED, Json(curriculum)))
}

/// Replace a course within a curriculum's plan.
pub async fn update_course(
    State(state): State<AppState>,
    user: AuthedUser,
    Path((code, course_code)): Path<(String, String)>,
    Json(course): Json<Course>,
) -> Result<Json<Curriculum>, HttpError> {
    if course.code != course_code {
        return Err(HttpError::BadRequest(format!(
            "Course code in path ({course_code}) and body ({}) must match",
            course.code
        )));
    }
    Ok(Json(
        state
            .core
            .curricula()
            .update_course(&user.actor, &code, course)
            .await?,
    ))
}

/// Remove a course from a curriculum's plan.
pub async fn remove_course(
    State(state): State<AppState>,
    user: AuthedUser,
    Path((code, course_code)): Path<(String, String)>,
) -> Result<Json<Curriculum>, HttpError> {
    Ok(Json(
        state
            .core
            .curricula()
            .remove_course(&user.actor, &code, &course_code)
            .await?,
    ))
}

/// Courses running in one semester of a curriculum.
pub async fn semester_courses(
    State(state): State<AppState>,
    _user: AuthedUser,
    Path((code, semester)): Path<(String, u8)>,
) -> Result<Json<Vec<Course>>, HttpError> {
    Ok(Json(
        state.core.curricula().semester_courses(&code, semester).await?,
    ))
}

/// The prerequisite tree of one course.
pub async fn prerequisite_tree(
    State(state): State<AppState>,
    _user: AuthedUser,
    Path((code, course_code)): Path<(String, String)>,
) -> Result<Json<PrereqTree>, HttpError> {
    Ok(Json(
        state
            .core
            .curricula()
            .prerequisite_tree(&code, &course_code)
            .await?,
    ))
}

/// Upload a workbook: preview by default, commit when `preview=false`.
///
/// The commit target is the `curriculum_code` form field when given,
/// otherwise the uploaded filename stem. Warnings never block a commit;
/// they ride along in the response.
pub async fn import(
    State(state): State<AppState>,
    user: AuthedUser,
    mut multipart: Multipart,
) -> Result<Response, HttpError> {
    let mut file_bytes: Option<axum::body::Bytes> = None;
    let mut file_name: Option<String> = None;
    let mut preview_only = true;
    let mut explicit_code: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HttpError::BadRequest(format!("Invalid multipart: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                file_name = field.file_name().map(ToString::to_string);
                file_bytes = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| HttpError::BadRequest(format!("Invalid file: {e}")))?,
                );
            }
            "preview" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| HttpError::BadRequest(format!("Invalid field: {e}")))?;
                preview_only = text.trim().eq_ignore_ascii_case("true");
            }
            "curriculum_code" => {
                explicit_code = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| HttpError::BadRequest(format!("Invalid field: {e}")))?,
                );
            }
            _ => {}
        }
    }

    let Some(bytes) = file_bytes else {
        return Err(HttpError::BadRequest("No file uploaded".to_string()));
    };

    let preview = state.core.curricula().import_preview(&bytes)?;
    if preview_only {
        return Ok(Json(ImportPreviewResponse {
            status: "preview",
            warnings: preview.warnings,
            data: preview.plan,
        })
        .into_response());
    }

    let code = explicit_code
        .filter(|c| !c.trim().is_empty())
        .or_else(|| {
            file_name
                .as_deref()
                .and_then(|n| FsPath::new(n).file_stem())
                .and_then(|s| s.to_str())
                .map(str::to_string)
        })
        .ok_or_else(|| HttpError::BadRequest("Missing curriculum code".to_string()))?;

    let curriculum = state
        .core
        .curricula()
        .import_commit(&user.actor, &code, preview.plan)
        .await?;
    let message = format!("Updated curriculum {}", curriculum.curriculum_code);
    Ok(Json(ImportCommitResponse {
        status: "success",
        message,
        warnings: preview.warnings,
        curriculum_code: curriculum.curriculum_code,
    })
    .into_response())
}

/// Download a curriculum's plan as an xlsx attachment.
pub async fn export(
    State(state): State<AppState>,
    _user: AuthedUser,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let bytes = state.core.curricula().export(&code).await?;
    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{code}.xlsx\""),
            ),
        ],
        bytes,
    ))
}

/// Download the starter template as an xlsx attachment.
pub async fn template(
    State(state): State<AppState>,
    _user: AuthedUser,
) -> Result<impl IntoResponse, HttpError> {
    let bytes = state.core.curricula().template()?;
    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"curriculum_template.xlsx\"".to_string(),
            ),
        ],
        bytes,
    ))
}
