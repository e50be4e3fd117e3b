//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the shared `AppCore` facade.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Upload size cap for workbook imports.
const MAX_IMPORT_BYTES: usize = 10 * 1024 * 1024;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all API routes without the `/api` prefix (for nesting under /api).
///
/// Returns a router typed as `Router<AppState>` but WITHOUT `.with_state()`
/// applied. The caller must apply `.with_state()` before nesting.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Auth API
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
        // Departments API
        .route(
            "/departments",
            get(handlers::departments::list).post(handlers::departments::create),
        )
        .route("/departments/{code}", get(handlers::departments::get))
        .route(
            "/departments/{code}/professors",
            get(handlers::departments::professors),
        )
        // Account creation API
        .route(
            "/users/department-heads",
            post(handlers::users::create_department_head),
        )
        .route("/users/professors", post(handlers::users::create_professor))
        // Curricula API
        .route(
            "/curricula",
            get(handlers::curricula::list).post(handlers::curricula::create),
        )
        .route("/curricula/template", get(handlers::curricula::template))
        .route(
            "/curricula/import",
            post(handlers::curricula::import).layer(DefaultBodyLimit::max(MAX_IMPORT_BYTES)),
        )
        .route(
            "/curricula/{code}",
            get(handlers::curricula::get)
                .put(handlers::curricula::update)
                .delete(handlers::curricula::remove),
        )
        .route("/curricula/{code}/export", get(handlers::curricula::export))
        .route(
            "/curricula/{code}/courses",
            post(handlers::curricula::add_course),
        )
        .route(
            "/curricula/{code}/courses/{course_code}",
            put(handlers::curricula::update_course).delete(handlers::curricula::remove_course),
        )
        .route(
            "/curricula/{code}/courses/{course_code}/prerequisites",
            get(handlers::curricula::prerequisite_tree),
        )
        .route(
            "/curricula/{code}/semesters/{semester}",
            get(handlers::curricula::semester_courses),
        )
}

/// Create the main Axum router with all API routes.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{code}`, `{semester}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes().with_state(state).layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
