//! Axum-specific error types and mappings.
//!
//! This module provides error types for the Axum adapter and mappings
//! from `CoreError` and `AuthError` to HTTP status codes and response
//! bodies.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use provost_core::{AuthError, CoreError, PlanError, RepositoryError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing or invalid credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Conflict (resource already exists).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        let mut response = (status, axum::Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("Basic realm=\"provost\""),
            );
        }
        response
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            // Asking about a course that is not in the plan is a missing
            // resource; every other plan violation is the caller's input.
            CoreError::Plan(PlanError::UnknownCourse { code }) => {
                HttpError::NotFound(format!("Course {code} does not exist"))
            }
            CoreError::Plan(plan_err) => HttpError::BadRequest(plan_err.to_string()),
            CoreError::Curriculum(curr_err) => HttpError::BadRequest(curr_err.to_string()),
            CoreError::Workbook(wb_err) => HttpError::BadRequest(wb_err.to_string()),
            CoreError::Validation(msg) => HttpError::BadRequest(msg),
            CoreError::Forbidden(msg) => HttpError::Forbidden(msg),
            CoreError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => HttpError::NotFound(msg),
            RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
            RepositoryError::Storage(msg) => HttpError::Internal(format!("Storage: {msg}")),
            RepositoryError::Serialization(msg) => {
                HttpError::Internal(format!("Serialization: {msg}"))
            }
            RepositoryError::Constraint(msg) => HttpError::BadRequest(msg),
        }
    }
}

impl From<AuthError> for HttpError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => HttpError::Unauthorized(err.to_string()),
            AuthError::Hash(msg) => HttpError::Internal(msg),
            AuthError::Repository(repo_err) => repo_err.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unauthorized_carries_the_challenge_header() {
        let response = HttpError::Unauthorized("Invalid credentials".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response
                .headers()
                .get(header::WWW_AUTHENTICATE)
                .and_then(|v| v.to_str().ok()),
            Some("Basic realm=\"provost\"")
        );
    }

    #[test]
    fn forbidden_keeps_the_core_wording() {
        let core = CoreError::Forbidden(
            "You do not have permission to perform this action".to_string(),
        );
        let http = HttpError::from(core);
        assert!(matches!(http, HttpError::Forbidden(msg)
            if msg == "You do not have permission to perform this action"));
    }

    #[test]
    fn unknown_course_maps_to_not_found() {
        let core = CoreError::Plan(PlanError::UnknownCourse {
            code: "CS999".to_string(),
        });
        assert!(matches!(HttpError::from(core), HttpError::NotFound(_)));

        let core = CoreError::Plan(PlanError::DuplicateCourse {
            code: "CS101".to_string(),
        });
        assert!(matches!(HttpError::from(core), HttpError::BadRequest(_)));
    }

    #[test]
    fn conflict_maps_already_exists() {
        let err = RepositoryError::AlreadyExists("curriculum '60610800'".to_string());
        assert!(matches!(HttpError::from(err), HttpError::Conflict(_)));
    }
}
