//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! These types define the stable HTTP request and response bodies. Domain
//! types that already serialize the way the API promises (profiles,
//! curricula, courses) are served directly; only shapes specific to the
//! HTTP surface live here.

use provost_core::{CoursePlan, UserProfile};
use serde::{Deserialize, Serialize};

/// Credentials for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response: the caller's profile plus a confirmation.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserProfile,
    pub message: String,
}

/// Body returned when an uploaded workbook is previewed without committing.
#[derive(Debug, Serialize)]
pub struct ImportPreviewResponse {
    pub status: &'static str,
    pub warnings: Vec<String>,
    pub data: CoursePlan,
}

/// Body returned when an uploaded workbook is committed.
#[derive(Debug, Serialize)]
pub struct ImportCommitResponse {
    pub status: &'static str,
    pub message: String,
    pub warnings: Vec<String>,
    pub curriculum_code: String,
}
