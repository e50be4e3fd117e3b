//! Account creation handlers.
//!
//! Role rules live in the directory service: department heads are created
//! by superadmins, professors by superadmins or by the head of the target
//! department.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::auth::AuthedUser;
use crate::error::HttpError;
use crate::state::AppState;
use provost_core::{NewDepartmentHead, NewProfessorAccount, UserProfile};

/// Create a department head account and put it in charge of its department.
pub async fn create_department_head(
    State(state): State<AppState>,
    user: AuthedUser,
    Json(req): Json<NewDepartmentHead>,
) -> Result<(StatusCode, Json<UserProfile>), HttpError> {
    let profile = state
        .core
        .directory()
        .create_department_head(&user.actor, req)
        .await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// Create a professor account together with its profile.
pub async fn create_professor(
    State(state): State<AppState>,
    user: AuthedUser,
    Json(req): Json<NewProfessorAccount>,
) -> Result<(StatusCode, Json<UserProfile>), HttpError> {
    let profile = state
        .core
        .directory()
        .create_professor(&user.actor, req)
        .await?;
    Ok((StatusCode::CREATED, Json(profile)))
}
