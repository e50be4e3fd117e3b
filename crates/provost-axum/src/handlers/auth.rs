//! Auth handlers - login and current-user profile.

use axum::Json;
use axum::extract::State;

use crate::auth::AuthedUser;
use crate::dto::{LoginRequest, LoginResponse};
use crate::error::HttpError;
use crate::state::AppState;
use provost_core::UserProfile;

/// Verify credentials and return the caller's profile.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    let account = state
        .core
        .auth()
        .authenticate(&req.username, &req.password)
        .await?;
    let user = state.core.directory().profile(&account).await?;
    Ok(Json(LoginResponse {
        user,
        message: "Login successful".to_string(),
    }))
}

/// Profile of the authenticated caller.
pub async fn me(
    State(state): State<AppState>,
    user: AuthedUser,
) -> Result<Json<UserProfile>, HttpError> {
    Ok(Json(state.core.directory().profile(&user.account).await?))
}
