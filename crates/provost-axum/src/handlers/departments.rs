//! Department handlers - the registry and its professor rosters.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::auth::AuthedUser;
use crate::error::HttpError;
use crate::state::AppState;
use provost_core::{Department, NewDepartment, ProfessorInfo};

/// List all departments.
pub async fn list(
    State(state): State<AppState>,
    _user: AuthedUser,
) -> Result<Json<Vec<Department>>, HttpError> {
    Ok(Json(state.core.directory().list_departments().await?))
}

/// Create a department. Superadmins only.
pub async fn create(
    State(state): State<AppState>,
    user: AuthedUser,
    Json(req): Json<NewDepartment>,
) -> Result<(StatusCode, Json<Department>), HttpError> {
    let department = state
        .core
        .directory()
        .create_department(&user.actor, req)
        .await?;
    Ok((StatusCode::CREATED, Json(department)))
}

/// Get a single department by code.
pub async fn get(
    State(state): State<AppState>,
    _user: AuthedUser,
    Path(code): Path<String>,
) -> Result<Json<Department>, HttpError> {
    Ok(Json(state.core.directory().get_department(&code).await?))
}

/// The professor roster of one department.
pub async fn professors(
    State(state): State<AppState>,
    _user: AuthedUser,
    Path(code): Path<String>,
) -> Result<Json<Vec<ProfessorInfo>>, HttpError> {
    Ok(Json(
        state.core.directory().department_professors(&code).await?,
    ))
}
