//! User handlers: list and lookup by username.

use crate::error::AppError;
use crate::response;
use crate::service::UserService;
use crate::state::AppState;
use axum::extract::{Path, State};

pub const USER_NOT_FOUND: &str = "User does not exist";

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let users = UserService::list(&state.pool).await?;
    Ok(response::ok("users", users))
}

/// GET /api/users/:username
pub async fn read(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let user = UserService::read(&state.pool, &username)
        .await?
        .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;
    Ok(response::ok("user", user))
}
