//! Topic handlers.

use crate::error::AppError;
use crate::response;
use crate::service::TopicService;
use crate::state::AppState;
use axum::extract::State;

/// GET /api/topics
pub async fn list(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let topics = TopicService::list(&state.pool).await?;
    Ok(response::ok("topics", topics))
}
