//! Comment handlers: list per article, post, vote, delete.

use crate::error::AppError;
use crate::extractors::{JsonBody, NumericId};
use crate::response;
use crate::service::{ArticleService, CommentService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const ARTICLE_NOT_FOUND: &str = "Article does not exist";
pub const COMMENT_NOT_FOUND: &str = "Comment does not exist";
pub const NO_COMMENTS: &str = "No comments for the article";

/// GET /api/articles/:article_id/comments
pub async fn list_for_article(
    State(state): State<AppState>,
    NumericId(article_id): NumericId,
) -> Result<Response, AppError> {
    if !ArticleService::exists(&state.pool, article_id).await? {
        return Err(AppError::not_found(ARTICLE_NOT_FOUND));
    }
    let comments = CommentService::list_for_article(&state.pool, article_id).await?;
    if comments.is_empty() {
        return Ok(response::message(StatusCode::OK, NO_COMMENTS).into_response());
    }
    Ok(response::ok("comments", comments).into_response())
}

/// POST /api/articles/:article_id/comments with `{"username", "body"}`
pub async fn create(
    State(state): State<AppState>,
    NumericId(article_id): NumericId,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let new_comment = RequestValidator::new_comment(&body)?;
    if !ArticleService::exists(&state.pool, article_id).await? {
        return Err(AppError::not_found(ARTICLE_NOT_FOUND));
    }
    let comment = CommentService::create(&state.pool, article_id, &new_comment).await?;
    tracing::info!(comment_id = comment.comment_id, article_id, "comment created");
    Ok(response::created("comments", comment))
}

/// PATCH /api/comments/:comment_id with `{"inc_votes": N}`
pub async fn update_votes(
    State(state): State<AppState>,
    NumericId(comment_id): NumericId,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let inc_votes = RequestValidator::inc_votes(&body)?;
    let comment = CommentService::increment_votes(&state.pool, comment_id, inc_votes)
        .await?
        .ok_or_else(|| AppError::not_found(COMMENT_NOT_FOUND))?;
    Ok(response::ok("comment", comment))
}

/// DELETE /api/comments/:comment_id
pub async fn delete(
    State(state): State<AppState>,
    NumericId(comment_id): NumericId,
) -> Result<impl IntoResponse, AppError> {
    if !CommentService::delete(&state.pool, comment_id).await? {
        return Err(AppError::not_found(COMMENT_NOT_FOUND));
    }
    tracing::info!(comment_id, "comment deleted");
    Ok(StatusCode::NO_CONTENT)
}
