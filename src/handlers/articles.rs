//! Article handlers: read, list, vote.

use crate::error::AppError;
use crate::extractors::{JsonBody, NumericId};
use crate::response;
use crate::service::{ArticleService, RequestValidator, TopicService};
use crate::sql::ArticleListQuery;
use crate::state::AppState;
use axum::extract::{Query, State};
use std::collections::HashMap;

pub const ARTICLE_NOT_FOUND: &str = "Article id does not exist";
pub const TOPIC_NOT_FOUND: &str = "Topic does not exist";

/// GET /api/articles/:article_id
pub async fn read(
    State(state): State<AppState>,
    NumericId(article_id): NumericId,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let article = ArticleService::read(&state.pool, article_id)
        .await?
        .ok_or_else(|| AppError::not_found(ARTICLE_NOT_FOUND))?;
    Ok(response::ok("article", article))
}

/// GET /api/articles?sort_by=&order=&topic=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let query = ArticleListQuery::parse(
        params.get("sort_by").map(String::as_str),
        params.get("order").map(String::as_str),
        params.get("topic").map(String::as_str),
    )?;
    let articles = ArticleService::list(&state.pool, &query).await?;
    if articles.is_empty() {
        if let Some(topic) = &query.topic {
            if !TopicService::exists(&state.pool, topic).await? {
                return Err(AppError::not_found(TOPIC_NOT_FOUND));
            }
        }
    }
    Ok(response::ok("articles", articles))
}

/// PATCH /api/articles/:article_id with `{"inc_votes": N}`
pub async fn update_votes(
    State(state): State<AppState>,
    NumericId(article_id): NumericId,
    JsonBody(body): JsonBody,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let inc_votes = RequestValidator::inc_votes(&body)?;
    let article = ArticleService::increment_votes(&state.pool, article_id, inc_votes)
        .await?
        .ok_or_else(|| AppError::not_found(ARTICLE_NOT_FOUND))?;
    Ok(response::ok("article", article))
}
