//! Resource routes under /api.

use crate::handlers::{articles, comments, endpoints, not_found, topics, users};
use crate::state::AppState;
use axum::{
    routing::{delete, get},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api", get(endpoints::describe).fallback(not_found))
        .route("/api/topics", get(topics::list).fallback(not_found))
        .route("/api/articles", get(articles::list).fallback(not_found))
        .route(
            "/api/articles/:article_id",
            get(articles::read).patch(articles::update_votes).fallback(not_found),
        )
        .route(
            "/api/articles/:article_id/comments",
            get(comments::list_for_article).post(comments::create).fallback(not_found),
        )
        .route(
            "/api/comments/:comment_id",
            delete(comments::delete).patch(comments::update_votes).fallback(not_found),
        )
        .route("/api/users", get(users::list).fallback(not_found))
        .route("/api/users/:username", get(users::read).fallback(not_found))
        .with_state(state)
}
