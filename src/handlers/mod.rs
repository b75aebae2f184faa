//! HTTP handlers, one module per resource.

pub mod articles;
pub mod comments;
pub mod endpoints;
pub mod topics;
pub mod users;

use crate::response;
use axum::{http::StatusCode, response::IntoResponse};

/// Fallback for unmatched paths and unsupported methods.
pub async fn not_found() -> impl IntoResponse {
    response::message(StatusCode::NOT_FOUND, "Not found")
}
