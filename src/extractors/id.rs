//! Extract a numeric resource id from the single path parameter.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Integer id taken from the route's only path segment (`:article_id`, `:comment_id`).
/// Anything that does not parse as an `i32` is rejected with 400 "Bad request"
/// before a query is issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumericId(pub i32);

pub fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.trim().parse::<i32>().map_err(|_| AppError::bad_request())
}

#[async_trait]
impl<S> FromRequestParts<S> for NumericId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request())?;
        parse_id(&raw).map(NumericId)
    }
}
