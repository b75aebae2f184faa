//! JSON object body whose rejections surface as `AppError`.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Json,
};
use serde_json::{Map, Value};

/// Request body parsed as a JSON object. A request with no body and no
/// content type reads as an empty object, so field checks decide the error.
/// Malformed JSON or a non-object body yields 400 "Bad request".
#[derive(Clone, Debug, Default)]
pub struct JsonBody(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !req.headers().contains_key(CONTENT_TYPE) {
            let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
                tracing::debug!(%rejection, "unreadable request body");
                AppError::bad_request()
            })?;
            if bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(JsonBody::default());
            }
            return Err(AppError::bad_request());
        }
        let Json(value) = Json::<Value>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(%rejection, "rejected request body");
            AppError::bad_request()
        })?;
        match value {
            Value::Object(map) => Ok(JsonBody(map)),
            _ => Err(AppError::bad_request()),
        }
    }
}
