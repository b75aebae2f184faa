//! GET /api: static description of every route.

use crate::error::AppError;
use crate::response;
use serde_json::Value;

const ENDPOINTS_JSON: &str = include_str!("../../endpoints.json");

pub fn endpoints_document() -> Result<Value, AppError> {
    serde_json::from_str(ENDPOINTS_JSON).map_err(|e| AppError::Internal(format!("endpoints document: {}", e)))
}

pub async fn describe() -> Result<impl axum::response::IntoResponse, AppError> {
    Ok(response::ok("endpoints", endpoints_document()?))
}
