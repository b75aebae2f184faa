//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::Msg;

/// PostgreSQL SQLSTATE: invalid_text_representation.
const PG_INVALID_TEXT: &str = "22P02";
/// PostgreSQL SQLSTATE: numeric_value_out_of_range.
const PG_OUT_OF_RANGE: &str = "22003";
/// PostgreSQL SQLSTATE: not_null_violation.
const PG_NOT_NULL: &str = "23502";
/// PostgreSQL SQLSTATE: foreign_key_violation.
const PG_FOREIGN_KEY: &str = "23503";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required setting: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("missing required field")]
    MissingField,
    #[error("incorrect data type")]
    IncorrectType,
    #[error("internal: {0}")]
    Internal(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn not_found(msg: &str) -> Self {
        AppError::NotFound(msg.to_string())
    }

    pub fn bad_request() -> Self {
        AppError::BadRequest("Bad request".into())
    }

    /// Status and client-facing message. Database failures that are not a
    /// known input problem collapse to a generic 500.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::MissingField => (StatusCode::BAD_REQUEST, "Missing required field".into()),
            AppError::IncorrectType => (StatusCode::BAD_REQUEST, "Incorrect data type".into()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".into()),
            AppError::Db(e) => {
                if let sqlx::Error::RowNotFound = e {
                    return (StatusCode::NOT_FOUND, "Not found".into());
                }
                match db_code(e).as_deref() {
                    Some(PG_INVALID_TEXT) | Some(PG_OUT_OF_RANGE) => (StatusCode::BAD_REQUEST, "Bad request".into()),
                    Some(PG_NOT_NULL) => (StatusCode::BAD_REQUEST, "Missing required field".into()),
                    Some(PG_FOREIGN_KEY) => (StatusCode::NOT_FOUND, "Not found".into()),
                    _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".into()),
                }
            }
        }
    }
}

fn db_code(e: &sqlx::Error) -> Option<String> {
    e.as_database_error()
        .and_then(|d| d.code())
        .map(|c| c.into_owned())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = self.status_and_message();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "unhandled error");
        }
        (status, Json(Msg { msg })).into_response()
    }
}
