//! Request body validation.

use crate::error::AppError;
use crate::models::NewComment;
use serde_json::{Map, Value};

pub struct RequestValidator;

impl RequestValidator {
    /// `{"inc_votes": <integer>}`. Absent or null → MissingField; any other
    /// non-integer (string, float, out of `i32` range) → IncorrectType.
    pub fn inc_votes(body: &Map<String, Value>) -> Result<i32, AppError> {
        let v = required(body, "inc_votes")?;
        v.as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or(AppError::IncorrectType)
    }

    /// `{"username": <string>, "body": <string>}`, both required.
    pub fn new_comment(body: &Map<String, Value>) -> Result<NewComment, AppError> {
        let username = required_str(body, "username")?;
        let text = required_str(body, "body")?;
        Ok(NewComment {
            username,
            body: text,
        })
    }
}

fn required<'a>(body: &'a Map<String, Value>, field: &str) -> Result<&'a Value, AppError> {
    match body.get(field) {
        None | Some(Value::Null) => Err(AppError::MissingField),
        Some(v) => Ok(v),
    }
}

fn required_str(body: &Map<String, Value>, field: &str) -> Result<String, AppError> {
    required(body, field)?
        .as_str()
        .map(str::to_string)
        .ok_or(AppError::IncorrectType)
}
