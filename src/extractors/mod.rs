//! Request extractors that reject with `AppError`.

pub mod id;
pub mod json;

pub use id::{parse_id, NumericId};
pub use json::JsonBody;
