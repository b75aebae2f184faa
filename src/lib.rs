//! News API: JSON REST endpoints for topics, articles, comments and users on PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use routes::{api_routes, app, common_routes};
pub use state::AppState;
