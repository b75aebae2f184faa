//! User queries.

use crate::error::AppError;
use crate::models::User;
use sqlx::PgPool;

const LIST_SQL: &str = "SELECT username, name, avatar_url FROM users ORDER BY username";
const READ_SQL: &str = "SELECT username, name, avatar_url FROM users WHERE username = $1";

pub struct UserService;

impl UserService {
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, AppError> {
        tracing::debug!(sql = %LIST_SQL, "query");
        let rows = sqlx::query_as::<_, User>(LIST_SQL).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn read(pool: &PgPool, username: &str) -> Result<Option<User>, AppError> {
        tracing::debug!(sql = %READ_SQL, username = %username, "query");
        let row = sqlx::query_as::<_, User>(READ_SQL)
            .bind(username)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }
}
