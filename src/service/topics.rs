//! Topic queries.

use crate::error::AppError;
use crate::models::Topic;
use sqlx::PgPool;

const LIST_SQL: &str = "SELECT slug, description FROM topics ORDER BY slug";
const EXISTS_SQL: &str = "SELECT EXISTS (SELECT 1 FROM topics WHERE slug = $1)";

pub struct TopicService;

impl TopicService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Topic>, AppError> {
        tracing::debug!(sql = %LIST_SQL, "query");
        let rows = sqlx::query_as::<_, Topic>(LIST_SQL).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn exists(pool: &PgPool, slug: &str) -> Result<bool, AppError> {
        tracing::debug!(sql = %EXISTS_SQL, slug = %slug, "query");
        let found: bool = sqlx::query_scalar(EXISTS_SQL).bind(slug).fetch_one(pool).await?;
        Ok(found)
    }
}
