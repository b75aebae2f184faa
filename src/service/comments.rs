//! Comment queries.

use crate::error::AppError;
use crate::models::{ArticleComment, Comment, NewComment};
use sqlx::PgPool;

const LIST_FOR_ARTICLE_SQL: &str = "SELECT comment_id, votes, created_at, author, body FROM comments \
     WHERE article_id = $1 ORDER BY created_at ASC, comment_id ASC";
const INSERT_SQL: &str = "INSERT INTO comments (article_id, author, body) VALUES ($1, $2, $3) \
     RETURNING comment_id, article_id, author, body, votes, created_at";
const DELETE_SQL: &str = "DELETE FROM comments WHERE comment_id = $1";
const INC_VOTES_SQL: &str = "UPDATE comments SET votes = votes + $1 WHERE comment_id = $2 \
     RETURNING comment_id, article_id, author, body, votes, created_at";

pub struct CommentService;

impl CommentService {
    pub async fn list_for_article(pool: &PgPool, article_id: i32) -> Result<Vec<ArticleComment>, AppError> {
        tracing::debug!(sql = %LIST_FOR_ARTICLE_SQL, article_id, "query");
        let rows = sqlx::query_as::<_, ArticleComment>(LIST_FOR_ARTICLE_SQL)
            .bind(article_id)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Insert a comment; id, votes and created_at come from column defaults.
    pub async fn create(pool: &PgPool, article_id: i32, comment: &NewComment) -> Result<Comment, AppError> {
        tracing::debug!(sql = %INSERT_SQL, article_id, author = %comment.username, "query");
        let row = sqlx::query_as::<_, Comment>(INSERT_SQL)
            .bind(article_id)
            .bind(&comment.username)
            .bind(&comment.body)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Delete one comment by id. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, comment_id: i32) -> Result<bool, AppError> {
        tracing::debug!(sql = %DELETE_SQL, comment_id, "query");
        let result = sqlx::query(DELETE_SQL).bind(comment_id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn increment_votes(pool: &PgPool, comment_id: i32, inc_votes: i32) -> Result<Option<Comment>, AppError> {
        tracing::debug!(sql = %INC_VOTES_SQL, comment_id, inc_votes, "query");
        let row = sqlx::query_as::<_, Comment>(INC_VOTES_SQL)
            .bind(inc_votes)
            .bind(comment_id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }
}
