//! Article queries.

use crate::error::AppError;
use crate::models::{Article, ArticleDetail, ArticleSummary};
use crate::sql::{select_articles, ArticleListQuery};
use sqlx::PgPool;

const READ_SQL: &str = "SELECT articles.article_id, articles.title, articles.topic, articles.author, \
     articles.body, articles.created_at, articles.votes, COUNT(comments.comment_id) AS comment_count \
     FROM articles LEFT JOIN comments ON comments.article_id = articles.article_id \
     WHERE articles.article_id = $1 GROUP BY articles.article_id";
const EXISTS_SQL: &str = "SELECT EXISTS (SELECT 1 FROM articles WHERE article_id = $1)";
const INC_VOTES_SQL: &str = "UPDATE articles SET votes = votes + $1 WHERE article_id = $2 \
     RETURNING article_id, title, topic, author, body, created_at, votes";

pub struct ArticleService;

impl ArticleService {
    /// Fetch one article with its comment count.
    pub async fn read(pool: &PgPool, article_id: i32) -> Result<Option<ArticleDetail>, AppError> {
        tracing::debug!(sql = %READ_SQL, article_id, "query");
        let row = sqlx::query_as::<_, ArticleDetail>(READ_SQL)
            .bind(article_id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn list(pool: &PgPool, query: &ArticleListQuery) -> Result<Vec<ArticleSummary>, AppError> {
        let q = select_articles(query);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut stmt = sqlx::query_as::<_, ArticleSummary>(&q.sql);
        for p in &q.params {
            stmt = stmt.bind(p);
        }
        let rows = stmt.fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn exists(pool: &PgPool, article_id: i32) -> Result<bool, AppError> {
        tracing::debug!(sql = %EXISTS_SQL, article_id, "query");
        let found: bool = sqlx::query_scalar(EXISTS_SQL).bind(article_id).fetch_one(pool).await?;
        Ok(found)
    }

    /// Add `inc_votes` (may be negative) to the stored vote count. Returns the updated row or None.
    pub async fn increment_votes(pool: &PgPool, article_id: i32, inc_votes: i32) -> Result<Option<Article>, AppError> {
        tracing::debug!(sql = %INC_VOTES_SQL, article_id, inc_votes, "query");
        let row = sqlx::query_as::<_, Article>(INC_VOTES_SQL)
            .bind(inc_votes)
            .bind(article_id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }
}
