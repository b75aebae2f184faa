//! Row types decoded from PostgreSQL and serialized to clients.

use crate::response::iso_millis;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

/// A stored article row.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Article {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    #[serde(serialize_with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    pub votes: i32,
}

/// An article with its derived comment count.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct ArticleDetail {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub article: Article,
    pub comment_count: i64,
}

/// Listing shape: no body.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct ArticleSummary {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    #[serde(serialize_with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
}

/// A stored comment row.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Comment {
    pub comment_id: i32,
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i32,
    #[serde(serialize_with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

/// Comment as listed under its article.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct ArticleComment {
    pub comment_id: i32,
    pub votes: i32,
    #[serde(serialize_with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    pub author: String,
    pub body: String,
}

/// Validated body of `POST /api/articles/:article_id/comments`.
#[derive(Clone, Debug)]
pub struct NewComment {
    pub username: String,
    pub body: String,
}
