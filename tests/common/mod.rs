#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use news_api::{app, AppState};
use serde::Deserialize;
use serde_json::Value;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tokio::sync::{Mutex, MutexGuard};
use tower::ServiceExt; // for oneshot

const SCHEMA_SQL: &str = include_str!("../fixtures/schema.sql");
const TEST_DATA_JSON: &str = include_str!("../fixtures/test_data.json");
const BODY_LIMIT: usize = 64 * 1024;

/// Database-backed tests re-seed shared tables; run them one at a time.
static DB_LOCK: Mutex<()> = Mutex::const_new(());

#[derive(Deserialize)]
struct TestData {
    topics: Vec<TopicRow>,
    users: Vec<UserRow>,
    articles: Vec<ArticleRow>,
    comments: Vec<CommentRow>,
}

#[derive(Deserialize)]
struct TopicRow {
    slug: String,
    description: String,
}

#[derive(Deserialize)]
struct UserRow {
    username: String,
    name: String,
    avatar_url: String,
}

#[derive(Deserialize)]
struct ArticleRow {
    title: String,
    topic: String,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    votes: i32,
}

#[derive(Deserialize)]
struct CommentRow {
    body: String,
    article_id: i32,
    author: String,
    votes: i32,
    created_at: DateTime<Utc>,
}

/// Router over a pool that never connects. Only for requests rejected before any query.
pub fn offline_app() -> Router {
    let pool = PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_millis(500))
        .connect_lazy("postgres://127.0.0.1:1/news_api_offline")
        .unwrap();
    app(AppState::new(pool), BODY_LIMIT)
}

pub struct TestDb {
    pub app: Router,
    pub pool: PgPool,
    _guard: MutexGuard<'static, ()>,
}

/// Recreate the schema in `TEST_DATABASE_URL`, load the fixture rows and build the router.
pub async fn seeded_app() -> TestDb {
    let guard = DB_LOCK.lock().await;
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set for database tests");
    let pool = PgPoolOptions::new().max_connections(2).connect(&url).await.unwrap();
    seed(&pool).await;
    TestDb {
        app: app(AppState::new(pool.clone()), BODY_LIMIT),
        pool,
        _guard: guard,
    }
}

async fn seed(pool: &PgPool) {
    let data: TestData = serde_json::from_str(TEST_DATA_JSON).unwrap();
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await.unwrap();
    for t in &data.topics {
        sqlx::query("INSERT INTO topics (slug, description) VALUES ($1, $2)")
            .bind(&t.slug)
            .bind(&t.description)
            .execute(pool)
            .await
            .unwrap();
    }
    for u in &data.users {
        sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES ($1, $2, $3)")
            .bind(&u.username)
            .bind(&u.name)
            .bind(&u.avatar_url)
            .execute(pool)
            .await
            .unwrap();
    }
    for a in &data.articles {
        sqlx::query(
            "INSERT INTO articles (title, topic, author, body, created_at, votes) VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&a.title)
        .bind(&a.topic)
        .bind(&a.author)
        .bind(&a.body)
        .bind(a.created_at)
        .bind(a.votes)
        .execute(pool)
        .await
        .unwrap();
    }
    for c in &data.comments {
        sqlx::query(
            "INSERT INTO comments (body, article_id, author, votes, created_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&c.body)
        .bind(c.article_id)
        .bind(&c.author)
        .bind(c.votes)
        .bind(c.created_at)
        .execute(pool)
        .await
        .unwrap();
    }
}

/// Send one request; returns the status and the body parsed as JSON (`Null` when empty).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| panic!("non-JSON body: {}", String::from_utf8_lossy(&bytes)))
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

/// Send a raw (possibly malformed) JSON payload.
pub async fn send_raw(app: &Router, method: &str, uri: &str, raw: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(raw))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
