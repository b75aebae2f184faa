//! Article endpoints against a seeded PostgreSQL (`TEST_DATABASE_URL`).

mod common;

use axum::http::StatusCode;
use common::{get, seeded_app, send};
use serde_json::{json, Value};

fn field<'a>(articles: &'a [Value], key: &str) -> Vec<&'a Value> {
    articles.iter().map(|a| &a[key]).collect()
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn read_article_with_comment_count() {
    let db = seeded_app().await;
    let (status, body) = get(&db.app, "/api/articles/6").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["article"],
        json!({
            "article_id": 6,
            "title": "A",
            "topic": "mitch",
            "author": "icellusedkars",
            "body": "Delicious tin of cat food",
            "comment_count": 1,
            "created_at": "2020-10-18T01:00:00.000Z",
            "votes": 0
        })
    );

    let (status, body) = get(&db.app, "/api/articles/5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["article"]["comment_count"], 2);
    assert_eq!(body["article"]["created_at"], "2020-08-03T13:14:00.000Z");
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn read_absent_article_is_404() {
    let db = seeded_app().await;
    let (status, body) = get(&db.app, "/api/articles/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Article id does not exist");
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn list_defaults_to_newest_first() {
    let db = seeded_app().await;
    let (status, body) = get(&db.app, "/api/articles").await;
    assert_eq!(status, StatusCode::OK);
    let articles = body["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 12);
    for a in articles {
        assert!(a["article_id"].is_i64());
        assert!(a["title"].is_string());
        assert!(a["topic"].is_string());
        assert!(a["author"].is_string());
        assert!(a["created_at"].is_string());
        assert!(a["votes"].is_i64());
        assert!(a["comment_count"].is_i64());
        assert!(a.get("body").is_none());
    }
    let dates: Vec<&str> = articles.iter().map(|a| a["created_at"].as_str().unwrap()).collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
    assert_eq!(articles[0]["article_id"], 3);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn list_sorts_by_votes_in_either_direction() {
    let db = seeded_app().await;
    let (_, body) = get(&db.app, "/api/articles?sort_by=votes").await;
    let articles = body["articles"].as_array().unwrap();
    let votes: Vec<i64> = field(articles, "votes").iter().map(|v| v.as_i64().unwrap()).collect();
    assert!(votes.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(articles[0]["article_id"], 1);

    let (status, body) = get(&db.app, "/api/articles?sort_by=votes&&order=asc").await;
    assert_eq!(status, StatusCode::OK);
    let articles = body["articles"].as_array().unwrap();
    let votes: Vec<i64> = field(articles, "votes").iter().map(|v| v.as_i64().unwrap()).collect();
    assert!(votes.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(articles.last().unwrap()["article_id"], 1);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn list_sorts_by_comment_count() {
    let db = seeded_app().await;
    let (status, body) = get(&db.app, "/api/articles?sort_by=comment_count").await;
    assert_eq!(status, StatusCode::OK);
    let first = &body["articles"][0];
    assert_eq!(first["article_id"], 1);
    assert_eq!(first["comment_count"], 11);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn list_filters_by_topic() {
    let db = seeded_app().await;
    let (status, body) = get(&db.app, "/api/articles?topic=mitch").await;
    assert_eq!(status, StatusCode::OK);
    let articles = body["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 11);
    assert!(articles.iter().all(|a| a["topic"] == "mitch"));

    let (status, body) = get(&db.app, "/api/articles?topic=paper").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["articles"], json!([]));
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn list_unknown_topic_is_404() {
    let db = seeded_app().await;
    let (status, body) = get(&db.app, "/api/articles?topic=not-a-topic").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Topic does not exist");
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn patch_applies_signed_increment() {
    let db = seeded_app().await;
    let (status, body) = send(&db.app, "PATCH", "/api/articles/6", Some(json!({ "inc_votes": 2 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["article"],
        json!({
            "article_id": 6,
            "title": "A",
            "topic": "mitch",
            "author": "icellusedkars",
            "body": "Delicious tin of cat food",
            "created_at": "2020-10-18T01:00:00.000Z",
            "votes": 2
        })
    );

    let (_, body) = send(&db.app, "PATCH", "/api/articles/1", Some(json!({ "inc_votes": 3 }))).await;
    assert_eq!(body["article"]["votes"], 103);
    let (_, body) = send(&db.app, "PATCH", "/api/articles/1", Some(json!({ "inc_votes": -110 }))).await;
    assert_eq!(body["article"]["votes"], -7);

    let stored: i32 = sqlx::query_scalar("SELECT votes FROM articles WHERE article_id = 1")
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(stored, -7);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn patch_absent_article_is_404() {
    let db = seeded_app().await;
    let (status, body) = send(&db.app, "PATCH", "/api/articles/999", Some(json!({ "inc_votes": 1 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Article id does not exist");
}
