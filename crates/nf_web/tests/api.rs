use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use nf_core::{Article, FeedService};
use nf_storage::MemorySource;
use nf_web::{create_app, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let now = Utc::now();
    let mut articles = vec![
        Article::new("Lagos Traffic Update on Third Mainland Bridge", now).with_url("https://a.ng/0"),
        Article::new("Traffic Update: Third Mainland Bridge Congestion", now - Duration::minutes(1))
            .with_url("https://a.ng/1")
            .with_image("https://img.ng/1.jpg"),
        Article::new("Placeholder story", now - Duration::minutes(2)).with_url("https://example.com/x"),
    ];
    for i in 0..30 {
        articles.push(
            Article::new(format!("Venue spotlight number{} edition{}", i, i), now - Duration::minutes(10 + i))
                .with_url(format!("https://a.ng/venue/{}", i)),
        );
    }

    let feeds = FeedService::new(Arc::new(MemorySource::with_articles(articles)));
    create_app(AppState { feeds })
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_source() {
    let (status, body) = get_json(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["source"], "memory");
}

#[tokio::test]
async fn home_feed_has_three_merged_articles() {
    let (status, body) = get_json(app(), "/api/feed/home").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["placement"], "home");
    assert_eq!(body["count"], 3);

    let first = &body["articles"][0];
    assert_eq!(first["featuredImageUrl"], "https://img.ng/1.jpg");
    assert_eq!(body["articles"][1]["title"], "Venue spotlight number0 edition0");
}

#[tokio::test]
async fn news_feed_has_twenty_articles() {
    let (status, body) = get_json(app(), "/api/feed/news").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 20);
    assert_eq!(body["articles"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn unknown_placement_is_not_found() {
    let (status, body) = get_json(app(), "/api/feed/events").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("events"));
}

#[tokio::test]
async fn custom_counts_are_capped_by_limit() {
    let (status, body) = get_json(app(), "/api/news?limit=5&count=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["placement"], "custom");
    // 5 rows fetched, the bridge pair merges and the placeholder link is dropped.
    assert_eq!(body["count"], 3);
}
