use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nf_core::{Article, Placement};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::AppState;

pub const DEFAULT_NEWS_LIMIT: usize = 30;
pub const DEFAULT_NEWS_COUNT: usize = 20;

#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub placement: String,
    pub count: usize,
    pub articles: Vec<Article>,
}

impl FeedResponse {
    fn new(placement: impl Into<String>, articles: Vec<Article>) -> Self {
        Self {
            placement: placement.into(),
            count: articles.len(),
            articles,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub limit: Option<usize>,
    pub count: Option<usize>,
}

pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "status": "ok", "source": state.feeds.source_name() }))
}

pub async fn placement_feed(
    State(state): State<Arc<AppState>>,
    Path(placement): Path<String>,
) -> Response {
    let placement: Placement = match placement.parse() {
        Ok(placement) => placement,
        Err(e) => {
            return (StatusCode::NOT_FOUND, Json(json!({ "error": e.to_string() }))).into_response();
        }
    };

    let articles = state.feeds.feed(placement).await;
    Json(FeedResponse::new(placement.as_str(), articles)).into_response()
}

pub async fn news(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NewsQuery>,
) -> impl IntoResponse {
    let limit = query.limit.unwrap_or(DEFAULT_NEWS_LIMIT);
    let count = query.count.unwrap_or(DEFAULT_NEWS_COUNT).min(limit);

    let articles = state.feeds.feed_with_counts(limit, count).await;
    Json(FeedResponse::new("custom", articles))
}
