use async_trait::async_trait;
use nf_core::{Article, NewsSource, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::latest_with_links;

/// In-process news table, used for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    articles: Arc<RwLock<Vec<Article>>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: Arc::new(RwLock::new(articles)),
        }
    }

    pub async fn insert(&self, article: Article) {
        self.articles.write().await.push(article);
    }

    pub async fn extend(&self, articles: impl IntoIterator<Item = Article>) {
        self.articles.write().await.extend(articles);
    }

    pub async fn len(&self) -> usize {
        self.articles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.articles.read().await.is_empty()
    }
}

#[async_trait]
impl NewsSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn latest_news(&self, limit: usize) -> Result<Vec<Article>> {
        let articles = self.articles.read().await.clone();
        Ok(latest_with_links(articles, limit))
    }
}
