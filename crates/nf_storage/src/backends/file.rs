use async_trait::async_trait;
use nf_core::{articles_from_json, Article, NewsSource, Result};
use std::path::{Path, PathBuf};

use super::latest_with_links;

/// Reads a JSON array of `news` rows from disk on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Vec<Article>> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let value = serde_json::from_str(&raw)?;
        articles_from_json(value)
    }
}

#[async_trait]
impl NewsSource for JsonFileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn latest_news(&self, limit: usize) -> Result<Vec<Article>> {
        let articles = self.load().await?;
        tracing::debug!("Loaded {} rows from {}", articles.len(), self.path.display());
        Ok(latest_with_links(articles, limit))
    }
}
