use std::time::Duration;

use crate::dedup::Deduplicator;
use crate::feed::{FeedAssembler, UrlFilter, DEFAULT_URL_DENYLIST};
use crate::title::{TitleMatcher, DEFAULT_MIN_WORD_LEN, DEFAULT_SIMILARITY_THRESHOLD};
use crate::{Error, Result};

pub const DEFAULT_TABLE: &str = "news";

#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub backend_url: Option<String>,
    pub api_key: Option<String>,
    pub table: String,
    pub similarity_threshold: f64,
    pub min_word_len: usize,
    pub url_denylist: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            api_key: None,
            table: DEFAULT_TABLE.to_string(),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            min_word_len: DEFAULT_MIN_WORD_LEN,
            url_denylist: DEFAULT_URL_DENYLIST.iter().map(|s| s.to_string()).collect(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl FeedConfig {
    pub fn with_backend(mut self, url: impl Into<String>, api_key: Option<String>) -> Self {
        self.backend_url = Some(url.into());
        self.api_key = api_key;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.similarity_threshold > 0.0 && self.similarity_threshold <= 1.0) {
            return Err(Error::Config(format!(
                "similarity threshold must be in (0, 1], got {}",
                self.similarity_threshold
            )));
        }
        if self.table.trim().is_empty() {
            return Err(Error::Config("table name must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn matcher(&self) -> TitleMatcher {
        TitleMatcher::new(self.similarity_threshold, self.min_word_len)
    }

    pub fn assembler(&self) -> FeedAssembler {
        FeedAssembler::new(
            UrlFilter::new(self.url_denylist.clone()),
            Deduplicator::new(self.matcher()),
        )
    }
}
