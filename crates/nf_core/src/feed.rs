use serde::Serialize;

use crate::dedup::Deduplicator;
use crate::types::Article;

pub const DEFAULT_URL_DENYLIST: [&str; 4] = ["example.com", "localhost", "test.com", "placeholder"];

/// Rejects links that cannot be opened or that point at placeholder content.
#[derive(Debug, Clone)]
pub struct UrlFilter {
    denylist: Vec<String>,
}

impl Default for UrlFilter {
    fn default() -> Self {
        Self::new(DEFAULT_URL_DENYLIST.iter().map(|s| s.to_string()).collect())
    }
}

impl UrlFilter {
    pub fn new(denylist: Vec<String>) -> Self {
        Self {
            denylist: denylist.into_iter().map(|m| m.to_lowercase()).collect(),
        }
    }

    pub fn denylist(&self) -> &[String] {
        &self.denylist
    }

    pub fn is_valid(&self, url: Option<&str>) -> bool {
        let Some(url) = url else {
            return false;
        };
        if url.is_empty() || !url.starts_with("http") {
            return false;
        }
        let lowered = url.to_lowercase();
        !self.denylist.iter().any(|marker| lowered.contains(marker.as_str()))
    }
}

/// Counts from one assembler run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeedStats {
    pub fetched: usize,
    pub valid_urls: usize,
    pub unique: usize,
    pub returned: usize,
}

/// Turns a time-ordered fetch result into a display-ready list: invalid links
/// are dropped, near-duplicate headlines merged and the result cut to `count`.
#[derive(Debug, Clone, Default)]
pub struct FeedAssembler {
    filter: UrlFilter,
    dedup: Deduplicator,
}

impl FeedAssembler {
    pub fn new(filter: UrlFilter, dedup: Deduplicator) -> Self {
        Self { filter, dedup }
    }

    pub fn assemble(&self, articles: Vec<Article>, count: usize) -> Vec<Article> {
        self.assemble_with_stats(articles, count).0
    }

    pub fn assemble_with_stats(&self, articles: Vec<Article>, count: usize) -> (Vec<Article>, FeedStats) {
        let mut stats = FeedStats {
            fetched: articles.len(),
            ..Default::default()
        };

        let valid: Vec<Article> = articles
            .into_iter()
            .filter(|article| self.filter.is_valid(article.external_url.as_deref()))
            .collect();
        stats.valid_urls = valid.len();

        let mut unique = self.dedup.dedupe(valid);
        stats.unique = unique.len();

        unique.truncate(count);
        stats.returned = unique.len();

        (unique, stats)
    }
}

/// [`FeedAssembler::assemble`] with the default filter and matcher.
pub fn assemble_feed(articles: Vec<Article>, count: usize) -> Vec<Article> {
    FeedAssembler::default().assemble(articles, count)
}
