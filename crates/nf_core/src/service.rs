use std::sync::Arc;

use crate::feed::{FeedAssembler, FeedStats};
use crate::logging::Logger;
use crate::placement::Placement;
use crate::source::NewsSource;
use crate::types::Article;

/// Fetches from a [`NewsSource`] and assembles the result. A failed fetch
/// yields an empty feed.
#[derive(Clone)]
pub struct FeedService {
    source: Arc<dyn NewsSource>,
    assembler: FeedAssembler,
}

impl std::fmt::Debug for FeedService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedService")
            .field("source", &self.source.name())
            .field("assembler", &self.assembler)
            .finish()
    }
}

impl FeedService {
    pub fn new(source: Arc<dyn NewsSource>) -> Self {
        Self {
            source,
            assembler: FeedAssembler::default(),
        }
    }

    pub fn with_assembler(mut self, assembler: FeedAssembler) -> Self {
        self.assembler = assembler;
        self
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub async fn feed(&self, placement: Placement) -> Vec<Article> {
        self.feed_with_stats(placement).await.0
    }

    pub async fn feed_with_counts(&self, fetch_limit: usize, display_count: usize) -> Vec<Article> {
        let logger = Logger::for_feed("custom", self.source.name());
        self.build(&logger, fetch_limit, display_count).await.0
    }

    pub async fn feed_with_stats(&self, placement: Placement) -> (Vec<Article>, FeedStats) {
        let logger = Logger::for_placement(placement, self.source.name());
        self.build(&logger, placement.fetch_limit(), placement.display_count())
            .await
    }

    async fn build(&self, logger: &Logger, fetch_limit: usize, display_count: usize) -> (Vec<Article>, FeedStats) {
        let articles = match self.source.latest_news(fetch_limit).await {
            Ok(articles) => articles,
            Err(e) => {
                logger.error(&format!("Failed to fetch news: {}", e));
                Vec::new()
            }
        };

        let (feed, stats) = self.assembler.assemble_with_stats(articles, display_count);
        logger.debug(&format!(
            "fetched {} rows, {} with valid links, {} unique, returning {}",
            stats.fetched, stats.valid_urls, stats.unique, stats.returned
        ));
        (feed, stats)
    }
}
