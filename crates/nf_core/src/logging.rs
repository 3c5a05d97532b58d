use std::collections::VecDeque;
use std::sync::Once;
use tracing::Level;

use crate::placement::Placement;

static INIT: Once = Once::new();

/// Prefixes every message with a stack of tags, e.g. `[news] [rest]`.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    prefixes: VecDeque<String>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            prefixes: VecDeque::new(),
        }
    }

    /// Tags lines with the feed being built and the source serving it,
    /// e.g. `[home] [rest]`.
    pub fn for_feed(feed: &str, source: &str) -> Self {
        Self::new()
            .with_prefix(format!("[{}]", feed))
            .with_prefix(format!("[{}]", source))
    }

    /// [`Logger::for_feed`] named after a placement.
    pub fn for_placement(placement: Placement, source: &str) -> Self {
        Self::for_feed(placement.as_str(), source)
    }

    pub fn with_new_prefixes(mut self, prefix: String) -> Self {
        self.prefixes.clear();
        self.prefixes.push_back(prefix);
        self
    }

    pub fn with_prefix(mut self, prefix: String) -> Self {
        self.prefixes.push_back(prefix);
        self
    }

    pub fn prefix(&self) -> String {
        self.prefixes.iter().map(|p| format!("{} ", p)).collect()
    }

    pub fn info(&self, message: &str) {
        tracing::info!("{}{}", self.prefix(), message);
    }

    pub fn error(&self, message: &str) {
        tracing::error!("{}{}", self.prefix(), message);
    }

    pub fn warn(&self, message: &str) {
        tracing::warn!("{}{}", self.prefix(), message);
    }

    pub fn debug(&self, message: &str) {
        tracing::debug!("{}{}", self.prefix(), message);
    }
}

pub fn init_logging(level: Level) -> Logger {
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .init();
        });
    }
    Logger::new()
}
