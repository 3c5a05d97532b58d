pub mod config;
pub mod dedup;
pub mod error;
pub mod feed;
pub mod logging;
pub mod placement;
pub mod service;
pub mod source;
pub mod title;
pub mod types;

pub use config::FeedConfig;
pub use dedup::{dedupe_articles, Deduplicator};
pub use error::Error;
pub use feed::{assemble_feed, FeedAssembler, FeedStats, UrlFilter};
pub use placement::Placement;
pub use service::FeedService;
pub use source::NewsSource;
pub use title::{is_similar_title, normalize_title, TitleMatcher};
pub use types::{articles_from_json, articles_from_rows, Article, NewsRow};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::{Article, Error, FeedService, NewsSource, Placement, Result};
}
