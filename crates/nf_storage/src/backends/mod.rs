use nf_core::Article;

pub mod file;
pub mod memory;
pub mod rest;

pub use file::JsonFileSource;
pub use memory::MemorySource;
pub use rest::RestSource;

/// What the backend query promises: rows with a link, newest first, capped.
pub(crate) fn latest_with_links(mut articles: Vec<Article>, limit: usize) -> Vec<Article> {
    articles.retain(|a| a.external_url.is_some());
    articles.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
    articles.truncate(limit);
    articles
}
