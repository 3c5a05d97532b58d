use async_trait::async_trait;

use crate::types::Article;
use crate::Result;

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Name used in logs and health output
    fn name(&self) -> &str;

    /// Latest articles that carry an external link, newest first, at most `limit`
    async fn latest_news(&self, limit: usize) -> Result<Vec<Article>>;
}
