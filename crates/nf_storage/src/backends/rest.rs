use async_trait::async_trait;
use nf_core::{articles_from_json, Article, Error, FeedConfig, NewsSource, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;
use url::Url;

use super::latest_with_links;

const COLUMNS: &str = "title,summary,publish_date,external_url,featured_image_url,category";

/// Hosted backend exposing the `news` table over a PostgREST-style API.
#[derive(Debug, Clone)]
pub struct RestSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl RestSource {
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let base = config
            .backend_url
            .as_deref()
            .ok_or_else(|| Error::Config("the rest source needs a backend URL".to_string()))?;
        let endpoint = table_endpoint(base, &config.table)?;

        let mut headers = HeaderMap::new();
        if let Some(key) = config.api_key.as_deref() {
            headers.insert("apikey", header_value(key)?);
            headers.insert(AUTHORIZATION, header_value(&format!("Bearer {}", key))?);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn query_url(&self, limit: usize) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("select", COLUMNS)
            .append_pair("external_url", "not.is.null")
            .append_pair("order", "publish_date.desc")
            .append_pair("limit", &limit.to_string());
        url
    }
}

fn table_endpoint(base: &str, table: &str) -> Result<Url> {
    let mut base = Url::parse(base).map_err(|e| Error::InvalidUrl(format!("{}: {}", base, e)))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(&format!("rest/v1/{}", table))
        .map_err(|e| Error::InvalidUrl(format!("{}: {}", table, e)))
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| Error::Config(format!("Invalid API key: {}", e)))
}

#[async_trait]
impl NewsSource for RestSource {
    fn name(&self) -> &str {
        "rest"
    }

    async fn latest_news(&self, limit: usize) -> Result<Vec<Article>> {
        let url = self.query_url(limit);
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Source(format!("backend returned {}: {}", status, body)));
        }

        let rows: Value = response.json().await?;
        Ok(latest_with_links(articles_from_json(rows)?, limit))
    }
}
