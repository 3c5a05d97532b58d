use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// A news item ready for the feed pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub summary: Option<String>,
    pub publish_date: DateTime<Utc>,
    pub external_url: Option<String>,
    pub featured_image_url: Option<String>,
    #[serde(default)]
    pub category: String,
}

impl Article {
    pub fn new(title: impl Into<String>, publish_date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            summary: None,
            publish_date,
            external_url: None,
            featured_image_url: None,
            category: String::new(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.external_url = Some(url.into());
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.featured_image_url = Some(url.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn has_image(&self) -> bool {
        self.featured_image_url
            .as_deref()
            .map_or(false, |url| !url.is_empty())
    }
}

/// A row as the backend returns it from the `news` table. Every column may be
/// missing or null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsRow {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default)]
    pub featured_image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl TryFrom<NewsRow> for Article {
    type Error = Error;

    fn try_from(row: NewsRow) -> Result<Self> {
        let title = row
            .title
            .ok_or_else(|| Error::InvalidRow("missing title".to_string()))?;
        let raw_date = row
            .publish_date
            .ok_or_else(|| Error::InvalidRow(format!("missing publish_date for '{}'", title)))?;
        let publish_date = parse_timestamp(&raw_date)?;

        Ok(Self {
            title,
            summary: row.summary,
            publish_date,
            external_url: row.external_url,
            featured_image_url: row.featured_image_url,
            category: row.category.unwrap_or_default(),
        })
    }
}

/// Parses the timestamp formats the backend emits. Offset-less values are UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f%#z"] {
        if let Ok(date) = DateTime::parse_from_str(raw, format) {
            return Ok(date.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(Error::InvalidRow(format!("unparseable publish_date '{}'", raw)))
}

/// Converts backend rows, dropping the ones that cannot become an [`Article`].
pub fn articles_from_rows<I>(rows: I) -> Vec<Article>
where
    I: IntoIterator<Item = NewsRow>,
{
    rows.into_iter()
        .filter_map(|row| match Article::try_from(row) {
            Ok(article) => Some(article),
            Err(e) => {
                tracing::warn!("Skipping news row: {}", e);
                None
            }
        })
        .collect()
}

/// Decodes a JSON array of rows. Elements that are not row objects are skipped.
pub fn articles_from_json(value: Value) -> Result<Vec<Article>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(Error::InvalidRow(format!(
                "expected an array of rows, got {}",
                json_kind(&other)
            )))
        }
    };

    let rows = items.into_iter().filter_map(|item| {
        serde_json::from_value::<NewsRow>(item)
            .map_err(|e| tracing::warn!("Skipping malformed news row: {}", e))
            .ok()
    });
    Ok(articles_from_rows(rows))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
