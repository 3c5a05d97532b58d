use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use nf_core::{Error, FeedConfig, NewsSource, Result};

pub mod backends;

pub use backends::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Memory,
    File,
    Rest,
}

impl FromStr for SourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(SourceKind::Memory),
            "file" | "json" => Ok(SourceKind::File),
            "rest" | "backend" => Ok(SourceKind::Rest),
            other => Err(Error::Config(format!(
                "Unknown source '{}'. Available sources: memory, file, rest",
                other
            ))),
        }
    }
}

pub async fn create_source(kind: SourceKind, config: &FeedConfig, file: Option<&Path>) -> Result<Arc<dyn NewsSource>> {
    let source: Arc<dyn NewsSource> = match kind {
        SourceKind::Memory => Arc::new(MemorySource::new()),
        SourceKind::File => {
            let path = file.ok_or_else(|| Error::Config("the file source needs a path".to_string()))?;
            Arc::new(JsonFileSource::new(path))
        }
        SourceKind::Rest => Arc::new(RestSource::new(config)?),
    };
    tracing::info!("📰 News source initialized (using {})", source.name());
    Ok(source)
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_source, SourceKind};
}
