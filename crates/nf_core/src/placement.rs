use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Where a feed is shown. Each placement over-fetches so that filtering and
/// merging still leave enough articles to fill it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    #[serde(rename = "home")]
    HomeCarousel,
    #[serde(rename = "news")]
    NewsScreen,
}

impl Placement {
    pub fn all() -> [Placement; 2] {
        [Placement::HomeCarousel, Placement::NewsScreen]
    }

    pub fn fetch_limit(&self) -> usize {
        match self {
            Placement::HomeCarousel => 10,
            Placement::NewsScreen => 30,
        }
    }

    pub fn display_count(&self) -> usize {
        match self {
            Placement::HomeCarousel => 3,
            Placement::NewsScreen => 20,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::HomeCarousel => "home",
            Placement::NewsScreen => "news",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" | "carousel" => Ok(Placement::HomeCarousel),
            "news" => Ok(Placement::NewsScreen),
            other => Err(Error::Config(format!("Unknown placement: {}", other))),
        }
    }
}
