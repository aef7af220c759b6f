use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod log_level;
pub use log_level::LogLevel;

/// The feed that is fetched when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "https://api.freeapi.app/api/v1/public/youtube/videos";

/// Configuration for the widget
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The log level to use for the console output
    pub log_level: LogLevel,
    /// Where the videos come from
    pub feed: Feed,
    /// Search box behavior
    pub search: Search,
    /// Card rendering behavior
    pub render: Render,
}

impl Config {
    /// Tries to load the config from `path`.
    ///
    /// If the file doesn't exist, the default configuration is written there and used.
    pub async fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = match tokio::fs::read_to_string(path).await {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                // the logger isn't installed until the config is read
                eprintln!("{} wasn't found. creating a default one", path.display());
                tokio::fs::write(path, crate::DEFAULT_CONFIG)
                    .await
                    .with_context(|| format!("cannot write '{}'", path.display()))?;
                crate::DEFAULT_CONFIG.to_string()
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("cannot read config file '{}'", path.display()))
            }
        };

        Self::parse(&data)
    }

    /// Parses and validates a toml configuration
    pub fn parse(data: &str) -> anyhow::Result<Self> {
        let this: Self = toml::from_str(data).context("invalid config toml")?;
        url::Url::parse(&this.feed.endpoint)
            .with_context(|| format!("invalid feed endpoint '{}'", this.feed.endpoint))?;
        if this.search.min_length == 0 {
            anyhow::bail!("search.min_length must be at least 1")
        }
        Ok(this)
    }

    /// Print out the default configuration
    pub fn print_default() {
        println!("{}", crate::DEFAULT_CONFIG)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Feed {
    pub endpoint: String,
}

impl Default for Feed {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Search {
    /// Shortest search term that is accepted, in utf-16 units
    pub min_length: usize,
}

impl Default for Search {
    fn default() -> Self {
        Self { min_length: 5 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Render {
    pub on_bad_record: BadRecord,
    #[serde(deserialize_with = "crate::util::empty_path_as_none", default)]
    pub page: Option<PathBuf>,
}

/// What happens when a record in the feed can't be turned into a card
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadRecord {
    /// Stop at the bad record, keeping the cards rendered before it
    Abort,
    /// Log the bad record and keep going
    Skip,
}

impl Default for BadRecord {
    fn default() -> Self {
        Self::Abort
    }
}
