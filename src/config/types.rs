use crate::chunk::ChunkOptions;
use crate::ConfigResult;
use serde::Deserialize;

/// Crawler behavior configuration
///
/// Every field has a default, so an empty TOML file (or no file at all)
/// yields a usable configuration. Values map to kebab-case keys at the top
/// level of the file, with chunking parameters under a `[chunking]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Page-count ceiling for a crawl; 0 disables the limit
    #[serde(rename = "max-pages")]
    pub max_pages: usize,

    /// Total per-request timeout in seconds
    #[serde(rename = "fetch-timeout-secs")]
    pub fetch_timeout_secs: u64,

    /// Connection establishment timeout in seconds
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// CSS selector for the elements whose text makes up page content
    #[serde(rename = "content-selector")]
    pub content_selector: String,

    /// User agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Parameters for splitting page content into chunks
    pub chunking: ChunkOptions,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: 0,
            fetch_timeout_secs: 30,
            connect_timeout_secs: 10,
            content_selector: "div".to_string(),
            user_agent: format!("site-harvest/{}", env!("CARGO_PKG_VERSION")),
            chunking: ChunkOptions::default(),
        }
    }
}

impl CrawlerConfig {
    /// Checks the configuration for incoherent values
    ///
    /// See the validation rules in [`crate::config`] module docs.
    pub fn validate(&self) -> ConfigResult<()> {
        super::validation::validate(self)
    }
}
