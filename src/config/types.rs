use crate::navigator::SelectorSpec;
use crate::ConfigError;
use serde::Deserialize;
use url::Url;

/// Main configuration structure for fxharvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub source: SourceConfig,
    pub selectors: SelectorConfig,
    #[serde(default)]
    pub limits: LimitConfig,
    #[serde(default)]
    pub http: HttpConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Parses the configured index URL
    pub fn index_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.source.index_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", self.source.index_url, e)))
    }
}

/// Source page configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// URL of the index page listing all targets and their history links
    #[serde(rename = "index-url")]
    pub index_url: String,
}

/// Selector descriptors for locating the tables on each page family
///
/// Supplied by configuration rather than hard-coded so the extractors are
/// parametrized over "how to find the table".
#[derive(Debug, Clone, Deserialize)]
pub struct SelectorConfig {
    /// Locates the data table on the index page
    #[serde(rename = "index-table")]
    pub index_table: SelectorSpec,

    /// Locates the rate table on each detail page
    #[serde(rename = "detail-table")]
    pub detail_table: SelectorSpec,
}

/// Row caps and pacing configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitConfig {
    /// Maximum index rows considered per run
    #[serde(rename = "max-index-rows")]
    pub max_index_rows: usize,

    /// Maximum detail rows considered per target
    #[serde(rename = "max-detail-rows")]
    pub max_detail_rows: usize,

    /// Fixed pause between page visits (milliseconds)
    #[serde(rename = "page-pause-ms")]
    pub page_pause_ms: u64,

    /// Upper bound on waiting for a page's table to appear (milliseconds)
    #[serde(rename = "readiness-timeout-ms")]
    pub readiness_timeout_ms: u64,

    /// Interval between readiness checks (milliseconds)
    #[serde(rename = "readiness-poll-ms")]
    pub readiness_poll_ms: u64,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_index_rows: 10,
            max_detail_rows: 10,
            page_pause_ms: 1000,
            readiness_timeout_ms: 3000,
            readiness_poll_ms: 250,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User agent string sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Per-request timeout (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("fxharvest/{}", env!("CARGO_PKG_VERSION")),
            request_timeout_secs: 30,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the CSV dataset file
    #[serde(rename = "dataset-path")]
    pub dataset_path: String,
}
