//! fxharvest: a historical exchange-rate harvester
//!
//! This crate crawls a reference website's index page to enumerate countries
//! and their per-country history links, visits each linked detail page to
//! extract dated rate observations, and writes the combined records to a CSV
//! file. Malformed rows and failed targets are skipped with diagnostics; only
//! a failure on the index page itself aborts a run.

pub mod config;
pub mod extract;
pub mod navigator;
pub mod output;
pub mod pipeline;
pub mod records;

use thiserror::Error;

/// Main error type for fxharvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    #[error("Page structure error: {0}")]
    Structure(#[from] PageStructureError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid selector in config: {0}")]
    InvalidSelector(String),
}

/// Errors raised while loading a page into the navigator
///
/// Fatal when the index page is affected; isolated to a single target when a
/// detail page is affected.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP status {status} for {url}")]
    BadStatus { url: String, status: u16 },

    #[error("Non-HTML content type '{content_type}' for {url}")]
    NotHtml { url: String, content_type: String },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Errors raised when an expected element is absent from a loaded page
#[derive(Debug, Error)]
pub enum PageStructureError {
    #[error("No page is loaded in the navigator")]
    NoPage,

    #[error("Selector '{selector}' is not a valid query")]
    BadSelector { selector: String },

    #[error("No element matches selector '{selector}' on {url}")]
    NotFound { selector: String, url: String },

    #[error("Selector '{selector}' matches {count} elements on {url}, expected one")]
    Ambiguous {
        selector: String,
        url: String,
        count: usize,
    },

    #[error("Element '{selector}' never appeared on {url} within {waited_ms}ms")]
    NeverAppeared {
        selector: String,
        url: String,
        waited_ms: u64,
    },
}

/// Result type alias for fxharvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use navigator::{ElementHandle, HttpNavigator, Navigator, SelectorSpec};
pub use records::{Dataset, RateObservation, TargetDescriptor};
