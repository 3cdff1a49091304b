//! Configuration module for fxharvest
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. The configuration supplies the index URL, the selector descriptors
//! used to locate each page family's table, the row caps and pacing, and the
//! output path.
//!
//! # Example
//!
//! ```no_run
//! use fxharvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Index URL: {}", config.source.index_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, LimitConfig, OutputConfig, SelectorConfig, SourceConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
