//! Mailsweep: a polite same-site email harvester
//!
//! This crate implements a page-budgeted web crawler that walks a single
//! registrable domain, extracts email addresses from the text of each page,
//! and returns the sorted set of distinct addresses found.

pub mod config;
pub mod crawler;
pub mod url;

use thiserror::Error;

/// Main error type for mailsweep operations
///
/// Note that a crawl run itself never fails: per-page problems are recorded
/// as [`crawler::SkipReason`] values inside the report. This type covers the
/// parts that can legitimately refuse to start, such as configuration
/// loading and HTTP client construction.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
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
}

/// Result type alias for mailsweep operations
pub type Result<T> = std::result::Result<T, SweepError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, CrawlReport, Crawler, PageSkip, SkipReason};
pub use url::{assess_link, prepare_seed, registrable_domain, LinkVerdict};
