//! Zot-Scrape: content-processing core for a focused academic crawler
//!
//! This crate implements the page-processing half of a crawler restricted to
//! a small set of UCI subdomains: response classification, link extraction
//! (HTML anchors and XML sitemaps), trap-avoidance URL validation,
//! simhash-based near-duplicate detection, and text tokenization with
//! word-frequency aggregation. Fetching, scheduling, and politeness belong to
//! external collaborators that hand this crate an in-memory response.

pub mod config;
pub mod dedup;
pub mod extract;
pub mod output;
pub mod policy;
pub mod scraper;
pub mod state;
pub mod text;

use thiserror::Error;

/// Main error type for Zot-Scrape operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTML parse error for {url}: {message}")]
    HtmlParse { url: String, message: String },

    #[error("Sitemap parse error for {url}: {message}")]
    SitemapParse { url: String, message: String },

    #[error("Report serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

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

    #[error("Stopword file not found: {0}")]
    MissingStopwords(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for Zot-Scrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use scraper::{process, FetchedResponse};
pub use state::CrawlState;
