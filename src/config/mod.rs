//! Configuration module for Zot-Scrape
//!
//! Handles loading, parsing, and validating TOML configuration files.
//! Every section has defaults, so `Config::default()` gives a usable
//! configuration matching the constants the crawl was originally run with.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, LimitsConfig, OutputConfig, ResourcesConfig, ScopeConfig};
pub use validation::validate;
