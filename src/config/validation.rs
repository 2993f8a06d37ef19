use crate::config::types::{Config, LimitsConfig, OutputConfig, ScopeConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scope_config(&config.scope)?;
    validate_limits_config(&config.limits)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the crawl scope configuration
fn validate_scope_config(config: &ScopeConfig) -> Result<(), ConfigError> {
    if config.allowed_domains.is_empty() {
        return Err(ConfigError::Validation(
            "allowed-domains cannot be empty; the crawl scope must name at least one domain"
                .to_string(),
        ));
    }

    for domain in config.allowed_domains.iter().chain(&config.dead_hosts) {
        validate_domain(domain)?;
    }

    Ok(())
}

/// Validates a single domain entry: non-empty, lowercase, no scheme or path
fn validate_domain(domain: &str) -> Result<(), ConfigError> {
    if domain.is_empty() {
        return Err(ConfigError::Validation(
            "domain entries cannot be empty".to_string(),
        ));
    }

    if domain.contains("://") || domain.contains('/') {
        return Err(ConfigError::Validation(format!(
            "domain '{}' must be a bare hostname, not a URL",
            domain
        )));
    }

    if domain.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ConfigError::Validation(format!(
            "domain '{}' must be lowercase",
            domain
        )));
    }

    Ok(())
}

/// Validates the heuristic threshold configuration
fn validate_limits_config(config: &LimitsConfig) -> Result<(), ConfigError> {
    if config.max_links_per_domain < 1 {
        return Err(ConfigError::Validation(format!(
            "max-links-per-domain must be >= 1, got {}",
            config.max_links_per_domain
        )));
    }

    // The fingerprint is 64 bits wide; a distance threshold beyond that can
    // never reject anything and is almost certainly a typo.
    if config.duplicate_distance > 64 {
        return Err(ConfigError::Validation(format!(
            "duplicate-distance must be <= 64, got {}",
            config.duplicate_distance
        )));
    }

    if config.shingle_width < 1 {
        return Err(ConfigError::Validation(format!(
            "shingle-width must be >= 1, got {}",
            config.shingle_width
        )));
    }

    Ok(())
}

/// Validates the report output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    for (name, path) in [
        ("word-frequencies-path", &config.word_frequencies_path),
        ("url-list-path", &config.url_list_path),
        ("subdomain-summary-path", &config.subdomain_summary_path),
    ] {
        if path.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{} cannot be empty",
                name
            )));
        }
    }

    Ok(())
}
