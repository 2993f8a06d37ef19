//! URL validation and trap-avoidance policy
//!
//! Decides once, per URL, whether it is ever worth fetching. The policy is a
//! cascade of independent reject rules over the parsed URL: domain scoping,
//! calendar and event traps, source-control browsing surfaces, wiki action
//! modes, dead hosts, and a non-text file-extension deny list. Any matching
//! rule rejects; rule order only affects short-circuiting, never the outcome.

mod rules;

use crate::config::ScopeConfig;
use rules::{RuleContext, RULES};
use url::Url;

/// Validates a candidate URL against the trap-avoidance policy
///
/// Pure and stateless: the same URL always yields the same verdict. URLs that
/// fail to parse are treated as invalid; nothing observable is ever raised to
/// the caller.
///
/// # Arguments
///
/// * `url_str` - The absolute URL to validate
/// * `scope` - The crawl scope (allowed domains and dead hosts)
///
/// # Returns
///
/// `true` if the URL is in scope and matches no trap rule
///
/// # Examples
///
/// ```
/// use zot_scrape::config::ScopeConfig;
/// use zot_scrape::policy::is_valid;
///
/// let scope = ScopeConfig::default();
/// assert!(is_valid("https://www.ics.uci.edu/about", &scope));
/// assert!(!is_valid("https://example.com/", &scope));
/// assert!(!is_valid("https://ics.uci.edu/logo.png", &scope));
/// ```
pub fn is_valid(url_str: &str, scope: &ScopeConfig) -> bool {
    let url = match Url::parse(url_str) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!("Rejecting unparseable URL {}: {}", url_str, e);
            return false;
        }
    };

    let ctx = RuleContext::new(url_str, &url, scope);

    for rule in RULES {
        if (rule.rejects)(&ctx) {
            tracing::debug!("[{}] rejected: {}", rule.name, url_str);
            return false;
        }
    }

    true
}
