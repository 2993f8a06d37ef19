//! Shared crawl state
//!
//! One explicit state object owns everything the crawl accumulates across
//! pages: the word-frequency table, the unique-URL set, the near-duplicate
//! fingerprint store, and the longest-page record. It is created empty at
//! process start, mutated only by the orchestrator, and read by the external
//! layer at shutdown to persist results.
//!
//! The core itself is single-threaded per invocation. Callers driving it from
//! multiple workers must wrap the whole state in one coarse lock: duplicate
//! detection is logically inconsistent if two pages are compared against the
//! fingerprint set concurrently.

use crate::config::LimitsConfig;
use crate::dedup::DuplicateDetector;
use std::collections::{BTreeMap, HashMap, HashSet};

/// The single longest page seen so far, by post-stopword token count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LongestPageRecord {
    /// URL of the record holder
    pub url: Option<String>,
    /// Its post-stopword token count
    pub words: usize,
}

/// Process-wide crawl state, owned by the orchestrator's caller
#[derive(Debug)]
pub struct CrawlState {
    /// Token -> occurrence count, counts only ever increase
    pub word_frequencies: HashMap<String, u64>,

    /// Fragment-stripped absolute URLs that passed validation at least once
    pub unique_urls: HashSet<String>,

    /// Near-duplicate fingerprint store
    pub duplicates: DuplicateDetector,

    /// Longest page record, updated only on strict excess
    pub longest_page: LongestPageRecord,
}

impl CrawlState {
    /// Creates empty state with the given heuristic thresholds
    pub fn new(limits: &LimitsConfig) -> Self {
        Self {
            word_frequencies: HashMap::new(),
            unique_urls: HashSet::new(),
            duplicates: DuplicateDetector::new(limits.duplicate_distance, limits.shingle_width),
            longest_page: LongestPageRecord::default(),
        }
    }

    /// Adds a page's tokens to the word-frequency table
    pub fn record_tokens<S: AsRef<str>>(&mut self, tokens: &[S]) {
        for token in tokens {
            *self
                .word_frequencies
                .entry(token.as_ref().to_string())
                .or_insert(0) += 1;
        }
    }

    /// Updates the longest-page record if this page strictly exceeds it
    ///
    /// Ties keep the earlier page: the record only moves on strict excess.
    pub fn record_page_length(&mut self, url: &str, words: usize) {
        if words > self.longest_page.words {
            self.longest_page = LongestPageRecord {
                url: Some(url.to_string()),
                words,
            };
        }
    }

    /// Adds a validated URL to the unique set
    ///
    /// Returns true if the URL was new.
    pub fn record_unique_url(&mut self, url: &str) -> bool {
        self.unique_urls.insert(url.to_string())
    }

    /// Counts unique URLs per subdomain of the allowed scope
    ///
    /// Only hosts equal to or under one of `allowed_domains` are counted.
    /// The result is sorted by hostname, ready for the summary report.
    pub fn subdomain_counts(&self, allowed_domains: &[String]) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();

        for url in &self.unique_urls {
            let Ok(parsed) = url::Url::parse(url) else {
                continue;
            };
            let host = parsed.host_str().unwrap_or("").to_lowercase();

            let in_scope = allowed_domains
                .iter()
                .any(|d| host == *d || host.ends_with(&format!(".{}", d)));
            if in_scope {
                *counts.entry(host).or_insert(0) += 1;
            }
        }

        counts
    }
}

impl Default for CrawlState {
    fn default() -> Self {
        Self::new(&LimitsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tokens_accumulates() {
        let mut state = CrawlState::default();
        state.record_tokens(&["apple", "banana", "apple"]);
        state.record_tokens(&["apple"]);

        assert_eq!(state.word_frequencies.get("apple"), Some(&3));
        assert_eq!(state.word_frequencies.get("banana"), Some(&1));
    }

    #[test]
    fn test_longest_page_strict_excess() {
        let mut state = CrawlState::default();
        state.record_page_length("http://a/", 50);
        assert_eq!(state.longest_page.url.as_deref(), Some("http://a/"));

        // Equal count does not move the record
        state.record_page_length("http://b/", 50);
        assert_eq!(state.longest_page.url.as_deref(), Some("http://a/"));

        // Strictly more does
        state.record_page_length("http://c/", 51);
        assert_eq!(state.longest_page.url.as_deref(), Some("http://c/"));
        assert_eq!(state.longest_page.words, 51);
    }

    #[test]
    fn test_unique_urls_deduplicate() {
        let mut state = CrawlState::default();
        assert!(state.record_unique_url("https://ics.uci.edu/a"));
        assert!(!state.record_unique_url("https://ics.uci.edu/a"));
        assert_eq!(state.unique_urls.len(), 1);
    }

    #[test]
    fn test_subdomain_counts() {
        let mut state = CrawlState::default();
        state.record_unique_url("https://vision.ics.uci.edu/a");
        state.record_unique_url("https://vision.ics.uci.edu/b");
        state.record_unique_url("https://www.cs.uci.edu/");
        state.record_unique_url("https://unrelated.example.com/");

        let allowed: Vec<String> = vec!["ics.uci.edu".into(), "cs.uci.edu".into()];
        let counts = state.subdomain_counts(&allowed);

        assert_eq!(counts.get("vision.ics.uci.edu"), Some(&2));
        assert_eq!(counts.get("www.cs.uci.edu"), Some(&1));
        assert!(!counts.contains_key("unrelated.example.com"));
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = CrawlState::default();
        assert!(state.word_frequencies.is_empty());
        assert!(state.unique_urls.is_empty());
        assert!(state.duplicates.is_empty());
        assert_eq!(state.longest_page, LongestPageRecord::default());
    }
}
