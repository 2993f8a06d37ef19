//! Report generation from accumulated crawl state
//!
//! Writes the three shutdown artifacts:
//! - the word-frequency table as a flat JSON object
//! - the sorted unique-URL list, one URL per line
//! - the sorted `subdomain, count` summary
//!
//! These are produced once when the external layer shuts down; the core never
//! persists anything while pages are being processed.

use crate::config::Config;
use crate::state::CrawlState;
use crate::Result;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

/// Writes the word-frequency table as a flat JSON object
///
/// Keys are sorted so repeated exports of the same state are byte-identical.
pub fn write_word_frequencies(state: &CrawlState, path: &Path) -> Result<()> {
    let sorted: BTreeMap<&String, &u64> = state.word_frequencies.iter().collect();
    let json = serde_json::to_string_pretty(&sorted)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Writes the unique-URL list, sorted, one URL per line
pub fn write_url_list(state: &CrawlState, path: &Path) -> Result<()> {
    let mut urls: Vec<&String> = state.unique_urls.iter().collect();
    urls.sort();

    let mut file = std::fs::File::create(path)?;
    for url in urls {
        writeln!(file, "{}", url)?;
    }
    Ok(())
}

/// Writes the allowed-subdomain occurrence summary as `subdomain, count` lines
///
/// Entries are sorted by hostname.
pub fn write_subdomain_summary(state: &CrawlState, config: &Config, path: &Path) -> Result<()> {
    let counts = state.subdomain_counts(&config.scope.allowed_domains);

    let mut file = std::fs::File::create(path)?;
    for (subdomain, count) in counts {
        writeln!(file, "{}, {}", subdomain, count)?;
    }
    Ok(())
}

/// Writes all three reports to the paths named in the configuration
pub fn write_reports(state: &CrawlState, config: &Config) -> Result<()> {
    write_word_frequencies(state, Path::new(&config.output.word_frequencies_path))?;
    write_url_list(state, Path::new(&config.output.url_list_path))?;
    write_subdomain_summary(state, config, Path::new(&config.output.subdomain_summary_path))?;

    tracing::info!(
        "Reports written: {} tokens, {} unique URLs, longest page {:?} ({} words)",
        state.word_frequencies.len(),
        state.unique_urls.len(),
        state.longest_page.url,
        state.longest_page.words
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn populated_state() -> CrawlState {
        let mut state = CrawlState::default();
        state.record_tokens(&["computing", "research", "computing"]);
        state.record_unique_url("https://www.ics.uci.edu/b");
        state.record_unique_url("https://www.ics.uci.edu/a");
        state.record_unique_url("https://vision.ics.uci.edu/");
        state.record_page_length("https://www.ics.uci.edu/a", 2);
        state
    }

    #[test]
    fn test_write_word_frequencies_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("freq.json");

        write_word_frequencies(&populated_state(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["computing"], 2);
        assert_eq!(parsed["research"], 1);
    }

    #[test]
    fn test_write_url_list_sorted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("urls.txt");

        write_url_list(&populated_state(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "https://vision.ics.uci.edu/",
                "https://www.ics.uci.edu/a",
                "https://www.ics.uci.edu/b",
            ]
        );
    }

    #[test]
    fn test_write_subdomain_summary() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("subdomains.txt");

        write_subdomain_summary(&populated_state(), &Config::default(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec!["vision.ics.uci.edu, 1", "www.ics.uci.edu, 2"]
        );
    }

    #[test]
    fn test_write_reports_all_files() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.output.word_frequencies_path =
            dir.path().join("f.json").to_string_lossy().into_owned();
        config.output.url_list_path = dir.path().join("u.txt").to_string_lossy().into_owned();
        config.output.subdomain_summary_path =
            dir.path().join("s.txt").to_string_lossy().into_owned();

        write_reports(&populated_state(), &config).unwrap();

        assert!(dir.path().join("f.json").exists());
        assert!(dir.path().join("u.txt").exists());
        assert!(dir.path().join("s.txt").exists());
    }
}
