//! Response classification and page-processing orchestration
//!
//! The entry point of the content-processing core. For each fetched response,
//! `process` classifies it, routes to the matching extractor (HTML anchors or
//! sitemap `<loc>` entries), runs the text pipeline (tokenization, stopword
//! filtering, frequency and longest-page updates, near-duplicate detection),
//! validates every candidate link, and returns the accepted list.
//!
//! Nothing in here is fatal to the crawl: every failure mode degrades to an
//! empty or partial link list for that one page.

mod response;

pub use response::FetchedResponse;

use crate::config::Config;
use crate::extract::{
    classify_content_type, extract_links, extract_sitemap_urls, parse_document, visible_text,
    ContentKind,
};
use crate::policy::is_valid;
use crate::state::CrawlState;
use crate::text::{tokenize, StopwordSet};
use url::Url;

/// Failure statuses that are routine for this crawl and logged quietly;
/// anything else non-200 is an anomaly worth a louder log line
const EXPECTED_FAILURE_CODES: &[u16] = &[403, 404, 500, 502, 503, 504, 601];

/// Every this many unique-URL additions, emit a progress line
const PROGRESS_INTERVAL: usize = 100;

/// Processes one fetched response and returns the accepted outbound links
///
/// Side effects: updates the word-frequency table, the longest-page record,
/// the fingerprint store, and the unique-URL set in `state`. Never panics or
/// propagates an error past its own boundary.
///
/// # Arguments
///
/// * `url` - The URL this response was fetched for
/// * `response` - The decoded response from the fetch layer
/// * `state` - Shared crawl state (caller serializes concurrent access)
/// * `stopwords` - The immutable stopword set, loaded at startup
/// * `config` - Scope and threshold configuration
///
/// # Returns
///
/// Absolute, fragment-free URLs that passed validation; empty for unusable
/// responses, unsupported content, trap pages, and near-duplicate pages
pub fn process(
    url: &str,
    response: &FetchedResponse,
    state: &mut CrawlState,
    stopwords: &StopwordSet,
    config: &Config,
) -> Vec<String> {
    let candidates = extract_next_links(url, response, state, stopwords, config);

    let mut accepted = Vec::new();
    for link in candidates {
        if !is_valid(&link, &config.scope) {
            continue;
        }

        if state.record_unique_url(&link) && state.unique_urls.len() % PROGRESS_INTERVAL == 0 {
            tracing::info!("Crawled {} unique pages so far", state.unique_urls.len());
        }

        accepted.push(link);
    }

    accepted
}

/// Classifies the response and extracts raw candidate links
fn extract_next_links(
    url: &str,
    response: &FetchedResponse,
    state: &mut CrawlState,
    stopwords: &StopwordSet,
    config: &Config,
) -> Vec<String> {
    if !response.is_usable() {
        if EXPECTED_FAILURE_CODES.contains(&response.status) {
            tracing::debug!("Skipping status {} at {}", response.status, url);
        } else {
            tracing::error!(
                "Bad response {} at {} (error: {:?})",
                response.status,
                url,
                response.error
            );
        }
        return Vec::new();
    }

    match classify_content_type(response.content_type()) {
        ContentKind::Sitemap => {
            let body = response.body.as_deref().unwrap_or("");
            extract_sitemap_urls(body)
        }

        ContentKind::Unsupported => {
            tracing::debug!(
                "Skipping non-extractable content at {} (Content-Type: {:?})",
                url,
                response.content_type()
            );
            Vec::new()
        }

        ContentKind::Html => process_html(url, response, state, stopwords, config),
    }
}

/// The HTML path: text pipeline, duplicate check, then anchor extraction
fn process_html(
    url: &str,
    response: &FetchedResponse,
    state: &mut CrawlState,
    stopwords: &StopwordSet,
    config: &Config,
) -> Vec<String> {
    let base_url = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Cannot resolve links against unparseable page URL {}: {}", url, e);
            return Vec::new();
        }
    };

    let body = response.body.as_deref().unwrap_or("");
    let document = parse_document(body);

    // Script and style contents are already stripped here
    let text = visible_text(&document);

    let tokens = tokenize(&text);
    let useful_tokens: Vec<&String> = tokens
        .iter()
        .filter(|token| !stopwords.contains(token))
        .collect();

    state.record_tokens(&useful_tokens);
    state.record_page_length(url, useful_tokens.len());

    // A page recognized as a near-duplicate contributes no outbound links,
    // so duplicate-content clusters do not propagate through the frontier.
    // Word counts above were already committed, matching the partial-commit
    // contract for pages that fail later stages.
    if state.duplicates.check(&text, url).is_some() {
        return Vec::new();
    }

    extract_links(&document, &base_url, config.limits.max_links_per_domain)
}
