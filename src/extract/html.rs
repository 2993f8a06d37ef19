use scraper::{Html, Selector};
use std::collections::HashMap;
use url::Url;

/// Parses an HTML document
///
/// The parser is error-tolerant: malformed markup produces a best-effort
/// tree rather than a failure.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Extracts the visible text of a parsed document
///
/// Walks every text node, skipping the contents of `script` and `style`
/// elements so that embedded code does not pollute tokenization or the
/// similarity fingerprint. Text nodes are joined with single spaces.
pub fn visible_text(document: &Html) -> String {
    let mut text = String::new();

    for node in document.root_element().descendants() {
        let Some(text_node) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| matches!(el.name(), "script" | "style"))
        });
        if hidden {
            continue;
        }

        let trimmed = text_node.trim();
        if !trimmed.is_empty() {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(trimmed);
        }
    }

    text
}

/// Extracts candidate outbound links from a parsed HTML document
///
/// Every `<a>` element with a non-empty, whitespace-trimmed href is resolved
/// to an absolute URL against the page's own URL and its fragment component
/// is stripped. Only http(s) results are kept; other schemes (javascript:,
/// mailto:, data:) can never pass validation and are dropped here.
///
/// Before returning, the per-host link counts of this single page are
/// checked: if any one host accounts for more than `max_links_per_domain`
/// of the extracted links, the page is treated as a crawl trap and the whole
/// list is discarded. A page that fans out pathologically to one host is
/// rejected wholesale, not trimmed down to the threshold. The count covers
/// http(s) candidates only; anchors dropped for their scheme never
/// contribute to it.
///
/// # Arguments
///
/// * `document` - The parsed page
/// * `base_url` - The page's own URL, for resolving relative hrefs
/// * `max_links_per_domain` - Fan-out trap threshold
///
/// # Returns
///
/// Absolute, fragment-free URLs; empty when the page looks like a trap
pub fn extract_links(document: &Html, base_url: &Url, max_links_per_domain: usize) -> Vec<String> {
    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut links = Vec::new();

    for element in document.select(&anchor_selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(absolute) = resolve_link(href, base_url) {
                links.push(absolute);
            }
        }
    }

    if let Some((domain, count)) = dominant_domain(&links, max_links_per_domain) {
        tracing::warn!(
            "Possible trap: {} produced {} links on one page ({})",
            domain,
            count,
            base_url
        );
        return Vec::new();
    }

    links
}

/// Resolves an href to an absolute, fragment-free URL
///
/// Returns None for empty hrefs, unresolvable hrefs, and non-http(s) schemes.
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    match base_url.join(href) {
        Ok(mut absolute) => {
            absolute.set_fragment(None);
            if absolute.scheme() == "http" || absolute.scheme() == "https" {
                Some(absolute.to_string())
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

/// Finds a host exceeding the fan-out threshold, if any
fn dominant_domain(links: &[String], max_links_per_domain: usize) -> Option<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for link in links {
        if let Ok(url) = Url::parse(link) {
            let host = url.host_str().unwrap_or("").to_lowercase();
            *counts.entry(host).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .find(|(_, count)| *count > max_links_per_domain)
}
