//! End-to-end tests for the content-processing pipeline
//!
//! These drive `process` through the public API the way the fetch layer
//! would: hand in decoded responses, collect accepted links, and inspect
//! the accumulated crawl state and exported reports.

use tempfile::tempdir;
use zot_scrape::config::Config;
use zot_scrape::output::write_reports;
use zot_scrape::scraper::{process, FetchedResponse};
use zot_scrape::state::CrawlState;
use zot_scrape::text::StopwordSet;

fn setup() -> (CrawlState, StopwordSet, Config) {
    (
        CrawlState::default(),
        StopwordSet::from_text("the a an and of to in is for"),
        Config::default(),
    )
}

fn html_response(url: &str, body: &str) -> FetchedResponse {
    FetchedResponse::ok(url, "text/html; charset=utf-8", body)
}

#[test]
fn test_full_html_page_pipeline() {
    let (mut state, stopwords, config) = setup();
    let url = "https://www.ics.uci.edu/research/index.html";
    let body = r#"<html><head><title>Research</title>
        <style>body { color: red; }</style></head>
        <body>
          <script>var tracker = "analytics";</script>
          <h1>Research Areas</h1>
          <p>The department is home to machine learning and systems groups.</p>
          <a href="/research/ml">Machine Learning</a>
          <a href="https://www.cs.uci.edu/theory">Theory</a>
          <a href="https://example.com/elsewhere">External</a>
          <a href="/papers/survey.pdf">Survey PDF</a>
        </body></html>"#;

    let links = process(url, &html_response(url, body), &mut state, &stopwords, &config);

    // In-scope, non-trap links survive; the external host and the PDF do not
    assert_eq!(
        links,
        vec![
            "https://www.ics.uci.edu/research/ml",
            "https://www.cs.uci.edu/theory",
        ]
    );

    // Markup and script/style contents never reach the token table
    assert!(!state.word_frequencies.contains_key("var"));
    assert!(!state.word_frequencies.contains_key("tracker"));
    assert!(!state.word_frequencies.contains_key("color"));

    // Visible words do, lowercased and stopword-filtered
    assert_eq!(state.word_frequencies.get("research"), Some(&2));
    assert_eq!(state.word_frequencies.get("machine"), Some(&2));
    assert!(!state.word_frequencies.contains_key("the"));

    assert_eq!(state.longest_page.url.as_deref(), Some(url));
    assert_eq!(state.unique_urls.len(), 2);
}

#[test]
fn test_sitemap_pipeline() {
    let (mut state, stopwords, config) = setup();
    let url = "https://www.ics.uci.edu/sitemap.xml";
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
        <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
          <url><loc>https://www.ics.uci.edu/about</loc><lastmod>2020-01-01</lastmod></url>
          <url><loc>https://www.ics.uci.edu/admissions</loc></url>
          <url><loc>https://archive.org/elsewhere</loc></url>
        </urlset>"#;
    let response = FetchedResponse::ok(url, "application/xml", xml);

    let links = process(url, &response, &mut state, &stopwords, &config);

    assert_eq!(
        links,
        vec![
            "https://www.ics.uci.edu/about",
            "https://www.ics.uci.edu/admissions",
        ]
    );
    // Sitemaps contribute URLs, never text
    assert!(state.word_frequencies.is_empty());
    assert_eq!(state.longest_page.words, 0);
}

#[test]
fn test_duplicate_cluster_does_not_propagate() {
    let (mut state, stopwords, config) = setup();
    let body = r#"<body>
        <p>Identical boilerplate body repeated across a cluster of mirror
           pages with enough words for shingling to be meaningful.</p>
        <a href="https://www.ics.uci.edu/next">next</a>
    </body>"#;

    let first = process(
        "https://www.ics.uci.edu/mirror/one",
        &html_response("https://www.ics.uci.edu/mirror/one", body),
        &mut state,
        &stopwords,
        &config,
    );
    assert_eq!(first, vec!["https://www.ics.uci.edu/next"]);

    let words_after_first = *state.word_frequencies.get("boilerplate").unwrap();

    let second = process(
        "https://www.ics.uci.edu/mirror/two",
        &html_response("https://www.ics.uci.edu/mirror/two", body),
        &mut state,
        &stopwords,
        &config,
    );

    // The duplicate contributes no links, but its word counts were already
    // committed before the fingerprint comparison ran
    assert!(second.is_empty());
    assert_eq!(
        *state.word_frequencies.get("boilerplate").unwrap(),
        words_after_first * 2
    );
    assert_eq!(state.duplicates.len(), 1);
}

#[test]
fn test_single_host_fanout_trap_discards_page() {
    let (mut state, stopwords, config) = setup();
    let url = "https://www.ics.uci.edu/directory";

    let mut body = String::from("<body><p>A generated directory listing page</p>");
    for i in 0..101 {
        body.push_str(&format!(
            r#"<a href="https://vision.ics.uci.edu/entry/{}">e{}</a>"#,
            i, i
        ));
    }
    body.push_str("</body>");

    let links = process(url, &html_response(url, &body), &mut state, &stopwords, &config);

    // 101 links into one host trips the fan-out guard; the whole page is dropped
    assert!(links.is_empty());
    assert!(state.unique_urls.is_empty());

    // Text analysis still happened for the page itself
    assert!(state.word_frequencies.contains_key("directory"));
}

#[test]
fn test_fanout_at_threshold_is_kept() {
    let (mut state, stopwords, config) = setup();
    let url = "https://www.ics.uci.edu/directory";

    let mut body = String::from("<body>");
    for i in 0..100 {
        body.push_str(&format!(
            r#"<a href="https://vision.ics.uci.edu/entry/{}">e{}</a>"#,
            i, i
        ));
    }
    body.push_str("</body>");

    let links = process(url, &html_response(url, &body), &mut state, &stopwords, &config);

    assert_eq!(links.len(), 100);
}

#[test]
fn test_failed_fetches_leave_state_untouched() {
    let (mut state, stopwords, config) = setup();

    for status in [403, 404, 500, 502, 503, 504, 601, 418] {
        let url = "https://www.ics.uci.edu/gone";
        let response = FetchedResponse::failed(url, status, Some("fetch failed"));
        let links = process(url, &response, &mut state, &stopwords, &config);
        assert!(links.is_empty());
    }

    assert!(state.word_frequencies.is_empty());
    assert!(state.unique_urls.is_empty());
    assert!(state.duplicates.is_empty());
}

#[test]
fn test_longest_page_tracked_across_pages() {
    let (mut state, stopwords, config) = setup();

    process(
        "https://www.ics.uci.edu/short",
        &html_response(
            "https://www.ics.uci.edu/short",
            "<p>brief page content here</p>",
        ),
        &mut state,
        &stopwords,
        &config,
    );
    process(
        "https://www.ics.uci.edu/long",
        &html_response(
            "https://www.ics.uci.edu/long",
            "<p>considerably longer page content with many additional distinct words \
             covering admissions research teaching outreach alumni</p>",
        ),
        &mut state,
        &stopwords,
        &config,
    );

    assert_eq!(
        state.longest_page.url.as_deref(),
        Some("https://www.ics.uci.edu/long")
    );
}

#[test]
fn test_reports_reflect_processed_pages() {
    let (mut state, stopwords, mut config) = setup();
    let dir = tempdir().unwrap();
    config.output.word_frequencies_path =
        dir.path().join("freq.json").to_string_lossy().into_owned();
    config.output.url_list_path = dir.path().join("urls.txt").to_string_lossy().into_owned();
    config.output.subdomain_summary_path =
        dir.path().join("subdomains.txt").to_string_lossy().into_owned();

    let url = "https://www.ics.uci.edu/";
    let body = r#"<body><p>Anteater anteater research</p>
        <a href="https://vision.ics.uci.edu/projects">v</a>
        <a href="https://www.cs.uci.edu/people">c</a>
    </body>"#;
    process(url, &html_response(url, body), &mut state, &stopwords, &config);

    write_reports(&state, &config).unwrap();

    let freq: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&config.output.word_frequencies_path).unwrap())
            .unwrap();
    assert_eq!(freq["anteater"], 2);
    assert_eq!(freq["research"], 1);

    let urls = std::fs::read_to_string(&config.output.url_list_path).unwrap();
    assert_eq!(
        urls.lines().collect::<Vec<_>>(),
        vec![
            "https://vision.ics.uci.edu/projects",
            "https://www.cs.uci.edu/people",
        ]
    );

    let subdomains = std::fs::read_to_string(&config.output.subdomain_summary_path).unwrap();
    assert_eq!(
        subdomains.lines().collect::<Vec<_>>(),
        vec!["vision.ics.uci.edu, 1", "www.cs.uci.edu, 1"]
    );
}
