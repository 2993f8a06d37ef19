//! Link extraction from fetched page bodies
//!
//! Two extraction modes, selected by the orchestrator from the declared
//! Content-Type:
//! - HTML: anchor hrefs resolved against the page URL, fragments stripped,
//!   with a per-page domain fan-out trap guard
//! - Sitemap: the text of every `<loc>` element in an XML document
//!
//! Parse failures in either mode degrade to empty results; they are never
//! propagated to the caller.

mod html;
mod sitemap;

pub use html::{extract_links, parse_document, visible_text};
pub use sitemap::extract_sitemap_urls;

/// Routing decision for a usable response body
///
/// Determined once from the response headers; everything downstream
/// dispatches on this instead of re-inspecting Content-Type strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// An HTML page: extract anchors, tokenize visible text
    Html,
    /// An XML sitemap: collect `<loc>` entries
    Sitemap,
    /// Anything else: no extractable content
    Unsupported,
}

/// Classifies a response body from its declared Content-Type
///
/// A value containing "xml" routes to sitemap extraction; a value containing
/// "html" routes to HTML extraction; anything else (including a missing
/// header) is unsupported.
pub fn classify_content_type(content_type: Option<&str>) -> ContentKind {
    let declared = content_type.unwrap_or("").to_lowercase();

    if declared.contains("xml") {
        ContentKind::Sitemap
    } else if declared.contains("html") {
        ContentKind::Html
    } else {
        ContentKind::Unsupported
    }
}
