use quick_xml::events::Event;
use quick_xml::reader::Reader;

/// Extracts the URLs of every `<loc>` element in an XML sitemap
///
/// Sitemap entries are expected to enumerate many paths on the crawl's own
/// domain, so no fan-out guard applies here; scope filtering happens in the
/// validator like everywhere else.
///
/// Malformed XML degrades to whatever was collected before the parse error;
/// nothing is propagated.
///
/// # Arguments
///
/// * `xml` - The sitemap document body
///
/// # Returns
///
/// The trimmed text content of each `<loc>` element, in document order
pub fn extract_sitemap_urls(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut urls = Vec::new();
    let mut in_loc = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                in_loc = e.local_name().as_ref() == b"loc";
            }
            Ok(Event::Text(ref e)) if in_loc => {
                if let Ok(text) = e.unescape() {
                    let url = text.trim().to_string();
                    if !url.is_empty() {
                        urls.push(url);
                    }
                }
            }
            Ok(Event::End(_)) => {
                in_loc = false;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::debug!("Sitemap parse error after {} entries: {}", urls.len(), e);
                break;
            }
        }
    }

    urls
}
