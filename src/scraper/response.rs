use std::collections::HashMap;

/// A decoded HTTP response handed in by the external fetch layer
///
/// Consumed only: the core never initiates network calls. A response with a
/// non-200 status or a missing body carries no usable content.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    /// HTTP status code (601 is the cache server's synthetic failure code)
    pub status: u16,

    /// Transport-level error description, when the fetch layer recorded one
    pub error: Option<String>,

    /// Final URL after any redirects
    pub final_url: String,

    /// Response headers
    pub headers: HashMap<String, String>,

    /// Decoded body, absent on failed fetches
    pub body: Option<String>,
}

impl FetchedResponse {
    /// Creates a successful (200) response with the given content type and body
    pub fn ok(final_url: &str, content_type: &str, body: &str) -> Self {
        Self {
            status: 200,
            error: None,
            final_url: final_url.to_string(),
            headers: HashMap::from([("Content-Type".to_string(), content_type.to_string())]),
            body: Some(body.to_string()),
        }
    }

    /// Creates a failed response with no body
    pub fn failed(final_url: &str, status: u16, error: Option<&str>) -> Self {
        Self {
            status,
            error: error.map(|e| e.to_string()),
            final_url: final_url.to_string(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Returns true if the response carries usable content
    pub fn is_usable(&self) -> bool {
        self.status == 200 && self.body.is_some()
    }

    /// Case-insensitive Content-Type header lookup
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.as_str())
    }
}
