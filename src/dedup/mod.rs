//! Near-duplicate content detection
//!
//! Pages are summarized as 64-bit simhash fingerprints over word shingles.
//! Similar pages produce fingerprints with low Hamming distance, which
//! catches templated and mirrored content that byte-level hashing misses.
//!
//! The detector keeps every accepted fingerprint for the process lifetime and
//! compares each new page against all of them. That linear scan is an
//! accepted scalability ceiling: at this crawl's scale it is simpler and
//! cheaper than a locality-sensitive bucket index.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// Default Hamming distance below which two pages count as near-duplicates
pub const DEFAULT_DUPLICATE_DISTANCE: u32 = 3;

/// Default width of the word shingles used as similarity features
pub const DEFAULT_SHINGLE_WIDTH: usize = 3;

/// A 64-bit similarity fingerprint of a page's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(pub u64);

impl Fingerprint {
    /// Computes the fingerprint of a text using word shingles of the given width
    ///
    /// The text is lowercased and stripped of punctuation before being split
    /// on whitespace. With fewer words than the shingle width, the whole word
    /// sequence forms a single feature.
    pub fn compute(text: &str, shingle_width: usize) -> Self {
        let features = extract_features(text, shingle_width);
        Fingerprint(simhash(&features))
    }

    /// Number of differing bits between two fingerprints
    pub fn hamming_distance(&self, other: &Fingerprint) -> u32 {
        (self.0 ^ other.0).count_ones()
    }

    /// Returns true if the distance to `other` is strictly below `threshold`
    pub fn is_near(&self, other: &Fingerprint, threshold: u32) -> bool {
        self.hamming_distance(other) < threshold
    }
}

/// Extracts the set of distinct word shingles from text
///
/// Lowercases, removes punctuation, splits on whitespace, then joins each
/// window of `width` consecutive words into one feature string. Runs of the
/// same word collapse to a single occurrence before shingling, and features
/// are a set: a shingle repeated in the text contributes one vote. Together
/// these keep an inserted run of a repeated word down to a single novel
/// shingle, so such an insertion cannot push a mirror pair past the
/// duplicate threshold.
fn extract_features(text: &str, width: usize) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    let mut words: Vec<&str> = cleaned.split_whitespace().collect();
    words.dedup();

    if words.is_empty() {
        return Vec::new();
    }

    if words.len() < width {
        return vec![words.join(" ")];
    }

    let mut seen = HashSet::new();
    words
        .windows(width)
        .map(|w| w.join(" "))
        .filter(|shingle| seen.insert(shingle.clone()))
        .collect()
}

/// Folds a feature set into a 64-bit simhash
///
/// Each feature is hashed to 64 bits; per bit position, set bits vote +1 and
/// clear bits vote -1 across all features. The final fingerprint has a bit
/// set wherever the vote is positive.
fn simhash(features: &[String]) -> u64 {
    let mut votes = [0i64; 64];

    for feature in features {
        let mut hasher = DefaultHasher::new();
        feature.hash(&mut hasher);
        let h = hasher.finish();

        for (bit, vote) in votes.iter_mut().enumerate() {
            if h >> bit & 1 == 1 {
                *vote += 1;
            } else {
                *vote -= 1;
            }
        }
    }

    let mut value = 0u64;
    for (bit, vote) in votes.iter().enumerate() {
        if *vote > 0 {
            value |= 1 << bit;
        }
    }
    value
}

/// Detects near-duplicate pages against everything seen so far
///
/// Fingerprints of novel pages are registered under their source URL;
/// append-only for the process lifetime.
#[derive(Debug)]
pub struct DuplicateDetector {
    /// Fingerprints of all accepted pages, paired with their URLs
    seen: Vec<(Fingerprint, String)>,
    /// Hamming distance below which a page counts as a duplicate
    max_distance: u32,
    /// Shingle width used for fingerprinting
    shingle_width: usize,
}

impl DuplicateDetector {
    /// Creates a detector with the given distance threshold and shingle width
    pub fn new(max_distance: u32, shingle_width: usize) -> Self {
        Self {
            seen: Vec::new(),
            max_distance,
            shingle_width,
        }
    }

    /// Checks a page's text against all previously registered pages
    ///
    /// Returns the URL of the first near-duplicate match, or registers the
    /// page's fingerprint under `url` and returns `None` if the page is
    /// novel. A duplicate is never registered, so a cluster of mutually
    /// similar pages collapses onto its first-seen member.
    pub fn check(&mut self, text: &str, url: &str) -> Option<String> {
        let fingerprint = Fingerprint::compute(text, self.shingle_width);

        for (prev, prev_url) in &self.seen {
            if fingerprint.is_near(prev, self.max_distance) {
                tracing::info!(
                    "Near-duplicate page: {} similar to {} (distance {})",
                    url,
                    prev_url,
                    fingerprint.hamming_distance(prev)
                );
                return Some(prev_url.clone());
            }
        }

        self.seen.push((fingerprint, url.to_string()));
        None
    }

    /// Convenience wrapper matching the crawl contract: true if duplicate
    pub fn is_duplicate(&mut self, text: &str, url: &str) -> bool {
        self.check(text, url).is_some()
    }

    /// Number of registered fingerprints
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns true if nothing has been registered yet
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl Default for DuplicateDetector {
    fn default() -> Self {
        Self::new(DEFAULT_DUPLICATE_DISTANCE, DEFAULT_SHINGLE_WIDTH)
    }
}
