use serde::Deserialize;

/// Main configuration structure for Zot-Scrape
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scope: ScopeConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub resources: ResourcesConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scope: ScopeConfig::default(),
            limits: LimitsConfig::default(),
            resources: ResourcesConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Crawl scope configuration: which hosts are ever worth fetching
#[derive(Debug, Clone, Deserialize)]
pub struct ScopeConfig {
    /// Domains the crawl is restricted to; subdomains of these are in scope
    #[serde(rename = "allowed-domains", default = "default_allowed_domains")]
    pub allowed_domains: Vec<String>,

    /// Known-dead or access-restricted hosts, rejected outright
    #[serde(rename = "dead-hosts", default = "default_dead_hosts")]
    pub dead_hosts: Vec<String>,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            allowed_domains: default_allowed_domains(),
            dead_hosts: default_dead_hosts(),
        }
    }
}

fn default_allowed_domains() -> Vec<String> {
    [
        "ics.uci.edu",
        "cs.uci.edu",
        "informatics.uci.edu",
        "stat.uci.edu",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_dead_hosts() -> Vec<String> {
    [
        "jujube.ics.uci.edu",
        "flamingo.ics.uci.edu",
        "asterixdb.ics.uci.edu",
        "dblp.ics.uci.edu",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Heuristic threshold configuration
///
/// These are empirical tuning choices, not domain guarantees; the defaults
/// match the values the crawl was originally run with.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum links to a single host tolerated on one page before the whole
    /// page is treated as a trap
    #[serde(rename = "max-links-per-domain", default = "default_max_links_per_domain")]
    pub max_links_per_domain: usize,

    /// Hamming distance below which two fingerprints count as near-duplicates
    #[serde(rename = "duplicate-distance", default = "default_duplicate_distance")]
    pub duplicate_distance: u32,

    /// Width of the word shingles fed into the similarity fingerprint
    #[serde(rename = "shingle-width", default = "default_shingle_width")]
    pub shingle_width: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_links_per_domain: default_max_links_per_domain(),
            duplicate_distance: default_duplicate_distance(),
            shingle_width: default_shingle_width(),
        }
    }
}

fn default_max_links_per_domain() -> usize {
    100
}

fn default_duplicate_distance() -> u32 {
    3
}

fn default_shingle_width() -> usize {
    3
}

/// External resource configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ResourcesConfig {
    /// Path to the whitespace-separated stopword file
    #[serde(rename = "stopwords-path", default = "default_stopwords_path")]
    pub stopwords_path: String,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            stopwords_path: default_stopwords_path(),
        }
    }
}

fn default_stopwords_path() -> String {
    "stopwords.txt".to_string()
}

/// Report output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path for the word-frequency table (flat JSON object)
    #[serde(rename = "word-frequencies-path", default = "default_word_frequencies_path")]
    pub word_frequencies_path: String,

    /// Path for the sorted unique-URL list, one URL per line
    #[serde(rename = "url-list-path", default = "default_url_list_path")]
    pub url_list_path: String,

    /// Path for the sorted `subdomain, count` summary
    #[serde(rename = "subdomain-summary-path", default = "default_subdomain_summary_path")]
    pub subdomain_summary_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            word_frequencies_path: default_word_frequencies_path(),
            url_list_path: default_url_list_path(),
            subdomain_summary_path: default_subdomain_summary_path(),
        }
    }
}

fn default_word_frequencies_path() -> String {
    "word_frequencies_final.json".to_string()
}

fn default_url_list_path() -> String {
    "unique_urls.txt".to_string()
}

fn default_subdomain_summary_path() -> String {
    "subdomain_summary.txt".to_string()
}
