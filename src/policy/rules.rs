use crate::config::ScopeConfig;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Event-detail pages with a trailing numeric id (unbounded event archives)
static EVENT_DETAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/event/[-\w]+-\d+$").expect("event detail regex is valid"));

/// Calendar-looking date token, YYYY-MM with optional -DD
static DATE_TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}(-\d{2})?").expect("date token regex is valid"));

/// Versioned public-wiki mirror pages with a trailing 4-digit year
static WIKI_MIRROR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/wiki/public/wiki/.+-\d{4}").expect("wiki mirror regex is valid")
});

/// Legacy personal-homepage paths (~username)
static PERSONAL_PAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/~[a-zA-Z0-9_-]+").expect("personal page regex is valid"));

/// Non-text file extensions at the end of the path
static EXTENSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\.(css|js|bmp|gif|jpe?g|ico|png|tiff?|mid|mp2|mp3|mp4|wav|avi|mov|mpeg|ram|m4v|mkv|ogg|ogv|pdf|ps|eps|tex|ppt|pptx|doc|docx|xls|xlsx|names|data|dat|exe|bz2|tar|msi|bin|7z|psd|dmg|iso|epub|dll|cnf|tgz|sha1|thmx|mso|arff|rtf|jar|csv|rm|smil|wmv|swf|wma|zip|rar|gz)$",
    )
    .expect("extension regex is valid")
});

/// Pre-lowered views of a candidate URL, shared by every rule
pub struct RuleContext<'a> {
    /// The URL exactly as received
    pub raw: &'a str,
    /// Parsed form
    pub url: &'a Url,
    /// Lowercase host, empty when the URL has none
    pub host: String,
    /// Lowercase path
    pub path_lower: String,
    /// Lowercase query string, empty when absent
    pub query_lower: String,
    /// Crawl scope (allow-list and dead hosts)
    pub scope: &'a ScopeConfig,
}

impl<'a> RuleContext<'a> {
    pub fn new(raw: &'a str, url: &'a Url, scope: &'a ScopeConfig) -> Self {
        Self {
            raw,
            url,
            host: url.host_str().unwrap_or("").to_lowercase(),
            path_lower: url.path().to_lowercase(),
            query_lower: url.query().unwrap_or("").to_lowercase(),
            scope,
        }
    }
}

/// A single named reject rule
///
/// Rules are independent predicates: any matching rule rejects the URL
/// regardless of evaluation order. The ordering of the table only controls
/// short-circuiting, cheapest and most selective rules first.
pub struct Rule {
    /// Short name, used in rejection logs
    pub name: &'static str,
    /// Returns true when the URL should be rejected
    pub rejects: fn(&RuleContext) -> bool,
}

/// The ordered trap-avoidance rule catalogue
pub const RULES: &[Rule] = &[
    Rule {
        name: "scheme",
        rejects: non_http_scheme,
    },
    Rule {
        name: "out-of-scope",
        rejects: outside_allowed_domains,
    },
    Rule {
        name: "events-tag-archive",
        rejects: events_tag_archive,
    },
    Rule {
        name: "event-detail",
        rejects: event_detail_page,
    },
    Rule {
        name: "calendar-export",
        rejects: calendar_export_params,
    },
    Rule {
        name: "date-token",
        rejects: date_token,
    },
    Rule {
        name: "gitlab-trap",
        rejects: gitlab_trap,
    },
    Rule {
        name: "wiki-action",
        rejects: wiki_action,
    },
    Rule {
        name: "wiki-mirror",
        rejects: versioned_wiki_mirror,
    },
    Rule {
        name: "dead-host",
        rejects: dead_host,
    },
    Rule {
        name: "personal-page",
        rejects: legacy_personal_page,
    },
    Rule {
        name: "repeated-substring",
        rejects: repeated_substring,
    },
    Rule {
        name: "file-extension",
        rejects: non_text_extension,
    },
];

/// Rule 1: only http and https are ever fetched
fn non_http_scheme(ctx: &RuleContext) -> bool {
    ctx.url.scheme() != "http" && ctx.url.scheme() != "https"
}

/// Rule 2: host must equal, or be a subdomain of, an allowed domain
fn outside_allowed_domains(ctx: &RuleContext) -> bool {
    !ctx.scope.allowed_domains.iter().any(|allowed| {
        ctx.host == *allowed || ctx.host.ends_with(&format!(".{}", allowed))
    })
}

/// Rule 3: events tag archive, known infinite pagination
fn events_tag_archive(ctx: &RuleContext) -> bool {
    ctx.path_lower.contains("/events/tag/talks/")
}

/// Rule 4: event-detail pages with a trailing numeric id
fn event_detail_page(ctx: &RuleContext) -> bool {
    EVENT_DETAIL_PATTERN.is_match(ctx.raw)
}

/// Rule 5: calendar export and calendar navigation query parameters
fn calendar_export_params(ctx: &RuleContext) -> bool {
    ctx.raw.contains("ical=")
        || ctx.raw.contains("outlook-ical=")
        || ctx.query_lower.contains("tribe-bar-date=")
        || ctx.query_lower.contains("eventdisplay=past")
}

/// Rule 6: anything that looks like a calendar date token
///
/// Deliberately broad: this also rejects legitimate URLs that happen to
/// contain a year-month substring outside any calendar context. That
/// over-rejection is a known, accepted trade-off of the crawl, not a bug.
fn date_token(ctx: &RuleContext) -> bool {
    DATE_TOKEN_PATTERN.is_match(ctx.raw)
}

/// Rule 7: combinatorially large gitlab surfaces
///
/// Merge requests, parallel diff views, commits, tree browsers, fork and
/// branch listings all explode into huge low-value URL spaces. The one
/// exception is the all-branches view, which is a single bounded page.
fn gitlab_trap(ctx: &RuleContext) -> bool {
    if !ctx.raw.contains("gitlab") {
        return false;
    }

    ctx.path_lower.contains("merge_request")
        || ctx.raw.contains("?view=parallel")
        || ctx.raw.contains("commit")
        || ctx.raw.contains("/tree/")
        || ctx.path_lower.contains("forks")
        || (ctx.path_lower.contains("branches") && !ctx.path_lower.contains("all"))
}

/// Rule 8: DokuWiki internal action modes
fn wiki_action(ctx: &RuleContext) -> bool {
    const ACTION_MODES: &[&str] = &[
        "?do=edit",
        "?do=login",
        "?do=backlink",
        "?do=revisions",
        "?do=diff",
    ];

    if ACTION_MODES.iter().any(|mode| ctx.raw.contains(mode)) {
        return true;
    }

    // Percent-escaped sequences starting %3 show up in looped wiki links
    if ctx.raw.contains("%3") {
        return true;
    }

    if ctx.raw.contains("doku.php") {
        const ACTION_PARAMS: &[&str] = &["?do=", "&do=", "?idx=", "&idx=", "?id=", "&id="];
        if ACTION_PARAMS.iter().any(|param| ctx.raw.contains(param)) {
            return true;
        }
    }

    false
}

/// Rule 9: versioned public-wiki mirror pages
fn versioned_wiki_mirror(ctx: &RuleContext) -> bool {
    WIKI_MIRROR_PATTERN.is_match(ctx.raw)
}

/// Rule 10: known-dead or access-restricted hosts
fn dead_host(ctx: &RuleContext) -> bool {
    ctx.scope
        .dead_hosts
        .iter()
        .any(|dead| ctx.host.contains(dead.as_str()))
}

/// Rule 11: legacy personal-homepage paths
fn legacy_personal_page(ctx: &RuleContext) -> bool {
    PERSONAL_PAGE_PATTERN.is_match(ctx.raw)
}

/// Rule 12: degenerate repetition guard
///
/// Catches malformed or looped query strings: any of these literals occurring
/// more than once means the URL was built by a generator gone wrong.
fn repeated_substring(ctx: &RuleContext) -> bool {
    const REPEAT_MARKERS: &[&str] = &["robots.txt", "&", "%3A", "?do=edit"];

    REPEAT_MARKERS
        .iter()
        .any(|marker| ctx.raw.matches(marker).count() > 1)
}

/// Rule 13: non-text file extensions at the end of the path
fn non_text_extension(ctx: &RuleContext) -> bool {
    EXTENSION_PATTERN.is_match(&ctx.path_lower)
}
