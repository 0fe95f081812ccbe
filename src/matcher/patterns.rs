use once_cell::sync::Lazy;
use regex::Regex;

/// Top-level domains recognized when matching bare domains (no scheme, no
/// `www.`). A curated table rather than the full public-suffix list: the
/// lenient matcher only needs enough coverage to pick up domains that appear
/// in real-world text.
pub const KNOWN_TLDS: &[&str] = &[
    "com", "net", "org", "edu", "gov", "mil", "int", "io", "co", "ai", "app",
    "dev", "xyz", "info", "biz", "name", "pro", "me", "tv", "cc", "ws",
    "mobi", "online", "site", "store", "tech", "blog", "cloud", "space",
    "live", "news", "shop", "education", "technology", "agency", "digital",
    "systems", "solutions", "network", "email", "group", "world", "today",
    "us", "uk", "ca", "de", "fr", "es", "it", "nl", "se", "no", "fi", "dk",
    "pl", "ru", "ua", "cn", "jp", "kr", "in", "au", "nz", "br", "mx", "ar",
    "za", "ch", "at", "be", "ie", "pt", "gr", "cz", "hu", "ro", "il", "tr",
    "eu", "asia",
];

// Building blocks shared by the strict, lenient, and exact patterns.
const SCHEME: &str = r"[a-zA-Z][a-zA-Z0-9+.-]*://";
const LABEL: &str = r"[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?";
const PORT: &str = r"(?::\d{2,5})?";
// Everything after the host: path, query, fragment. Stops at whitespace and
// at characters that commonly delimit URLs in prose.
const TAIL: &str = r#"(?:[/?#][^\s<>"'()`]*)?"#;

fn strict_body() -> String {
    format!(r#"(?:{SCHEME}|www\.)[^\s<>"'()`]+"#)
}

fn bare_domain_body() -> String {
    let tlds = KNOWN_TLDS.join("|");
    format!(r"(?:{LABEL}\.)+(?:{tlds})\b{PORT}{TAIL}")
}

/// Requires an explicit scheme (`http://`, `ftp://`, ...) or a `www.` prefix.
pub static URL_STRICT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b{}", strict_body())).expect("valid strict URL regex")
});

/// Additionally matches bare domains ending in a recognized TLD, so
/// `unicorn.education` counts as a URL without a scheme or `www.`.
pub static URL_LENIENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:{}|{})",
        strict_body(),
        bare_domain_body()
    ))
    .expect("valid lenient URL regex")
});

/// Anchored form of the lenient pattern: the entire input must be a URL.
/// Used for testing query-parameter values.
pub static URL_EXACT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(?:{}|{})$",
        strict_body(),
        bare_domain_body()
    ))
    .expect("valid exact URL regex")
});
