use tracing::{debug, trace};
use url::Url;

use crate::matcher::{patterns, BoundedMatcher};

/// Recovers URLs embedded as query-parameter values (redirect targets,
/// referrers, and the like).
///
/// Schemeless input (`//host/...` or `www.host/...`) is prefixed with a
/// default scheme so it parses as an absolute URL. Each query value is then
/// tested against the URL pattern in exact-match mode: the entire value must
/// be a URL, not merely contain one.
///
/// Values are returned unmodified; canonicalization is the caller's
/// responsibility. Input that cannot be parsed as a URL yields no matches
/// rather than an error.
///
/// # Arguments
/// * `raw` - The URL whose query string is examined
///
/// # Returns
/// * `Vec<String>` - Recovered values, duplicate-free, in parameter order
pub fn find_urls_in_query(raw: &str) -> Vec<String> {
    let prepared = absolutize(raw);

    let parsed = match Url::parse(&prepared) {
        Ok(url) => url,
        Err(error) => {
            trace!(candidate = raw, %error, "not parseable, skipping query extraction");
            return Vec::new();
        }
    };

    let exact = BoundedMatcher::new(&patterns::URL_EXACT);
    let mut found: Vec<String> = Vec::new();

    for (key, value) in parsed.query_pairs() {
        if exact.is_match(&value) && !found.iter().any(|v| v == value.as_ref()) {
            debug!(param = %key, "recovered URL from query parameter");
            found.push(value.into_owned());
        }
    }

    found
}

/// Prefixes `http` so protocol-relative and `www.` inputs parse absolutely.
fn absolutize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("//") {
        format!("http:{trimmed}")
    } else if trimmed
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("www."))
    {
        format!("http://{trimmed}")
    } else {
        trimmed.to_string()
    }
}
