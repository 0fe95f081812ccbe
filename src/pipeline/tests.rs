use crate::filter::ExcludePattern;
use crate::options::{NormalizeOptions, Options};
use crate::pipeline::get_urls;

#[test]
fn test_extracts_canonical_absolute_urls() {
    let urls = get_urls("docs live at https://Example.com/Guide.", &Options::default()).unwrap();

    assert_eq!(urls, vec!["https://example.com/Guide"]);
}

#[test]
fn test_bare_domain_depends_on_strictness() {
    let text = "ping example.com about this";

    let lenient = get_urls(text, &Options::default()).unwrap();
    assert_eq!(lenient, vec!["http://example.com"]);

    let strict = get_urls(text, &Options::default().with_require_scheme_or_www(true)).unwrap();
    assert!(strict.is_empty());
}

#[test]
fn test_deduplicates_across_casing() {
    let text = "HTTP://EXAMPLE.COM and http://example.com again";
    let urls = get_urls(text, &Options::default()).unwrap();

    assert_eq!(urls, vec!["http://example.com"]);
}

#[test]
fn test_results_ordered_by_first_occurrence() {
    let text = "https://z.com https://a.com https://z.com";
    let urls = get_urls(text, &Options::default()).unwrap();

    assert_eq!(urls, vec!["https://z.com", "https://a.com"]);
}

#[test]
fn test_raw_mode_trims_without_canonicalizing() {
    let text = "See HTTP://Example.com/Path. for details";
    let urls = get_urls(text, &Options::default().with_normalize(false)).unwrap();

    // Casing is untouched in raw mode; only whitespace and trailing dots go.
    assert_eq!(urls, vec!["HTTP://Example.com/Path"]);
}

#[test]
fn test_trailing_prose_punctuation_is_stripped() {
    let urls = get_urls("see http://example.com, then http://other.org; done", &Options::default())
        .unwrap();

    assert_eq!(urls, vec!["http://example.com", "http://other.org"]);
}

#[test]
fn test_query_string_extraction() {
    let text = "redirect via https://x.com/go?url=https://y.com please";
    let options = Options::default().with_extract_from_query_string(true);
    let urls = get_urls(text, &options).unwrap();

    assert_eq!(
        urls,
        vec!["https://x.com/go?url=https%3A%2F%2Fy.com", "https://y.com"]
    );
}

#[test]
fn test_query_string_extraction_in_raw_mode() {
    let text = "https://x.com/go?url=https://y.com/";
    let options = Options::default()
        .with_normalize(false)
        .with_extract_from_query_string(true);
    let urls = get_urls(text, &options).unwrap();

    assert_eq!(
        urls,
        vec!["https://x.com/go?url=https://y.com/", "https://y.com/"]
    );
}

#[test]
fn test_exclusion_patterns_filter_results() {
    let text = "https://a.com https://b.com";
    let options = Options::default().with_exclude(vec![ExcludePattern::from(r"b\.com")]);
    let urls = get_urls(text, &options).unwrap();

    assert_eq!(urls, vec!["https://a.com"]);
}

#[test]
fn test_invalid_exclusion_pattern_fails_the_call() {
    let options = Options::default().with_exclude(vec![ExcludePattern::from("[oops(")]);
    let result = get_urls("https://a.com", &options);

    assert!(result.is_err());
}

#[test]
fn test_malformed_candidates_are_dropped_silently() {
    // "http://:80" matches the URL shape but has no host; the call still
    // succeeds with the remaining candidates.
    let text = "broken http://:80 but fine https://ok.com";
    let urls = get_urls(text, &Options::default()).unwrap();

    assert_eq!(urls, vec!["https://ok.com"]);
}

#[test]
fn test_normalize_options_pass_through() {
    let options = Options::default().with_normalize_options(
        NormalizeOptions::default()
            .with_default_scheme("https")
            .with_strip_fragment(true),
    );
    let urls = get_urls("read example.com/a#top now", &options).unwrap();

    assert_eq!(urls, vec!["https://example.com/a"]);
}

#[test]
fn test_empty_text_yields_empty_result() {
    assert!(get_urls("", &Options::default()).unwrap().is_empty());
    assert!(get_urls("no links here", &Options::default())
        .unwrap()
        .is_empty());
}
