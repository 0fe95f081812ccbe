use crate::filter::ExcludePattern;

// Defaults for the canonicalization knobs.
const DEFAULT_SCHEME: &str = "http";

/// Configuration for a [`get_urls`](crate::pipeline::get_urls) call.
///
/// Allows customization of matching strictness, query-string recovery,
/// exclusion filtering, and canonicalization.
#[derive(Debug, Clone)]
pub struct Options {
    /// Require an explicit scheme or a `www.` prefix to count as a URL
    /// match. When false, bare domains with a recognized TLD also match.
    pub require_scheme_or_www: bool,

    /// Also recover URLs nested inside query-parameter values.
    pub extract_from_query_string: bool,

    /// Drop results matching any of these patterns.
    pub exclude: Vec<ExcludePattern>,

    /// Canonicalize results instead of returning raw trimmed matches.
    pub normalize: bool,

    /// Knobs passed through to the canonicalizer.
    pub normalize_options: NormalizeOptions,
}

impl Options {
    /// Creates options with default values: lenient matching, no query
    /// recovery, no exclusions, canonicalization on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether a scheme or `www.` prefix is required for a match.
    pub fn with_require_scheme_or_www(mut self, strict: bool) -> Self {
        self.require_scheme_or_www = strict;
        self
    }

    /// Sets whether URLs are recovered from query-parameter values.
    pub fn with_extract_from_query_string(mut self, extract: bool) -> Self {
        self.extract_from_query_string = extract;
        self
    }

    /// Sets the exclusion patterns.
    pub fn with_exclude(mut self, exclude: Vec<ExcludePattern>) -> Self {
        self.exclude = exclude;
        self
    }

    /// Sets whether results are canonicalized.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Sets the canonicalization knobs.
    pub fn with_normalize_options(mut self, normalize_options: NormalizeOptions) -> Self {
        self.normalize_options = normalize_options;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            require_scheme_or_www: false,
            extract_from_query_string: false,
            exclude: Vec::new(),
            normalize: true,
            normalize_options: NormalizeOptions::default(),
        }
    }
}

/// Knobs governing URL canonicalization.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Scheme supplied to schemeless input (`www.example.com`, `//host/x`).
    pub default_scheme: String,

    /// Strip a leading `www.` from the host.
    pub strip_www: bool,

    /// Strip the fragment (`#section`).
    pub strip_fragment: bool,

    /// Strip username/password from the authority.
    pub strip_authentication: bool,

    /// Sort query parameters by key for a stable canonical form.
    pub sort_query_params: bool,

    /// Strip the trailing slash from the path.
    pub strip_trailing_slash: bool,
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scheme supplied to schemeless input.
    pub fn with_default_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.default_scheme = scheme.into();
        self
    }

    pub fn with_strip_www(mut self, strip: bool) -> Self {
        self.strip_www = strip;
        self
    }

    pub fn with_strip_fragment(mut self, strip: bool) -> Self {
        self.strip_fragment = strip;
        self
    }

    pub fn with_strip_authentication(mut self, strip: bool) -> Self {
        self.strip_authentication = strip;
        self
    }

    pub fn with_sort_query_params(mut self, sort: bool) -> Self {
        self.sort_query_params = sort;
        self
    }

    pub fn with_strip_trailing_slash(mut self, strip: bool) -> Self {
        self.strip_trailing_slash = strip;
        self
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            default_scheme: DEFAULT_SCHEME.to_string(),
            strip_www: true,
            strip_fragment: false,
            strip_authentication: true,
            sort_query_params: true,
            strip_trailing_slash: true,
        }
    }
}
