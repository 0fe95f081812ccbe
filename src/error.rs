use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the extraction pipeline.
///
/// `MalformedUrl` is only observable through the standalone
/// [`canonicalize`](crate::canonical::canonicalize) entry point; inside
/// [`get_urls`](crate::pipeline::get_urls) a malformed candidate is dropped
/// and the call still succeeds. `InvalidPattern` always propagates: a
/// caller-supplied filter that cannot be honored must not be ignored.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed URL '{url}': {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid exclusion pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
