use tracing::{debug, trace};

use crate::canonical;
use crate::error::Result;
use crate::filter;
use crate::matcher;
use crate::options::Options;
use crate::query;

pub mod candidates;
#[cfg(test)]
mod tests;

use candidates::CandidateSet;

/// Extracts URLs from free-form text.
///
/// This is the single entry point of the crate. The pipeline runs four
/// stages: regex matching with a time budget, canonicalization (or raw
/// trimming), optional recovery of URLs nested in query-string values, and
/// exclusion filtering. Results are duplicate-free and ordered by first
/// occurrence.
///
/// Candidates that fail canonicalization are dropped silently; an invalid
/// exclusion pattern fails the whole call.
///
/// # Arguments
/// * `text` - The text to scan
/// * `options` - Pipeline configuration
///
/// # Returns
/// * `Result<Vec<String>>` - Extracted URLs, or `Error::InvalidPattern`
pub fn get_urls(text: &str, options: &Options) -> Result<Vec<String>> {
    let matches = matcher::find_matches(text, options.require_scheme_or_www);
    debug!(count = matches.len(), "raw URL matches found");

    let mut set = CandidateSet::new();

    if options.normalize {
        for m in &matches {
            match canonical::canonicalize(m.text, &options.normalize_options) {
                Ok(canonical) => {
                    set.insert(canonical);
                }
                Err(error) => {
                    trace!(candidate = m.text, %error, "dropping malformed candidate");
                }
            }

            if options.extract_from_query_string {
                for value in query::find_urls_in_query(m.text) {
                    match canonical::canonicalize(&value, &options.normalize_options) {
                        Ok(canonical) => {
                            set.insert(canonical);
                        }
                        Err(error) => {
                            trace!(candidate = %value, %error, "dropping malformed candidate");
                        }
                    }
                }
            }
        }
    } else {
        for m in &matches {
            set.insert(canonical::trim_raw(m.text).to_string());

            if options.extract_from_query_string {
                for value in query::find_urls_in_query(m.text) {
                    set.insert(canonical::trim_raw(&value).to_string());
                }
            }
        }
    }

    debug!(count = set.len(), "deduplicated candidates");

    if options.exclude.is_empty() {
        Ok(set.into_vec())
    } else {
        filter::apply_exclusions(set.into_vec(), &options.exclude)
    }
}
