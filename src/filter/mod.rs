use regex::Regex;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::matcher::BoundedMatcher;

/// A pattern used to exclude candidates from the final result.
///
/// `Source` variants are compiled once per call; a precompiled regex can be
/// supplied directly to skip recompilation across calls.
#[derive(Debug, Clone)]
pub enum ExcludePattern {
    Source(String),
    Compiled(Regex),
}

impl ExcludePattern {
    fn compile(&self) -> Result<Regex> {
        match self {
            Self::Compiled(regex) => Ok(regex.clone()),
            Self::Source(source) => Regex::new(source).map_err(|err| {
                Error::InvalidPattern {
                    pattern: source.clone(),
                    source: err,
                }
            }),
        }
    }
}

impl From<&str> for ExcludePattern {
    fn from(source: &str) -> Self {
        Self::Source(source.to_string())
    }
}

impl From<String> for ExcludePattern {
    fn from(source: String) -> Self {
        Self::Source(source)
    }
}

impl From<Regex> for ExcludePattern {
    fn from(regex: Regex) -> Self {
        Self::Compiled(regex)
    }
}

/// Removes every candidate matching any of the given patterns.
///
/// Matching is substring-based: a pattern need not cover the whole
/// candidate to exclude it. Survivors keep their original relative order.
///
/// # Arguments
/// * `candidates` - Ordered, duplicate-free candidate URLs
/// * `patterns` - Exclusion patterns, applied independently
///
/// # Returns
/// * `Result<Vec<String>>` - Surviving candidates, or
///   `Error::InvalidPattern` if a source pattern fails to compile
pub fn apply_exclusions(
    candidates: Vec<String>,
    patterns: &[ExcludePattern],
) -> Result<Vec<String>> {
    let mut surviving = candidates;

    for pattern in patterns {
        let regex = pattern.compile()?;
        let matcher = BoundedMatcher::new(&regex);

        let before = surviving.len();
        surviving.retain(|candidate| {
            let excluded = matcher.is_match(candidate);
            if excluded {
                trace!(candidate = %candidate, pattern = regex.as_str(), "excluded");
            }
            !excluded
        });

        if surviving.len() != before {
            debug!(
                pattern = regex.as_str(),
                removed = before - surviving.len(),
                "exclusion pattern applied"
            );
        }
    }

    Ok(surviving)
}
