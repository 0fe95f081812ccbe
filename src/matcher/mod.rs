use regex::Regex;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

pub mod patterns;

/// Wall-clock budget for a single scan or match test.
pub const MATCH_TIMEOUT: Duration = Duration::from_millis(500);

/// A raw URL-shaped substring found in the source text.
///
/// Produced only by the matcher and never mutated afterwards; downstream
/// stages (canonicalization, query extraction) work on copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch<'t> {
    /// The matched substring, borrowed from the source text.
    pub text: &'t str,
    /// Byte offset of the match in the source text.
    pub start: usize,
}

/// A regex wrapped with an explicit time budget.
///
/// The `regex` crate is a linear-time engine, so a single match attempt
/// cannot backtrack catastrophically; the budget caps cumulative work across
/// a scan of adversarially long input. When the deadline passes, the scan is
/// abandoned and whatever matched so far is kept. A timed-out attempt is
/// treated as "no match here", never as an error.
#[derive(Debug, Clone, Copy)]
pub struct BoundedMatcher<'r> {
    regex: &'r Regex,
    budget: Duration,
}

impl<'r> BoundedMatcher<'r> {
    /// Wraps a compiled regex with the default time budget.
    pub fn new(regex: &'r Regex) -> Self {
        Self {
            regex,
            budget: MATCH_TIMEOUT,
        }
    }

    /// Overrides the time budget.
    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }

    /// Scans `text` left to right, collecting non-overlapping matches in
    /// order of first occurrence.
    ///
    /// # Arguments
    /// * `text` - The text to scan
    ///
    /// # Returns
    /// * `Vec<RawMatch>` - Matches found before the budget ran out
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<RawMatch<'t>> {
        let deadline = Instant::now() + self.budget;
        let mut found = Vec::new();
        let mut at = 0;

        while at <= text.len() {
            if Instant::now() >= deadline {
                warn!(
                    scanned = at,
                    total = text.len(),
                    "match budget exhausted, abandoning scan"
                );
                break;
            }

            match self.regex.find_at(text, at) {
                Some(m) => {
                    trace!(start = m.start(), end = m.end(), "pattern matched");
                    found.push(RawMatch {
                        text: m.as_str(),
                        start: m.start(),
                    });
                    // Guard against zero-width matches pinning the scan.
                    at = if m.end() > at { m.end() } else { at + 1 };
                }
                None => break,
            }
        }

        found
    }

    /// Tests `value` against the wrapped pattern.
    ///
    /// A single attempt needs no deadline: the engine guarantees linear
    /// scan time, so the attempt itself is the bound. The budget only
    /// governs cumulative work across a scan in
    /// [`find_all`](Self::find_all).
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

/// Finds URL-shaped substrings in `text`.
///
/// When `strict` is true the pattern requires an explicit scheme or a `www.`
/// prefix; when false it additionally matches bare domains ending in a
/// recognized top-level domain.
pub fn find_matches(text: &str, strict: bool) -> Vec<RawMatch<'_>> {
    let regex = if strict {
        &*patterns::URL_STRICT
    } else {
        &*patterns::URL_LENIENT
    };

    debug!(strict, text_len = text.len(), "scanning text for URLs");
    BoundedMatcher::new(regex).find_all(text)
}
