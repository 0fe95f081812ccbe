//! Extract URL-like substrings from free-form text.
//!
//! The pipeline runs four stages: regex-based discovery with a wall-clock
//! budget, canonicalization, optional recovery of URLs nested inside
//! query-string values, and exclusion filtering. Results are
//! duplicate-free and ordered by first occurrence. There is no network
//! I/O and no shared state between calls.
//!
//! ```
//! use url_extractor::{get_urls, Options};
//!
//! let urls = get_urls(
//!     "Docs moved to https://example.com/guide. Mirror: www.mirror.org/guide",
//!     &Options::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     urls,
//!     vec!["https://example.com/guide", "http://mirror.org/guide"]
//! );
//! ```

pub mod canonical;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod options;
pub mod pipeline;
pub mod query;

pub use error::{Error, Result};
pub use filter::ExcludePattern;
pub use matcher::RawMatch;
pub use options::{NormalizeOptions, Options};
pub use pipeline::get_urls;
