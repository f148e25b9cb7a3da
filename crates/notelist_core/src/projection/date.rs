//! Date extraction from link targets.

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII classes on purpose: `\d` in `regex` also matches non-ASCII digits.
static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("valid iso date regex"));

/// Returns the first `YYYY-MM-DD` substring of `href`.
///
/// The match is returned verbatim; `2024-13-40` is a match even though it is
/// not a calendar date.
pub fn extract_date(href: &str) -> Option<String> {
    ISO_DATE_RE
        .find(href)
        .map(|found| found.as_str().to_string())
}
