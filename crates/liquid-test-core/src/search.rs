//! Line-oriented pattern search and the two-phase source locator.
//!
//! The locator answers one question: given a test block identifier and a
//! `key: "value"`-shaped pattern, which line of the YAML source should be
//! blamed? YAML anchors and aliases mean the authoritative `key: value` pair
//! may be written once, earlier in the file, and only referenced inside the
//! failing test block, while the same key name may also appear in unrelated
//! test blocks. The two-phase order below (scoped first, then global) is the
//! disambiguation policy for that: a match inside the named test always wins,
//! and only a scope miss widens the search to the whole document.

use crate::document::SourceDocument;
use regex::Regex;

/// Search errors.
#[derive(Debug)]
pub enum SearchError {
    /// The provided regex pattern failed to compile.
    InvalidRegex(regex::Error),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRegex(err) => write!(f, "Invalid regex: {}", err),
        }
    }
}

impl std::error::Error for SearchError {}

/// Compile `text` into a regex that matches it literally.
pub fn compile_literal(text: &str) -> Result<Regex, SearchError> {
    Regex::new(&regex::escape(text)).map_err(SearchError::InvalidRegex)
}

/// Build the pattern that locates a failing field in source: `key: "value"`
/// with either quote style.
///
/// Both the key and the rendered expected value are escaped, so the pattern
/// matches their literal text regardless of what characters they contain.
pub fn key_value_pattern(key: &str, expected: &str) -> Option<Regex> {
    let pattern = format!(
        "{}: (\"|'){}(\"|')",
        regex::escape(key),
        regex::escape(expected)
    );
    // Both parts are escaped; compilation cannot fail on hostile input.
    Regex::new(&pattern).ok()
}

/// Find the first line at or after `from_line` whose text matches `pattern`.
///
/// Scans every remaining line of the document, including the last. Returns
/// `None` when nothing matches.
pub fn find_line(document: &SourceDocument, pattern: &Regex, from_line: usize) -> Option<usize> {
    let line_count = document.line_count();
    for line in from_line..line_count {
        let text = document.line_text(line)?;
        if pattern.is_match(&text) {
            return Some(line);
        }
    }
    None
}

/// Locate the best line for `pattern`, scoped to the test block named by
/// `test_identifier` first, then the whole document.
///
/// 1. Find the first line matching `test_identifier` (literally); this marks
///    where the named test block begins.
/// 2. Scan forward from there for the first line matching `pattern`.
/// 3. On a scope miss (identifier absent, or no match inside the block's
///    remainder), rescan the entire document from line 0.
///
/// Only the first match of each phase is considered; `None` means the pattern
/// appears nowhere and the caller must fall back to the remote-reported line.
pub fn locate(
    document: &SourceDocument,
    test_identifier: &str,
    pattern: &Regex,
) -> Option<usize> {
    if let Ok(identifier) = compile_literal(test_identifier) {
        if let Some(test_start) = find_line(document, &identifier, 0) {
            if let Some(found) = find_line(document, pattern, test_start) {
                return Some(found);
            }
        }
    }
    find_line(document, pattern, 0)
}
