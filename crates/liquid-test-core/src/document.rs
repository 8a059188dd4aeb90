//! Line-addressable source snapshot.
//!
//! The engine never edits the test file; it only needs to answer line-oriented
//! queries against a stable copy of its text. `SourceDocument` wraps a Rope for
//! O(log n) line access and exposes exactly the read surface the locator and
//! dispatcher need: line count, per-line text, and the column of the first
//! non-whitespace character.

use ropey::Rope;

/// Immutable snapshot of a YAML liquid-test file.
///
/// Owned by the editing surface; the engine treats it as frozen for the
/// duration of one dispatch. All line indices are 0-based, all columns are
/// character offsets within the line.
pub struct SourceDocument {
    rope: Rope,
}

impl SourceDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build a snapshot from the full document text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Total line count.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Index of the last line.
    pub fn last_line(&self) -> usize {
        self.rope.len_lines().saturating_sub(1)
    }

    /// Returns `true` if `line` is a valid line index.
    pub fn contains_line(&self, line: usize) -> bool {
        line < self.rope.len_lines()
    }

    /// Get the text of the specified line, without its line terminator.
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line).to_string();

        // Rope's line() keeps the terminator.
        if text.ends_with('\n') {
            text.pop();
        }
        if text.ends_with('\r') {
            text.pop();
        }

        Some(text)
    }

    /// Character count of the specified line, excluding the line terminator.
    pub fn line_char_count(&self, line: usize) -> Option<usize> {
        self.line_text(line).map(|text| text.chars().count())
    }

    /// Column of the first non-whitespace character on the specified line.
    ///
    /// A blank or whitespace-only line reports its own length, the same column
    /// an editor would place the caret at when indenting.
    pub fn first_non_whitespace(&self, line: usize) -> Option<usize> {
        let text = self.line_text(line)?;
        let column = text
            .chars()
            .position(|ch| !ch.is_whitespace())
            .unwrap_or_else(|| text.chars().count());
        Some(column)
    }
}

impl Default for SourceDocument {
    fn default() -> Self {
        Self::new()
    }
}
