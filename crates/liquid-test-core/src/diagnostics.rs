//! Diagnostics data model.
//!
//! Output unit of the engine. The editing surface sets a batch of these as the
//! complete diagnostic set for one document; batches replace, they never merge,
//! so a clean rerun cannot leave stale markers behind.

/// Value of the `source` field on every diagnostic this engine produces.
pub const DIAGNOSTIC_SOURCE: &str = "Liquid Test";

/// End column of the sentinel first-row range.
///
/// Wide enough to cover any realistic first line; editors clamp ranges that
/// run past the end of a line.
pub const FIRST_ROW_END_COLUMN: usize = 500;

/// A (line, column) position. Lines are 0-based, columns are character
/// offsets within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 0-based line index.
    pub line: usize,
    /// Character column within the line.
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A half-open range (`start..end`) in line/column coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticRange {
    /// Range start (inclusive).
    pub start: Position,
    /// Range end (exclusive).
    pub end: Position,
}

impl DiagnosticRange {
    /// Create a new diagnostic range.
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Range covering columns `start_column..end_column` of a single line.
    pub fn on_line(line: usize, start_column: usize, end_column: usize) -> Self {
        Self {
            start: Position::new(line, start_column),
            end: Position::new(line, end_column),
        }
    }

    /// Sentinel range pinned to the first line of the document.
    ///
    /// Used whenever no real location can be determined.
    pub fn first_row() -> Self {
        Self::on_line(0, 0, FIRST_ROW_END_COLUMN)
    }
}

/// Diagnostic severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    /// Error diagnostics.
    Error,
    /// Warning diagnostics.
    Warning,
    /// Informational diagnostics.
    Information,
    /// Hint diagnostics.
    Hint,
}

/// A single diagnostic item for the current document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Highlighted range.
    pub range: DiagnosticRange,
    /// Severity; this engine only ever emits [`DiagnosticSeverity::Error`].
    pub severity: DiagnosticSeverity,
    /// Optional diagnostic code (the failing test's identifier, when known).
    pub code: Option<String>,
    /// Diagnostic source shown next to the message.
    pub source: Option<String>,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Create an error diagnostic with the engine's `source` tag.
    pub fn error(range: DiagnosticRange, message: impl Into<String>) -> Self {
        Self {
            range,
            severity: DiagnosticSeverity::Error,
            code: None,
            source: Some(DIAGNOSTIC_SOURCE.to_string()),
            message: message.into(),
        }
    }

    /// Attach a diagnostic code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_row_sentinel() {
        let range = DiagnosticRange::first_row();
        assert_eq!(range.start, Position::new(0, 0));
        assert_eq!(range.end, Position::new(0, FIRST_ROW_END_COLUMN));
    }

    #[test]
    fn test_error_constructor() {
        let diag = Diagnostic::error(DiagnosticRange::on_line(3, 2, 10), "boom").with_code("test_1");
        assert_eq!(diag.severity, DiagnosticSeverity::Error);
        assert_eq!(diag.source.as_deref(), Some(DIAGNOSTIC_SOURCE));
        assert_eq!(diag.code.as_deref(), Some("test_1"));
        assert_eq!(diag.range.start.line, 3);
    }
}
