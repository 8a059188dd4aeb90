//! Response dispatch: run status in, diagnostic batch out.
//!
//! One call per completed remote run. The outcome type encodes the
//! replacement contract: `Failures` and `AllPassed` fully replace or clear the
//! document's diagnostic set, `Infrastructure` is rendered *without* touching
//! the previous set (the run never completed, so old findings still stand),
//! and `Pending` asks for nothing.

use crate::classify::{AssertionResult, classify};
use crate::diagnostics::{Diagnostic, DiagnosticRange};
use crate::document::SourceDocument;
use crate::search::locate;

/// Placeholder message when `test_error` arrives without one.
pub const MISSING_ERROR_MESSAGE: &str = "Error message not provided";

/// Fixed message for infrastructure failures.
pub const INTERNAL_ERROR_MESSAGE: &str =
    "Internal error. Try to run the test again. If the issue persists, contact support";

/// A remote run response, decoded from the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum RunResponse {
    /// The run was accepted and is still executing.
    Started,
    /// The run finished; an empty result list means every assertion passed.
    Completed {
        /// Per-assertion failures, in the order the runner reported them.
        results: Vec<AssertionResult>,
    },
    /// A failure prevented any assertion from executing (e.g. malformed YAML).
    TestError {
        /// 1-based line the runner blames, when it knows one.
        error_line_number: Option<usize>,
        /// Human-readable description, when provided.
        error_message: Option<String>,
    },
    /// The run infrastructure itself failed; no code location is at fault.
    InternalError,
}

/// What the driver should do with the document's diagnostic set.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// `started`: transient, no diagnostics action.
    Pending,
    /// Run succeeded with no failures: clear the set and report success.
    AllPassed,
    /// Replace the set with exactly these diagnostics.
    Failures(Vec<Diagnostic>),
    /// Infrastructure failure: show this diagnostic but keep the prior set.
    Infrastructure(Diagnostic),
}

/// Highlight range for a chosen line: first non-whitespace column through one
/// past the last character.
fn line_range(document: &SourceDocument, line: usize) -> DiagnosticRange {
    match (
        document.first_non_whitespace(line),
        document.line_char_count(line),
    ) {
        (Some(start), Some(chars)) => DiagnosticRange::on_line(line, start, chars + 1),
        _ => DiagnosticRange::first_row(),
    }
}

/// Build the diagnostic for one failing assertion.
///
/// Field-level failures are located with the two-phase scoped/global search;
/// structural failures and localization misses land on the remote-reported
/// line. A line outside the document degrades to the first-row sentinel.
pub fn diagnostic_for_result(document: &SourceDocument, result: &AssertionResult) -> Diagnostic {
    let classified = classify(result);

    let line = classified
        .locate_pattern
        .as_ref()
        .and_then(|pattern| locate(document, &result.test, pattern))
        .unwrap_or(classified.fallback_line);

    let range = if document.contains_line(line) {
        line_range(document, line)
    } else {
        DiagnosticRange::first_row()
    };

    Diagnostic::error(range, classified.message).with_code(result.test.clone())
}

/// Map every failing assertion to a diagnostic, preserving input order.
pub fn diagnostics_for_results(
    document: &SourceDocument,
    results: &[AssertionResult],
) -> Vec<Diagnostic> {
    results
        .iter()
        .map(|result| diagnostic_for_result(document, result))
        .collect()
}

fn test_error_diagnostic(
    document: &SourceDocument,
    error_line_number: Option<usize>,
    error_message: Option<&str>,
) -> Diagnostic {
    let range = error_line_number
        .map(|n| n.saturating_sub(1))
        .filter(|line| document.contains_line(*line))
        .map(|line| line_range(document, line))
        .unwrap_or_else(DiagnosticRange::first_row);

    Diagnostic::error(range, error_message.unwrap_or(MISSING_ERROR_MESSAGE))
}

/// Turn one run response into a diagnostics action.
///
/// Pure and stateless: the same document snapshot and response always produce
/// the same outcome, and nothing is retained between calls.
pub fn dispatch(document: &SourceDocument, response: &RunResponse) -> DispatchOutcome {
    match response {
        RunResponse::Started => DispatchOutcome::Pending,
        RunResponse::Completed { results } => {
            if results.is_empty() {
                DispatchOutcome::AllPassed
            } else {
                DispatchOutcome::Failures(diagnostics_for_results(document, results))
            }
        }
        RunResponse::TestError {
            error_line_number,
            error_message,
        } => DispatchOutcome::Failures(vec![test_error_diagnostic(
            document,
            *error_line_number,
            error_message.as_deref(),
        )]),
        RunResponse::InternalError => DispatchOutcome::Infrastructure(Diagnostic::error(
            DiagnosticRange::first_row(),
            INTERNAL_ERROR_MESSAGE,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ScalarValue;

    #[test]
    fn test_line_range_shape() {
        let doc = SourceDocument::from_text("test_1:\n    period: \"2023\"");
        let range = line_range(&doc, 1);
        assert_eq!(range.start.line, 1);
        assert_eq!(range.start.column, 4);
        assert_eq!(range.end.column, "    period: \"2023\"".chars().count() + 1);
    }

    #[test]
    fn test_out_of_bounds_fallback_uses_sentinel() {
        let doc = SourceDocument::from_text("only line");
        let result = AssertionResult {
            test: "test_1".to_string(),
            result_path: "reconciled".to_string(),
            got: ScalarValue::from(1_i64),
            expected: ScalarValue::from(2_i64),
            line_number: 40,
        };
        let diag = diagnostic_for_result(&doc, &result);
        assert_eq!(diag.range, DiagnosticRange::first_row());
    }
}
