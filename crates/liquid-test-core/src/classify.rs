//! Assertion result classification.
//!
//! Each raw result record names a dotted path like `reconciled` or
//! `results.field_name`. The first segment is the category; whatever follows
//! is a field-access chain. A `reconciled` failure is structural (the whole
//! test's reconciliation came out wrong) and needs no field search; anything
//! else points at one key/value pair that the locator should try to find in
//! source.

use crate::search::key_value_pattern;
use crate::value::ScalarValue;
use regex::Regex;

/// Category of result paths that represent the overall reconciliation status.
pub const RECONCILED_CATEGORY: &str = "reconciled";

/// Label used in messages when no field path is present.
pub const RECONCILED_LABEL: &str = "Reconciled status";

/// One assertion outcome reported by the remote test run.
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionResult {
    /// Identifier of the test block this assertion belongs to.
    pub test: String,
    /// Dotted result path; first segment is the category.
    pub result_path: String,
    /// Value the run actually produced.
    pub got: ScalarValue,
    /// Value the test expected.
    pub expected: ScalarValue,
    /// 1-based line number reported by the remote side. Best effort only.
    pub line_number: usize,
}

/// Classifier output: what to say, where to look, where to land if the
/// search comes up empty.
#[derive(Debug)]
pub struct ClassifiedResult {
    /// Normalized diagnostic message.
    pub message: String,
    /// Pattern for the source locator; `None` for structural failures.
    pub locate_pattern: Option<Regex>,
    /// 0-based fallback line derived from the remote-reported line number.
    pub fallback_line: usize,
}

/// Classify one assertion result.
///
/// Structural failures (`reconciled`, or a path with no field segments) get no
/// locate pattern; field-level mismatches get a `key: "expected"` pattern
/// built from the last path segment and the rendered expected value.
pub fn classify(result: &AssertionResult) -> ClassifiedResult {
    let mut segments = result.result_path.split('.');
    let category = segments.next().unwrap_or_default();
    let field_path: Vec<&str> = segments.collect();

    let label = if field_path.is_empty() {
        RECONCILED_LABEL.to_string()
    } else {
        field_path.join(".")
    };

    let message = format!(
        "[{}] Expected: {} ({}) | Got: {} ({})",
        label,
        result.expected,
        result.expected.kind(),
        result.got,
        result.got.kind()
    );

    let locate_pattern = if category == RECONCILED_CATEGORY || field_path.is_empty() {
        None
    } else {
        // Last segment is the YAML key the expected value was written under.
        field_path
            .last()
            .and_then(|key| key_value_pattern(key, &result.expected.to_string()))
    };

    ClassifiedResult {
        message,
        locate_pattern,
        fallback_line: result.line_number.saturating_sub(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assertion(path: &str, expected: ScalarValue, got: ScalarValue) -> AssertionResult {
        AssertionResult {
            test: "test_1".to_string(),
            result_path: path.to_string(),
            got,
            expected,
            line_number: 12,
        }
    }

    #[test]
    fn test_reconciled_is_structural() {
        let classified = classify(&assertion(
            "reconciled",
            ScalarValue::from(90_i64),
            ScalarValue::from(100_i64),
        ));
        assert_eq!(
            classified.message,
            "[Reconciled status] Expected: 90 (number) | Got: 100 (number)"
        );
        assert!(classified.locate_pattern.is_none());
        assert_eq!(classified.fallback_line, 11);
    }

    #[test]
    fn test_field_mismatch_builds_pattern() {
        let classified = classify(&assertion(
            "results.field_name",
            ScalarValue::from("foo"),
            ScalarValue::from("bar"),
        ));
        assert_eq!(
            classified.message,
            "[field_name] Expected: foo (string) | Got: bar (string)"
        );
        let pattern = classified.locate_pattern.expect("field pattern");
        assert!(pattern.is_match("  field_name: \"foo\""));
        assert!(pattern.is_match("  field_name: 'foo'"));
    }

    #[test]
    fn test_nested_path_uses_last_segment_and_full_label() {
        let classified = classify(&assertion(
            "results.company.name",
            ScalarValue::from("ACME"),
            ScalarValue::from("Acme"),
        ));
        assert!(classified.message.starts_with("[company.name] "));
        let pattern = classified.locate_pattern.expect("field pattern");
        assert!(pattern.is_match("name: \"ACME\""));
        assert!(!pattern.is_match("company: \"ACME\""));
    }

    #[test]
    fn test_mixed_kinds_render_both() {
        let classified = classify(&assertion(
            "results.amount",
            ScalarValue::from("100"),
            ScalarValue::from(100_i64),
        ));
        assert_eq!(
            classified.message,
            "[amount] Expected: 100 (string) | Got: 100 (number)"
        );
    }

    #[test]
    fn test_category_without_fields_is_structural() {
        let classified = classify(&assertion(
            "results",
            ScalarValue::Null,
            ScalarValue::from(false),
        ));
        assert!(classified.locate_pattern.is_none());
        assert!(classified.message.starts_with("[Reconciled status] "));
        assert_eq!(
            classified.message,
            "[Reconciled status] Expected: null (null) | Got: false (boolean)"
        );
    }

    #[test]
    fn test_line_number_zero_saturates() {
        let mut result = assertion("reconciled", ScalarValue::Null, ScalarValue::Null);
        result.line_number = 0;
        assert_eq!(classify(&result).fallback_line, 0);
    }
}
