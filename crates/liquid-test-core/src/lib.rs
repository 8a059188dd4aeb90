#![warn(missing_docs)]
//! Liquid Test Core - Result-to-Source Mapping Engine
//!
//! # Overview
//!
//! `liquid-test-core` maps the assertion results of a remote liquid-test run
//! back to precise line ranges in the original YAML source, producing
//! editor-style diagnostics. It is headless: the surrounding driver owns the
//! editor surface, the remote execution, and all rendering; this crate only
//! turns `(document snapshot, run response)` into a diagnostic batch.
//!
//! # Core pieces
//!
//! - **Result classifier** ([`classify`]) - decides whether a failure is
//!   structural (`reconciled.*`) or field-level, and builds the normalized
//!   message plus the `key: "value"` locate pattern.
//! - **Source locator** ([`locate`]) - two-phase search: first inside the
//!   named test block, then across the whole document, so keys defined once
//!   via YAML anchors and reused through aliases are still found.
//! - **Response dispatcher** ([`dispatch`]) - branches on the run status and
//!   yields a [`DispatchOutcome`] that encodes the replace/clear/keep contract
//!   for the document's diagnostic set.
//!
//! # Quick Start
//!
//! ```rust
//! use liquid_test_core::{
//!     AssertionResult, DispatchOutcome, RunResponse, ScalarValue, SourceDocument, dispatch,
//! };
//!
//! let doc = SourceDocument::from_text("test_1:\n  expectation:\n    field: \"foo\"\n");
//! let response = RunResponse::Completed {
//!     results: vec![AssertionResult {
//!         test: "test_1".to_string(),
//!         result_path: "results.field".to_string(),
//!         got: ScalarValue::from("bar"),
//!         expected: ScalarValue::from("foo"),
//!         line_number: 1,
//!     }],
//! };
//!
//! let DispatchOutcome::Failures(diagnostics) = dispatch(&doc, &response) else {
//!     unreachable!();
//! };
//! assert_eq!(diagnostics[0].range.start.line, 2);
//! ```
//!
//! # Guarantees
//!
//! - Every produced range lies within the document; unlocatable failures land
//!   on a sentinel first-row range instead of an invalid one.
//! - A failing assertion is never dropped: localization misses fall back to
//!   the remote-reported line.
//! - Dispatch is pure and idempotent; nothing is retained between calls.

pub mod classify;
pub mod diagnostics;
pub mod dispatch;
pub mod document;
pub mod search;
pub mod value;

pub use classify::{
    AssertionResult, ClassifiedResult, RECONCILED_CATEGORY, RECONCILED_LABEL, classify,
};
pub use diagnostics::{
    DIAGNOSTIC_SOURCE, Diagnostic, DiagnosticRange, DiagnosticSeverity, FIRST_ROW_END_COLUMN,
    Position,
};
pub use dispatch::{
    DispatchOutcome, INTERNAL_ERROR_MESSAGE, MISSING_ERROR_MESSAGE, RunResponse,
    diagnostic_for_result, diagnostics_for_results, dispatch,
};
pub use document::SourceDocument;
pub use search::{SearchError, compile_literal, find_line, key_value_pattern, locate};
pub use value::ScalarValue;
