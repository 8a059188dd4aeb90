//! Tolerant decoding of the remote runner's JSON payload.
//!
//! The payload is loosely typed: optional members may be absent, `got` and
//! `expected` can be any JSON scalar, and result entries are best-effort.
//! Decoding is field-by-field over `serde_json::Value`; absence means "no
//! value", never zero or an empty string, and a sloppy result entry decodes
//! with placeholders rather than sinking the whole batch — a failing
//! assertion must never be dropped silently.

use liquid_test_core::{
    AssertionResult, DispatchOutcome, RunResponse, ScalarValue, SourceDocument, dispatch,
};
use serde_json::Value;
use tracing::{debug, warn};

/// Decode one `got`/`expected` member into its runtime kind.
///
/// Arrays and objects keep their serialized text under the `other` kind.
pub fn scalar_from_value(value: &Value) -> ScalarValue {
    match value {
        Value::Null => ScalarValue::Null,
        Value::Bool(b) => ScalarValue::Bool(*b),
        Value::Number(n) => n
            .as_f64()
            .map(ScalarValue::Number)
            .unwrap_or_else(|| ScalarValue::Other(n.to_string())),
        Value::String(s) => ScalarValue::Str(s.clone()),
        other => ScalarValue::Other(other.to_string()),
    }
}

fn assertion_from_value(value: &Value) -> AssertionResult {
    AssertionResult {
        test: value
            .get("test")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        result_path: value
            .get("result")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        got: value.get("got").map(scalar_from_value).unwrap_or(ScalarValue::Null),
        expected: value
            .get("expected")
            .map(scalar_from_value)
            .unwrap_or(ScalarValue::Null),
        line_number: value
            .get("line_number")
            .and_then(Value::as_u64)
            .unwrap_or(1) as usize,
    }
}

/// Decode a full run response payload.
///
/// Returns `None` when `status` is missing or unknown; every recognized
/// status decodes, with absent optional members mapped to `None`/empty.
pub fn run_response_from_json(payload: &Value) -> Option<RunResponse> {
    let status = payload.get("status").and_then(Value::as_str)?;
    let response = match status {
        "started" => RunResponse::Started,
        "completed" => {
            let results = payload
                .get("result")
                .and_then(Value::as_array)
                .map(|entries| entries.iter().map(assertion_from_value).collect())
                .unwrap_or_default();
            RunResponse::Completed { results }
        }
        "test_error" => RunResponse::TestError {
            error_line_number: payload
                .get("error_line_number")
                .and_then(Value::as_u64)
                .map(|n| n as usize),
            error_message: payload
                .get("error_message")
                .and_then(Value::as_str)
                .map(|s| s.to_string()),
        },
        "internal_error" => RunResponse::InternalError,
        unknown => {
            warn!(status = unknown, "unknown run status in payload");
            return None;
        }
    };
    debug!(status, "decoded run response");
    Some(response)
}

/// Decode a payload and dispatch it against `document` in one step.
///
/// `None` only when the payload itself is undecodable; every recognized
/// status yields an outcome.
pub fn dispatch_value(document: &SourceDocument, payload: &Value) -> Option<DispatchOutcome> {
    let response = run_response_from_json(payload)?;
    Some(dispatch(document, &response))
}
