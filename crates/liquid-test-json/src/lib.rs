#![warn(missing_docs)]
//! `liquid-test-json` - JSON payload decoding for `liquid-test-core`.
//!
//! The remote liquid-test runner replies with a loosely-typed JSON payload
//! (`{status, result[] | error_line_number, error_message}`). This crate
//! decodes that payload into the typed [`liquid_test_core::RunResponse`]
//! model and offers a one-call decode-and-dispatch helper for drivers that
//! hold the raw `serde_json::Value`.

pub mod payload;

pub use payload::{dispatch_value, run_response_from_json, scalar_from_value};
