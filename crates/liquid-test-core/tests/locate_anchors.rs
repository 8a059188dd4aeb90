//! Locator behavior on documents that use YAML anchors, aliases, and
//! repeated keys across test blocks.

use liquid_test_core::{SourceDocument, find_line, key_value_pattern, locate};

const ANCHORED: &str = "\
shared_context: &ctx
  period: \"2023-12-31\"
  currency: \"EUR\"
test_1:
  context: *ctx
  expectation:
    total: \"100\"
test_2:
  context: *ctx
  expectation:
    total: \"200\"
";

#[test]
fn anchor_definition_found_via_global_fallback() {
    // `currency` is only written once, in the anchor block above test_1; the
    // scoped search misses and the global pass must find the definition.
    let doc = SourceDocument::from_text(ANCHORED);
    let pattern = key_value_pattern("currency", "EUR").unwrap();
    assert_eq!(locate(&doc, "test_1", &pattern), Some(2));
}

#[test]
fn repeated_key_resolves_to_the_named_test() {
    let doc = SourceDocument::from_text(ANCHORED);
    let pattern_1 = key_value_pattern("total", "100").unwrap();
    let pattern_2 = key_value_pattern("total", "200").unwrap();
    assert_eq!(locate(&doc, "test_1", &pattern_1), Some(6));
    assert_eq!(locate(&doc, "test_2", &pattern_2), Some(10));
}

#[test]
fn scope_anchor_is_first_occurrence_of_identifier() {
    // "test_1" also appears as a substring of nothing else here; the scope
    // search must pick its first occurrence and scan forward from there.
    let doc = SourceDocument::from_text(ANCHORED);
    let id = liquid_test_core::compile_literal("test_2").unwrap();
    assert_eq!(find_line(&doc, &id, 0), Some(7));
}

#[test]
fn value_reused_in_earlier_test_prefers_scope() {
    // Same key and value in both tests: the match inside the named test wins
    // over the earlier, identical line.
    let text = "\
test_1:
  expectation:
    name: \"foo\"
test_2:
  expectation:
    name: \"foo\"
";
    let doc = SourceDocument::from_text(text);
    let pattern = key_value_pattern("name", "foo").unwrap();
    assert_eq!(locate(&doc, "test_2", &pattern), Some(5));
}

#[test]
fn missing_identifier_still_searches_globally() {
    let doc = SourceDocument::from_text(ANCHORED);
    let pattern = key_value_pattern("period", "2023-12-31").unwrap();
    assert_eq!(locate(&doc, "no_such_test", &pattern), Some(1));
}

#[test]
fn pattern_absent_everywhere_is_none() {
    let doc = SourceDocument::from_text(ANCHORED);
    let pattern = key_value_pattern("total", "999").unwrap();
    assert_eq!(locate(&doc, "test_1", &pattern), None);
}
