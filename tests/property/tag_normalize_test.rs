//! Property-based tests for tag normalization.
//!
//! Whatever the user types into the comma-separated tag field, the submitted
//! tags are trimmed, lowercase, non-empty, unique, and in first-seen order.

use bookmark_manager::types::bookmark::normalize_tags;
use proptest::prelude::*;

/// A tag as a user might type it: mixed case, padded with spaces.
fn arb_raw_tag() -> impl Strategy<Value = String> {
    ("[ ]{0,3}", "[a-zA-Z][a-zA-Z0-9-]{0,10}", "[ ]{0,3}")
        .prop_map(|(lead, tag, trail)| format!("{}{}{}", lead, tag, trail))
}

#[test]
fn normalizes_example_input() {
    assert_eq!(normalize_tags("Go, WEB "), vec!["go", "web"]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn normalized_tags_are_clean(raw in "[a-zA-Z ,]{0,40}") {
        let tags = normalize_tags(&raw);
        for tag in &tags {
            prop_assert!(!tag.is_empty());
            prop_assert_eq!(tag.trim(), tag.as_str());
            prop_assert_eq!(tag.to_lowercase(), tag.clone());
        }
        let mut sorted = tags.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), tags.len(), "tags must be unique: {:?}", tags);
    }

    #[test]
    fn distinct_tags_keep_their_order(raw_tags in proptest::collection::vec(arb_raw_tag(), 1..8)) {
        let joined = raw_tags.join(",");
        let mut expected: Vec<String> = Vec::new();
        for raw in &raw_tags {
            let tag = raw.trim().to_lowercase();
            if !expected.contains(&tag) {
                expected.push(tag);
            }
        }
        prop_assert_eq!(normalize_tags(&joined), expected);
    }
}
