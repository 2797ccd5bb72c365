//! Property tests for identifier normalization and list parsing.

use std::collections::BTreeSet;

use proptest::prelude::*;

use rji_model::{normalize_identifier, parse_identifier_list};

#[test]
fn parses_mixed_delimiters() {
    let parsed = parse_identifier_list("101202, 303404;505606\n707808");
    let expected: BTreeSet<String> = ["101202", "303404", "505606", "707808"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(parsed, expected);
}

#[test]
fn duplicates_collapse() {
    let parsed = parse_identifier_list("123, 1 23;123");
    assert_eq!(parsed.len(), 1);
    assert!(parsed.contains("123"));
}

#[test]
fn empty_text_yields_empty_set() {
    assert!(parse_identifier_list("").is_empty());
    assert!(parse_identifier_list(" ,; \n ").is_empty());
}

proptest! {
    #[test]
    fn internal_spaces_never_affect_normalization(s in "[0-9a-z \\t]{0,24}") {
        prop_assert_eq!(normalize_identifier(&s), normalize_identifier(&s.replace(' ', "")));
    }

    #[test]
    fn normalized_identifiers_have_no_whitespace(s in "\\PC{0,32}") {
        prop_assert!(!normalize_identifier(&s).chars().any(char::is_whitespace));
    }

    #[test]
    fn parsed_tokens_are_non_empty_and_space_free(s in "[0-9 ,;\\n]{0,40}") {
        for token in parse_identifier_list(&s) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains(' '));
        }
    }
}
