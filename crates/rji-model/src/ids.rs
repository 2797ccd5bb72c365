//! Identifier helpers used to join participants with companions.

use std::collections::BTreeSet;

/// Canonical form of a human-entered national ID.
///
/// Every whitespace character is removed, including internal ones, so
/// `"101 202"` and `"101202"` compare equal. Case and punctuation are kept.
pub fn normalize_identifier(value: &str) -> String {
    value.chars().filter(|ch| !ch.is_whitespace()).collect()
}

/// Extracts the set of identifiers from a free-text list.
///
/// Tokens are separated by any run of `,`, `;` or newline. Each token is
/// trimmed and its internal spaces removed; empty tokens are dropped.
pub fn parse_identifier_list(text: &str) -> BTreeSet<String> {
    text.split([',', ';', '\n'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.replace(' ', ""))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_internal_whitespace() {
        assert_eq!(normalize_identifier(" 101 202\t"), "101202");
        assert_eq!(normalize_identifier(""), "");
    }

    #[test]
    fn keeps_case_and_punctuation() {
        assert_eq!(normalize_identifier("ab-12.C"), "ab-12.C");
    }

    #[test]
    fn delimiter_runs_do_not_yield_empty_tokens() {
        let parsed = parse_identifier_list(",,;\n 12 3 ;;\r\n456,");
        assert_eq!(
            parsed,
            BTreeSet::from(["123".to_string(), "456".to_string()])
        );
    }
}
