//! Property-based tests using proptest.
//!
//! These tests verify the sanitizer and redaction invariants of the
//! cleaning pipeline using randomly generated inputs.

use chrono::NaiveDate;
use proptest::prelude::*;

use isatab_cleaner::{InvestigationRecord, REDACTED_FIELDS, redact, strip_cr};

/// Strategy for generating record lines: a key with no separator
/// characters plus up to a few value tokens.
fn line_strategy() -> impl Strategy<Value = (String, Vec<String>)> {
    (
        "[A-Za-z][A-Za-z0-9 ]{0,15}",
        proptest::collection::vec("[a-z0-9;/.]{0,8}", 0..3),
    )
        .prop_filter("key must not collide with the fixed header", |(key, _)| {
            key != "Investigation"
        })
}

/// Builds record text: a fixed header line, then the generated lines, then
/// any injected designated fields.
fn build_record_text(lines: &[(String, Vec<String>)], injected: &[&str]) -> String {
    let mut text = String::from("Investigation\ti1");
    for (key, values) in lines {
        text.push('\n');
        text.push_str(key);
        for value in values {
            text.push('\t');
            text.push_str(value);
        }
    }
    for key in injected {
        text.push('\n');
        text.push_str(key);
        text.push_str("\tjunk");
    }
    text
}

proptest! {
    /// Tokens without a carriage return pass through unchanged.
    #[test]
    fn strip_cr_is_identity_without_cr(token in "[^\r]*") {
        prop_assert_eq!(strip_cr(&token), token.as_str());
    }

    /// Tokens are truncated at the first carriage return.
    #[test]
    fn strip_cr_truncates_at_first_cr(prefix in "[^\r]*", suffix in "[a-z\r]*") {
        let token = format!("{prefix}\r{suffix}");
        prop_assert_eq!(strip_cr(&token), prefix.as_str());
    }

    /// After redaction, none of the designated keys remain, however many
    /// were present in the input.
    #[test]
    fn designated_keys_never_survive_redaction(
        lines in proptest::collection::vec(line_strategy(), 0..8),
        injected in proptest::sample::subsequence(REDACTED_FIELDS.to_vec(), 0..=4),
    ) {
        let text = build_record_text(&lines, &injected);
        let mut record = InvestigationRecord::parse(text.as_bytes()).unwrap();

        let removed = redact(&mut record);
        prop_assert_eq!(removed, injected.len());
        for key in REDACTED_FIELDS {
            prop_assert!(!record.contains_key(key));
        }
    }

    /// Redaction is idempotent across a serialize/parse round trip: the
    /// re-parsed output redacts nothing further and keeps the same keys
    /// (the stamp only alters the header line's last value).
    #[test]
    fn redaction_reaches_a_fixed_point(
        lines in proptest::collection::vec(line_strategy(), 0..8),
        injected in proptest::sample::subsequence(REDACTED_FIELDS.to_vec(), 0..=4),
    ) {
        let text = build_record_text(&lines, &injected);
        let mut record = InvestigationRecord::parse(text.as_bytes()).unwrap();
        redact(&mut record);

        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bytes = record.to_bytes(date).unwrap();
        let mut reparsed = InvestigationRecord::parse(&bytes).unwrap();

        prop_assert_eq!(redact(&mut reparsed), 0);

        let keys: Vec<&str> = record.keys().collect();
        let reparsed_keys: Vec<&str> = reparsed.keys().collect();
        prop_assert_eq!(keys, reparsed_keys);
    }
}
