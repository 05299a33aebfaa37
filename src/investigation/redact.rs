//! Removal of the designated metadata fields.

use super::record::InvestigationRecord;

/// Field keys removed unconditionally from every investigation record.
///
/// These carry Scientific Data submission metadata that has no place in the
/// published archive. Absence of any of them is not an error.
pub const REDACTED_FIELDS: [&str; 4] = [
    "Comment[Subject Keywords]",
    "Comment[Supplementary Information File Name]",
    "Comment[Supplementary Information File Type]",
    "Comment[Supplementary Information File URL]",
];

/// Deletes every designated field from the record, if present.
///
/// Returns the number of fields actually removed. The operation is
/// idempotent: redacting an already-redacted record removes nothing, and
/// the order of the surviving fields is preserved. No other fields are
/// inspected or mutated.
pub fn redact(record: &mut InvestigationRecord) -> usize {
    let mut removed = 0;
    for key in REDACTED_FIELDS {
        if record.remove(key).is_some() {
            removed += 1;
        }
    }
    removed
}
