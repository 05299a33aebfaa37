//! Investigation record parsing, redaction, and serialization.
//!
//! The investigation record is a tab-delimited text file: each line holds a
//! field key followed by zero or more value tokens. This module provides:
//!
//! - [`InvestigationRecord`], an ordered key/value-list mapping parsed from
//!   raw record bytes and serialized back with a modification stamp;
//! - [`redact`], which removes the fixed set of designated fields
//!   ([`REDACTED_FIELDS`]);
//! - [`strip_cr`], which cleans stray carriage returns out of tokens.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use isatab_cleaner::{InvestigationRecord, redact};
//!
//! # fn main() -> isatab_cleaner::Result<()> {
//! let raw = b"Investigation\ti1\nComment[Subject Keywords]\tmetabolomics\n";
//! let mut record = InvestigationRecord::parse(raw)?;
//!
//! let removed = redact(&mut record);
//! assert_eq!(removed, 1);
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let bytes = record.to_bytes(date)?;
//! assert_eq!(bytes, b"Investigation\ti1 - Last modified: 2024-01-01");
//! # Ok(())
//! # }
//! ```

mod record;
mod redact;
mod sanitize;

pub use record::InvestigationRecord;
pub use redact::{REDACTED_FIELDS, redact};
pub use sanitize::{strip_cr, strip_cr_seq};
