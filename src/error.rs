//! Error types for ISA-Tab cleaning operations.
//!
//! This module provides the [`Error`] enum which represents all possible
//! failure modes when cleaning an ISA-Tab archive, along with a convenient
//! [`Result<T>`] type alias.
//!
//! # Error Handling
//!
//! All fallible operations in this crate return `Result<T, Error>`. Use the
//! `?` operator to propagate, or match on specific variants:
//!
//! ```rust,no_run
//! use std::path::Path;
//! use isatab_cleaner::{CleanOptions, Error, clean_archive};
//!
//! fn clean_with_report(path: &Path) {
//!     match clean_archive(path, &CleanOptions::new("cleaned")) {
//!         Ok(result) => println!("Removed {} fields", result.fields_removed),
//!         Err(Error::EntryNotFound { path }) => {
//!             eprintln!("Not an ISA-Tab archive: no {} entry", path);
//!         }
//!         Err(Error::Io(e)) => eprintln!("File error: {}", e),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use std::io;

/// The main error type for ISA-Tab cleaning operations.
///
/// Errors fall into several categories:
///
/// | Category | Variants | Typical Cause |
/// |----------|----------|---------------|
/// | I/O | [`Io`][Self::Io] | File system operations |
/// | Container | [`Zip`][Self::Zip] | Invalid or truncated zip data |
/// | Contract | [`EntryNotFound`][Self::EntryNotFound], [`EmptyRecord`][Self::EmptyRecord] | Archive missing the investigation record |
/// | Encoding | [`InvalidEncoding`][Self::InvalidEncoding] | Record bytes are not UTF-8 |
/// | Security | [`PathTraversal`][Self::PathTraversal] | Entry name escapes the destination |
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred during file operations.
    ///
    /// This wraps [`std::io::Error`] and is returned when file operations
    /// fail. Common causes include file not found, permission denied, and
    /// disk full. Check the underlying [`std::io::ErrorKind`] for specific
    /// handling.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The zip container is invalid or could not be read.
    ///
    /// This occurs when the input file is not a zip archive, or when an
    /// entry's compressed data is truncated or corrupt.
    #[error("Invalid zip archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The distinguished investigation entry is absent from the archive.
    ///
    /// Every ISA-Tab archive must contain an entry named exactly
    /// `i_Investigation.txt` ([`crate::INVESTIGATION_ENTRY`]). An archive
    /// without one is not processable.
    #[error("Entry not found in archive: {path}")]
    EntryNotFound {
        /// The entry name that was expected.
        path: String,
    },

    /// The investigation record bytes are not valid UTF-8.
    #[error("Investigation record is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    /// The investigation record contains no lines.
    ///
    /// Serialization requires at least one line (normally the header
    /// comment) to carry the modification stamp.
    #[error("Investigation record contains no lines")]
    EmptyRecord,

    /// An archive entry name escapes the extraction directory.
    ///
    /// This is a security error: the archive contains a path designed to
    /// write outside the destination (e.g. `../../etc/passwd`). Directory
    /// mode refuses to extract such entries.
    #[error("Path traversal detected in entry: {path}")]
    PathTraversal {
        /// The entry name that contains traversal.
        path: String,
    },
}

/// A convenient `Result` type alias for ISA-Tab cleaning operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_entry_not_found_display() {
        let err = Error::EntryNotFound {
            path: "i_Investigation.txt".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Entry not found in archive: i_Investigation.txt"
        );
    }

    #[test]
    fn test_empty_record_display() {
        assert_eq!(
            Error::EmptyRecord.to_string(),
            "Investigation record contains no lines"
        );
    }
}
