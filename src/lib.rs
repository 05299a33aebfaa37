//! # isatab-cleaner
//!
//! A library and CLI tool for stripping designated metadata fields from
//! ISA-Tab zip archives.
//!
//! ISA-Tab archives bundle an investigation record (`i_Investigation.txt`,
//! a tab-delimited key/value file) together with study and assay files.
//! This crate removes a fixed set of fields from the investigation record,
//! stamps a "last modified" notice on its header line, and re-emits the
//! archive with every other entry copied through unchanged.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use isatab_cleaner::{CleanOptions, OutputMode, Result, clean_archive};
//!
//! fn main() -> Result<()> {
//!     let options = CleanOptions::new("cleaned").mode(OutputMode::Zip);
//!     let result = clean_archive(Path::new("my_study.zip"), &options)?;
//!     println!(
//!         "Removed {} fields, copied {} entries to {}",
//!         result.fields_removed,
//!         result.entries_copied,
//!         result.output_path.display(),
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Batch Processing
//!
//! A directory of archives is processed one archive at a time, each fully
//! written before the next begins. A failing archive does not abort the
//! batch; failures are collected in [`BatchResult`]:
//!
//! ```rust,no_run
//! use std::path::Path;
//! use isatab_cleaner::{CleanOptions, clean_directory};
//!
//! # fn main() -> isatab_cleaner::Result<()> {
//! let options = CleanOptions::new("cleaned");
//! let batch = clean_directory(Path::new("studies"), &options)?;
//! for (path, error) in &batch.failed {
//!     eprintln!("{}: {}", path.display(), error);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`. The [`Error`] enum covers I/O failures,
//! invalid zip containers, a missing investigation entry, and records that
//! are not valid UTF-8. The core performs no local recovery; errors
//! propagate to the caller, and batch isolation happens only at the
//! [`clean_directory`] boundary.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod archive;
pub mod clean;
pub mod error;
pub mod investigation;

pub use error::{Error, Result};

// Re-export the investigation-record API at crate root for convenience
pub use investigation::{InvestigationRecord, REDACTED_FIELDS, redact, strip_cr};

// Re-export the archive API at crate root for convenience
pub use archive::{INVESTIGATION_ENTRY, OutputMode, RebuildResult, read_investigation, rebuild};

// Re-export the cleaning API at crate root for convenience
pub use clean::{
    BatchResult, CleanOptions, CleanResult, DEFAULT_OUTPUT_DIR, clean_archive, clean_directory,
};
