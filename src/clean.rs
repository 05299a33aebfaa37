//! High-level cleaning pipeline: read, redact, stamp, rebuild.
//!
//! [`clean_archive`] runs the full pipeline for one archive;
//! [`clean_directory`] runs it across a flat directory of archives, one
//! archive at a time, isolating per-archive failures in a [`BatchResult`].

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::archive::{self, OutputMode};
use crate::error::{Error, Result};
use crate::investigation::{InvestigationRecord, redact};

/// Default destination directory for cleaned output.
pub const DEFAULT_OUTPUT_DIR: &str = "isatab_cleaner_output";

/// Options controlling where and how cleaned archives are written.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use isatab_cleaner::{CleanOptions, OutputMode};
///
/// let options = CleanOptions::new("cleaned")
///     .mode(OutputMode::Zip)
///     .stamp_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct CleanOptions {
    output_dir: PathBuf,
    mode: OutputMode,
    stamp_date: Option<NaiveDate>,
}

impl CleanOptions {
    /// Creates options writing into the given output directory, in
    /// directory mode, stamping with the current date.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            mode: OutputMode::default(),
            stamp_date: None,
        }
    }

    /// Sets the output mode.
    pub fn mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Pins the modification-stamp date instead of using today's.
    ///
    /// Serialization is deterministic once the date is pinned; tests rely
    /// on this.
    pub fn stamp_date(mut self, date: NaiveDate) -> Self {
        self.stamp_date = Some(date);
        self
    }

    /// Returns the destination directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn effective_date(&self) -> NaiveDate {
        self.stamp_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

/// Result of cleaning a single archive.
#[must_use = "clean result should be checked to verify what was removed and written"]
#[derive(Debug, Clone)]
pub struct CleanResult {
    /// Number of designated fields that were present and removed.
    pub fields_removed: usize,
    /// Number of archive entries copied through unchanged.
    pub entries_copied: usize,
    /// Path of the rebuilt archive file or expanded directory.
    pub output_path: PathBuf,
}

/// Result of cleaning a directory of archives.
#[must_use = "batch result should be checked for per-archive failures"]
#[derive(Debug, Default)]
pub struct BatchResult {
    /// Archives cleaned successfully, with their per-archive results.
    pub cleaned: Vec<(PathBuf, CleanResult)>,
    /// Archives that failed, with the error that stopped each one.
    pub failed: Vec<(PathBuf, Error)>,
}

impl BatchResult {
    /// Returns true if every archive in the batch was cleaned.
    pub fn is_ok(&self) -> bool {
        self.failed.is_empty()
    }

    /// Returns the total number of archives processed.
    pub fn total(&self) -> usize {
        self.cleaned.len() + self.failed.len()
    }
}

/// Cleans a single ISA-Tab archive.
///
/// Reads the investigation record out of the archive, removes the
/// designated fields, appends the modification stamp, and rebuilds the
/// output per the options. The original archive is never mutated.
pub fn clean_archive(archive_path: &Path, options: &CleanOptions) -> Result<CleanResult> {
    let raw = archive::read_investigation(archive_path)?;
    let mut record = InvestigationRecord::parse(&raw)?;
    let fields_removed = redact(&mut record);
    let cleaned = record.to_bytes(options.effective_date())?;

    let rebuilt = archive::rebuild(archive_path, &options.output_dir, &cleaned, options.mode)?;
    log::debug!(
        "cleaned {}: {} fields removed, {} entries copied",
        archive_path.display(),
        fields_removed,
        rebuilt.entries_copied,
    );

    Ok(CleanResult {
        fields_removed,
        entries_copied: rebuilt.entries_copied,
        output_path: rebuilt.output_path,
    })
}

/// Cleans every archive file directly inside `dir`.
///
/// Iteration is flat (no recursion) and each archive is fully processed,
/// output included, before the next begins. A failing archive is recorded
/// in [`BatchResult::failed`] and the batch continues; only a failure to
/// list the directory itself aborts the call.
pub fn clean_directory(dir: &Path, options: &CleanOptions) -> Result<BatchResult> {
    let mut archives = Vec::new();
    for dir_entry in fs::read_dir(dir)? {
        let path = dir_entry?.path();
        if path.is_file() {
            archives.push(path);
        } else {
            log::debug!("skipping non-file entry {}", path.display());
        }
    }
    archives.sort();

    let mut result = BatchResult::default();
    for path in archives {
        match clean_archive(&path, options) {
            Ok(cleaned) => result.cleaned.push((path, cleaned)),
            Err(error) => {
                log::warn!("failed to clean {}: {}", path.display(), error);
                result.failed.push((path, error));
            }
        }
    }
    Ok(result)
}
