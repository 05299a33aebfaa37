//! Archive access and reconstruction.
//!
//! An ISA-Tab archive is a zip file containing exactly one distinguished
//! entry, the investigation record [`INVESTIGATION_ENTRY`]; every other
//! entry is opaque payload. This module reads the record out of an archive
//! and rebuilds the archive around a replacement record:
//!
//! 1. [`read_investigation`] extracts the record bytes.
//! 2. [`rebuild`] writes the output — either a sibling zip with every other
//!    entry copied verbatim ([`OutputMode::Zip`]), or an expanded directory
//!    tree ([`OutputMode::Directory`]).
//!
//! The original archive is opened read-only and never mutated.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{Error, Result};

mod rebuilder;

pub use rebuilder::rebuild;

/// Name of the distinguished investigation entry inside every archive.
///
/// This name is both read and written verbatim.
pub const INVESTIGATION_ENTRY: &str = "i_Investigation.txt";

/// How the rebuilt archive is emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Write a rebuilt zip file next to the other outputs.
    Zip,
    /// Expand the archive into a directory named after it.
    #[default]
    Directory,
}

/// Result of rebuilding an archive.
#[must_use = "rebuild result should be checked to verify where output was written"]
#[derive(Debug, Clone)]
pub struct RebuildResult {
    /// Number of entries copied through unchanged.
    pub entries_copied: usize,
    /// Path of the rebuilt archive file or expanded directory.
    pub output_path: PathBuf,
}

/// Reads the investigation record out of the archive at `path`.
///
/// The archive is opened read-only; only the distinguished entry is
/// decompressed. Fails with [`Error::EntryNotFound`] when the archive has
/// no [`INVESTIGATION_ENTRY`].
pub fn read_investigation(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;

    let mut entry = match archive.by_name(INVESTIGATION_ENTRY) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            return Err(Error::EntryNotFound {
                path: INVESTIGATION_ENTRY.to_owned(),
            });
        }
        Err(other) => return Err(other.into()),
    };

    let mut bytes = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut bytes)?;
    Ok(bytes)
}
