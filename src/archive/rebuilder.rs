//! Reconstruction of an archive around a replacement investigation record.

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::error::{Error, Result};

use super::{INVESTIGATION_ENTRY, OutputMode, RebuildResult};

/// Rebuilds the archive at `archive_path` with `record` substituted for the
/// investigation entry.
///
/// The output directory is created if it does not yet exist. In
/// [`OutputMode::Zip`] the output is a zip file of the same name as the
/// input, staged in a temporary file and renamed into place so a partial
/// write never lands under the final name. In [`OutputMode::Directory`] the
/// output is a directory named after the archive with its extension suffix
/// stripped; a pre-existing destination directory is reused, and partial
/// output is left on disk if a write fails.
///
/// Every entry except [`INVESTIGATION_ENTRY`] is carried over: zip mode
/// copies the raw compressed bytes and metadata verbatim, directory mode
/// decompresses each entry to a same-named file. No entry is read twice.
pub fn rebuild(
    archive_path: &Path,
    out_dir: &Path,
    record: &[u8],
    mode: OutputMode,
) -> Result<RebuildResult> {
    fs::create_dir_all(out_dir)?;
    match mode {
        OutputMode::Zip => rebuild_zip(archive_path, out_dir, record),
        OutputMode::Directory => rebuild_directory(archive_path, out_dir, record),
    }
}

/// Copies all non-investigation entries raw into a staged zip, appends the
/// new record, then renames the staged file over the final output name.
fn rebuild_zip(archive_path: &Path, out_dir: &Path, record: &[u8]) -> Result<RebuildResult> {
    let source = File::open(archive_path)?;
    let mut archive = ZipArchive::new(BufReader::new(source))?;

    let mut staged = NamedTempFile::new_in(out_dir)?;
    let mut writer = ZipWriter::new(staged.as_file_mut());

    let mut entries_copied = 0;
    for index in 0..archive.len() {
        let entry = archive.by_index_raw(index)?;
        if entry.name() == INVESTIGATION_ENTRY {
            continue;
        }
        writer.raw_copy_file(entry)?;
        entries_copied += 1;
    }

    writer.start_file(INVESTIGATION_ENTRY, SimpleFileOptions::default())?;
    writer.write_all(record)?;
    writer.finish()?;

    let output_path = out_dir.join(file_name_of(archive_path)?);
    if output_path.exists() {
        fs::remove_file(&output_path)?;
    }
    staged.persist(&output_path).map_err(|e| Error::Io(e.error))?;

    Ok(RebuildResult {
        entries_copied,
        output_path,
    })
}

/// Expands all non-investigation entries into a stem-named directory and
/// writes the new record alongside them.
fn rebuild_directory(archive_path: &Path, out_dir: &Path, record: &[u8]) -> Result<RebuildResult> {
    let stem = archive_path.file_stem().ok_or_else(|| bad_path(archive_path))?;
    let destination = out_dir.join(stem);
    fs::create_dir_all(&destination)?;

    let source = File::open(archive_path)?;
    let mut archive = ZipArchive::new(BufReader::new(source))?;

    let mut entries_copied = 0;
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.name() == INVESTIGATION_ENTRY {
            continue;
        }

        // Entry names come from the archive; refuse anything that would
        // land outside the destination.
        let Some(relative) = entry.enclosed_name() else {
            return Err(Error::PathTraversal {
                path: entry.name().to_owned(),
            });
        };
        let target = destination.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut data = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut data)?;
        fs::write(&target, &data)?;
        entries_copied += 1;
    }

    fs::write(destination.join(INVESTIGATION_ENTRY), record)?;

    Ok(RebuildResult {
        entries_copied,
        output_path: destination,
    })
}

/// Returns the final component of an archive path.
fn file_name_of(path: &Path) -> Result<&OsStr> {
    path.file_name().ok_or_else(|| bad_path(path))
}

fn bad_path(path: &Path) -> Error {
    Error::Io(io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("archive path has no file name: {}", path.display()),
    ))
}
