//! Shared test utilities for integration tests.
//!
//! Note: `#![allow(dead_code)]` is required because each integration test
//! file compiles as a separate crate and may only use a subset of these
//! helpers.

#![allow(dead_code)]

use std::fs::File;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

use zip::ZipArchive;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Investigation fixture with one designated field present.
pub const INVESTIGATION: &[u8] =
    b"Investigation\ti1\nComment[Subject Keywords]\tfoo\nComment[Other]\tbar\n";

/// The fixture after redaction and stamping with 2024-01-01.
pub const CLEANED_INVESTIGATION: &[u8] =
    b"Investigation\ti1 - Last modified: 2024-01-01\nComment[Other]\tbar";

/// Creates an in-memory zip archive with the given entries.
pub fn create_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    let mut writer = ZipWriter::new(&mut cursor);
    for (name, data) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("start entry");
        writer.write_all(data).expect("write entry data");
    }
    writer.finish().expect("finish archive");
    cursor.into_inner()
}

/// Writes a zip archive file with the given entries under `dir`.
pub fn write_archive(dir: &Path, file_name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, create_archive(entries)).expect("write archive file");
    path
}

/// Reads every entry of a zip file as (name, bytes), sorted by name.
pub fn read_zip_entries(path: &Path) -> Vec<(String, Vec<u8>)> {
    let file = File::open(path).expect("open zip");
    let mut archive = ZipArchive::new(file).expect("read zip");

    let mut entries = Vec::new();
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).expect("read entry");
        let mut data = Vec::new();
        entry.read_to_end(&mut data).expect("read entry bytes");
        entries.push((entry.name().to_owned(), data));
    }
    entries.sort();
    entries
}
