// Copyright 2025-present The katsuyo Authors
// SPDX-License-Identifier: Apache-2.0

//! Whole-file dataset I/O.
//!
//! The dataset is one pretty-printed JSON array. It is read in full, mutated in
//! memory, and written back in full. Writes go to a temporary file in the
//! destination directory which is then renamed over the target, so a failed
//! write leaves the previous dataset intact.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::DatasetError;
use crate::types::VocabularyEntry;

/// Read and parse the dataset at `path`.
pub fn load_dataset(path: &Path) -> Result<Vec<VocabularyEntry>, DatasetError> {
    let content = fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dataset(&content).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_dataset(content: &str) -> Result<Vec<VocabularyEntry>, serde_json::Error> {
    serde_json::from_str(content)
}

/// Serialize entries with two-space indentation, no trailing newline.
pub fn render_dataset(entries: &[VocabularyEntry]) -> Result<String, DatasetError> {
    serde_json::to_string_pretty(entries).map_err(DatasetError::Serialize)
}

/// Replace the file at `path` with `entries` in one rename.
pub fn write_dataset(path: &Path, entries: &[VocabularyEntry]) -> Result<(), DatasetError> {
    let rendered = render_dataset(entries)?;
    let write_err = |source| DatasetError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(rendered.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    tracing::info!(path = %path.display(), entries = entries.len(), "dataset written");
    Ok(())
}
