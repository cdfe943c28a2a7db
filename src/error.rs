// Copyright 2025-present The katsuyo Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Two tiers. `ConjugationError` is scoped to a single entry: the pipeline
//! catches it at the entry boundary, logs it, and moves on. `DatasetError` is
//! structural and aborts the run before (read) or instead of (write) any change
//! reaching disk.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{FormKind, InflectionClass};

/// Why forms could not be derived for one entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConjugationError {
    #[error("verb entry has no surface form")]
    MissingSurface,

    #[error("{class} stem is empty after stripping ます from '{surface}'")]
    EmptyStem {
        class: InflectionClass,
        surface: String,
    },

    #[error("no Godan sound-change row for final unit '{unit}' in stem '{stem}'")]
    UnmappedSoundUnit { unit: char, stem: String },

    #[error("irregular stem '{stem}' matches neither する, 来る nor a noun+する compound")]
    UnknownIrregularStem { stem: String },

    #[error("cannot derive {kind} from '{source_form}': expected it to end in {expected}")]
    UnexpectedShape {
        kind: FormKind,
        source_form: String,
        expected: &'static str,
    },

    #[error("derived {kind} is empty")]
    EmptyForm { kind: FormKind },
}

/// Fatal dataset-level failure.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dataset JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize dataset: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
