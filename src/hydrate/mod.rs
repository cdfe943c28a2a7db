// Copyright 2025-present The katsuyo Authors
// SPDX-License-Identifier: Apache-2.0

//! Batch hydration: classify every entry, write verb conjugations, strip
//! containers from non-verbs, and rewrite the dataset once.
//!
//! Entries don't depend on each other, so the per-entry work maps in parallel
//! under the `parallel` feature. The report is collected in input order and the
//! dataset is written only after every entry has settled.
//!
//! Each entry is all-or-nothing: forms are derived first, and the entry is only
//! touched once derivation has succeeded. A failing entry is logged, recorded
//! as errored, and left exactly as it was read.

pub mod report;

use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::classify::classify;
use crate::conjugate::{derive, ConjugateOptions};
use crate::dataset::{load_dataset, write_dataset};
use crate::error::{ConjugationError, DatasetError};
use crate::types::{ConjugationSet, ConjugationSourceMap, VocabularyEntry, WordClass};

pub use report::*;

/// Run configuration.
#[derive(Debug, Clone, Default)]
pub struct HydrateOptions {
    /// Write here instead of overwriting the input.
    pub output: Option<PathBuf>,
    /// Report without writing.
    pub dry_run: bool,
    /// Promote rule fallbacks to entry errors.
    pub strict: bool,
}

impl HydrateOptions {
    pub fn conjugate_options(&self) -> ConjugateOptions {
        ConjugateOptions {
            strict: self.strict,
        }
    }
}

/// Hydrate one entry in place.
pub fn hydrate_entry(entry: &mut VocabularyEntry, options: ConjugateOptions) -> EntryRecord {
    let class = classify(&entry.part_of_speech);
    let mut fallback = None;

    let action = match class {
        WordClass::Verb(inflection) => {
            let derived = entry
                .surface
                .as_deref()
                .ok_or(ConjugationError::MissingSurface)
                .and_then(|surface| derive(surface, inflection, options));

            match derived {
                Ok(derivation) => {
                    if let Some(ref rule) = derivation.fallback {
                        tracing::warn!(id = %entry.id, word = entry.word(), "{}", rule);
                    }
                    fallback = derivation.fallback;
                    store_precomputed(entry, derivation.set)
                }
                Err(e) => {
                    tracing::warn!(id = %entry.id, error = %e, "conjugation failed; entry left unchanged");
                    EntryAction::Errored(e)
                }
            }
        }
        WordClass::NotAVerb => {
            if entry.conjugations.take().is_some() {
                EntryAction::Cleared
            } else {
                EntryAction::Untouched
            }
        }
    };

    tracing::debug!(id = %entry.id, action = action.name(), "entry processed");

    EntryRecord {
        id: entry.id.clone(),
        word: entry.word().to_string(),
        part_of_speech: entry.part_of_speech.clone(),
        action,
        fallback,
    }
}

/// Overwrite only the `precomputed` slot, creating the container if needed.
fn store_precomputed(entry: &mut VocabularyEntry, set: ConjugationSet) -> EntryAction {
    match entry.conjugations.as_mut() {
        None => {
            entry.conjugations = Some(ConjugationSourceMap::precomputed(set));
            EntryAction::Added
        }
        Some(container) => {
            let had_precomputed = container.precomputed.replace(set).is_some();
            if had_precomputed {
                EntryAction::UpdatedPrecomputed
            } else {
                EntryAction::AddedPrecomputed
            }
        }
    }
}

/// Hydrate a collection in memory.
pub fn hydrate_entries(entries: &mut [VocabularyEntry], options: ConjugateOptions) -> HydrationReport {
    #[cfg(feature = "parallel")]
    let records: Vec<EntryRecord> = entries
        .par_iter_mut()
        .map(|entry| hydrate_entry(entry, options))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let records: Vec<EntryRecord> = entries
        .iter_mut()
        .map(|entry| hydrate_entry(entry, options))
        .collect();

    HydrationReport::from_records(records)
}

/// Create a progress style for the hydration bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

/// Hydrate a collection in memory with progress reporting.
#[cfg(feature = "parallel")]
pub fn hydrate_entries_with_progress(
    entries: &mut [VocabularyEntry],
    options: ConjugateOptions,
    progress: &ProgressBar,
) -> HydrationReport {
    let records: Vec<EntryRecord> = entries
        .par_iter_mut()
        .map(|entry| {
            let record = hydrate_entry(entry, options);
            progress.inc(1);
            record
        })
        .collect();

    HydrationReport::from_records(records)
}

/// Load, hydrate and rewrite the dataset at `dataset`.
///
/// Read and parse failures abort before anything is mutated. Entry failures
/// are recorded in the report and never abort the run.
pub fn run_hydrate(dataset: &Path, options: &HydrateOptions) -> Result<HydrationReport, DatasetError> {
    let mut entries = load_dataset(dataset)?;
    tracing::info!(path = %dataset.display(), entries = entries.len(), "dataset loaded");

    #[cfg(feature = "parallel")]
    let report = {
        let progress = ProgressBar::new(entries.len() as u64);
        progress.set_style(create_progress_style());
        progress.set_prefix("Hydrating");
        let report = hydrate_entries_with_progress(&mut entries, options.conjugate_options(), &progress);
        progress.finish_with_message(format!("{} verbs conjugated", report.verbs_written()));
        report
    };

    #[cfg(not(feature = "parallel"))]
    let report = hydrate_entries(&mut entries, options.conjugate_options());

    if options.dry_run {
        tracing::info!("dry run; dataset not written");
    } else {
        let target = options.output.as_deref().unwrap_or(dataset);
        write_dataset(target, &entries)?;
    }

    Ok(report)
}
