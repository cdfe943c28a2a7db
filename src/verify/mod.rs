// Copyright 2025-present The katsuyo Authors
// SPDX-License-Identifier: Apache-2.0

//! The verification pass: read-only reconciliation of a hydrated dataset.
//!
//! Hydration claims two things: every verb has a complete `precomputed` set,
//! and no non-verb carries a container at all. This module checks both against
//! the data as it sits on disk and never writes anything back.
//!
//! It also counts stale sets, verbs whose stored `precomputed` forms differ
//! from what the engine derives today. That number is diagnostic only. A stale
//! set usually means the tables changed since the last hydration.

mod types;

use std::path::Path;

use crate::classify::classify;
use crate::conjugate::conjugate;
use crate::dataset::load_dataset;
use crate::error::DatasetError;
use crate::types::{Provenance, VocabularyEntry, WordClass};

pub use types::*;

/// Scan entries and build the report.
pub fn verify_entries(entries: &[VocabularyEntry]) -> VerificationReport {
    let mut report = VerificationReport {
        total_entries: entries.len(),
        ..Default::default()
    };

    for entry in entries {
        match classify(&entry.part_of_speech) {
            WordClass::Verb(class) => {
                report.verbs_by_class[class.index()] += 1;

                let Some(container) = entry.conjugations.as_ref() else {
                    report.verbs_without_container += 1;
                    continue;
                };
                report.verbs_with_container += 1;

                for source in Provenance::ALL {
                    if container.has(source) {
                        report.record_source(source);
                    }
                }

                if let Some(stored) = container.precomputed.as_ref() {
                    if stored.is_complete() {
                        report.verbs_with_complete_precomputed += 1;
                    }
                    let fresh = entry
                        .surface
                        .as_deref()
                        .and_then(|surface| conjugate(surface, class).ok());
                    if fresh.as_ref() != Some(stored) {
                        report.stale_precomputed += 1;
                    }
                }

                let examples = &mut report.examples[class.index()];
                if examples.len() < CLASS_EXAMPLE_LIMIT {
                    examples.push(VerbExample {
                        id: entry.id.clone(),
                        word: entry.word().to_string(),
                        casual_present: container
                            .precomputed
                            .as_ref()
                            .map(|set| set.casual_present.clone()),
                    });
                }
            }
            WordClass::NotAVerb => {
                if entry.conjugations.is_some() {
                    report.non_verbs_with_container += 1;
                    if report.offenders.len() < OFFENDER_LIMIT {
                        report.offenders.push(Offender {
                            id: entry.id.clone(),
                            word: entry.word().to_string(),
                            part_of_speech: entry.part_of_speech.clone(),
                        });
                    }
                }
            }
        }
    }

    tracing::debug!(
        verbs = report.total_verbs(),
        stale = report.stale_precomputed,
        verdict = %report.verdict(),
        "verification scan finished"
    );

    report
}

/// Load the dataset at `path` and verify it.
pub fn run_verify(path: &Path) -> Result<VerificationReport, DatasetError> {
    let entries = load_dataset(path)?;
    Ok(verify_entries(&entries))
}
