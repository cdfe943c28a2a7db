// Copyright 2025-present The katsuyo Authors
// SPDX-License-Identifier: Apache-2.0

//! Verification report types.

use std::fmt;

use crate::types::{InflectionClass, Provenance};

/// Examples kept per verb class.
pub const CLASS_EXAMPLE_LIMIT: usize = 3;
/// Offending non-verbs kept for display.
pub const OFFENDER_LIMIT: usize = 5;

/// Pass/fail outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => f.write_str("PASS"),
            Verdict::Fail => f.write_str("FAIL"),
        }
    }
}

/// A verb shown as an example of its class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbExample {
    pub id: String,
    pub word: String,
    /// `precomputed` dictionary form, when present.
    pub casual_present: Option<String>,
}

/// A non-verb that still carries a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offender {
    pub id: String,
    pub word: String,
    pub part_of_speech: String,
}

/// Coverage statistics of a hydrated dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    pub total_entries: usize,
    /// Indexed by `InflectionClass::index()`.
    pub verbs_by_class: [usize; 3],
    pub verbs_with_container: usize,
    pub verbs_without_container: usize,
    /// Indexed like `Provenance::ALL`.
    pub verbs_with_source: [usize; 2],
    /// Verbs whose `precomputed` slot exists and has all 15 forms.
    pub verbs_with_complete_precomputed: usize,
    /// Verbs whose `precomputed` slot differs from a fresh derivation.
    pub stale_precomputed: usize,
    pub non_verbs_with_container: usize,
    pub examples: [Vec<VerbExample>; 3],
    pub offenders: Vec<Offender>,
}

fn source_index(source: Provenance) -> usize {
    match source {
        Provenance::Precomputed => 0,
        Provenance::Jmdict => 1,
    }
}

impl VerificationReport {
    pub fn total_verbs(&self) -> usize {
        self.verbs_by_class.iter().sum()
    }

    pub fn verbs_in(&self, class: InflectionClass) -> usize {
        self.verbs_by_class[class.index()]
    }

    pub fn verbs_with(&self, source: Provenance) -> usize {
        self.verbs_with_source[source_index(source)]
    }

    pub fn verbs_without(&self, source: Provenance) -> usize {
        self.total_verbs() - self.verbs_with(source)
    }

    pub fn examples_for(&self, class: InflectionClass) -> &[VerbExample] {
        &self.examples[class.index()]
    }

    pub(crate) fn record_source(&mut self, source: Provenance) {
        self.verbs_with_source[source_index(source)] += 1;
    }

    /// Every verb has a complete `precomputed` slot.
    pub fn all_verbs_precomputed(&self) -> bool {
        self.verbs_with_complete_precomputed == self.total_verbs()
    }

    /// No non-verb carries a container.
    pub fn no_stray_containers(&self) -> bool {
        self.non_verbs_with_container == 0
    }

    pub fn verdict(&self) -> Verdict {
        if self.all_verbs_precomputed() && self.no_stray_containers() {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}
