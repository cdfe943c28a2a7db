// Copyright 2025-present The katsuyo Authors
// SPDX-License-Identifier: Apache-2.0

//! What a hydration run did, entry by entry.

use crate::conjugate::RuleFallback;
use crate::error::ConjugationError;

/// Samples shown per category in summaries.
pub const SAMPLE_LIMIT: usize = 10;

/// Outcome of one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryAction {
    /// Verb had no container; one was created.
    Added,
    /// Verb had a container without a `precomputed` slot.
    AddedPrecomputed,
    /// Verb's `precomputed` slot was overwritten.
    UpdatedPrecomputed,
    /// Non-verb carried a container; it was removed.
    Cleared,
    /// Non-verb without a container. Nothing to do.
    Untouched,
    /// Generation failed; the entry was left as it was.
    Errored(ConjugationError),
}

/// Summary buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionCategory {
    Added,
    Updated,
    Cleared,
    Errored,
}

impl ActionCategory {
    pub const ALL: [ActionCategory; 4] = [
        ActionCategory::Added,
        ActionCategory::Updated,
        ActionCategory::Cleared,
        ActionCategory::Errored,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActionCategory::Added => "added",
            ActionCategory::Updated => "updated",
            ActionCategory::Cleared => "cleared",
            ActionCategory::Errored => "errored",
        }
    }
}

impl EntryAction {
    pub fn category(&self) -> Option<ActionCategory> {
        match self {
            EntryAction::Added => Some(ActionCategory::Added),
            EntryAction::AddedPrecomputed | EntryAction::UpdatedPrecomputed => {
                Some(ActionCategory::Updated)
            }
            EntryAction::Cleared => Some(ActionCategory::Cleared),
            EntryAction::Errored(_) => Some(ActionCategory::Errored),
            EntryAction::Untouched => None,
        }
    }

    /// Short machine-ish name, as used in summaries.
    pub fn name(&self) -> &'static str {
        match self {
            EntryAction::Added => "added",
            EntryAction::AddedPrecomputed => "added-precomputed",
            EntryAction::UpdatedPrecomputed => "updated-precomputed",
            EntryAction::Cleared => "cleared",
            EntryAction::Untouched => "untouched",
            EntryAction::Errored(_) => "errored",
        }
    }
}

/// One processed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    pub id: String,
    pub word: String,
    pub part_of_speech: String,
    pub action: EntryAction,
    pub fallback: Option<RuleFallback>,
}

/// Aggregated run result. Records keep input order within each bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HydrationReport {
    pub total: usize,
    pub added: Vec<EntryRecord>,
    pub updated: Vec<EntryRecord>,
    pub cleared: Vec<EntryRecord>,
    pub errored: Vec<EntryRecord>,
    pub untouched: usize,
    /// Verbs conjugated through a fallback rule (also present in added/updated).
    pub fallbacks: Vec<EntryRecord>,
}

impl HydrationReport {
    pub fn from_records(records: Vec<EntryRecord>) -> Self {
        let mut report = HydrationReport {
            total: records.len(),
            ..Default::default()
        };

        for record in records {
            if record.fallback.is_some() {
                report.fallbacks.push(record.clone());
            }
            match record.action.category() {
                Some(ActionCategory::Added) => report.added.push(record),
                Some(ActionCategory::Updated) => report.updated.push(record),
                Some(ActionCategory::Cleared) => report.cleared.push(record),
                Some(ActionCategory::Errored) => report.errored.push(record),
                None => report.untouched += 1,
            }
        }

        report
    }

    pub fn records(&self, category: ActionCategory) -> &[EntryRecord] {
        match category {
            ActionCategory::Added => &self.added,
            ActionCategory::Updated => &self.updated,
            ActionCategory::Cleared => &self.cleared,
            ActionCategory::Errored => &self.errored,
        }
    }

    pub fn count(&self, category: ActionCategory) -> usize {
        self.records(category).len()
    }

    /// Up to `SAMPLE_LIMIT` records of a category.
    pub fn samples(&self, category: ActionCategory) -> &[EntryRecord] {
        let records = self.records(category);
        &records[..records.len().min(SAMPLE_LIMIT)]
    }

    /// Identifiers of every errored entry.
    pub fn errored_ids(&self) -> Vec<&str> {
        self.errored.iter().map(|r| r.id.as_str()).collect()
    }

    /// Verbs whose `precomputed` slot was written this run.
    pub fn verbs_written(&self) -> usize {
        self.added.len() + self.updated.len()
    }
}
