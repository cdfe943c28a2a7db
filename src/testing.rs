// Copyright 2025-present The katsuyo Authors
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use serde_json::Value;

use crate::types::{ConjugationSet, VocabularyEntry};

/// Create a vocabulary entry with the contract fields set and a couple of
/// passthrough fields, like a real dataset record.
pub fn make_entry(id: &str, surface: &str, part_of_speech: &str) -> VocabularyEntry {
    let mut entry = VocabularyEntry::new(id, Some(surface.to_string()), part_of_speech);
    entry.extra.insert("book_id".to_string(), Value::from("book-1"));
    entry.extra.insert("lesson_id".to_string(), Value::from("lesson-1"));
    entry
}

/// A complete set whose every form is `marker` plus the form key.
///
/// Not linguistically meaningful; used where only provenance matters.
pub fn make_set(marker: &str) -> ConjugationSet {
    let form = |key: &str| format!("{}:{}", marker, key);
    ConjugationSet {
        polite_present: form("polite_present"),
        polite_past: form("polite_past"),
        polite_negative: form("polite_negative"),
        polite_past_negative: form("polite_past_negative"),
        casual_present: form("casual_present"),
        casual_past: form("casual_past"),
        casual_negative: form("casual_negative"),
        casual_past_negative: form("casual_past_negative"),
        te_form: form("te_form"),
        potential: form("potential"),
        passive: form("passive"),
        causative: form("causative"),
        imperative: form("imperative"),
        conditional: form("conditional"),
        volitional: form("volitional"),
    }
}

/// A small mixed dataset: one verb of each class, a compound, and two non-verbs.
pub fn sample_dataset() -> Vec<VocabularyEntry> {
    vec![
        make_entry("v1", "書きます", "动1"),
        make_entry("v2", "食べます", "动2"),
        make_entry("v3", "します", "动3"),
        make_entry("v4", "勉強します", "动3"),
        make_entry("n1", "本", "名词"),
        make_entry("n2", "静か", "形容动词"),
    ]
}
