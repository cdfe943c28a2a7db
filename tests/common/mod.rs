//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use tempfile::TempDir;

// Re-export canonical test utilities from katsuyo::testing
pub use katsuyo::testing::{make_entry, make_set, sample_dataset};

/// File name used for datasets written into temp dirs.
pub const DATASET_FILE: &str = "vocabulary.json";

/// A dataset shaped like the real one: passthrough fields, a jmdict slot, a
/// stale precomputed slot, a noun with a leftover container, and one verb whose
/// surface has no stem.
pub fn fixture() -> Value {
    json!([
        {
            "_id": "v-kaku",
            "book_id": "b1",
            "lesson_id": "l3",
            "japanese_word": "書きます",
            "reading": "かきます",
            "part_of_speech": "动1",
            "meaning": "to write"
        },
        {
            "_id": "v-taberu",
            "japanese_word": "食べます",
            "part_of_speech": "动2",
            "conjugations": {
                "jmdict": {
                    "polite_present": "jm", "polite_past": "jm", "polite_negative": "jm",
                    "polite_past_negative": "jm", "casual_present": "jm", "casual_past": "jm",
                    "casual_negative": "jm", "casual_past_negative": "jm", "te_form": "jm",
                    "potential": "jm", "passive": "jm", "causative": "jm",
                    "imperative": "jm", "conditional": "jm", "volitional": "jm"
                }
            }
        },
        {
            "_id": "v-benkyou",
            "japanese_word": "勉強します",
            "part_of_speech": "动3",
            "conjugations": {
                "precomputed": {
                    "polite_present": "old", "polite_past": "old", "polite_negative": "old",
                    "polite_past_negative": "old", "casual_present": "old", "casual_past": "old",
                    "casual_negative": "old", "casual_past_negative": "old", "te_form": "old",
                    "potential": "old", "passive": "old", "causative": "old",
                    "imperative": "old", "conditional": "old", "volitional": "old"
                }
            }
        },
        {
            "_id": "n-hon",
            "japanese_word": "本",
            "part_of_speech": "名词",
            "conjugations": {}
        },
        {
            "_id": "n-shizuka",
            "japanese_word": "静か",
            "part_of_speech": "形容动词"
        },
        {
            "_id": "v-broken",
            "japanese_word": "ます",
            "part_of_speech": "动1"
        }
    ])
}

/// Write `value` as the dataset file of a fresh temp dir.
pub fn write_fixture(value: &Value) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(DATASET_FILE);
    fs::write(&path, serde_json::to_string_pretty(value).expect("serialize fixture"))
        .expect("write fixture");
    (dir, path)
}

pub fn read_json(path: &Path) -> Value {
    let content = fs::read_to_string(path).expect("read dataset");
    serde_json::from_str(&content).expect("dataset is valid JSON")
}

/// The entry with `_id == id` in a dataset value.
pub fn entry<'a>(dataset: &'a Value, id: &str) -> &'a Value {
    dataset
        .as_array()
        .expect("dataset is an array")
        .iter()
        .find(|entry| entry["_id"] == id)
        .unwrap_or_else(|| panic!("no entry {}", id))
}
