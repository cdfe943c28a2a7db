// Copyright 2025-present The katsuyo Authors
// SPDX-License-Identifier: Apache-2.0

//! Part-of-speech tag → inflection class.
//!
//! The dataset marks verbs with three tags: `动1` (Group 1, Godan), `动2`
//! (Group 2, Ichidan) and `动3` (Group 3, Irregular). Everything else is not a
//! verb. Matching is exact; a tag with stray whitespace is not a verb.

use crate::types::{InflectionClass, WordClass};

/// The three verb tags, in class order.
pub const VERB_TAGS: [(&str, InflectionClass); 3] = [
    ("动1", InflectionClass::Godan),
    ("动2", InflectionClass::Ichidan),
    ("动3", InflectionClass::Irregular),
];

/// Classify a part-of-speech tag.
pub fn classify(tag: &str) -> WordClass {
    VERB_TAGS
        .iter()
        .find(|(verb_tag, _)| *verb_tag == tag)
        .map_or(WordClass::NotAVerb, |&(_, class)| WordClass::Verb(class))
}

/// Shorthand for `classify(tag).is_verb()`.
pub fn is_verb(tag: &str) -> bool {
    classify(tag).is_verb()
}
