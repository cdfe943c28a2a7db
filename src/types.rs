// Copyright 2025-present The katsuyo Authors
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a hydrated vocabulary dataset.
//!
//! These types define how vocabulary entries, inflection classes and conjugation
//! sets fit together. The serialized shapes are a contract with downstream
//! readers, so field names here are load-bearing.
//!
//! | Rust Type              | JSON shape                          | Purpose                        |
//! |------------------------|-------------------------------------|--------------------------------|
//! | `VocabularyEntry`      | one object in the dataset array     | Contract fields + passthrough  |
//! | `ConjugationSourceMap` | `conjugations: {precomputed, jmdict}` | Provenance-keyed container   |
//! | `ConjugationSet`       | flat object with 15 named strings   | All forms of one verb          |
//! | `FormKind`             | the 15 field names                  | Closed set of forms            |
//!
//! # Invariants
//!
//! - **ConjugationSet**: every one of the 15 fields is non-empty once hydrated.
//! - **ConjugationSourceMap**: only `precomputed` and `jmdict` exist. Any other key
//!   fails dataset parsing instead of being silently dropped on rewrite.
//! - **VocabularyEntry**: a container is attached only to verb entries.

use serde::de;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Inflection class of a verb. Derived solely from the part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InflectionClass {
    /// Group 1 (五段): suffixes depend on the stem's final sound unit.
    Godan,
    /// Group 2 (一段): one fixed suffix set.
    Ichidan,
    /// Group 3 (不規則): する, 来る, and noun+する compounds.
    Irregular,
}

impl InflectionClass {
    pub const ALL: [InflectionClass; 3] = [
        InflectionClass::Godan,
        InflectionClass::Ichidan,
        InflectionClass::Irregular,
    ];

    /// The dataset tag that maps to this class.
    pub fn tag(self) -> &'static str {
        match self {
            InflectionClass::Godan => "动1",
            InflectionClass::Ichidan => "动2",
            InflectionClass::Irregular => "动3",
        }
    }

    /// Position in `ALL`, used for per-class tallies.
    pub fn index(self) -> usize {
        match self {
            InflectionClass::Godan => 0,
            InflectionClass::Ichidan => 1,
            InflectionClass::Irregular => 2,
        }
    }
}

impl fmt::Display for InflectionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InflectionClass::Godan => "Godan",
            InflectionClass::Ichidan => "Ichidan",
            InflectionClass::Irregular => "Irregular",
        };
        f.write_str(name)
    }
}

/// Classifier output: a verb of some class, or not a verb at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    Verb(InflectionClass),
    NotAVerb,
}

impl WordClass {
    pub fn is_verb(self) -> bool {
        matches!(self, WordClass::Verb(_))
    }

    pub fn inflection(self) -> Option<InflectionClass> {
        match self {
            WordClass::Verb(class) => Some(class),
            WordClass::NotAVerb => None,
        }
    }
}

// =============================================================================
// FORMS
// =============================================================================

/// One of the 15 forms in a conjugation set, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    PolitePresent,
    PolitePast,
    PoliteNegative,
    PolitePastNegative,
    CasualPresent,
    CasualPast,
    CasualNegative,
    CasualPastNegative,
    TeForm,
    Potential,
    Passive,
    Causative,
    Imperative,
    Conditional,
    Volitional,
}

impl FormKind {
    pub const ALL: [FormKind; 15] = [
        FormKind::PolitePresent,
        FormKind::PolitePast,
        FormKind::PoliteNegative,
        FormKind::PolitePastNegative,
        FormKind::CasualPresent,
        FormKind::CasualPast,
        FormKind::CasualNegative,
        FormKind::CasualPastNegative,
        FormKind::TeForm,
        FormKind::Potential,
        FormKind::Passive,
        FormKind::Causative,
        FormKind::Imperative,
        FormKind::Conditional,
        FormKind::Volitional,
    ];

    /// Field name in the serialized conjugation set.
    pub fn key(self) -> &'static str {
        match self {
            FormKind::PolitePresent => "polite_present",
            FormKind::PolitePast => "polite_past",
            FormKind::PoliteNegative => "polite_negative",
            FormKind::PolitePastNegative => "polite_past_negative",
            FormKind::CasualPresent => "casual_present",
            FormKind::CasualPast => "casual_past",
            FormKind::CasualNegative => "casual_negative",
            FormKind::CasualPastNegative => "casual_past_negative",
            FormKind::TeForm => "te_form",
            FormKind::Potential => "potential",
            FormKind::Passive => "passive",
            FormKind::Causative => "causative",
            FormKind::Imperative => "imperative",
            FormKind::Conditional => "conditional",
            FormKind::Volitional => "volitional",
        }
    }

    pub fn from_key(key: &str) -> Option<FormKind> {
        FormKind::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// All 15 forms of one verb.
///
/// Serializes as a flat object whose field order matches `FormKind::ALL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugationSet {
    pub polite_present: String,
    pub polite_past: String,
    pub polite_negative: String,
    pub polite_past_negative: String,
    pub casual_present: String,
    pub casual_past: String,
    pub casual_negative: String,
    pub casual_past_negative: String,
    pub te_form: String,
    pub potential: String,
    pub passive: String,
    pub causative: String,
    pub imperative: String,
    pub conditional: String,
    pub volitional: String,
}

impl ConjugationSet {
    pub fn get(&self, kind: FormKind) -> &str {
        match kind {
            FormKind::PolitePresent => &self.polite_present,
            FormKind::PolitePast => &self.polite_past,
            FormKind::PoliteNegative => &self.polite_negative,
            FormKind::PolitePastNegative => &self.polite_past_negative,
            FormKind::CasualPresent => &self.casual_present,
            FormKind::CasualPast => &self.casual_past,
            FormKind::CasualNegative => &self.casual_negative,
            FormKind::CasualPastNegative => &self.casual_past_negative,
            FormKind::TeForm => &self.te_form,
            FormKind::Potential => &self.potential,
            FormKind::Passive => &self.passive,
            FormKind::Causative => &self.causative,
            FormKind::Imperative => &self.imperative,
            FormKind::Conditional => &self.conditional,
            FormKind::Volitional => &self.volitional,
        }
    }

    /// Iterate `(kind, form)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (FormKind, &str)> + '_ {
        FormKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// First form that is empty, if any.
    pub fn first_empty(&self) -> Option<FormKind> {
        self.iter().find(|(_, form)| form.is_empty()).map(|(kind, _)| kind)
    }

    /// True when all 15 forms are non-empty.
    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Build a set by asking `form` for each kind.
    pub fn from_fn(mut form: impl FnMut(FormKind) -> String) -> Self {
        Self {
            polite_present: form(FormKind::PolitePresent),
            polite_past: form(FormKind::PolitePast),
            polite_negative: form(FormKind::PoliteNegative),
            polite_past_negative: form(FormKind::PolitePastNegative),
            casual_present: form(FormKind::CasualPresent),
            casual_past: form(FormKind::CasualPast),
            casual_negative: form(FormKind::CasualNegative),
            casual_past_negative: form(FormKind::CasualPastNegative),
            te_form: form(FormKind::TeForm),
            potential: form(FormKind::Potential),
            passive: form(FormKind::Passive),
            causative: form(FormKind::Causative),
            imperative: form(FormKind::Imperative),
            conditional: form(FormKind::Conditional),
            volitional: form(FormKind::Volitional),
        }
    }

    /// Read whatever forms an external object carries; the rest stay empty.
    pub fn from_partial(fields: &Map<String, Value>) -> Self {
        Self::from_fn(|kind| {
            fields
                .get(kind.key())
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        })
    }
}

// =============================================================================
// PROVENANCE CONTAINER
// =============================================================================

/// Where a conjugation set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// Derived by this engine. The only slot hydration writes.
    Precomputed,
    /// Externally supplied dictionary data. Never written here.
    Jmdict,
}

impl Provenance {
    pub const ALL: [Provenance; 2] = [Provenance::Precomputed, Provenance::Jmdict];

    pub fn key(self) -> &'static str {
        match self {
            Provenance::Precomputed => "precomputed",
            Provenance::Jmdict => "jmdict",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Provenance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "precomputed" => Ok(Provenance::Precomputed),
            "jmdict" => Ok(Provenance::Jmdict),
            other => Err(format!(
                "unknown conjugation source '{}' (expected precomputed or jmdict)",
                other
            )),
        }
    }
}

/// Provenance-keyed conjugation container attached to verb entries.
///
/// `jmdict` is external data and is kept as raw JSON: whatever shape it has on
/// the way in is what gets written back. It is only interpreted as a
/// `ConjugationSet` when read through `set`/`best`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConjugationSourceMap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precomputed: Option<ConjugationSet>,
    #[serde(
        default,
        deserialize_with = "keep_raw",
        skip_serializing_if = "Option::is_none"
    )]
    pub jmdict: Option<Value>,
}

/// Present key, any value (`null` included), is `Some`.
fn keep_raw<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl ConjugationSourceMap {
    /// Container holding only an engine-computed set.
    pub fn precomputed(set: ConjugationSet) -> Self {
        Self {
            precomputed: Some(set),
            jmdict: None,
        }
    }

    pub fn has(&self, source: Provenance) -> bool {
        match source {
            Provenance::Precomputed => self.precomputed.is_some(),
            Provenance::Jmdict => !matches!(self.jmdict, None | Some(Value::Null)),
        }
    }

    /// The set stored under `source`.
    ///
    /// A `jmdict` object is read leniently: missing or non-string forms come
    /// back empty. Anything other than an object yields `None`.
    pub fn set(&self, source: Provenance) -> Option<ConjugationSet> {
        match source {
            Provenance::Precomputed => self.precomputed.clone(),
            Provenance::Jmdict => self
                .jmdict
                .as_ref()
                .and_then(Value::as_object)
                .map(ConjugationSet::from_partial),
        }
    }

    /// Reader selection: the preferred source, else `precomputed`, else `jmdict`.
    pub fn best(&self, preferred: Provenance) -> Option<ConjugationSet> {
        self.best_with_source(preferred).map(|(_, set)| set)
    }

    /// Like `best`, also naming the slot that was chosen.
    pub fn best_with_source(&self, preferred: Provenance) -> Option<(Provenance, ConjugationSet)> {
        [preferred, Provenance::Precomputed, Provenance::Jmdict]
            .into_iter()
            .find_map(|source| self.set(source).map(|set| (source, set)))
    }
}

// =============================================================================
// DATASET ENTRY
// =============================================================================

const ID_KEY: &str = "_id";
const SURFACE_KEY: &str = "japanese_word";
const PART_OF_SPEECH_KEY: &str = "part_of_speech";
const CONJUGATIONS_KEY: &str = "conjugations";

/// One vocabulary record.
///
/// Only the contract fields are typed. Everything else the dataset carries
/// (book, lesson, reading, meaning, examples, ...) rides along in `extra` so a
/// rewrite never loses data.
///
/// Keys are written back in the order they were read. A container added to an
/// entry that had none goes last; a removed one simply disappears. Entries built
/// in code write `_id`, `japanese_word`, `part_of_speech`, then `extra`, then
/// `conjugations`.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabularyEntry {
    pub id: String,
    /// Polite-present surface form (ます form for verbs).
    pub surface: Option<String>,
    pub part_of_speech: String,
    pub extra: Map<String, Value>,
    pub conjugations: Option<ConjugationSourceMap>,
    /// Key order as read.
    layout: Vec<String>,
}

impl VocabularyEntry {
    pub fn new(id: impl Into<String>, surface: Option<String>, part_of_speech: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            surface,
            part_of_speech: part_of_speech.into(),
            extra: Map::new(),
            conjugations: None,
            layout: Vec::new(),
        }
    }

    /// Surface form, or empty when the record has none.
    pub fn word(&self) -> &str {
        self.surface.as_deref().unwrap_or("")
    }

    /// Split a raw record into contract fields and passthrough fields.
    ///
    /// Contract keys holding an unexpected type (a `null` surface, say) stay
    /// in `extra` so they are written back untouched.
    fn from_fields(mut fields: Map<String, Value>) -> Result<Self, String> {
        let layout: Vec<String> = fields.keys().cloned().collect();

        let id = match fields.remove(ID_KEY) {
            Some(Value::String(id)) => id,
            Some(other) => return Err(format!("`{}` must be a string, found {}", ID_KEY, other)),
            None => return Err(format!("missing field `{}`", ID_KEY)),
        };
        let part_of_speech = match fields.remove(PART_OF_SPEECH_KEY) {
            Some(Value::String(tag)) => tag,
            Some(other) => {
                return Err(format!(
                    "`{}` of entry {} must be a string, found {}",
                    PART_OF_SPEECH_KEY, id, other
                ))
            }
            None => return Err(format!("entry {} is missing `{}`", id, PART_OF_SPEECH_KEY)),
        };
        let surface = match fields.remove(SURFACE_KEY) {
            Some(Value::String(surface)) => Some(surface),
            Some(other) => {
                fields.insert(SURFACE_KEY.to_string(), other);
                None
            }
            None => None,
        };
        let conjugations = match fields.remove(CONJUGATIONS_KEY) {
            Some(Value::Null) => {
                fields.insert(CONJUGATIONS_KEY.to_string(), Value::Null);
                None
            }
            Some(container) => Some(
                serde_json::from_value(container)
                    .map_err(|e| format!("`{}` of entry {}: {}", CONJUGATIONS_KEY, id, e))?,
            ),
            None => None,
        };

        Ok(Self {
            id,
            surface,
            part_of_speech,
            extra: fields,
            conjugations,
            layout,
        })
    }

    fn write_field<M: SerializeMap>(&self, map: &mut M, key: &str) -> Result<(), M::Error> {
        match key {
            ID_KEY => map.serialize_entry(key, &self.id),
            PART_OF_SPEECH_KEY => map.serialize_entry(key, &self.part_of_speech),
            SURFACE_KEY if self.surface.is_some() => map.serialize_entry(key, &self.surface),
            CONJUGATIONS_KEY if self.conjugations.is_some() => {
                map.serialize_entry(key, &self.conjugations)
            }
            _ => match self.extra.get(key) {
                Some(value) => map.serialize_entry(key, value),
                None => Ok(()),
            },
        }
    }
}

impl Serialize for VocabularyEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        let seen = |key: &str| self.layout.iter().any(|k| k == key);

        for key in &self.layout {
            self.write_field(&mut map, key)?;
        }
        for key in [ID_KEY, SURFACE_KEY, PART_OF_SPEECH_KEY] {
            if !seen(key) {
                self.write_field(&mut map, key)?;
            }
        }
        for key in self.extra.keys() {
            if !seen(key) {
                self.write_field(&mut map, key)?;
            }
        }
        if !seen(CONJUGATIONS_KEY) {
            self.write_field(&mut map, CONJUGATIONS_KEY)?;
        }

        map.end()
    }
}

impl<'de> Deserialize<'de> for VocabularyEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        VocabularyEntry::from_fields(fields).map_err(de::Error::custom)
    }
}
