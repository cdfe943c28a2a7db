// Copyright 2025-present The katsuyo Authors
// SPDX-License-Identifier: Apache-2.0

//! The conjugation engine: (surface form, class) → all 15 forms.
//!
//! Generation is a pure function over static tables. Nothing here allocates
//! beyond the output strings, and nothing is cached between calls.
//!
//! # Pipeline
//!
//! ```text
//! 書きます ──strip ます──▶ 書き ──class──▶ row lookup ──▶ 9 casual forms
//!     │                      │                              │
//!     │                      └──▶ stem + ました/ません/...   ├──▶ past  → te-form   (た→て, だ→で)
//!     └──▶ polite present                                   └──▶ neg.  → past neg. (ない→なかった)
//! ```
//!
//! # Fallbacks
//!
//! Two stem shapes have no dedicated rule: a Godan stem ending in a unit the
//! table doesn't know, and an Irregular stem that is neither 来る nor a
//! noun+する compound. Both fall back (Godan to the り row, Irregular to the
//! Ichidan suffixes) and report it in `Derivation::fallback`. A Godan fallback
//! keeps the unknown unit in the dictionary form only (あべます → あべる). With
//! `ConjugateOptions::strict` the fallback becomes an error instead.

pub mod stem;
pub mod tables;

use crate::error::ConjugationError;
use crate::types::{ConjugationSet, FormKind, InflectionClass};

pub use stem::{extract_stem, split_final_unit, POLITE_MARKER};
pub use tables::{godan_row, irregular_exception, SoundChangeRow};

use tables::{godan_fallback_row, GODAN_FALLBACK_UNIT, ICHIDAN_ROW, SURU_ROW, SURU_STEM_UNIT};

/// Polite suffixes appended to the stem for every class.
const POLITE_PAST: &str = "ました";
const POLITE_NEGATIVE: &str = "ません";
const POLITE_PAST_NEGATIVE: &str = "ませんでした";

/// Generation knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConjugateOptions {
    /// Treat rule fallbacks as errors.
    pub strict: bool,
}

/// A stem shape that had no dedicated rule and was handled by a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleFallback {
    /// Godan stem ended in this unit; the り row was used.
    GodanUnit(char),
    /// Irregular stem matched no pattern; Ichidan suffixes were used.
    IrregularStem,
}

impl std::fmt::Display for RuleFallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleFallback::GodanUnit(unit) => {
                write!(f, "unmapped final unit '{}' conjugated as '{}'", unit, GODAN_FALLBACK_UNIT)
            }
            RuleFallback::IrregularStem => f.write_str("unknown irregular stem conjugated as Ichidan"),
        }
    }
}

/// Result of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub set: ConjugationSet,
    pub fallback: Option<RuleFallback>,
}

/// The nine table-driven casual forms after a row has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CasualForms {
    dictionary: String,
    past: String,
    negative: String,
    potential: String,
    passive: String,
    causative: String,
    imperative: String,
    conditional: String,
    volitional: String,
}

impl CasualForms {
    fn apply(prefix: &str, row: &SoundChangeRow) -> Self {
        let join = |suffix: &str| format!("{}{}", prefix, suffix);
        Self {
            dictionary: join(row.dictionary),
            past: join(row.past),
            negative: join(row.negative),
            potential: join(row.potential),
            passive: join(row.passive),
            causative: join(row.causative),
            imperative: join(row.imperative),
            conditional: join(row.conditional),
            volitional: join(row.volitional),
        }
    }
}

/// Conjugate a polite-present surface form with default options.
///
/// ```
/// use katsuyo::{conjugate, InflectionClass};
///
/// let forms = conjugate("書きます", InflectionClass::Godan).unwrap();
/// assert_eq!(forms.casual_present, "書く");
/// assert_eq!(forms.te_form, "書いて");
/// ```
pub fn conjugate(surface: &str, class: InflectionClass) -> Result<ConjugationSet, ConjugationError> {
    derive(surface, class, ConjugateOptions::default()).map(|d| d.set)
}

/// Conjugate a polite-present surface form, reporting any fallback taken.
pub fn derive(
    surface: &str,
    class: InflectionClass,
    options: ConjugateOptions,
) -> Result<Derivation, ConjugationError> {
    let stem = extract_stem(surface);
    let (casual, fallback) = casual_forms(surface, stem, class, options)?;

    let te_form = te_form(&casual.past)?;
    let casual_past_negative = past_negative(&casual.negative)?;

    let set = ConjugationSet {
        polite_present: surface.to_string(),
        polite_past: format!("{}{}", stem, POLITE_PAST),
        polite_negative: format!("{}{}", stem, POLITE_NEGATIVE),
        polite_past_negative: format!("{}{}", stem, POLITE_PAST_NEGATIVE),
        casual_present: casual.dictionary,
        casual_past: casual.past,
        casual_negative: casual.negative,
        casual_past_negative,
        te_form,
        potential: casual.potential,
        passive: casual.passive,
        causative: casual.causative,
        imperative: casual.imperative,
        conditional: casual.conditional,
        volitional: casual.volitional,
    };

    if let Some(kind) = set.first_empty() {
        return Err(ConjugationError::EmptyForm { kind });
    }

    Ok(Derivation { set, fallback })
}

fn casual_forms(
    surface: &str,
    stem: &str,
    class: InflectionClass,
    options: ConjugateOptions,
) -> Result<(CasualForms, Option<RuleFallback>), ConjugationError> {
    let empty_stem = || ConjugationError::EmptyStem {
        class,
        surface: surface.to_string(),
    };

    match class {
        InflectionClass::Godan => {
            let (base, unit) = split_final_unit(stem).ok_or_else(empty_stem)?;
            match godan_row(unit) {
                Some(row) => Ok((CasualForms::apply(base, row), None)),
                None if options.strict => Err(ConjugationError::UnmappedSoundUnit {
                    unit,
                    stem: stem.to_string(),
                }),
                None => {
                    tracing::debug!(%unit, stem, "no Godan row for final unit, using fallback row");
                    // The dictionary form keeps the unit; the rest drop it
                    let row = godan_fallback_row();
                    let mut forms = CasualForms::apply(base, row);
                    forms.dictionary = format!("{}{}", stem, row.dictionary);
                    Ok((forms, Some(RuleFallback::GodanUnit(unit))))
                }
            }
        }
        InflectionClass::Ichidan => {
            if stem.is_empty() {
                return Err(empty_stem());
            }
            Ok((CasualForms::apply(stem, &ICHIDAN_ROW), None))
        }
        InflectionClass::Irregular => {
            if let Some(row) = irregular_exception(stem) {
                return Ok((CasualForms::apply("", row), None));
            }
            // Noun+する compound: only the final し is replaced
            if let Some(noun) = stem.strip_suffix(SURU_STEM_UNIT) {
                return Ok((CasualForms::apply(noun, &SURU_ROW), None));
            }
            if stem.is_empty() {
                return Err(empty_stem());
            }
            if options.strict {
                return Err(ConjugationError::UnknownIrregularStem {
                    stem: stem.to_string(),
                });
            }
            tracing::debug!(stem, "irregular stem matched no pattern, using Ichidan suffixes");
            Ok((
                CasualForms::apply(stem, &ICHIDAN_ROW),
                Some(RuleFallback::IrregularStem),
            ))
        }
    }
}

/// te-form from the casual past: た → て, だ → で.
pub fn te_form(past: &str) -> Result<String, ConjugationError> {
    if let Some(head) = past.strip_suffix('た') {
        Ok(format!("{}て", head))
    } else if let Some(head) = past.strip_suffix('だ') {
        Ok(format!("{}で", head))
    } else {
        Err(ConjugationError::UnexpectedShape {
            kind: FormKind::TeForm,
            source_form: past.to_string(),
            expected: "た or だ",
        })
    }
}

/// Casual past-negative from the casual negative: ない → なかった.
pub fn past_negative(negative: &str) -> Result<String, ConjugationError> {
    negative
        .strip_suffix("ない")
        .map(|head| format!("{}なかった", head))
        .ok_or_else(|| ConjugationError::UnexpectedShape {
            kind: FormKind::CasualPastNegative,
            source_form: negative.to_string(),
            expected: "ない",
        })
}
