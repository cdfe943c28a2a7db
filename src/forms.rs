// Copyright 2025-present The katsuyo Authors
// SPDX-License-Identifier: Apache-2.0

//! Form catalogue and level presets.
//!
//! Readers rarely want all 15 forms at once. Each form belongs to a difficulty
//! category, and a level picks a subset. `advanced` deliberately stops after
//! the first three advanced forms; `complete` is the only level with all of them.

use std::fmt;
use std::str::FromStr;

use crate::types::FormKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormCategory {
    Basic,
    Intermediate,
    Advanced,
}

/// Display metadata for one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormInfo {
    pub kind: FormKind,
    pub label: &'static str,
    pub description: &'static str,
    pub category: FormCategory,
}

/// Catalogue in presentation order (basic first).
pub static FORM_CATALOGUE: [FormInfo; 15] = [
    FormInfo { kind: FormKind::PolitePresent, label: "Present (Polite)", description: "ます form", category: FormCategory::Basic },
    FormInfo { kind: FormKind::CasualPresent, label: "Present (Casual)", description: "Dictionary form", category: FormCategory::Basic },
    FormInfo { kind: FormKind::PolitePast, label: "Past (Polite)", description: "ました form", category: FormCategory::Basic },
    FormInfo { kind: FormKind::CasualPast, label: "Past (Casual)", description: "た form", category: FormCategory::Basic },
    FormInfo { kind: FormKind::PoliteNegative, label: "Negative (Polite)", description: "ません form", category: FormCategory::Basic },
    FormInfo { kind: FormKind::CasualNegative, label: "Negative (Casual)", description: "ない form", category: FormCategory::Basic },
    FormInfo { kind: FormKind::PolitePastNegative, label: "Past Negative (Polite)", description: "ませんでした form", category: FormCategory::Intermediate },
    FormInfo { kind: FormKind::CasualPastNegative, label: "Past Negative (Casual)", description: "なかった form", category: FormCategory::Intermediate },
    FormInfo { kind: FormKind::TeForm, label: "Te-form", description: "Connecting form", category: FormCategory::Intermediate },
    FormInfo { kind: FormKind::Potential, label: "Potential", description: "Can do", category: FormCategory::Intermediate },
    FormInfo { kind: FormKind::Passive, label: "Passive", description: "Is done to", category: FormCategory::Advanced },
    FormInfo { kind: FormKind::Causative, label: "Causative", description: "Make/let someone do", category: FormCategory::Advanced },
    FormInfo { kind: FormKind::Imperative, label: "Imperative", description: "Command form", category: FormCategory::Advanced },
    FormInfo { kind: FormKind::Conditional, label: "Conditional", description: "If/when", category: FormCategory::Advanced },
    FormInfo { kind: FormKind::Volitional, label: "Volitional", description: "Let's do", category: FormCategory::Advanced },
];

/// Number of advanced forms the `advanced` level includes.
const ADVANCED_LEVEL_EXTRA: usize = 3;

pub fn info(kind: FormKind) -> &'static FormInfo {
    FORM_CATALOGUE
        .iter()
        .find(|info| info.kind == kind)
        .unwrap_or(&FORM_CATALOGUE[0])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConjugationLevel {
    Beginner,
    Intermediate,
    Advanced,
    Complete,
    Custom,
}

impl ConjugationLevel {
    /// Forms selected by this level, in catalogue order.
    pub fn forms(self) -> Vec<FormKind> {
        let in_category = |wanted: &[FormCategory]| -> Vec<FormKind> {
            FORM_CATALOGUE
                .iter()
                .filter(|info| wanted.contains(&info.category))
                .map(|info| info.kind)
                .collect()
        };

        match self {
            ConjugationLevel::Beginner => in_category(&[FormCategory::Basic]),
            ConjugationLevel::Intermediate => {
                in_category(&[FormCategory::Basic, FormCategory::Intermediate])
            }
            ConjugationLevel::Advanced => {
                let mut forms = in_category(&[FormCategory::Basic, FormCategory::Intermediate]);
                forms.extend(
                    in_category(&[FormCategory::Advanced])
                        .into_iter()
                        .take(ADVANCED_LEVEL_EXTRA),
                );
                forms
            }
            ConjugationLevel::Complete => FORM_CATALOGUE.iter().map(|info| info.kind).collect(),
            ConjugationLevel::Custom => Vec::new(),
        }
    }
}

impl fmt::Display for ConjugationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConjugationLevel::Beginner => "beginner",
            ConjugationLevel::Intermediate => "intermediate",
            ConjugationLevel::Advanced => "advanced",
            ConjugationLevel::Complete => "complete",
            ConjugationLevel::Custom => "custom",
        };
        f.write_str(name)
    }
}

impl FromStr for ConjugationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(ConjugationLevel::Beginner),
            "intermediate" => Ok(ConjugationLevel::Intermediate),
            "advanced" => Ok(ConjugationLevel::Advanced),
            "complete" => Ok(ConjugationLevel::Complete),
            "custom" => Ok(ConjugationLevel::Custom),
            other => Err(format!("unknown level '{}'", other)),
        }
    }
}

/// Map a selection back to the preset it equals, ignoring order.
pub fn detect_level(selection: &[FormKind]) -> ConjugationLevel {
    let same_set = |preset: &[FormKind]| {
        preset.len() == selection.len() && preset.iter().all(|kind| selection.contains(kind))
    };

    [
        ConjugationLevel::Complete,
        ConjugationLevel::Advanced,
        ConjugationLevel::Intermediate,
        ConjugationLevel::Beginner,
    ]
    .into_iter()
    .find(|level| same_set(&level.forms()))
    .unwrap_or(ConjugationLevel::Custom)
}
