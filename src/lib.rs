// Copyright 2025-present The katsuyo Authors
// SPDX-License-Identifier: Apache-2.0

//! Japanese verb conjugation and vocabulary dataset hydration.
//!
//! Given a verb's polite-present form (書きます) and its inflection class, the
//! engine derives the fourteen other forms deterministically. The hydration
//! pipeline writes those forms into every verb of a vocabulary dataset and the
//! verification pass checks that it did.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌───────────────────┐   ┌──────────────────┐
//! │  classify.rs │──▶│    conjugate/     │──▶│  ConjugationSet  │
//! │ (动1/动2/动3) │   │ (stem, tables,    │   │   (types.rs)     │
//! └──────────────┘   │  derive)          │   └──────────────────┘
//!                    └───────────────────┘            │
//!        ┌────────────────────────────────────────────┤
//!        ▼                                            ▼
//! ┌──────────────┐   ┌───────────────────┐   ┌──────────────────┐
//! │  dataset.rs  │◀─▶│     hydrate/      │   │     verify/      │
//! │ (load/write) │   │ (batch, report)   │   │ (read-only scan) │
//! └──────────────┘   └───────────────────┘   └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use katsuyo::{classify, conjugate, WordClass, InflectionClass};
//!
//! let WordClass::Verb(class) = classify("动3") else { unreachable!() };
//! assert_eq!(class, InflectionClass::Irregular);
//!
//! let forms = conjugate("勉強します", class).unwrap();
//! assert_eq!(forms.casual_present, "勉強する");
//! assert_eq!(forms.potential, "勉強できる");
//! ```

// Module declarations
pub mod classify;
pub mod conjugate;
pub mod dataset;
pub mod error;
pub mod forms;
pub mod hydrate;
pub mod testing;
pub mod types;
pub mod verify;

// Re-exports for public API
pub use classify::{classify, is_verb, VERB_TAGS};
pub use conjugate::{
    conjugate, derive, extract_stem, past_negative, te_form, ConjugateOptions, Derivation,
    RuleFallback,
};
pub use dataset::{load_dataset, parse_dataset, render_dataset, write_dataset};
pub use error::{ConjugationError, DatasetError};
pub use forms::{detect_level, ConjugationLevel, FormCategory, FormInfo, FORM_CATALOGUE};
pub use hydrate::{
    hydrate_entries, hydrate_entry, run_hydrate, ActionCategory, EntryAction, EntryRecord,
    HydrateOptions, HydrationReport, SAMPLE_LIMIT,
};
pub use types::{
    ConjugationSet, ConjugationSourceMap, FormKind, InflectionClass, Provenance,
    VocabularyEntry, WordClass,
};
pub use verify::{run_verify, verify_entries, Verdict, VerificationReport};
