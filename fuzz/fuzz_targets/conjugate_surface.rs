// Copyright 2025-present The katsuyo Authors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the conjugation engine.
//!
//! Any string with any class must either conjugate to a complete set or
//! return an error. Panics on odd kana, lone combining marks or empty stems
//! would take down a whole hydration run.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use katsuyo::{derive, te_form, ConjugateOptions, InflectionClass};

#[derive(Debug, Arbitrary)]
struct Input {
    surface: String,
    class: u8,
    strict: bool,
}

fuzz_target!(|input: Input| {
    let class = InflectionClass::ALL[input.class as usize % InflectionClass::ALL.len()];
    let options = ConjugateOptions { strict: input.strict };

    if let Ok(derivation) = derive(&input.surface, class, options) {
        let set = &derivation.set;
        assert!(set.is_complete(), "incomplete set for {:?}", input.surface);
        assert_eq!(set.polite_present, input.surface);
        assert_eq!(te_form(&set.casual_past).ok().as_deref(), Some(set.te_form.as_str()));
        if input.strict {
            assert!(derivation.fallback.is_none());
        }
    }
});
