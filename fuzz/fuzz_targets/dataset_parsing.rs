// Copyright 2025-present The katsuyo Authors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for dataset parsing and hydration.
//!
//! Arbitrary bytes either fail to parse or produce entries that hydrate and
//! render without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use katsuyo::{hydrate_entries, parse_dataset, render_dataset, ConjugateOptions};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(mut entries) = parse_dataset(text) else {
        return;
    };

    let report = hydrate_entries(&mut entries, ConjugateOptions::default());
    assert_eq!(report.total, entries.len());

    let rendered = render_dataset(&entries).expect("hydrated entries serialize");
    let reparsed = parse_dataset(&rendered).expect("rendered dataset parses");
    assert_eq!(reparsed.len(), entries.len());
});
