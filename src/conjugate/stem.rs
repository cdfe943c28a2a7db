// Copyright 2025-present The katsuyo Authors
// SPDX-License-Identifier: Apache-2.0

//! Polite-present surface form → conjugation stem.

/// The polite-present marker.
pub const POLITE_MARKER: &str = "ます";

/// Strip a trailing `ます`. A form without the marker passes through unchanged.
pub fn extract_stem(surface: &str) -> &str {
    surface.strip_suffix(POLITE_MARKER).unwrap_or(surface)
}

/// Split a stem into everything before its final sound unit and the unit itself.
///
/// Sound units are single kana here; none of the table keys are digraphs.
pub fn split_final_unit(stem: &str) -> Option<(&str, char)> {
    let unit = stem.chars().next_back()?;
    Some((&stem[..stem.len() - unit.len_utf8()], unit))
}
