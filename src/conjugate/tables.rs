// Copyright 2025-present The katsuyo Authors
// SPDX-License-Identifier: Apache-2.0

//! Sound-change tables.
//!
//! One row holds the suffix of every table-driven casual form. How a row is
//! applied depends on the class:
//!
//! | Class     | Key                    | Application                          |
//! |-----------|------------------------|--------------------------------------|
//! | Godan     | final sound unit       | replace the final unit with suffix   |
//! | Ichidan   | (single row)           | append suffix to the whole stem      |
//! | Irregular | する / 来る exceptions | replace the matched stem with suffix |
//!
//! te-form and casual past-negative are never looked up. They are derived from
//! the past and negative forms (see `conjugate::derive`).

/// Suffixes for the nine table-driven casual forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundChangeRow {
    pub dictionary: &'static str,
    pub past: &'static str,
    pub negative: &'static str,
    pub potential: &'static str,
    pub passive: &'static str,
    pub causative: &'static str,
    pub imperative: &'static str,
    pub conditional: &'static str,
    pub volitional: &'static str,
}

// =============================================================================
// GODAN
// =============================================================================

/// Final unit of the row used when a Godan stem ends in an unmapped unit.
pub const GODAN_FALLBACK_UNIT: char = 'り';

/// One row per consonant-row final unit of a Godan ます-stem.
pub static GODAN_ROWS: [(char, SoundChangeRow); 13] = [
    ('い', SoundChangeRow {
        dictionary: "う",
        past: "った",
        negative: "わない",
        potential: "える",
        passive: "われる",
        causative: "わせる",
        imperative: "え",
        conditional: "えば",
        volitional: "おう",
    }),
    ('き', SoundChangeRow {
        dictionary: "く",
        past: "いた",
        negative: "かない",
        potential: "ける",
        passive: "かれる",
        causative: "かせる",
        imperative: "け",
        conditional: "けば",
        volitional: "こう",
    }),
    ('ぎ', SoundChangeRow {
        dictionary: "ぐ",
        past: "いだ",
        negative: "がない",
        potential: "げる",
        passive: "がれる",
        causative: "がせる",
        imperative: "げ",
        conditional: "げば",
        volitional: "ごう",
    }),
    ('し', SoundChangeRow {
        dictionary: "す",
        past: "した",
        negative: "さない",
        potential: "せる",
        passive: "される",
        causative: "させる",
        imperative: "せ",
        conditional: "せば",
        volitional: "そう",
    }),
    ('じ', SoundChangeRow {
        dictionary: "ず",
        past: "じた",
        negative: "ざない",
        potential: "ぜる",
        passive: "ざれる",
        causative: "ざせる",
        imperative: "ぜ",
        conditional: "ぜば",
        volitional: "ぞう",
    }),
    ('ち', SoundChangeRow {
        dictionary: "つ",
        past: "った",
        negative: "たない",
        potential: "てる",
        passive: "たれる",
        causative: "たせる",
        imperative: "て",
        conditional: "てば",
        volitional: "とう",
    }),
    ('ぢ', SoundChangeRow {
        dictionary: "づ",
        past: "った",
        negative: "だない",
        potential: "でる",
        passive: "だれる",
        causative: "だせる",
        imperative: "で",
        conditional: "でば",
        volitional: "どう",
    }),
    ('に', SoundChangeRow {
        dictionary: "ぬ",
        past: "んだ",
        negative: "なない",
        potential: "ねる",
        passive: "なれる",
        causative: "なせる",
        imperative: "ね",
        conditional: "ねば",
        volitional: "のう",
    }),
    ('ひ', SoundChangeRow {
        dictionary: "ふ",
        past: "った",
        negative: "はない",
        potential: "へる",
        passive: "はれる",
        causative: "はせる",
        imperative: "へ",
        conditional: "へば",
        volitional: "ほう",
    }),
    ('び', SoundChangeRow {
        dictionary: "ぶ",
        past: "んだ",
        negative: "ばない",
        potential: "べる",
        passive: "ばれる",
        causative: "ばせる",
        imperative: "べ",
        conditional: "べば",
        volitional: "ぼう",
    }),
    ('ぴ', SoundChangeRow {
        dictionary: "ぷ",
        past: "んだ",
        negative: "ぱない",
        potential: "ぺる",
        passive: "ぱれる",
        causative: "ぱせる",
        imperative: "ぺ",
        conditional: "ぺば",
        volitional: "ぽう",
    }),
    ('み', SoundChangeRow {
        dictionary: "む",
        past: "んだ",
        negative: "まない",
        potential: "める",
        passive: "まれる",
        causative: "ませる",
        imperative: "め",
        conditional: "めば",
        volitional: "もう",
    }),
    ('り', SoundChangeRow {
        dictionary: "る",
        past: "った",
        negative: "らない",
        potential: "れる",
        passive: "られる",
        causative: "らせる",
        imperative: "れ",
        conditional: "れば",
        volitional: "ろう",
    }),
];

/// Row for a Godan final sound unit, if the table has one.
pub fn godan_row(unit: char) -> Option<&'static SoundChangeRow> {
    GODAN_ROWS
        .iter()
        .find(|(key, _)| *key == unit)
        .map(|(_, row)| row)
}

/// The row used for unmapped units.
pub fn godan_fallback_row() -> &'static SoundChangeRow {
    // GODAN_ROWS always carries the fallback unit (checked in tests)
    godan_row(GODAN_FALLBACK_UNIT).unwrap_or(&GODAN_ROWS[GODAN_ROWS.len() - 1].1)
}

// =============================================================================
// ICHIDAN
// =============================================================================

pub static ICHIDAN_ROW: SoundChangeRow = SoundChangeRow {
    dictionary: "る",
    past: "た",
    negative: "ない",
    potential: "られる",
    passive: "られる",
    causative: "させる",
    imperative: "ろ",
    conditional: "れば",
    volitional: "よう",
};

// =============================================================================
// IRREGULAR
// =============================================================================

/// Final unit marking a noun+する compound stem (勉強し → 勉強 + する).
pub const SURU_STEM_UNIT: char = 'し';

/// する paradigm, applied to whatever precedes the final し.
pub static SURU_ROW: SoundChangeRow = SoundChangeRow {
    dictionary: "する",
    past: "した",
    negative: "しない",
    potential: "できる",
    passive: "される",
    causative: "させる",
    imperative: "しろ",
    conditional: "すれば",
    volitional: "しよう",
};

/// 来る written in kana. The whole stem き is replaced.
pub static KURU_KANA_ROW: SoundChangeRow = SoundChangeRow {
    dictionary: "くる",
    past: "きた",
    negative: "こない",
    potential: "こられる",
    passive: "こられる",
    causative: "こさせる",
    imperative: "こい",
    conditional: "くれば",
    volitional: "こよう",
};

/// 来る written with its kanji. The reading shifts but the spelling does not.
pub static KURU_KANJI_ROW: SoundChangeRow = SoundChangeRow {
    dictionary: "来る",
    past: "来た",
    negative: "来ない",
    potential: "来られる",
    passive: "来られる",
    causative: "来させる",
    imperative: "来い",
    conditional: "来れば",
    volitional: "来よう",
};

/// Whole-stem lexical exceptions. する is not listed: stem し is the empty
/// compound and goes through `SURU_ROW` like any other.
pub static IRREGULAR_EXCEPTIONS: [(&str, &SoundChangeRow); 2] =
    [("き", &KURU_KANA_ROW), ("来", &KURU_KANJI_ROW)];

pub fn irregular_exception(stem: &str) -> Option<&'static SoundChangeRow> {
    IRREGULAR_EXCEPTIONS
        .iter()
        .find(|(key, _)| *key == stem)
        .map(|(_, row)| *row)
}
