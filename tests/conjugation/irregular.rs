//! Irregular verbs: する, 来る and noun+する compounds.

use katsuyo::{conjugate, derive, ConjugateOptions, ConjugationError, InflectionClass, RuleFallback};

fn irregular(surface: &str) -> katsuyo::ConjugationSet {
    conjugate(surface, InflectionClass::Irregular).unwrap()
}

#[test]
fn test_suru() {
    let set = irregular("します");
    assert_eq!(set.casual_present, "する");
    assert_eq!(set.casual_past, "した");
    assert_eq!(set.te_form, "して");
    assert_eq!(set.casual_negative, "しない");
    assert_eq!(set.potential, "できる");
    assert_eq!(set.polite_past, "しました");
}

#[test]
fn test_compound_replaces_only_final_shi() {
    let set = irregular("勉強します");
    assert_eq!(set.casual_present, "勉強する");
    assert_ne!(set.casual_present, "勉強しる");
    assert_eq!(set.casual_past, "勉強した");
    assert_eq!(set.potential, "勉強できる");
    assert_eq!(set.volitional, "勉強しよう");
}

#[test]
fn test_kuru_in_kana() {
    let set = irregular("きます");
    assert_eq!(set.casual_present, "くる");
    assert_eq!(set.casual_past, "きた");
    assert_eq!(set.te_form, "きて");
    assert_eq!(set.casual_negative, "こない");
    assert_eq!(set.casual_past_negative, "こなかった");
    assert_eq!(set.imperative, "こい");
}

#[test]
fn test_kuru_in_kanji() {
    let set = irregular("来ます");
    assert_eq!(set.casual_present, "来る");
    assert_eq!(set.te_form, "来て");
    assert_eq!(set.polite_past, "来ました");
}

#[test]
fn test_unknown_stem_falls_back_to_ichidan() {
    let derivation = derive("見ます", InflectionClass::Irregular, ConjugateOptions::default()).unwrap();
    assert_eq!(derivation.fallback, Some(RuleFallback::IrregularStem));
    assert_eq!(derivation.set.casual_present, "見る");
}

#[test]
fn test_unknown_stem_is_error_when_strict() {
    let err = derive("見ます", InflectionClass::Irregular, ConjugateOptions { strict: true }).unwrap_err();
    assert_eq!(
        err,
        ConjugationError::UnknownIrregularStem {
            stem: "見".to_string()
        }
    );
}

#[test]
fn test_bare_marker_is_error() {
    assert!(conjugate("ます", InflectionClass::Irregular).is_err());
}
