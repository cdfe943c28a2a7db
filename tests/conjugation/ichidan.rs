//! Ichidan verbs: one fixed suffix set.

use katsuyo::{conjugate, ConjugationError, InflectionClass};

#[test]
fn test_taberu() {
    let set = conjugate("食べます", InflectionClass::Ichidan).unwrap();
    assert_eq!(set.casual_present, "食べる");
    assert_eq!(set.casual_past, "食べた");
    assert_eq!(set.te_form, "食べて");
    assert_eq!(set.casual_negative, "食べない");
    assert_eq!(set.casual_past_negative, "食べなかった");
    assert_eq!(set.potential, "食べられる");
    assert_eq!(set.passive, "食べられる");
    assert_eq!(set.causative, "食べさせる");
    assert_eq!(set.imperative, "食べろ");
    assert_eq!(set.conditional, "食べれば");
    assert_eq!(set.volitional, "食べよう");
}

#[test]
fn test_stem_ending_ignored() {
    // Stems ending in い-row kana still take the plain suffixes
    let set = conjugate("起きます", InflectionClass::Ichidan).unwrap();
    assert_eq!(set.casual_present, "起きる");
    assert_eq!(set.te_form, "起きて");

    let set = conjugate("見ます", InflectionClass::Ichidan).unwrap();
    assert_eq!(set.casual_present, "見る");
    assert_eq!(set.polite_past, "見ました");
}

#[test]
fn test_empty_stem_is_error() {
    assert!(matches!(
        conjugate("ます", InflectionClass::Ichidan),
        Err(ConjugationError::EmptyStem {
            class: InflectionClass::Ichidan,
            ..
        })
    ));
}
