//! `run_hydrate` against temp-dir datasets.

use std::fs;

use katsuyo::{
    run_hydrate, ActionCategory, DatasetError, EntryAction, HydrateOptions, RuleFallback,
};
use serde_json::json;

use crate::common::{entry, fixture, read_json, write_fixture};

#[test]
fn test_fixture_counts() {
    let (_dir, path) = write_fixture(&fixture());
    let report = run_hydrate(&path, &HydrateOptions::default()).unwrap();

    assert_eq!(report.total, 6);
    assert_eq!(report.count(ActionCategory::Added), 1);
    assert_eq!(report.count(ActionCategory::Updated), 2);
    assert_eq!(report.count(ActionCategory::Cleared), 1);
    assert_eq!(report.count(ActionCategory::Errored), 1);
    assert_eq!(report.untouched, 1);
    assert!(report.fallbacks.is_empty());
}

#[test]
fn test_failing_entry_is_isolated() {
    let (_dir, path) = write_fixture(&fixture());
    let report = run_hydrate(&path, &HydrateOptions::default()).unwrap();

    assert_eq!(report.errored_ids(), vec!["v-broken"]);
    let written = read_json(&path);
    assert!(entry(&written, "v-broken").get("conjugations").is_none());
    assert_eq!(
        entry(&written, "v-kaku")["conjugations"]["precomputed"]["casual_present"],
        "書く"
    );
}

#[test]
fn test_updated_actions_are_distinguished() {
    let (_dir, path) = write_fixture(&fixture());
    let report = run_hydrate(&path, &HydrateOptions::default()).unwrap();

    let actions: Vec<(&str, &EntryAction)> = report
        .updated
        .iter()
        .map(|r| (r.id.as_str(), &r.action))
        .collect();
    assert_eq!(
        actions,
        vec![
            ("v-taberu", &EntryAction::AddedPrecomputed),
            ("v-benkyou", &EntryAction::UpdatedPrecomputed),
        ]
    );
}

#[test]
fn test_other_provenance_untouched() {
    let (_dir, path) = write_fixture(&fixture());
    run_hydrate(&path, &HydrateOptions::default()).unwrap();

    let written = read_json(&path);
    let taberu = entry(&written, "v-taberu");
    assert_eq!(
        taberu["conjugations"]["jmdict"],
        entry(&fixture(), "v-taberu")["conjugations"]["jmdict"]
    );
    assert_eq!(taberu["conjugations"]["precomputed"]["potential"], "食べられる");
}

#[test]
fn test_stale_precomputed_is_overwritten() {
    let (_dir, path) = write_fixture(&fixture());
    run_hydrate(&path, &HydrateOptions::default()).unwrap();

    let written = read_json(&path);
    assert_eq!(
        entry(&written, "v-benkyou")["conjugations"]["precomputed"]["casual_present"],
        "勉強する"
    );
}

#[test]
fn test_non_verb_containers_removed() {
    let (_dir, path) = write_fixture(&fixture());
    run_hydrate(&path, &HydrateOptions::default()).unwrap();

    let written = read_json(&path);
    assert!(entry(&written, "n-hon").get("conjugations").is_none());
    assert!(entry(&written, "n-shizuka").get("conjugations").is_none());
}

#[test]
fn test_passthrough_fields_survive() {
    let (_dir, path) = write_fixture(&fixture());
    run_hydrate(&path, &HydrateOptions::default()).unwrap();

    let kaku = entry(&read_json(&path), "v-kaku").clone();
    assert_eq!(kaku["book_id"], "b1");
    assert_eq!(kaku["lesson_id"], "l3");
    assert_eq!(kaku["reading"], "かきます");
    assert_eq!(kaku["meaning"], "to write");
}

#[test]
fn test_second_run_is_byte_identical() {
    let (_dir, path) = write_fixture(&fixture());
    run_hydrate(&path, &HydrateOptions::default()).unwrap();
    let first = fs::read(&path).unwrap();

    let report = run_hydrate(&path, &HydrateOptions::default()).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
    // Every surviving verb now has a slot to overwrite
    assert_eq!(report.count(ActionCategory::Added), 0);
    assert_eq!(report.count(ActionCategory::Updated), 3);
    assert_eq!(report.count(ActionCategory::Cleared), 0);
}

#[test]
fn test_output_leaves_input_alone() {
    let (dir, path) = write_fixture(&fixture());
    let before = fs::read(&path).unwrap();
    let output = dir.path().join("hydrated.json");

    let options = HydrateOptions {
        output: Some(output.clone()),
        ..Default::default()
    };
    run_hydrate(&path, &options).unwrap();

    assert_eq!(fs::read(&path).unwrap(), before);
    let written = read_json(&output);
    assert_eq!(
        entry(&written, "v-kaku")["conjugations"]["precomputed"]["te_form"],
        "書いて"
    );
}

#[test]
fn test_dry_run_writes_nothing() {
    let (_dir, path) = write_fixture(&fixture());
    let before = fs::read(&path).unwrap();

    let options = HydrateOptions {
        dry_run: true,
        ..Default::default()
    };
    let report = run_hydrate(&path, &options).unwrap();

    assert_eq!(report.count(ActionCategory::Added), 1);
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_parse_error_aborts_before_mutation() {
    let (_dir, path) = write_fixture(&json!({}));
    fs::write(&path, "[{\"_id\": \"1\", ").unwrap();
    let before = fs::read(&path).unwrap();

    let err = run_hydrate(&path, &HydrateOptions::default()).unwrap_err();
    assert!(matches!(err, DatasetError::Parse { .. }));
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_unknown_provenance_is_fatal() {
    let dataset = json!([{
        "_id": "x",
        "japanese_word": "見ます",
        "part_of_speech": "动2",
        "conjugations": { "wiktionary": {} }
    }]);
    let (_dir, path) = write_fixture(&dataset);

    let err = run_hydrate(&path, &HydrateOptions::default()).unwrap_err();
    assert!(matches!(err, DatasetError::Parse { .. }));
}

#[test]
fn test_missing_dataset_is_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = run_hydrate(&dir.path().join("absent.json"), &HydrateOptions::default()).unwrap_err();
    assert!(matches!(err, DatasetError::Read { .. }));
}

#[test]
fn test_unwritable_output_is_write_error() {
    let (dir, path) = write_fixture(&fixture());
    let options = HydrateOptions {
        output: Some(dir.path().join("missing").join("out.json")),
        ..Default::default()
    };
    let err = run_hydrate(&path, &options).unwrap_err();
    assert!(matches!(err, DatasetError::Write { .. }));
}

#[test]
fn test_fallback_reported_and_strict_rejects() {
    let dataset = json!([
        { "_id": "odd", "japanese_word": "食べます", "part_of_speech": "动1" },
        { "_id": "ok", "japanese_word": "書きます", "part_of_speech": "动1" }
    ]);

    let (_dir, path) = write_fixture(&dataset);
    let report = run_hydrate(&path, &HydrateOptions::default()).unwrap();
    assert_eq!(report.fallbacks.len(), 1);
    assert_eq!(report.fallbacks[0].id, "odd");
    assert_eq!(report.fallbacks[0].fallback, Some(RuleFallback::GodanUnit('べ')));
    assert!(report.errored.is_empty());

    let (_dir, path) = write_fixture(&dataset);
    let strict = HydrateOptions {
        strict: true,
        ..Default::default()
    };
    let report = run_hydrate(&path, &strict).unwrap();
    assert_eq!(report.errored_ids(), vec!["odd"]);
    assert_eq!(report.count(ActionCategory::Added), 1);
    assert!(entry(&read_json(&path), "odd").get("conjugations").is_none());
}

#[test]
fn test_jmdict_with_extra_keys_is_written_back_verbatim() {
    let jmdict = json!({
        "casual_present": "見る",
        "polite_present": "見ます",
        "note": "from JMdict rev 2",
        "senses": [1, 2]
    });
    let dataset = json!([{
        "_id": "v-miru",
        "japanese_word": "見ます",
        "part_of_speech": "动2",
        "conjugations": { "jmdict": jmdict.clone() }
    }]);
    let (_dir, path) = write_fixture(&dataset);

    let report = run_hydrate(&path, &HydrateOptions::default()).unwrap();
    assert!(report.errored.is_empty());
    assert_eq!(report.count(ActionCategory::Updated), 1);

    let written = read_json(&path);
    let miru = entry(&written, "v-miru");
    assert_eq!(miru["conjugations"]["jmdict"], jmdict);
    assert_eq!(
        serde_json::to_string_pretty(&miru["conjugations"]["jmdict"]).unwrap(),
        serde_json::to_string_pretty(&jmdict).unwrap()
    );
    assert_eq!(miru["conjugations"]["precomputed"]["casual_present"], "見る");
}

#[test]
fn test_partial_jmdict_does_not_abort_the_run() {
    let dataset = json!([
        {
            "_id": "v-miru",
            "japanese_word": "見ます",
            "part_of_speech": "动2",
            "conjugations": { "jmdict": { "casual_present": "見る" } }
        },
        { "_id": "v-kaku", "japanese_word": "書きます", "part_of_speech": "动1" }
    ]);
    let (_dir, path) = write_fixture(&dataset);

    let report = run_hydrate(&path, &HydrateOptions::default()).unwrap();
    assert_eq!(report.count(ActionCategory::Added), 1);
    assert_eq!(report.count(ActionCategory::Updated), 1);

    let written = read_json(&path);
    let miru = entry(&written, "v-miru");
    assert_eq!(miru["conjugations"]["jmdict"], json!({ "casual_present": "見る" }));
    assert_eq!(miru["conjugations"]["precomputed"]["te_form"], "見て");
}

#[test]
fn test_untouched_entry_keeps_its_bytes() {
    let shizuka = json!({
        "_id": "n-shizuka",
        "book_id": "b2",
        "lesson_id": "l7",
        "japanese_word": "静か",
        "reading": "しずか",
        "chinese_meaning": "安静",
        "part_of_speech": "形容动词",
        "example_sentences": [{ "ja": "静かな部屋", "zh": "安静的房间" }]
    });
    let dataset = json!([
        shizuka.clone(),
        { "_id": "v-kaku", "japanese_word": "書きます", "part_of_speech": "动1" }
    ]);
    let (_dir, path) = write_fixture(&dataset);

    let report = run_hydrate(&path, &HydrateOptions::default()).unwrap();
    assert_eq!(report.untouched, 1);

    let written = read_json(&path);
    let after = entry(&written, "n-shizuka");
    assert_eq!(
        serde_json::to_string_pretty(after).unwrap(),
        serde_json::to_string_pretty(&shizuka).unwrap()
    );
    let keys: Vec<&str> = after.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        [
            "_id",
            "book_id",
            "lesson_id",
            "japanese_word",
            "reading",
            "chinese_meaning",
            "part_of_speech",
            "example_sentences"
        ]
    );
}

#[test]
fn test_hydrated_verb_keeps_field_order_and_appends_container() {
    let dataset = json!([{
        "_id": "v-kaku",
        "lesson_id": "l3",
        "japanese_word": "書きます",
        "meaning": "to write",
        "part_of_speech": "动1"
    }]);
    let (_dir, path) = write_fixture(&dataset);
    run_hydrate(&path, &HydrateOptions::default()).unwrap();

    let written = read_json(&path);
    let keys: Vec<&str> = entry(&written, "v-kaku")
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        ["_id", "lesson_id", "japanese_word", "meaning", "part_of_speech", "conjugations"]
    );
}

#[test]
fn test_dataset_without_changes_is_byte_identical() {
    let dataset = json!([
        { "_id": "n-hon", "reading": "ほん", "japanese_word": "本", "part_of_speech": "名词" },
        { "japanese_word": "静か", "_id": "n-shizuka", "part_of_speech": "形容动词", "tags": [] }
    ]);
    let (_dir, path) = write_fixture(&dataset);
    let before = fs::read(&path).unwrap();

    let report = run_hydrate(&path, &HydrateOptions::default()).unwrap();
    assert_eq!(report.untouched, 2);
    assert_eq!(fs::read(&path).unwrap(), before);
}
