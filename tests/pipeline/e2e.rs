//! The `katsuyo` binary end to end.

use std::path::Path;
use std::process::{Command, Output};

use crate::common::{entry, fixture, read_json, write_fixture};

fn katsuyo(args: &[&str], dataset: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_katsuyo"))
        .args(args)
        .arg("--dataset")
        .arg(dataset)
        .env("NO_COLOR", "1")
        .env_remove("KATSUYO_LOG")
        .output()
        .expect("run katsuyo")
}

#[test]
fn test_hydrate_then_verify() {
    let mut dataset = fixture();
    if let Some(entries) = dataset.as_array_mut() {
        entries.retain(|entry| entry["_id"] != "v-broken");
    }
    let (_dir, path) = write_fixture(&dataset);

    let before = katsuyo(&["verify"], &path);
    assert_eq!(before.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&before.stdout).contains("FAIL"));

    let hydrate = katsuyo(&["hydrate"], &path);
    assert!(hydrate.status.success());
    let stdout = String::from_utf8_lossy(&hydrate.stdout);
    assert!(stdout.contains("HYDRATION SUMMARY"));

    let after = katsuyo(&["verify"], &path);
    assert!(after.status.success());
    assert!(String::from_utf8_lossy(&after.stdout).contains("PASS"));
}

#[test]
fn test_hydrate_lists_errored_ids() {
    let (_dir, path) = write_fixture(&fixture());
    let output = katsuyo(&["hydrate"], &path);

    // Entry failures never fail the run
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("errored ids: v-broken"));
}

#[test]
fn test_hydrate_dry_run() {
    let (_dir, path) = write_fixture(&fixture());
    let output = katsuyo(&["hydrate", "--dry-run"], &path);
    assert!(output.status.success());
    assert!(entry(&read_json(&path), "v-kaku").get("conjugations").is_none());
}

#[test]
fn test_fatal_error_exits_nonzero() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = katsuyo(&["hydrate"], &dir.path().join("absent.json"));
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("❌"));
}

#[test]
fn test_show_prefers_requested_source() {
    let (_dir, path) = write_fixture(&fixture());

    let jmdict = katsuyo(&["show", "v-taberu", "--source", "jmdict", "--level", "beginner"], &path);
    assert!(jmdict.status.success());
    assert!(String::from_utf8_lossy(&jmdict.stdout).contains("jm"));

    // Nothing precomputed yet: falls back to jmdict
    let fallback = katsuyo(&["show", "v-taberu"], &path);
    assert!(fallback.status.success());
    assert!(String::from_utf8_lossy(&fallback.stdout).contains("precomputed missing"));

    let missing = katsuyo(&["show", "n-shizuka"], &path);
    assert_eq!(missing.status.code(), Some(1));
}

#[test]
fn test_show_reads_partial_jmdict() {
    let dataset = serde_json::json!([{
        "_id": "v-miru",
        "japanese_word": "見ます",
        "part_of_speech": "动2",
        "conjugations": { "jmdict": { "casual_present": "見る", "note": "rev 2" } }
    }]);
    let (_dir, path) = write_fixture(&dataset);

    let output = katsuyo(&["show", "v-miru", "--source", "jmdict", "--level", "beginner"], &path);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("見る"));
    assert!(!stdout.contains("rev 2"));
}

#[test]
fn test_conjugate_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_katsuyo"))
        .args(["conjugate", "書きます", "--tag", "动1"])
        .env("NO_COLOR", "1")
        .output()
        .expect("run katsuyo");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("書いて"));
    assert!(stdout.contains("書こう"));

    let noun = Command::new(env!("CARGO_BIN_EXE_katsuyo"))
        .args(["conjugate", "本", "--tag", "名词"])
        .output()
        .expect("run katsuyo");
    assert_eq!(noun.status.code(), Some(1));
}
