//! Integration tests for `toponym lookup` and `toponym dataset`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Path to the compiled `toponym` binary.
fn toponym_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("toponym");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(toponym_bin())
        .args(args)
        .env_remove("TOPONYM_DATASET")
        .output()
        .expect("run toponym")
}

#[test]
fn lookup_official_english_name() {
    let out = run(&["lookup", "--language", "en", "Tbilisi"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "official\n");
}

#[test]
fn lookup_official_georgian_name() {
    let out = run(&["lookup", "-l", "ka", "ქუთაისი"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn lookup_alias_is_not_official() {
    let out = run(&["lookup", "--language", "en", "Tiflis"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "not official\n");
}

#[test]
fn lookup_is_exact() {
    for name in ["tbilisi", "Tbilisi ", "TBILISI"] {
        let out = run(&["lookup", "--language", "en", name]);
        assert_eq!(out.status.code(), Some(1), "{name:?} must not match");
    }
}

#[test]
fn lookup_lists_are_separate() {
    let out = run(&["lookup", "--language", "ka", "Tbilisi"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn lookup_json() {
    let out = run(&["lookup", "--format", "json", "--language", "en", "Batumi"]);
    let v: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout is one JSON object");
    assert_eq!(v["official"], true);
    assert_eq!(v["language"], "en");
}

#[test]
fn dataset_reports_embedded_lists() {
    let out = run(&["dataset"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("int_name=Georgia"), "stdout: {stdout}");
    assert!(stdout.contains("names (ka): 1152"), "stdout: {stdout}");
    assert!(stdout.contains("names (en): 1120"), "stdout: {stdout}");
}

#[test]
fn dataset_json() {
    let out = run(&["dataset", "-f", "json"]);
    let v: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout is one JSON object");
    assert_eq!(v["boundary"]["admin_level"], "2");
    assert_eq!(v["place_types"][0], "city");
}
