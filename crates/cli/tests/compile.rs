// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

mod common;
use common::*;
use serde_json::json;
use std::fs;

// ─── Input sources ───────────────────────────────────────────────────────────

#[test]
fn compile_from_flag() {
    let out = compile_json(&["--set", r#"{"publics": ""}"#]);
    assert_eq!(out, json!({"where": {"_visibility": "public"}}));
}

#[test]
fn compile_from_stdin() {
    let output = sq()
        .args(["compile", "--now", NOW])
        .write_stdin(r#"{"roots": ""}"#)
        .output()
        .unwrap();
    assert!(output.status.success());
    let out: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(out, json!({"where": {"_parentsCount": 0}}));
}

#[test]
fn compile_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("set.json");
    fs::write(&path, r#"{"privates": ""}"#).unwrap();
    let out = compile_json(&["--set-file", path.to_str().unwrap()]);
    assert_eq!(out, json!({"where": {"_visibility": "private"}}));
}

#[test]
fn empty_stdin_fails_with_hint() {
    sq().arg("compile")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no set expression given"));
}

#[test]
fn malformed_set_fails() {
    sq().args(["compile", "--set", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid set expression"));
}

#[test]
fn malformed_now_fails() {
    sq().args(["compile", "--set", "{}", "--now", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid timestamp"));
}

// ─── Compilation ─────────────────────────────────────────────────────────────

#[test]
fn empty_set_is_neutral() {
    assert_eq!(compile_json(&["--set", "{}"]), json!({"where": {}}));
}

#[test]
fn unknown_condition_is_neutral() {
    assert_eq!(compile_json(&["--set", r#"{"week": ""}"#]), json!({"where": {}}));
}

#[test]
fn or_of_conditions() {
    let out = compile_json(&["--set", r#"{"or": [{"publics": ""}, {"protecteds": ""}]}"#]);
    assert_eq!(
        out,
        json!({"where": {"or": [{"_visibility": "public"}, {"_visibility": "protected"}]}})
    );
}

#[test]
fn calendar_month_window() {
    let out = compile_json(&["--set", r#"{"createds-1mon": ""}"#]);
    assert_eq!(
        out["where"]["_createdDateTime"]["between"],
        json!(["2026-09-14T09:00:00.000Z", "2026-10-14T09:00:00.000Z"])
    );
}

#[test]
fn caller_filter_is_merged_first() {
    let out = compile_json(&[
        "--set",
        r#"{"publics": ""}"#,
        "--filter",
        r#"{"where": {"name": {"like": "a%"}}, "limit": 20, "skip": 40}"#,
    ]);
    assert_eq!(
        out,
        json!({
            "where": {"and": [{"name": {"like": "a%"}}, {"_visibility": "public"}]},
            "limit": 20,
            "skip": 40
        })
    );
}

#[test]
fn caller_where_is_passed_through_verbatim() {
    let out = compile_json(&[
        "--set",
        r#"{"roots": ""}"#,
        "--filter",
        r#"{"where": {"meta": {}, "tags": {"inq": "a,b"}, "and": [{"y": 2}]}}"#,
    ]);
    assert_eq!(
        out["where"],
        json!({"and": [
            {"meta": {}, "tags": {"inq": "a,b"}, "and": [{"y": 2}]},
            {"_parentsCount": 0}
        ]})
    );
}

#[test]
fn malformed_filter_fails() {
    sq().args(["compile", "--set", "{}", "--filter", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid filter"));
}

// ─── Config ──────────────────────────────────────────────────────────────────

#[test]
fn config_renames_fields() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sq.toml");
    fs::write(&path, "[fields]\nvisibility = \"access\"\n").unwrap();
    let out = compile_json(&["--config", path.to_str().unwrap(), "--set", r#"{"publics": ""}"#]);
    assert_eq!(out, json!({"where": {"access": "public"}}));
}

#[test]
fn config_from_env() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sq.toml");
    fs::write(&path, "[fields]\nparents_count = \"depth\"\n").unwrap();
    let output = sq()
        .env("SQ_CONFIG", &path)
        .args(["compile", "--set", r#"{"roots": ""}"#])
        .output()
        .unwrap();
    assert!(output.status.success());
    let out: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(out, json!({"where": {"depth": 0}}));
}

#[test]
fn depth_limit_fails_closed() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sq.toml");
    fs::write(&path, "max_depth = 1\n").unwrap();
    let out = compile_json(&[
        "--config",
        path.to_str().unwrap(),
        "--set",
        r#"{"or": [{"or": [{"publics": ""}]}]}"#,
    ]);
    assert_eq!(out, json!({"where": {"or": [{"_id": {"inq": []}}]}}));
}

#[test]
fn user_config_file_is_read() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".config").join("setql");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[fields]\nvisibility = \"scope\"\n").unwrap();
    let output = sq_with_home(home.path())
        .args(["compile", "--set", r#"{"publics": ""}"#])
        .output()
        .unwrap();
    assert!(output.status.success());
    let out: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(out, json!({"where": {"scope": "public"}}));
}

#[test]
fn invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sq.toml");
    fs::write(&path, "max_depth = 0\n").unwrap();
    sq().args(["--config", path.to_str().unwrap(), "compile", "--set", "{}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_depth"));
}
