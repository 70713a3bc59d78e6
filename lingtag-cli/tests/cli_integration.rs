//! Integration tests driving the lingtag binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn lingtag() -> Command {
    Command::cargo_bin("lingtag").expect("binary should build")
}

#[test]
fn detects_indonesian_from_stdin() {
    lingtag()
        .args(["detect", "--quiet"])
        .write_stdin("yang dan di ini itu")
        .assert()
        .success()
        .stdout(predicate::str::contains("-\tid"));
}

#[test]
fn detects_english_from_stdin() {
    lingtag()
        .args(["detect", "--quiet"])
        .write_stdin("the and is in of")
        .assert()
        .success()
        .stdout(predicate::str::contains("-\ten"));
}

#[test]
fn detects_japanese_from_stdin() {
    lingtag()
        .args(["detect", "--quiet"])
        .write_stdin("これは the and is test")
        .assert()
        .success()
        .stdout(predicate::str::contains("-\tjp"));
}

#[test]
fn empty_stdin_is_unknown() {
    lingtag()
        .args(["detect", "--quiet"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("-\tunknown"));
}

#[test]
fn detects_files_by_glob() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("id.txt"), "yang dan di ini itu").unwrap();
    fs::write(temp_dir.path().join("en.txt"), "the and is in of").unwrap();

    let pattern = temp_dir.path().join("*.txt").to_string_lossy().to_string();

    lingtag()
        .args(["detect", "--quiet", "--input", &pattern])
        .assert()
        .success()
        .stdout(predicate::str::contains("id.txt\tid"))
        .stdout(predicate::str::contains("en.txt\ten"));
}

#[test]
fn json_format_emits_records() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("jp.txt"), "日本語のテキスト").unwrap();

    let pattern = temp_dir.path().join("jp.txt").to_string_lossy().to_string();

    let output = lingtag()
        .args(["detect", "--quiet", "--format", "json", "--input", &pattern])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let records: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(records[0]["tag"], "jp");
    assert_eq!(records[0]["language"], "Japanese");
}

#[test]
fn missing_input_file_fails() {
    lingtag()
        .args(["detect", "--quiet", "--input", "/nonexistent/nothing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn list_languages_shows_all_tags() {
    lingtag()
        .args(["list", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jp"))
        .stdout(predicate::str::contains("id"))
        .stdout(predicate::str::contains("en"))
        .stdout(predicate::str::contains("unknown"));
}

#[test]
fn list_formats_shows_text_and_json() {
    lingtag()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"));
}
