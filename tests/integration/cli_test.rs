//! CLI end-to-end tests.
//!
//! Only cache-free paths run here (`--no-cache`, `segments`, `markers`,
//! `completions`) so the suite never touches the user's real cache
//! directory.

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::interview_fixture_path;

fn itl() -> Command {
    Command::cargo_bin("itl").expect("binary builds")
}

#[test]
fn analyze_prints_a_text_report() {
    itl()
        .arg("analyze")
        .arg(interview_fixture_path())
        .arg("--no-cache")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session practice-1"))
        .stdout(predicate::str::contains("Segments (4):"))
        .stdout(predicate::str::contains("Markers ("))
        .stdout(predicate::str::contains("Momentum:"));
}

#[test]
fn analyze_json_emits_the_full_record() {
    let output = itl()
        .arg("analyze")
        .arg(interview_fixture_path())
        .arg("--no-cache")
        .arg("--format")
        .arg("json")
        .output()
        .expect("command runs");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["sessionId"], "practice-1");
    assert_eq!(value["segments"].as_array().map(|s| s.len()), Some(4));
    assert!(value["transcriptHash"].as_str().unwrap().starts_with("itl-"));
    assert!(value["momentumPoints"].as_array().is_some());
}

#[test]
fn analyze_honors_session_id_override() {
    itl()
        .arg("analyze")
        .arg(interview_fixture_path())
        .arg("--no-cache")
        .arg("--session-id")
        .arg("override-7")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session override-7"));
}

#[test]
fn segments_lists_scored_pairs() {
    itl()
        .arg("segments")
        .arg(interview_fixture_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("relevance"))
        .stdout(predicate::str::contains("Tell me about a time you improved a process"));
}

#[test]
fn markers_lists_flagged_moments() {
    itl()
        .arg("markers")
        .arg(interview_fixture_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("HIGHLIGHT"))
        .stdout(predicate::str::contains("severity"));
}

#[test]
fn missing_file_fails_with_context() {
    itl()
        .arg("analyze")
        .arg("no-such-transcript.json")
        .arg("--no-cache")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-transcript.json"));
}

#[test]
fn malformed_json_fails_with_context() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("bad.json");
    std::fs::write(&path, "[ { not json").unwrap();

    itl()
        .arg("segments")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.json"));
}

#[test]
fn completions_generate_for_bash() {
    itl()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("itl"));
}

#[test]
fn help_mentions_the_pipeline() {
    itl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("markers"));
}
