//! Integration tests for the qstep binary

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{qstep, temp_config};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    qstep(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("trace"))
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn trace_help_lists_pivot_values() {
    let dir = TempDir::new().unwrap();
    qstep(&dir)
        .args(["trace", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--pivot"))
        .stdout(predicate::str::contains("middle"));
}

// ============================================================================
// Trace Output Tests
// ============================================================================

#[test]
fn trace_json_contains_every_step() {
    let dir = TempDir::new().unwrap();
    let output = qstep(&dir)
        .args(["trace", "--array", "3,1,2", "--pivot", "first", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["version"], 1);
    assert_eq!(doc["pivot"], "first");
    assert_eq!(doc["input"], serde_json::json!([3, 1, 2]));

    let steps = doc["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 18);
    assert_eq!(steps[0]["message"], "Moving pivot from index 0 to end");
    assert_eq!(steps[1]["i_index"], -1);
    assert_eq!(steps[17]["array"], serde_json::json!([1, 2, 3]));
    assert_eq!(steps[17]["message"], "Sorting complete!");
}

#[test]
fn trace_text_output_numbers_steps() {
    let dir = TempDir::new().unwrap();
    let output = qstep(&dir)
        .args(["trace", "-a", "2,1", "-p", "last"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    // [2, 1] with the last element as pivot:
    // start, compare, no swap, place, placed, complete
    insta::assert_snapshot!(stdout.trim_end(), @r"
    [1/6] Partition starting. Pivot = 1 at index 1
        2  1
           p

    [2/6] Comparing arr[0] = 2 with pivot = 1 (comparing)
        2  1
        j  p

    [3/6] arr[0] = 2 >= 1, no swap needed
        2  1
        j  p

    [4/6] Placing pivot in correct position: swapping arr[0] and arr[1] (swapping)
        2  1
        i  p

    [5/6] Pivot 1 is now in correct position at index 0
        1  2
        p

    [6/6] Sorting complete!
        1  2
    ");
}

#[test]
fn trace_accepts_negative_numbers() {
    let dir = TempDir::new().unwrap();
    let output = qstep(&dir)
        .args(["trace", "--array", "-3, 7, -10", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let steps = doc["steps"].as_array().unwrap();
    assert_eq!(
        steps.last().unwrap()["array"],
        serde_json::json!([-10, -3, 7])
    );
}

#[test]
fn trace_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("trace.json");
    qstep(&dir)
        .args(["trace", "-a", "5", "-f", "json", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(doc["steps"].as_array().unwrap().len(), 1);
}

#[test]
fn trace_uses_configured_defaults() {
    let (dir, _path) = temp_config("[trace]\npivot = \"middle\"\ndefault_array = [4, 9, 1, 7]\n");
    let output = qstep(&dir)
        .args(["trace", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["pivot"], "middle");
    assert_eq!(doc["input"], serde_json::json!([4, 9, 1, 7]));
    assert_eq!(
        doc["steps"][0]["message"],
        "Moving pivot from index 1 to end"
    );
}

#[test]
fn pivot_flag_overrides_config() {
    let (dir, _path) = temp_config("[trace]\npivot = \"middle\"\n");
    let output = qstep(&dir)
        .args(["trace", "-a", "3,1,2", "-p", "last", "-f", "json"])
        .output()
        .unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["pivot"], "last");
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn trace_rejects_input_without_numbers() {
    let dir = TempDir::new().unwrap();
    qstep(&dir)
        .args(["trace", "--array", "a, b"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please enter valid numbers"));
}

#[test]
fn trace_rejects_empty_configured_array() {
    let (dir, _path) = temp_config("[trace]\ndefault_array = []\n");
    qstep(&dir)
        .arg("trace")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("empty array"));
}

#[test]
fn unknown_pivot_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    qstep(&dir)
        .args(["trace", "--pivot", "random"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn invalid_config_file_is_reported() {
    let (dir, _path) = temp_config("[trace]\npivot = 42\n");
    qstep(&dir)
        .arg("trace")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn play_requires_a_terminal() {
    let dir = TempDir::new().unwrap();
    qstep(&dir)
        .args(["play", "-a", "3,1,2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("interactive terminal"));
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn completions_generate_for_bash() {
    let dir = TempDir::new().unwrap();
    qstep(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("qstep"));
}
