//! Integration tests for the config subcommands

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{config_path, qstep, temp_config};

#[test]
fn show_prints_defaults_without_a_file() {
    let dir = TempDir::new().unwrap();
    qstep(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[trace]"))
        .stdout(predicate::str::contains("pivot = \"first\""))
        .stdout(predicate::str::contains("[player]"));
}

#[test]
fn show_reflects_file_contents() {
    let (dir, _path) = temp_config("[player]\ntheme = \"ocean\"\n");
    qstep(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme = \"ocean\""));
}

#[test]
fn path_honors_environment_override() {
    let dir = TempDir::new().unwrap();
    let expected = config_path(&dir);
    qstep(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn migrate_creates_missing_file_with_yes() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);
    qstep(&dir)
        .args(["config", "migrate", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("does not exist"))
        .stdout(predicate::str::contains("+ pivot = \"first\""));

    let written = fs::read_to_string(&path).unwrap();
    let config = qstep::Config::from_toml(&written).unwrap();
    assert_eq!(config, qstep::Config::default());
}

#[test]
fn migrate_adds_only_missing_fields() {
    let (dir, path) = temp_config("# keep me\n[trace]\npivot = \"last\"\n");
    qstep(&dir)
        .args(["config", "migrate", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+ default_array"))
        .stdout(predicate::str::contains("+ pivot").not());

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("# keep me"));
    assert!(written.contains("pivot = \"last\""));
    assert!(written.contains("[player]"));
}

#[test]
fn migrate_without_yes_is_a_no_op_when_not_interactive() {
    let (dir, path) = temp_config("[trace]\n");
    qstep(&dir)
        .args(["config", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes made."));
    assert_eq!(fs::read_to_string(&path).unwrap(), "[trace]\n");
}

#[test]
fn migrate_up_to_date_config() {
    let full = toml::to_string_pretty(&qstep::Config::default()).unwrap();
    let (dir, _path) = temp_config(&full);
    qstep(&dir)
        .args(["config", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));
}
