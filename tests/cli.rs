//! End-to-end tests for the respira binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A respira command with an isolated home directory.
fn respira(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("respira").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn list_shows_builtin_techniques() {
    let home = TempDir::new().unwrap();
    respira(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vagal Awakening"))
        .stdout(predicate::str::contains("Four Directions"))
        .stdout(predicate::str::contains("4-7-8-0"));
}

#[test]
fn list_json_is_machine_readable() {
    let home = TempDir::new().unwrap();
    let output = respira(&home)
        .args(["list", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["count"], 3);
    assert_eq!(value["items"][1]["cycles"], 8);
}

#[test]
fn show_by_name_is_case_insensitive() {
    let home = TempDir::new().unwrap();
    respira(&home)
        .args(["show", "breathing matrix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6-2-7-2"))
        .stdout(predicate::str::contains("Exhale"));
}

#[test]
fn show_unknown_technique_fails() {
    let home = TempDir::new().unwrap();
    respira(&home)
        .args(["show", "holotropic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn show_out_of_range_number_fails() {
    let home = TempDir::new().unwrap();
    respira(&home)
        .args(["show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("99"));
}

#[test]
fn start_all_zero_pattern_completes_instantly() {
    let home = TempDir::new().unwrap();
    respira(&home)
        .args(["start", "--pattern", "0-0-0-0", "--cycles", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session complete"))
        .stdout(predicate::str::contains("2 of 2"));
}

#[test]
fn start_json_emits_event_lines() {
    let home = TempDir::new().unwrap();
    let output = respira(&home)
        .args(["start", "--pattern", "0-0-0-0", "--cycles", "1", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\"initialized\""));
    assert!(text.contains("\"cycle_completed\""));
    assert!(text.contains("\"session_completed\""));
}

#[test]
fn start_rejects_malformed_pattern() {
    let home = TempDir::new().unwrap();
    respira(&home)
        .args(["start", "--pattern", "4-7-8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pattern"));
}

#[test]
fn start_rejects_zero_cycles() {
    let home = TempDir::new().unwrap();
    respira(&home)
        .args(["start", "--pattern", "0-0-0-0", "--cycles", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cycle"));
}

#[test]
fn completions_generate_for_bash() {
    let home = TempDir::new().unwrap();
    respira(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("respira"));
}

#[test]
fn completions_unknown_shell_fails() {
    let home = TempDir::new().unwrap();
    respira(&home)
        .args(["completions", "tcsh"])
        .assert()
        .failure();
}

#[test]
fn user_techniques_appear_in_list() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".respira");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.yaml"),
        r"
techniques:
  - name: Coherent
    description: Five-five breathing
    pattern: [5, 0, 5, 0]
    instructions: ['Breathe in', '', 'Breathe out', '']
    cycles: 10
",
    )
    .unwrap();

    respira(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coherent"))
        .stdout(predicate::str::contains("5-0-5-0"));
}

#[test]
fn malformed_config_fails_cleanly() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".respira");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.yaml"), "techniques: [not a technique]").unwrap();

    respira(&home)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));
}
