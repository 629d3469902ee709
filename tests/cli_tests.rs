//! Integration tests for the compass CLI
//!
//! These tests run the compass binary against a temporary copy of a small
//! campus data set.

use std::fs;
use std::path::Path;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

const EDGES: &str = "\
LocationID_1,LocationID_2,Name_1,Name_2,Time
1,2,Reitz Union,Turlington Hall,5
2,3,Turlington Hall,Library West,7
1,3,Reitz Union,Library West,20
";

const CLASSES: &str = "\
ClassCode,LocationID,Start Time (HH:MM),End Time (HH:MM)
COP3530,3,10:40,11:30
MAC2311,2,09:35,10:25
";

/// Get a Command for compass that ignores any user-level config
fn compass(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("compass");
    cmd.env("COMPASS_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("COMPASS_LOG");
    cmd
}

/// A working directory with `data/edges.csv` and `data/classes.csv`
fn campus() -> TempDir {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("edges.csv"), EDGES).unwrap();
    fs::write(data.join("classes.csv"), CLASSES).unwrap();
    dir
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    compass(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: compass"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("exec"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    compass(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("compass"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    let dir = campus();
    compass(dir.path())
        .current_dir(dir.path())
        .args(["--format", "xml", "check"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_subcommand_json_usage_error() {
    let dir = campus();
    compass(dir.path())
        .current_dir(dir.path())
        .args(["--format", "json", "teleport"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_missing_data_exit_code_3() {
    let dir = tempdir().unwrap();
    compass(dir.path())
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("data files not found"));
}

#[test]
fn test_bad_row_exit_code_3() {
    let dir = campus();
    fs::write(
        dir.path().join("data/edges.csv"),
        "a,b,c,d,e\n1,2,X,Y,five\n",
    )
    .unwrap();

    compass(dir.path())
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 2"));
}

// ============================================================================
// Commands
// ============================================================================

#[test]
fn test_check_reports_counts() {
    let dir = campus();
    compass(dir.path())
        .current_dir(dir.path())
        .args(["--quiet", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("locations: 3"))
        .stdout(predicate::str::contains("edges: 3"))
        .stdout(predicate::str::contains("classes: 2"));
}

#[test]
fn test_run_script_from_stdin() {
    let dir = campus();
    compass(dir.path())
        .current_dir(dir.path())
        .write_stdin("4\ncheckEdgeStatus 1 2\ntoggleEdgesClosure 1 1 2\ncheckEdgeStatus 2 1\nisConnected 1 2\n")
        .assert()
        .success()
        .stdout("open\nsuccessful\nclosed\nsuccessful\n");
}

#[test]
fn test_run_script_file() {
    let dir = campus();
    let script = dir.path().join("commands.txt");
    fs::write(
        &script,
        "3\ninsert \"Ann Lee\" 11111111 1 2 COP3530 MAC2311\nprintShortestEdges 11111111\nverifySchedule 11111111\n",
    )
    .unwrap();

    compass(dir.path())
        .current_dir(dir.path())
        .arg("run")
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(
            "successful\n\
             Name: Ann Lee\n\
             COP3530 | Total Time: 12\n\
             MAC2311 | Total Time: 5\n\
             Schedule Check for Ann Lee:\n\
             MAC2311 - COP3530 \"Can make it!\"\n",
        );
}

#[test]
fn test_exec_with_explicit_data_dir() {
    let dir = campus();
    let elsewhere = tempdir().unwrap();
    compass(dir.path())
        .current_dir(elsewhere.path())
        .arg("--data-dir")
        .arg(dir.path().join("data"))
        .args(["exec", "toggleEdgesClosure 1 2 3", "printStudentZone 1", "isConnected 3 1"])
        .assert()
        .success()
        .stdout("successful\nunsuccessful\nsuccessful\n");
}

#[test]
fn test_exec_json_output() {
    let dir = campus();
    let output = compass(dir.path())
        .current_dir(dir.path())
        .args(["--format", "json", "exec", "checkEdgeStatus 1 9"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["command"], "checkEdgeStatus 1 9");
    assert_eq!(value["lines"][0], "DNE");
}

#[test]
fn test_config_file_sets_data_and_format() {
    let dir = campus();
    let config = dir.path().join("compass.toml");
    fs::write(
        &config,
        format!(
            "[data]\ndir = {:?}\n\n[output]\nformat = \"json\"\n",
            dir.path().join("data").display().to_string()
        ),
    )
    .unwrap();
    let elsewhere = tempdir().unwrap();

    compass(dir.path())
        .current_dir(elsewhere.path())
        .arg("--config")
        .arg(&config)
        .args(["exec", "isConnected 1 3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\":true"));
}

#[test]
fn test_short_script_is_usage_error() {
    let dir = campus();
    compass(dir.path())
        .current_dir(dir.path())
        .arg("run")
        .write_stdin("3\nisConnected 1 2\n")
        .assert()
        .code(2);
}
