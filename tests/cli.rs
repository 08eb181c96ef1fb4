//! End-to-end tests for the todoparse binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn todoparse(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("todoparse").unwrap();
    cmd.env("TODOPARSE_CONFIG", config_dir.path().join("config.yaml"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn parse_prints_pretty_task() {
    let dir = TempDir::new().unwrap();
    todoparse(&dir)
        .args(["parse", "(A) 2017-01-01 Call mom +family @phone"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Call mom"))
        .stdout(predicate::str::contains("Priority"))
        .stdout(predicate::str::contains("2017-01-01"));
}

#[test]
fn parse_prints_json_task() {
    let dir = TempDir::new().unwrap();
    let output = todoparse(&dir)
        .args(["-o", "json", "parse", "x 2017-01-05 2017-01-01 Test message"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["done"], true);
    assert_eq!(value["completionDate"], "2017-01-05");
    assert_eq!(value["creationDate"], "2017-01-01");
    assert_eq!(value["description"], "Test message");
}

#[test]
fn read_uses_config_extensions_and_default_output() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.yaml"),
        "general:\n  default_output: json\nparser:\n  extensions: [due]\n",
    )
    .unwrap();
    let todo = dir.path().join("todo.txt");
    std::fs::write(&todo, "\npay rent due:2017-02-01 +home\n\n(B) call bank\n").unwrap();

    let output = todoparse(&dir).arg("read").arg(&todo).output().unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 2);
    assert_eq!(value["items"][0]["due"], "2017-02-01");
    assert_eq!(value["items"][0]["description"], "pay rent");
    assert_eq!(value["items"][1]["priority"], "B");
}

#[test]
fn read_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    todoparse(&dir)
        .args(["read", "/wrong/path"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File /wrong/path does not exist."));
}

#[test]
fn bad_extension_key_fails() {
    let dir = TempDir::new().unwrap();
    todoparse(&dir)
        .args(["parse", "anything", "--ext", "not a key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn completions_are_generated() {
    let dir = TempDir::new().unwrap();
    todoparse(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("todoparse"));
}
