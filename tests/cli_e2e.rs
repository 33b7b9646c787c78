#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn notez(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("notez").unwrap();
    cmd.env("NOTEZ_HOME", home.path())
        .env_remove("NOTEZ_LOG")
        .env("EDITOR", "false");
    cmd
}

fn create(home: &TempDir, title: &str, content: &str) {
    notez(home)
        .args(["create", "--no-editor", title, content])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note created"));
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn create_then_list() {
    let home = TempDir::new().unwrap();
    create(&home, "Groceries", "milk and eggs");

    notez(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Groceries milk and eggs"));

    // naked invocation lists too
    notez(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"));
}

#[test]
fn content_words_are_joined() {
    let home = TempDir::new().unwrap();
    notez(&home)
        .args(["n", "--no-editor", "Plan", "ship", "it", "today"])
        .assert()
        .success();

    notez(&home)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ship it today"));
}

#[test]
fn blank_content_is_rejected_and_nothing_is_written() {
    let home = TempDir::new().unwrap();
    notez(&home)
        .args(["create", "--no-editor", "Only a title"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Content cannot be empty"));

    assert!(!home.path().join("notes.json").exists());
    notez(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."));
}

#[test]
fn storage_file_uses_camel_case_keys() {
    let home = TempDir::new().unwrap();
    create(&home, "Title", "Body");

    let raw = fs::read_to_string(home.path().join("notes.json")).unwrap();
    assert!(raw.contains("\"createdAt\""));
    assert!(raw.contains("\"updatedAt\""));
    assert!(raw.contains("\"title\": \"Title\""));
}

#[test]
fn sort_by_title_ignores_case() {
    let home = TempDir::new().unwrap();
    for title in ["Banana", "apple", "Cherry"] {
        create(&home, title, "fruit");
    }

    let out = stdout_of(notez(&home).args(["list", "--sort", "title-asc"]));
    let apple = out.find("2. apple").unwrap();
    let banana = out.find("1. Banana").unwrap();
    let cherry = out.find("3. Cherry").unwrap();
    assert!(apple < banana && banana < cherry);
}

#[test]
fn search_matches_title_or_content() {
    let home = TempDir::new().unwrap();
    create(&home, "Team Meeting", "agenda");
    create(&home, "Lunch", "no relation");
    create(&home, "Notes", "after the MEETING");

    let out = stdout_of(notez(&home).args(["search", "meeting"]));
    assert!(out.contains("Team Meeting"));
    assert!(out.contains("3. Notes"));
    assert!(!out.contains("Lunch"));

    let out = stdout_of(notez(&home).args(["ls", "-s", "lunch"]));
    assert!(out.contains("2. Lunch"));
}

#[test]
fn view_unknown_index_fails() {
    let home = TempDir::new().unwrap();
    create(&home, "Only", "one");

    notez(&home)
        .args(["view", "9"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Index 9 not found"));
}

#[test]
fn edit_with_flags_skips_the_editor() {
    let home = TempDir::new().unwrap();
    create(&home, "Draft", "first words");

    notez(&home)
        .args(["edit", "1", "--title", "Final"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note updated: Final"));

    notez(&home)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final").and(predicate::str::contains("first words")));
}

#[test]
fn edit_without_flags_reports_editor_failure() {
    let home = TempDir::new().unwrap();
    create(&home, "Draft", "words");

    notez(&home)
        .args(["edit", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn delete_asks_for_confirmation() {
    let home = TempDir::new().unwrap();
    create(&home, "Keep", "a");
    create(&home, "Drop", "b");

    notez(&home)
        .args(["delete", "2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing deleted"));

    notez(&home)
        .args(["rm", "2"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted: Drop"));

    let out = stdout_of(notez(&home).arg("list"));
    assert!(out.contains("Keep"));
    assert!(!out.contains("Drop"));
}

#[test]
fn delete_with_yes_and_closed_stdin() {
    let home = TempDir::new().unwrap();
    create(&home, "A", "a");
    create(&home, "B", "b");

    // no answer at all is a no
    notez(&home)
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing deleted"));

    notez(&home)
        .args(["rm", "1", "2", "--yes"])
        .assert()
        .success();

    notez(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."));
}

#[test]
fn move_reorders_manual_order() {
    let home = TempDir::new().unwrap();
    for title in ["A", "B", "C"] {
        create(&home, title, "x");
    }

    notez(&home)
        .args(["mv", "3", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved C to position 1"));

    let out = stdout_of(notez(&home).arg("list"));
    let c = out.find("1. C").unwrap();
    let a = out.find("2. A").unwrap();
    let b = out.find("3. B").unwrap();
    assert!(c < a && a < b);

    notez(&home)
        .args(["mv", "1", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("only 3 notes"));
}

#[test]
fn configured_sort_is_the_list_default() {
    let home = TempDir::new().unwrap();
    for title in ["b", "a"] {
        create(&home, title, "x");
    }

    notez(&home)
        .args(["config", "sort", "title-asc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sort set to title-asc"));

    let out = stdout_of(notez(&home).arg("list"));
    assert!(out.find("2. a").unwrap() < out.find("1. b").unwrap());

    notez(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("sort = title-asc"));
}

#[test]
fn config_rejects_bad_values() {
    let home = TempDir::new().unwrap();
    notez(&home)
        .args(["config", "sort", "random"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown sort option"));

    notez(&home)
        .args(["config", "colour"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn storage_key_selects_the_slot() {
    let home = TempDir::new().unwrap();
    notez(&home)
        .args(["config", "storage-key", "work"])
        .assert()
        .success();
    create(&home, "Standup", "at ten");

    assert!(home.path().join("work.json").exists());
    assert!(!home.path().join("notes.json").exists());
}

#[test]
fn malformed_slot_lists_as_empty() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("notes.json"), "{ not json").unwrap();

    notez(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."));
}

#[test]
fn data_dir_flag_overrides_home() {
    let home = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();

    notez(&home)
        .args(["create", "--no-editor", "Elsewhere", "body"])
        .arg("--data-dir")
        .arg(other.path())
        .assert()
        .success();

    assert!(other.path().join("notes.json").exists());
    assert!(!home.path().join("notes.json").exists());
}

#[test]
fn interactive_mode_needs_a_terminal() {
    let home = TempDir::new().unwrap();
    notez(&home)
        .arg("timer")
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs a terminal"));
}
