use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn note_board(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("note-board").unwrap();
    cmd.arg("--no-color")
        .arg("--config")
        .arg(dir.path().join("config.toml"));
    cmd
}

#[test]
fn demo_prints_each_step() {
    let dir = tempfile::tempdir().unwrap();
    note_board(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Id: 1  Note: Hello, everyone!"))
        .stdout(predicate::str::contains("same to you! (author: 2)"))
        .stdout(predicate::str::contains("==> Deleted note 1"))
        .stdout(predicate::str::contains("Id: 2  Note: Good afternoon"));
}

#[test]
fn demo_json_output() {
    let dir = tempfile::tempdir().unwrap();
    note_board(&dir)
        .args(["demo", "--format", "json-compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""title":"Good afternoon""#));
}

#[test]
fn repl_applies_script() {
    let dir = tempfile::tempdir().unwrap();
    let script = "\
add \"Hello, everyone!\" \"It's such a good day!\"
comment 1 \"same to you!\" --author 2
delete 7
list
delete 1
list
";
    note_board(&dir)
        .arg("repl")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added note 1"))
        .stdout(predicate::str::contains("Added comment 1 to note 1"))
        .stdout(predicate::str::contains("Error: Content not found for content id 7"))
        .stdout(predicate::str::contains("same to you! (author: 2)"))
        .stdout(predicate::str::contains("No active notes."));
}

#[test]
fn config_file_sets_repl_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[display]\nshow_empty_placeholder = false\n\n[defaults]\nauthor_id = 42\n",
    )
    .unwrap();

    note_board(&dir)
        .arg("repl")
        .write_stdin("add a b\nlist\ncomment 1 hi\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No comments").not())
        .stdout(predicate::str::contains("hi (author: 42)"));
}

#[test]
fn config_init_then_show() {
    let dir = tempfile::tempdir().unwrap();

    note_board(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(dir.path().join("config.toml").exists());

    note_board(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    note_board(&dir)
        .args(["config", "show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""author_id": 1"#));
}

#[test]
fn invalid_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[display\n").unwrap();

    note_board(&dir)
        .arg("demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn unknown_configured_format_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[display]\nformat = \"yaml\"\n").unwrap();

    note_board(&dir)
        .arg("repl")
        .write_stdin("list\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format 'yaml'"));
}
