use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const DRAW_SELECT_TRANSLATE: &str = r#"
[[events]]
kind = "down"
x = 20.0
y = 20.0

[[events]]
kind = "move"
x = 120.0
y = 20.0

[[events]]
kind = "move"
x = 120.0
y = 120.0

[[events]]
kind = "up"

[[events]]
kind = "mode"
mode = "selecting"

[[events]]
kind = "down"
x = 120.0
y = 20.0

[[events]]
kind = "up"

[[events]]
kind = "down"
x = 70.0
y = 70.0

[[events]]
kind = "move"
x = 90.0
y = 70.0

[[events]]
kind = "up"
"#;

fn sketchpad_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sketchpad").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

fn write_script(dir: &TempDir, text: &str) -> PathBuf {
    let path = dir.path().join("session.toml");
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn sketchpad_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Freehand sketch editor"));
}

#[test]
fn script_argument_is_required() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(&temp)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn replay_reports_final_state() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, DRAW_SELECT_TRANSLATE);

    sketchpad_cmd(&temp)
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Stroke: 3 points, mode: Selecting, selected: true",
        ));
}

#[test]
fn print_primitives_emits_committed_geometry() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, DRAW_SELECT_TRANSLATE);

    sketchpad_cmd(&temp)
        .arg(&script)
        .arg("--print-primitives")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"polyline\""))
        .stdout(predicate::str::contains("\"kind\": \"outline\""))
        .stdout(predicate::str::contains("\"kind\": \"handle\""))
        .stdout(predicate::str::contains("140.0"));
}

#[test]
fn output_writes_png() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, DRAW_SELECT_TRANSLATE);
    let png = temp.path().join("frame.png");

    sketchpad_cmd(&temp)
        .arg(&script)
        .args(["--width", "200", "--height", "160", "--output"])
        .arg(&png)
        .assert()
        .success();

    let bytes = std::fs::read(&png).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn explicit_config_is_applied() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "[interaction]\nselect_radius = 1.0\n").unwrap();
    // Tap 5 units away from the stroke: too far with a 1-unit radius.
    let script = write_script(
        &temp,
        r#"
[[events]]
kind = "down"
x = 0.0
y = 0.0

[[events]]
kind = "move"
x = 50.0
y = 0.0

[[events]]
kind = "up"

[[events]]
kind = "mode"
mode = "selecting"

[[events]]
kind = "down"
x = 0.0
y = 5.0

[[events]]
kind = "up"
"#,
    );

    sketchpad_cmd(&temp)
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("selected: false"));
}

#[test]
fn malformed_script_fails() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "[[events]]\nkind = \"pinch\"\n");

    sketchpad_cmd(&temp)
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load script"));
}

#[test]
fn dump_config_schema_prints_json() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("handle_hit_radius"));
}
