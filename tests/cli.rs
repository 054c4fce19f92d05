use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sketchgrid_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sketchgrid").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn sketchgrid_help_prints_usage() {
    let home = TempDir::new().unwrap();
    sketchgrid_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Etch-a-Sketch drawing grid"));
}

#[test]
fn empty_script_prints_default_grid() {
    let home = TempDir::new().unwrap();
    sketchgrid_cmd(&home)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("[draw]"))
        .stdout(predicate::str::contains("16x16 (gen 0)"))
        .stdout(predicate::str::contains("touched 0/256"));
}

#[test]
fn drag_stroke_is_rendered() {
    let home = TempDir::new().unwrap();
    let script = "# short stroke\ndown 0 0\nenter 1 0\nenter 2 0\nup\nenter 3 0\n";
    sketchgrid_cmd(&home)
        .args(["--size", "4", "--seed", "1"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("4x4 (gen 1)"))
        .stdout(predicate::str::contains("touched 3/16"))
        .stdout(predicate::str::contains("@@@·\n····\n"));
}

#[test]
fn rejected_events_are_logged_and_skipped() {
    let home = TempDir::new().unwrap();
    let script = "resize 0\ntool laser\ndown 1 1\n";
    sketchgrid_cmd(&home)
        .env("RUST_LOG", "error")
        .args(["--size", "2"])
        .write_stdin(script)
        .assert()
        .success()
        .stderr(predicate::str::contains("grid size must be positive"))
        .stderr(predicate::str::contains("unknown tool 'laser'"))
        .stdout(predicate::str::contains("touched 1/4"));
}

#[test]
fn malformed_script_line_fails() {
    let home = TempDir::new().unwrap();
    sketchgrid_cmd(&home)
        .write_stdin("down 1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Script line 1"));
}

#[test]
fn out_of_range_size_flag_fails() {
    let home = TempDir::new().unwrap();
    sketchgrid_cmd(&home)
        .args(["--size", "1000"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --size 1000"));
}

#[test]
fn json_output_contains_cells() {
    let home = TempDir::new().unwrap();
    let assert = sketchgrid_cmd(&home)
        .args(["--size", "2", "--format", "json"])
        .write_stdin("down 1 1\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["size"], 2);
    let cells = value["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[3]["color"]["r"], 0);
    assert_eq!(cells[3]["opacity"], 1.0);
}

#[test]
fn script_file_and_config_file_are_honored() {
    let home = TempDir::new().unwrap();
    let config_path = home.path().join("classic.toml");
    std::fs::write(
        &config_path,
        "[grid]\ndefault_size = 3\n[tools]\ntool_set = \"classic\"\n",
    )
    .unwrap();
    let script_path = home.path().join("strokes.txt");
    std::fs::write(&script_path, "tool lighten\ndown 0 0\nprint\n").unwrap();

    sketchgrid_cmd(&home)
        .arg("--config")
        .arg(&config_path)
        .arg("--script")
        .arg(&script_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[draw]  erase   rainbow "))
        .stdout(predicate::str::contains("3x3 (gen 0)").count(2))
        .stdout(predicate::str::contains("lighten").not());
}

#[test]
fn init_config_writes_example_once() {
    let home = TempDir::new().unwrap();
    let target = home.path().join("sketchgrid").join("config.toml");

    sketchgrid_cmd(&home)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote example configuration"));
    assert!(target.exists());

    sketchgrid_cmd(&home)
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn save_config_writes_clamped_values() {
    let home = TempDir::new().unwrap();
    let source = home.path().join("wide.toml");
    std::fs::write(&source, "[grid]\ndefault_size = 500\n").unwrap();
    let target = home.path().join("out").join("effective.toml");

    sketchgrid_cmd(&home)
        .arg("--config")
        .arg(&source)
        .arg("--save-config")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote effective configuration"));

    let written = std::fs::read_to_string(&target).unwrap();
    assert!(written.contains("default_size = 100"), "{written}");
}
