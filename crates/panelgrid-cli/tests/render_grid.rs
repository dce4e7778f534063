use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

/// Runs `panelgrid` with an isolated, empty PANELGRID_HOME.
fn panelgrid(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("panelgrid");
    cmd.env("PANELGRID_HOME", home.path())
        .env_remove("PANELGRID_CONFIG")
        .env_remove("PANELGRID_LOG");
    cmd
}

#[test]
fn test_render_json_from_stdin() {
    let home = tempdir().unwrap();

    panelgrid(&home)
        .arg("render")
        .write_stdin(r#"[["AB", "C\nD"]]"#)
        .assert()
        .success()
        .stdout("AB C \n   D \n\n");
}

#[test]
fn test_render_dash_reads_stdin() {
    let home = tempdir().unwrap();

    panelgrid(&home)
        .args(["render", "-"])
        .write_stdin(r#"[[""]]"#)
        .assert()
        .success()
        .stdout(" \n\n");
}

#[test]
fn test_render_toml_file_with_same_column_width() {
    let home = tempdir().unwrap();
    let grid_path = home.path().join("grid.toml");
    let contents = "rows = [[\"a\", \"bb\"], [\"ccc\", \"d\"]]\n";
    fs::write(&grid_path, contents).unwrap();

    panelgrid(&home)
        .arg("render")
        .arg(&grid_path)
        .arg("--same-column-width")
        .assert()
        .success()
        .stdout("a   bb \nccc d  \n\n");
}

#[test]
fn test_render_uses_config_file_values() {
    let home = tempdir().unwrap();
    fs::write(
        home.path().join("config.toml"),
        "padding = 2\nbottom_padding = 1\n",
    )
    .unwrap();

    panelgrid(&home)
        .arg("render")
        .write_stdin(r#"[["x"], ["y"]]"#)
        .assert()
        .success()
        .stdout("x  \n\ny  \n\n");
}

#[test]
fn test_render_flags_override_config() {
    let home = tempdir().unwrap();
    fs::write(
        home.path().join("config.toml"),
        "padding = 2\nsame_column_width = true\n",
    )
    .unwrap();

    panelgrid(&home)
        .args(["render", "--padding", "0", "--no-same-column-width"])
        .write_stdin(r#"[["a", "b"], ["ccc", "d"]]"#)
        .assert()
        .success()
        .stdout("ab\ncccd\n\n");
}

#[test]
fn test_render_negative_bottom_padding_is_clamped() {
    let home = tempdir().unwrap();

    panelgrid(&home)
        .args(["render", "--bottom-padding", "-3"])
        .write_stdin(r#"[["x"], ["y"]]"#)
        .assert()
        .success()
        .stdout("x \ny \n\n");
}

#[test]
fn test_render_bottom_padding_between_rows() {
    let home = tempdir().unwrap();

    panelgrid(&home)
        .args(["render", "--bottom-padding", "2"])
        .write_stdin(r#"[["x"], ["y"]]"#)
        .assert()
        .success()
        .stdout("x \n\n\ny \n\n");
}

#[test]
fn test_render_rejects_malformed_grid() {
    let home = tempdir().unwrap();

    panelgrid(&home)
        .arg("render")
        .write_stdin("not a grid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse grid from stdin"));
}

#[test]
fn test_render_missing_file_fails() {
    let home = tempdir().unwrap();
    let missing = home.path().join("missing.json");

    panelgrid(&home)
        .arg("render")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("read grid file"));
}

#[test]
fn test_render_reports_bad_config() {
    let home = tempdir().unwrap();
    let config_path = home.path().join("config.toml");
    fs::write(&config_path, "padding = \"wide\"\n").unwrap();

    panelgrid(&home)
        .arg("render")
        .write_stdin(r#"[["x"]]"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("load config"));
}
