use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use forest_night::theme::TABLE_FILES;
use predicates::prelude::*;

fn cmd() -> Command {
    cargo_bin_cmd!("forest-night-audit")
}

/// Copy the shipped tables into `dir`, applying `edit` to each file's text.
fn copy_tables(dir: &Path, edit: impl Fn(&str, String) -> String) {
    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("themes/forest-night");
    for name in TABLE_FILES {
        let content = std::fs::read_to_string(source.join(name)).unwrap();
        std::fs::write(dir.join(name), edit(name, content)).unwrap();
    }
}

#[test]
fn test_bare_run_passes() {
    cmd()
        .assert()
        .success()
        .stdout(predicate::eq(
            "A11y contrast audit passed: 2108160 checks across all generated variants.\n",
        ))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_missing_theme_dir_fails_to_load() {
    cmd()
        .args(["--theme-dir", "/nonexistent/forest-night"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Unable to load theme tables from /nonexistent/forest-night.",
        ))
        .stderr(predicate::str::contains(
            "Fix the theme data files before running the contrast audit.",
        ))
        .stderr(predicate::str::contains("palette.toml"));
}

#[test]
fn test_malformed_table_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    copy_tables(dir.path(), |name, content| {
        if name == "syntax.toml" {
            content.replace("[[rules]]", "[[rule]]")
        } else {
            content
        }
    });

    cmd()
        .arg("--theme-dir")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unable to load theme tables"))
        .stderr(predicate::str::contains("syntax.toml"));
}

#[test]
fn test_low_contrast_color_fails() {
    let dir = tempfile::tempdir().unwrap();
    copy_tables(dir.path(), |name, content| {
        if name == "palette.toml" {
            content.replace("purple = \"#d699b6\"", "purple = \"#5a5a5a\"")
        } else {
            content
        }
    });

    cmd()
        .arg("--theme-dir")
        .arg(dir.path())
        .args(["--max-printed", "2"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("A11y contrast audit failed: "))
        .stderr(predicate::str::contains("additional violations not shown"));
}

#[test]
fn test_invalid_color_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    copy_tables(dir.path(), |name, content| {
        if name == "palette.toml" {
            content.replace("grey1 = \"#a0aca2\"", "grey1 = \"grey\"")
        } else {
            content
        }
    });

    cmd()
        .arg("--theme-dir")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Skipped "))
        .stderr(predicate::str::contains("A11y contrast audit failed").not());
}

#[test]
fn test_json_format() {
    cmd()
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"verdict\": \"passed\""))
        .stdout(predicate::str::contains("\"checks\": 2108160"));
}

#[test]
fn test_save_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audit.toml");

    cmd()
        .args(["--max-printed", "7", "--save-config"])
        .arg(&path)
        .assert()
        .success();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains("max_printed = 7"));
    assert!(saved.contains("format = \"text\""));
}

#[test]
fn test_bad_settings_file_is_error() {
    cmd()
        .args(["--config", "/nonexistent/audit.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));
}

#[test]
fn test_log_file_written() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("audit.log");

    cmd()
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success();

    let content = std::fs::read_to_string(&log).unwrap();
    assert!(content.contains("Starting contrast audit"));
}

#[test]
fn test_completions() {
    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("forest-night-audit"));
}

#[test]
fn test_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--theme-dir"))
        .stdout(predicate::str::contains("--max-printed"));
}
