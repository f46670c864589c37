//! Integration tests for CLI parsing, settings and completions

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use html_extractor::Settings;

use crate::helpers::{cli, copy_fixture};

#[test]
fn help_exits_0_and_lists_commands() {
    let work = TempDir::new().unwrap();
    cli(&work.path().join("settings.json"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn extract_help_shows_paired_flags() {
    let work = TempDir::new().unwrap();
    cli(&work.path().join("settings.json"))
        .args(["extract", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<INPUT>"))
        .stdout(predicate::str::contains("--preserve-comments"))
        .stdout(predicate::str::contains("--no-save"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let work = TempDir::new().unwrap();
    cli(&work.path().join("settings.json"))
        .arg("explode")
        .assert()
        .code(2);
}

#[test]
fn version_flag_prints_version() {
    let work = TempDir::new().unwrap();
    cli(&work.path().join("settings.json"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_output_without_saved_dir_fails() {
    let work = TempDir::new().unwrap();
    let input = copy_fixture("page.html", work.path());

    cli(&work.path().join("settings.json"))
        .args(["extract", input.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please select an output directory"));
}

#[test]
fn run_saves_settings_and_reuses_output_dir() {
    let work = TempDir::new().unwrap();
    let settings_path = work.path().join("settings.json");
    let input = copy_fixture("page.html", work.path());
    let out = work.path().join("out");

    cli(&settings_path)
        .args([
            "extract",
            input.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "--minify",
        ])
        .assert()
        .success();

    let saved = Settings::load_from(&settings_path).unwrap();
    assert!(saved.minify_output);
    assert_eq!(saved.last_output_dir, out.display().to_string());

    // Second run without -o lands in the remembered directory
    fs::remove_dir_all(out.join("page_extracted")).unwrap();
    cli(&settings_path)
        .args(["extract", input.to_str().unwrap()])
        .assert()
        .success();
    let css = fs::read_to_string(out.join("page_extracted/style.css")).unwrap();
    assert!(css.contains("body{margin:0}"));
}

#[test]
fn relative_output_dir_is_saved_resolved() {
    let work = TempDir::new().unwrap();
    let settings_path = work.path().join("settings.json");
    copy_fixture("page.html", work.path());

    cli(&settings_path)
        .current_dir(work.path())
        .args(["extract", "page.html", "-o", "out"])
        .assert()
        .success();

    let saved = Settings::load_from(&settings_path).unwrap();
    let saved_dir = std::path::PathBuf::from(&saved.last_output_dir);
    assert!(saved_dir.is_absolute(), "{}", saved.last_output_dir);
    assert_eq!(
        fs::canonicalize(saved_dir).unwrap(),
        fs::canonicalize(work.path().join("out")).unwrap()
    );
}

#[test]
fn no_save_leaves_settings_untouched() {
    let work = TempDir::new().unwrap();
    let settings_path = work.path().join("settings.json");
    let input = copy_fixture("page.html", work.path());

    cli(&settings_path)
        .args([
            "extract",
            input.to_str().unwrap(),
            "-o",
            work.path().join("out").to_str().unwrap(),
            "--no-save",
        ])
        .assert()
        .success();

    assert!(!settings_path.exists());
}

#[test]
fn config_path_honours_override() {
    let work = TempDir::new().unwrap();
    let settings_path = work.path().join("custom.json");

    cli(&settings_path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.json"));
}

#[test]
fn config_reset_then_show_prints_defaults() {
    let work = TempDir::new().unwrap();
    let settings_path = work.path().join("settings.json");
    fs::write(&settings_path, r#"{"minify_output": true}"#).unwrap();

    cli(&settings_path)
        .args(["config", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings reset"));

    assert_eq!(
        Settings::load_from(&settings_path).unwrap(),
        Settings::default()
    );

    cli(&settings_path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""minify_output": false"#));
}

#[test]
fn completions_generate_for_bash() {
    let work = TempDir::new().unwrap();
    cli(&work.path().join("settings.json"))
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("html-extractor"));
}
