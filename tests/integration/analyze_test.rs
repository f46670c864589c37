//! Integration tests for the analyze command (CLI)

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{cli, copy_fixture};

#[test]
fn extracted_project_has_valid_references() {
    let work = TempDir::new().unwrap();
    let input = copy_fixture("page.html", work.path());
    let out = work.path().join("out");
    let settings = work.path().join("settings.json");

    cli(&settings)
        .args(["extract", input.to_str().unwrap(), "-o", out.to_str().unwrap()])
        .assert()
        .success();

    cli(&settings)
        .args(["analyze", out.join("page_extracted").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 files"))
        .stdout(predicate::str::contains("All references valid"));
}

#[test]
fn unreferenced_stylesheet_exits_1() {
    let work = TempDir::new().unwrap();
    let project = work.path().join("project");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("index.html"), "<html></html>").unwrap();
    fs::write(project.join("style.css"), "a{}").unwrap();

    cli(&work.path().join("settings.json"))
        .args(["analyze", project.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "style.css file exists but not referenced in HTML",
        ));
}

#[test]
fn missing_directory_is_error() {
    let work = TempDir::new().unwrap();
    cli(&work.path().join("settings.json"))
        .args(["analyze", work.path().join("nope").to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot read"));
}
