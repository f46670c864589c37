//! Integration tests for batch extraction

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use html_extractor::events::RecordingSink;
use html_extractor::{run_batch, CancelToken, Extractor, Options, Severity};

use crate::helpers::{cli, load_fixture};

/// Three documents plus one unrelated file.
fn batch_input(dir: &std::path::Path) {
    fs::write(dir.join("a.html"), load_fixture("page.html")).unwrap();
    fs::write(dir.join("b.html"), load_fixture("fragment.html")).unwrap();
    fs::write(dir.join("c.html"), "<p style=\"margin: 0\">c</p>").unwrap();
    fs::write(dir.join("notes.txt"), "not html").unwrap();
}

#[test]
fn batch_continues_past_failed_document() {
    let input = TempDir::new().unwrap();
    batch_input(input.path());
    let out = TempDir::new().unwrap();
    // A file where b's project folder should go makes b fail
    fs::write(out.path().join("b_extracted"), "blocker").unwrap();
    let work = TempDir::new().unwrap();

    cli(&work.path().join("settings.json"))
        .args([
            "extract",
            input.path().to_str().unwrap(),
            "--batch",
            "-o",
            out.path().to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Starting batch extraction of 3 files"))
        .stdout(predicate::str::contains("Processing: a.html (1/3)"))
        .stdout(predicate::str::contains("Processing: c.html (3/3)"))
        .stdout(predicate::str::contains("Batch finished: 2 succeeded, 1 failed"))
        .stderr(predicate::str::contains("Failed to process b.html"));

    assert!(out.path().join("a_extracted/index.html").exists());
    assert!(out.path().join("c_extracted/style.css").exists());
    assert!(!out.path().join("notes_extracted").exists());
}

#[test]
fn empty_batch_directory_exits_1() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("readme.md"), "# nothing").unwrap();
    let out = TempDir::new().unwrap();
    let target = out.path().join("out");
    let work = TempDir::new().unwrap();

    cli(&work.path().join("settings.json"))
        .args([
            "extract",
            input.path().to_str().unwrap(),
            "--batch",
            "-o",
            target.to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No HTML files found"));

    assert!(!target.exists());
}

#[test]
fn cancelled_batch_stops_before_first_document() {
    let input = TempDir::new().unwrap();
    batch_input(input.path());
    let out = TempDir::new().unwrap();
    let options = Options {
        batch_mode: true,
        ..Options::default()
    };
    let extractor = Extractor::with_compiler(options, None);
    let sink = RecordingSink::new();
    let cancel = CancelToken::new();
    cancel.cancel();

    let report = run_batch(&extractor, input.path(), out.path(), &sink, &cancel).unwrap();

    assert!(report.stopped);
    assert!(report.results.is_empty());
    assert_eq!(
        sink.messages(Severity::Warning),
        vec!["Extraction stopped by user".to_string()]
    );
    assert!(!out.path().join("a_extracted").exists());
}

#[test]
fn batch_without_project_folders_shares_output_dir() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("one.html"), "<script>one()</script>").unwrap();
    fs::write(input.path().join("two.html"), "<script>two()</script>").unwrap();
    let out = TempDir::new().unwrap();
    let options = Options {
        batch_mode: true,
        project_folder_per_file: false,
        make_backup: false,
        ..Options::default()
    };
    let extractor = Extractor::with_compiler(options, None);

    let report = run_batch(
        &extractor,
        input.path(),
        out.path(),
        &RecordingSink::new(),
        &CancelToken::new(),
    )
    .unwrap();

    assert_eq!(report.succeeded(), 2);
    // The later document overwrites the shared files
    let script = fs::read_to_string(out.path().join("script.js")).unwrap();
    assert!(script.contains("two()"));
    assert!(!script.contains("one()"));
}
