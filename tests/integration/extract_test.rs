//! Integration tests for the extract command (CLI)

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{cli, copy_fixture, file_names, load_fixture};

#[test]
fn default_extraction_writes_standard_layout() {
    let work = TempDir::new().unwrap();
    let input = copy_fixture("page.html", work.path());
    let out = work.path().join("out");

    cli(&work.path().join("settings.json"))
        .args(["extract", input.to_str().unwrap(), "-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting extraction from: page.html"))
        .stdout(predicate::str::contains("EXTRACTION SUMMARY:"))
        .stdout(predicate::str::contains("completed successfully"));

    let project = out.join("page_extracted");
    insta::assert_debug_snapshot!(file_names(&project), @r###"
    [
        "index.html",
        "page_original.html",
        "script.js",
        "style.css",
    ]
    "###);

    let backup = fs::read_to_string(project.join("page_original.html")).unwrap();
    assert_eq!(backup, load_fixture("page.html"));

    let script = fs::read_to_string(project.join("script.js")).unwrap();
    assert!(script.starts_with("// Combined JavaScript - Generated by HTML Extractor\n"));
    assert!(script.contains("// greet"));
    assert!(script.contains(r#"console.log("hi");"#));

    let css = fs::read_to_string(project.join("style.css")).unwrap();
    assert!(css.starts_with("/* Combined CSS - Generated by HTML Extractor */\n"));
    assert!(css.contains("body { margin: 0; }"));
    assert!(css.contains("color: red"));
}

#[test]
fn index_links_generated_files_and_keeps_external_scripts() {
    let work = TempDir::new().unwrap();
    let input = copy_fixture("page.html", work.path());
    let out = work.path().join("out");

    cli(&work.path().join("settings.json"))
        .args(["extract", input.to_str().unwrap(), "-o", out.to_str().unwrap()])
        .assert()
        .success();

    let index = fs::read_to_string(out.join("page_extracted/index.html")).unwrap();
    assert!(index.contains("<head>\n    <link rel=\"stylesheet\" href=\"style.css\">"));
    assert!(index.contains("<script src=\"script.js\"></script>\n</body>"));
    assert!(index.contains(r#"<script src="vendor.js"></script>"#));
    assert!(index.contains("<h1>Hello</h1>"));
    assert!(!index.contains("<style"));
    assert!(!index.contains("console.log"));
}

#[test]
fn minify_and_strip_comments_flags_apply() {
    let work = TempDir::new().unwrap();
    let input = copy_fixture("page.html", work.path());
    let out = work.path().join("out");

    cli(&work.path().join("settings.json"))
        .args([
            "extract",
            input.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "--minify",
            "--strip-comments",
            "--no-backup",
            "--no-project-folder",
        ])
        .assert()
        .success();

    assert!(!out.join("page_original.html").exists());
    let css = fs::read_to_string(out.join("style.css")).unwrap();
    assert!(css.contains("body{margin:0}"));
    assert!(!css.contains("layout"));
    let script = fs::read_to_string(out.join("script.js")).unwrap();
    assert!(!script.contains("greet"));
}

#[test]
fn minify_alone_keeps_code_after_comments() {
    let work = TempDir::new().unwrap();
    let input = copy_fixture("page.html", work.path());
    let out = work.path().join("out");

    cli(&work.path().join("settings.json"))
        .args([
            "extract",
            input.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "--minify",
        ])
        .assert()
        .success();

    let script = fs::read_to_string(out.join("page_extracted/script.js")).unwrap();
    assert!(script.ends_with("/* greet */ console.log(\"hi\");"), "{script}");
    let css = fs::read_to_string(out.join("page_extracted/style.css")).unwrap();
    assert!(css.contains("/* layout */ body{margin:0}"), "{css}");
}

#[test]
fn document_without_head_or_body_still_extracts() {
    let work = TempDir::new().unwrap();
    let input = copy_fixture("fragment.html", work.path());
    let out = work.path().join("out");

    cli(&work.path().join("settings.json"))
        .args(["extract", input.to_str().unwrap(), "-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No <head> tag found"))
        .stdout(predicate::str::contains("Added script tag at end of file"));

    let index = fs::read_to_string(out.join("fragment_extracted/index.html")).unwrap();
    assert!(index.contains("<div>No head here</div>"));
    assert!(index.ends_with("<script src=\"script.js\"></script>"));
    assert!(!index.contains("style.css"));
}

#[test]
fn inline_styles_can_be_left_in_place() {
    let work = TempDir::new().unwrap();
    let input = copy_fixture("fragment.html", work.path());
    let out = work.path().join("out");

    cli(&work.path().join("settings.json"))
        .args([
            "extract",
            input.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "--no-inline-styles",
        ])
        .assert()
        .success();

    let project = out.join("fragment_extracted");
    assert!(!project.join("style.css").exists());
    let index = fs::read_to_string(project.join("index.html")).unwrap();
    assert!(index.contains(r#"style="padding: 4px""#));
}

#[cfg(feature = "sass")]
#[test]
fn sass_is_kept_and_compiled() {
    let work = TempDir::new().unwrap();
    let input = copy_fixture("sass.html", work.path());
    let out = work.path().join("out");

    cli(&work.path().join("settings.json"))
        .args(["extract", input.to_str().unwrap(), "-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted 1 Sass blocks"))
        .stdout(predicate::str::contains("Compiled Sass -> style.css"));

    let project = out.join("sass_extracted");
    let scss = fs::read_to_string(project.join("style.scss")).unwrap();
    assert!(scss.contains("$primary: #333;"));

    let css = fs::read_to_string(project.join("style.css")).unwrap();
    assert!(css.starts_with("/* Compiled from Sass - Generated by HTML Extractor */"));
    assert!(css.contains(".nav a"));
    assert!(css.contains("color: #333"));
    assert!(!css.contains("$primary"));

    let index = fs::read_to_string(project.join("index.html")).unwrap();
    assert!(index.contains(r#"href="style.css""#));
}

#[test]
fn sass_conversion_can_be_disabled() {
    let work = TempDir::new().unwrap();
    let input = copy_fixture("sass.html", work.path());
    let out = work.path().join("out");

    cli(&work.path().join("settings.json"))
        .args([
            "extract",
            input.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "--no-sass",
        ])
        .assert()
        .success();

    let project = out.join("sass_extracted");
    assert!(project.join("style.scss").exists());
    assert!(!project.join("style.css").exists());
}

#[test]
fn latin1_document_is_decoded_with_warning() {
    let work = TempDir::new().unwrap();
    let input = work.path().join("cafe.html");
    fs::write(&input, b"<html><body><p>caf\xe9</p></body></html>").unwrap();
    let out = work.path().join("out");

    cli(&work.path().join("settings.json"))
        .args(["extract", input.to_str().unwrap(), "-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("File read with iso-8859-1 encoding"));

    let index = fs::read_to_string(out.join("cafe_extracted/index.html")).unwrap();
    assert!(index.contains("café"));
}

#[test]
fn missing_input_exits_1() {
    let work = TempDir::new().unwrap();
    let out = work.path().join("out");

    cli(&work.path().join("settings.json"))
        .args(["extract", "/no/such/page.html", "-o", out.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));

    assert!(!out.exists());
}
