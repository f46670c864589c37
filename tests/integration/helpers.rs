//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Directory holding the HTML fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Contents of a fixture file.
pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {name}: {e}"))
}

/// Copy a fixture into `dir`, returning the new path.
pub fn copy_fixture(name: &str, dir: &Path) -> PathBuf {
    let target = dir.join(name);
    fs::copy(fixtures_dir().join(name), &target).expect("Failed to copy fixture");
    target
}

/// The binary with colors off and settings isolated in `settings`.
pub fn cli(settings: &Path) -> Command {
    let mut cmd = Command::cargo_bin("html-extractor").expect("binary built");
    cmd.env("NO_COLOR", "1")
        .env("HTML_EXTRACTOR_SETTINGS", settings)
        .env_remove("RUST_LOG");
    cmd
}

/// File names directly inside `dir`, sorted.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("readable dir")
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
