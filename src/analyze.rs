//! Inspection of an extracted project folder.

use std::fs;
use std::path::Path;

use crate::extract::{CSS_FILE, INDEX_FILE, SCRIPT_FILE, SCSS_FILE};

/// What an output directory contains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectAnalysis {
    pub has_index: bool,
    pub has_css: bool,
    pub has_js: bool,
    pub has_sass: bool,
    pub has_backup: bool,
    /// Regular files directly inside the directory
    pub file_count: usize,
    /// Combined size of those files in bytes
    pub total_size: u64,
}

/// Problems with how `index.html` links the generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceIssue {
    MissingIndex,
    UnreferencedStylesheet,
    UnreferencedScript,
    UnreadableIndex(String),
}

impl std::fmt::Display for ReferenceIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingIndex => write!(f, "{INDEX_FILE} not found"),
            Self::UnreferencedStylesheet => {
                write!(f, "{CSS_FILE} file exists but not referenced in HTML")
            }
            Self::UnreferencedScript => {
                write!(f, "{SCRIPT_FILE} file exists but not referenced in HTML")
            }
            Self::UnreadableIndex(e) => write!(f, "Error reading {INDEX_FILE}: {e}"),
        }
    }
}

/// Summarize the files in `dir`. Unreadable entries are skipped.
pub fn analyze_project(dir: &Path) -> std::io::Result<ProjectAnalysis> {
    let mut analysis = ProjectAnalysis {
        has_index: dir.join(INDEX_FILE).is_file(),
        has_css: dir.join(CSS_FILE).is_file(),
        has_js: dir.join(SCRIPT_FILE).is_file(),
        has_sass: dir.join(SCSS_FILE).is_file(),
        ..ProjectAnalysis::default()
    };

    for entry in fs::read_dir(dir)?.filter_map(|e| e.ok()) {
        let Ok(meta) = entry.metadata() else {
            continue;
        };
        if !meta.is_file() {
            continue;
        }
        analysis.file_count += 1;
        analysis.total_size += meta.len();
        if entry.file_name().to_string_lossy().ends_with("_original.html") {
            analysis.has_backup = true;
        }
    }

    Ok(analysis)
}

/// Check that `index.html` references every generated stylesheet and script.
pub fn validate_references(dir: &Path) -> Vec<ReferenceIssue> {
    let index = dir.join(INDEX_FILE);
    if !index.exists() {
        return vec![ReferenceIssue::MissingIndex];
    }

    let html = match fs::read_to_string(&index) {
        Ok(html) => html,
        Err(e) => return vec![ReferenceIssue::UnreadableIndex(e.to_string())],
    };

    let mut issues = Vec::new();
    if dir.join(CSS_FILE).exists() && !html.contains(CSS_FILE) {
        issues.push(ReferenceIssue::UnreferencedStylesheet);
    }
    if dir.join(SCRIPT_FILE).exists() && !html.contains(SCRIPT_FILE) {
        issues.push(ReferenceIssue::UnreferencedScript);
    }
    issues
}
