//! Analyze an extracted project folder.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use html_extractor::analyze::{analyze_project, validate_references};
use html_extractor::theme::current_theme;

fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

fn mark(present: bool) -> &'static str {
    if present {
        "yes"
    } else {
        "no"
    }
}

/// Print the folder summary and reference issues. Exits 1 when issues exist.
pub fn handle(dir: &Path) -> Result<ExitCode> {
    let theme = current_theme();
    let analysis =
        analyze_project(dir).with_context(|| format!("Cannot read {}", dir.display()))?;

    println!("{}", theme.primary_text(&format!("Project: {}", dir.display())));
    for (label, present) in [
        ("index.html", analysis.has_index),
        ("style.css", analysis.has_css),
        ("script.js", analysis.has_js),
        ("style.scss", analysis.has_sass),
        ("backup", analysis.has_backup),
    ] {
        println!("  {:<11} {}", label, mark(present));
    }
    println!(
        "{}",
        theme.secondary_text(&format!(
            "  {} files, {}",
            analysis.file_count,
            format_size(analysis.total_size)
        ))
    );

    let issues = validate_references(dir);
    if issues.is_empty() {
        println!("{}", theme.success_text("All references valid"));
        return Ok(ExitCode::SUCCESS);
    }
    for issue in &issues {
        println!("{}", theme.error_text(&format!("  {issue}")));
    }
    Ok(ExitCode::FAILURE)
}
