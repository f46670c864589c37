//! Re-linking the stripped markup to the generated files.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{CSS_FILE, SCRIPT_FILE};

static HEAD_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<head\b[^>]*>").unwrap());
static BODY_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</body\s*>").unwrap());

/// Where a reference ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    AfterHeadOpen,
    BeforeBodyClose,
    EndOfDocument,
    /// No anchor tag; nothing inserted
    Skipped,
}

/// Stylesheet link inserted into `<head>`.
pub fn stylesheet_link() -> String {
    format!(r#"<link rel="stylesheet" href="{CSS_FILE}">"#)
}

/// Script tag inserted before `</body>`.
pub fn script_tag() -> String {
    format!(r#"<script src="{SCRIPT_FILE}"></script>"#)
}

/// Insert the stylesheet link right after the first `<head ...>` tag.
pub fn insert_stylesheet_link(html: &mut String) -> Placement {
    match HEAD_OPEN.find(html) {
        Some(m) => {
            html.insert_str(m.end(), &format!("\n    {}", stylesheet_link()));
            Placement::AfterHeadOpen
        }
        None => Placement::Skipped,
    }
}

/// Insert the script tag before the first `</body>`, or append it.
pub fn insert_script_tag(html: &mut String) -> Placement {
    match BODY_CLOSE.find(html) {
        Some(m) => {
            html.insert_str(m.start(), &format!("\n    {}\n", script_tag()));
            Placement::BeforeBodyClose
        }
        None => {
            html.push_str(&format!("\n{}", script_tag()));
            Placement::EndOfDocument
        }
    }
}
