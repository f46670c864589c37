//! Data structures flowing through the extraction pipeline.

use std::path::{Path, PathBuf};

use super::decode::Encoding;

/// File name of the combined script output.
pub const SCRIPT_FILE: &str = "script.js";
/// File name of the combined (or compiled) stylesheet output.
pub const CSS_FILE: &str = "style.css";
/// File name of the combined Sass output.
pub const SCSS_FILE: &str = "style.scss";
/// File name of the rewritten markup.
pub const INDEX_FILE: &str = "index.html";

/// A decoded source document.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    /// File stem, used for the project folder and backup names
    pub base_name: String,
    pub text: String,
    pub encoding: Encoding,
}

impl Document {
    pub fn new(path: &Path, text: String, encoding: Encoding) -> Self {
        let base_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        Self {
            path: path.to_path_buf(),
            base_name,
            text,
            encoding,
        }
    }

    /// Name of the backup copy written next to the outputs.
    pub fn backup_name(&self) -> String {
        format!("{}_original.html", self.base_name)
    }

    /// Name of the per-document project folder.
    pub fn project_folder_name(&self) -> String {
        format!("{}_extracted", self.base_name)
    }
}

/// What kind of code a fragment holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Script,
    Style,
    InlineStyle,
}

impl FragmentKind {
    /// Whether the fragment uses stylesheet syntax.
    pub fn is_stylesheet(&self) -> bool {
        matches!(self, Self::Style | Self::InlineStyle)
    }
}

/// A piece of code pulled out of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub text: String,
    /// Set for `<style>` blocks classified as Sass
    pub sass: Option<SassMarker>,
}

impl Fragment {
    pub fn script(text: impl Into<String>) -> Self {
        Self {
            kind: FragmentKind::Script,
            text: text.into(),
            sass: None,
        }
    }

    pub fn style(text: impl Into<String>, sass: Option<SassMarker>) -> Self {
        Self {
            kind: FragmentKind::Style,
            text: text.into(),
            sass,
        }
    }

    pub fn inline_style(text: impl Into<String>) -> Self {
        Self {
            kind: FragmentKind::InlineStyle,
            text: text.into(),
            sass: None,
        }
    }

    pub fn is_sass(&self) -> bool {
        self.sass.is_some()
    }
}

/// The Sass construct that caused a stylesheet to be classified as Sass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SassMarker {
    Variable,
    Mixin,
    Include,
    Extend,
    Import,
    ParentSelector,
    NestedRule,
    If,
    For,
    Each,
    Function,
}

impl SassMarker {
    /// Short description for log messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Variable => "variable declaration",
            Self::Mixin => "@mixin",
            Self::Include => "@include",
            Self::Extend => "@extend",
            Self::Import => "@import",
            Self::ParentSelector => "parent selector",
            Self::NestedRule => "nested rule",
            Self::If => "@if",
            Self::For => "@for",
            Self::Each => "@each",
            Self::Function => "@function",
        }
    }
}

/// Combined output text, one blob per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBundle {
    pub script: Option<String>,
    pub css: Option<String>,
    pub scss: Option<String>,
}

impl OutputBundle {
    /// Join fragments by kind, in the order given, separated by a blank line.
    ///
    /// CSS is `<style>` CSS fragments followed by inline-style fragments.
    pub fn combine(fragments: &[Fragment]) -> Self {
        let scripts = fragments.iter().filter(|f| f.kind == FragmentKind::Script);
        let css_blocks = fragments
            .iter()
            .filter(|f| f.kind == FragmentKind::Style && !f.is_sass());
        let inline = fragments
            .iter()
            .filter(|f| f.kind == FragmentKind::InlineStyle);
        let sass = fragments.iter().filter(|f| f.is_sass());

        Self {
            script: join(scripts),
            css: join(css_blocks.chain(inline)),
            scss: join(sass),
        }
    }
}

fn join<'a>(fragments: impl Iterator<Item = &'a Fragment>) -> Option<String> {
    let parts: Vec<&str> = fragments.map(|f| f.text.as_str()).collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n\n"))
    }
}

/// Files the pipeline can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OutputKind {
    Script,
    Css,
    Scss,
    Index,
    Backup,
}

/// Per-document outcome.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub source: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub files: Vec<(OutputKind, PathBuf)>,
    pub error: Option<String>,
}

impl ExtractionResult {
    pub fn new(source: &Path) -> Self {
        Self {
            source: source.to_path_buf(),
            output_dir: None,
            files: Vec::new(),
            error: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn has(&self, kind: OutputKind) -> bool {
        self.files.iter().any(|(k, _)| *k == kind)
    }

    pub fn path(&self, kind: OutputKind) -> Option<&Path> {
        self.files
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, p)| p.as_path())
    }

    pub(crate) fn record(&mut self, kind: OutputKind, path: PathBuf) {
        if !self.has(kind) {
            self.files.push((kind, path));
        }
    }
}
