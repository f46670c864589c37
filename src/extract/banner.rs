//! Header comments prepended to generated files.

use chrono::{DateTime, Local};

/// Tool name written into every banner.
pub const GENERATOR: &str = "HTML Extractor";

/// Timestamp format of the second banner line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Which generated file a banner heads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Script,
    Css,
    Scss,
    CompiledCss,
}

impl BannerKind {
    fn title(&self) -> &'static str {
        match self {
            Self::Script => "Combined JavaScript",
            Self::Css => "Combined CSS",
            Self::Scss => "Combined Sass",
            Self::CompiledCss => "Compiled from Sass",
        }
    }

    /// CSS has no line comments; JS and SCSS use them.
    fn uses_block_comments(&self) -> bool {
        matches!(self, Self::Css | Self::CompiledCss)
    }
}

/// Two comment lines (title, timestamp) followed by a blank line.
pub fn banner(kind: BannerKind, at: DateTime<Local>) -> String {
    let title = format!("{} - Generated by {}", kind.title(), GENERATOR);
    let stamp = at.format(TIMESTAMP_FORMAT).to_string();
    if kind.uses_block_comments() {
        format!("/* {title} */\n/* {stamp} */\n\n")
    } else {
        format!("// {title}\n// {stamp}\n\n")
    }
}

/// Banner followed by `body`.
pub fn with_banner(kind: BannerKind, body: &str) -> String {
    let mut out = banner(kind, Local::now());
    out.push_str(body);
    out
}
