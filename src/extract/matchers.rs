//! Pattern rules that locate embedded code in raw markup.
//!
//! These are regular expressions over text, not an HTML parser. They assume
//! reasonably well-formed markup: a `>` inside a quoted attribute value ends a
//! tag match early, and a literal `</script>` inside a script string ends the
//! block. Both are accepted limitations.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::types::{Fragment, SassMarker};

/// Opening tags that may carry attributes.
static OPENING_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[a-zA-Z][^<>]*>").unwrap());

/// A `style` attribute with what precedes it: whitespace, or the closing
/// quote of the previous attribute (`class="a"style="..."`).
static STYLE_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(\s+|["'])style\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

static SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b([^>]*)>(.*?)</script\s*>").unwrap());

static SRC_ATTR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(?:^|\s)src\s*=").unwrap());

static STYLE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<style\b[^>]*>(.*?)</style\s*>").unwrap());

/// Sass markers in classification order. The first hit decides.
static SASS_PATTERNS: Lazy<Vec<(SassMarker, Regex)>> = Lazy::new(|| {
    [
        (SassMarker::Variable, r"\$[\w-]+\s*:"),
        (SassMarker::Mixin, r"@mixin\s+[\w-]+"),
        (SassMarker::Include, r"@include\s+[\w-]+"),
        (SassMarker::Extend, r"@extend\s+"),
        (SassMarker::Import, r#"@import\s+["']"#),
        (SassMarker::ParentSelector, r"&\s*[-:.#\w\[\]]"),
        (SassMarker::NestedRule, r"(?m)^\s*[\w-]+\s*\{[^}]*[\w-]+\s*\{"),
        (SassMarker::If, r"@if\s+"),
        (SassMarker::For, r"@for\s+"),
        (SassMarker::Each, r"@each\s+"),
        (SassMarker::Function, r"@function\s+"),
    ]
    .into_iter()
    .map(|(marker, pattern)| (marker, Regex::new(pattern).unwrap()))
    .collect()
});

/// Markup with matched regions removed, plus what was removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    pub text: String,
    pub fragments: Vec<Fragment>,
}

/// Remove every `style="..."` / `style='...'` attribute from opening tags.
///
/// All matched attributes are deleted, including empty ones. Only non-empty
/// values (trimmed) become fragments.
pub fn extract_inline_styles(html: &str) -> Extracted {
    let mut fragments = Vec::new();

    let text = OPENING_TAG.replace_all(html, |tag: &Captures| {
        STYLE_ATTR
            .replace_all(&tag[0], |attr: &Captures| {
                let value = attr.get(2).or_else(|| attr.get(3)).map_or("", |m| m.as_str());
                let value = value.trim();
                if !value.is_empty() {
                    fragments.push(Fragment::inline_style(value));
                }
                // A quote belongs to the previous attribute
                let lead = &attr[1];
                if lead.trim().is_empty() {
                    String::new()
                } else {
                    lead.to_string()
                }
            })
            .into_owned()
    });

    Extracted {
        text: text.into_owned(),
        fragments,
    }
}

/// Remove inline `<script>` blocks.
///
/// Blocks with a `src=` attribute or a whitespace-only body are left exactly
/// as they were.
pub fn extract_scripts(html: &str) -> Extracted {
    let mut fragments = Vec::new();

    let text = SCRIPT_BLOCK.replace_all(html, |caps: &Captures| {
        let attrs = &caps[1];
        let body = &caps[2];
        if SRC_ATTR.is_match(attrs) || body.trim().is_empty() {
            return caps[0].to_string();
        }
        fragments.push(Fragment::script(body));
        String::new()
    });

    Extracted {
        text: text.into_owned(),
        fragments,
    }
}

/// Remove `<style>` blocks, classifying each body as CSS or Sass.
pub fn extract_styles(html: &str) -> Extracted {
    let mut fragments = Vec::new();

    let text = STYLE_BLOCK.replace_all(html, |caps: &Captures| {
        let body = &caps[1];
        if body.trim().is_empty() {
            return caps[0].to_string();
        }
        fragments.push(Fragment::style(body, detect_sass(body)));
        String::new()
    });

    Extracted {
        text: text.into_owned(),
        fragments,
    }
}

/// First Sass construct found in `css`, if any.
///
/// A heuristic: `&` inside a `url()` query string produces a false positive,
/// and Sass that only uses features not listed here (nesting under a class
/// selector, placeholder selectors) is classified as plain CSS.
pub fn detect_sass(css: &str) -> Option<SassMarker> {
    SASS_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(css))
        .map(|(marker, _)| *marker)
}
