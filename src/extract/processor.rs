//! Per-fragment comment stripping and whitespace minification.
//!
//! Both steps are textual. Neither understands string or regular-expression
//! literals, so a `/*` inside a JavaScript string or runs of spaces inside a
//! CSS `content: "..."` value are rewritten like any other text.
//!
//! Minifying puts everything on one line, so kept `//` comments are turned
//! into `/* */` comments first.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::options::Options;
use super::types::Fragment;

static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// `//` to end of line, unless preceded by `:` (keeps `http://...`).
static LINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)(^|[^:])[ \t]*//.*$").unwrap());

/// Script line comment split into the text before it and its body.
static SCRIPT_LINE_COMMENT_PARTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)(?P<lead>(?:^|[^:])[ \t]*)//(?P<body>.*)$").unwrap());

/// Sass line comment. Only at line start or after whitespace, `;`, `{` or
/// `}`, so `url(//cdn...)` is left alone.
static SASS_LINE_COMMENT_PARTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)(?P<lead>^|[\s;{}])//(?P<body>.*)$").unwrap());

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static SEMICOLON_BEFORE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r";\s*\}").unwrap());
static AFTER_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\s*").unwrap());
static AROUND_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\{\s*").unwrap());
static AROUND_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\}\s*").unwrap());
static AFTER_COLON: Lazy<Regex> = Lazy::new(|| Regex::new(r":\s*").unwrap());
static AROUND_SEMICOLON: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*;\s*").unwrap());

/// Applies the comment and minification options to fragment text.
#[derive(Debug, Clone, Copy)]
pub struct ContentProcessor {
    strip_comments: bool,
    minify: bool,
}

impl ContentProcessor {
    pub fn new(strip_comments: bool, minify: bool) -> Self {
        Self {
            strip_comments,
            minify,
        }
    }

    pub fn from_options(options: &Options) -> Self {
        Self::new(!options.preserve_comments, options.minify)
    }

    /// Process a fragment according to its kind.
    pub fn process(&self, fragment: &Fragment) -> Fragment {
        let text = if fragment.kind.is_stylesheet() {
            self.process_stylesheet(&fragment.text)
        } else {
            self.process_script(&fragment.text)
        };
        Fragment {
            text,
            ..fragment.clone()
        }
    }

    pub fn process_script(&self, code: &str) -> String {
        let mut code = code.trim().to_string();

        if self.strip_comments {
            code = BLOCK_COMMENT.replace_all(&code, "").into_owned();
            code = LINE_COMMENT.replace_all(&code, "${1}").into_owned();
        }

        if self.minify {
            if !self.strip_comments {
                code = to_block_comments(&SCRIPT_LINE_COMMENT_PARTS, &code);
            }
            code = WHITESPACE.replace_all(&code, " ").into_owned();
            code = SEMICOLON_BEFORE_CLOSE.replace_all(&code, "}").into_owned();
            code = AFTER_OPEN.replace_all(&code, "{").into_owned();
        }

        code.trim().to_string()
    }

    /// CSS and Sass share one path. Only block comments are stripped; Sass
    /// line comments survive and are converted to block form when minifying.
    pub fn process_stylesheet(&self, code: &str) -> String {
        let mut code = code.trim().to_string();

        if self.strip_comments {
            code = BLOCK_COMMENT.replace_all(&code, "").into_owned();
        }

        if self.minify {
            code = to_block_comments(&SASS_LINE_COMMENT_PARTS, &code);
            code = WHITESPACE.replace_all(&code, " ").into_owned();
            code = SEMICOLON_BEFORE_CLOSE.replace_all(&code, "}").into_owned();
            code = AROUND_OPEN.replace_all(&code, "{").into_owned();
            code = AROUND_CLOSE.replace_all(&code, "}").into_owned();
            code = AFTER_COLON.replace_all(&code, ":").into_owned();
            code = AROUND_SEMICOLON.replace_all(&code, ";").into_owned();
        }

        code.trim().to_string()
    }
}

/// Rewrite `// body` as `/* body */` so it still ends where the line did.
fn to_block_comments(pattern: &Regex, code: &str) -> String {
    pattern
        .replace_all(code, |caps: &Captures| {
            format!("{}/*{} */", &caps["lead"], caps["body"].replace("*/", "* /"))
        })
        .into_owned()
}
