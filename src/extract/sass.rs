//! Sass-to-CSS compilation seam.
//!
//! The pipeline only talks to [`SassCompiler`]. The default implementation
//! wraps the pure-Rust `grass` compiler and is compiled in with the `sass`
//! cargo feature; without it [`default_compiler`] returns `None` and Sass is
//! still extracted to `style.scss`, just not compiled.

use std::path::Path;

use crate::error::SassError;

/// A tool that turns a `.scss` file into CSS.
pub trait SassCompiler: Send + Sync {
    /// Human-readable name for log messages.
    fn name(&self) -> &'static str;

    /// Check if this compiler can be used.
    fn is_available(&self) -> bool {
        true
    }

    /// Compile the file at `path`. `minify` selects compressed output,
    /// otherwise expanded.
    fn compile(&self, path: &Path, minify: bool) -> Result<String, SassError>;
}

/// Compiler backed by the `grass` crate.
#[cfg(feature = "sass")]
#[derive(Debug, Default, Clone, Copy)]
pub struct GrassCompiler;

#[cfg(feature = "sass")]
impl SassCompiler for GrassCompiler {
    fn name(&self) -> &'static str {
        "grass"
    }

    fn compile(&self, path: &Path, minify: bool) -> Result<String, SassError> {
        let style = if minify {
            grass::OutputStyle::Compressed
        } else {
            grass::OutputStyle::Expanded
        };
        let options = grass::Options::default().style(style);
        grass::from_path(path, &options).map_err(|e| SassError::Compile(e.to_string()))
    }
}

/// The compiler available in this build, if any.
pub fn default_compiler() -> Option<Box<dyn SassCompiler>> {
    #[cfg(feature = "sass")]
    {
        Some(Box::new(GrassCompiler))
    }
    #[cfg(not(feature = "sass"))]
    {
        None
    }
}
