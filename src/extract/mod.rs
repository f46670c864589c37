//! Extraction of embedded scripts and styles from HTML documents.
//!
//! This module turns one HTML file with inline `<script>`, `<style>` and
//! `style="..."` content into a standard project layout:
//! `index.html`, `style.css`, `script.js` and (for Sass) `style.scss`.
//!
//! # Design Philosophy
//!
//! The pipeline is text rewriting, not parsing:
//! - **Pattern matching**: regular expressions find the embedded blocks, so
//!   well-formed, generated markup is assumed
//! - **Single pass per kind**: inline styles, scripts and style blocks are each
//!   stripped once, in that order
//! - **Whitespace-only minification**: no string or regex literal awareness
//!
//! # Module Structure
//!
//! - [`matchers`] - Pattern rules and the Sass heuristic
//! - [`processor`] - Comment stripping and minification
//! - [`extractor`] - Per-document orchestration
//! - [`references`] - Re-linking the markup to generated files
//! - [`sass`] - Sass compiler seam
//! - [`types`] - Fragments, bundles and results

mod banner;
mod decode;
mod extractor;
pub mod matchers;
mod options;
pub mod processor;
pub mod references;
pub mod sass;
mod types;

// Re-export main types
pub use banner::{banner, with_banner, BannerKind, GENERATOR};
pub use decode::{decode, Encoding, FALLBACK_ORDER};
pub use extractor::{Extractor, Rewrite};
pub use matchers::detect_sass;
pub use options::Options;
pub use processor::ContentProcessor;
pub use sass::{default_compiler, SassCompiler};
pub use types::{
    Document, ExtractionResult, Fragment, FragmentKind, OutputBundle, OutputKind, SassMarker,
    CSS_FILE, INDEX_FILE, SCRIPT_FILE, SCSS_FILE,
};
