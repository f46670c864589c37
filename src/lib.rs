//! Pull inline scripts and styles out of HTML documents.
//!
//! Given an HTML file (or a folder of them), the extractor moves every inline
//! `<script>` body, `<style>` block and `style="..."` attribute into
//! `script.js`, `style.css` and, for Sass, `style.scss`, then rewrites the
//! document as `index.html` linking the new files.

pub mod analyze;
pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod extract;
pub mod run;
pub mod theme;

pub use batch::{run_batch, BatchReport, CancelToken};
pub use config::Settings;
pub use error::{ExtractError, SassError};
pub use events::{EventSink, LogEvent, Severity};
pub use extract::{ExtractionResult, Extractor, Options};
pub use run::{run, spawn, RunOutcome, RunRequest};
