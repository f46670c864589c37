//! Batch extraction over a directory of HTML files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::ExtractError;
use crate::events::EventSink;
use crate::extract::{ExtractionResult, Extractor};

/// Extensions picked up by a batch, in enumeration order.
const DOCUMENT_EXTENSIONS: &[&str] = &["html", "htm"];

/// Cooperative stop flag shared between the worker and whoever wants it to
/// stop. Only checked between documents.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// One entry per attempted document, in processing order
    pub results: Vec<ExtractionResult>,
    /// Set when the cancel token stopped the batch early
    pub stopped: bool,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }
}

/// HTML documents directly inside `dir`: all `*.html` files, then all
/// `*.htm` files, each group sorted by name. Not recursive; the extension
/// comparison is case-sensitive.
pub fn find_documents(dir: &Path) -> Result<Vec<PathBuf>, ExtractError> {
    if !dir.is_dir() {
        return Err(ExtractError::InputNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = fs::read_dir(dir).map_err(|source| ExtractError::ReadFailure {
        path: dir.to_path_buf(),
        source,
    })?;

    let files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();

    let mut documents = Vec::new();
    for ext in DOCUMENT_EXTENSIONS {
        let mut group: Vec<PathBuf> = files
            .iter()
            .filter(|p| p.extension().is_some_and(|e| e == *ext))
            .cloned()
            .collect();
        group.sort();
        documents.extend(group);
    }
    Ok(documents)
}

/// Run `extractor` over every document in `dir`.
///
/// An empty directory is an error. Per-document failures are logged,
/// recorded in the report and do not stop the batch.
pub fn run_batch(
    extractor: &Extractor,
    dir: &Path,
    out_root: &Path,
    sink: &dyn EventSink,
    cancel: &CancelToken,
) -> Result<BatchReport, ExtractError> {
    let documents = find_documents(dir)?;
    if documents.is_empty() {
        return Err(ExtractError::EmptyBatch {
            dir: dir.to_path_buf(),
        });
    }

    sink.header(&format!(
        "Starting batch extraction of {} files",
        documents.len()
    ));

    let mut report = BatchReport::default();
    let total = documents.len();

    for (i, path) in documents.iter().enumerate() {
        if cancel.is_cancelled() {
            sink.warning("Extraction stopped by user");
            report.stopped = true;
            break;
        }

        let name = file_name(path);
        sink.info(&format!("Processing: {} ({}/{})", name, i + 1, total));

        match extractor.extract_file(path, out_root, sink) {
            Ok(result) => report.results.push(result),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Document failed");
                sink.error(&format!("Failed to process {name}: {e}"));
                let mut result = ExtractionResult::new(path);
                result.error = Some(e.to_string());
                report.results.push(result);
            }
        }
    }

    Ok(report)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
