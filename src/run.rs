//! Entry point for a whole extraction run.
//!
//! A run is either one document or (in batch mode) every document in a
//! directory. [`run`] executes it on the current thread; [`spawn`] moves it to
//! a background worker and streams events back over a channel so the caller
//! stays responsive (e.g. to Ctrl-C).

use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::batch::{self, CancelToken};
use crate::error::{ExtractError, SassError};
use crate::events::{ChannelSink, EventSink, LogEvent};
use crate::extract::{ExtractionResult, Extractor, Options};

/// What to extract and where to put it.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// A document, or a directory when `options.batch_mode` is set
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub options: Options,
}

/// Final result of a run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub success: bool,
    pub duration: Duration,
    /// Message of the error that aborted the run
    pub error: Option<String>,
    /// Per-document results (one for single-file runs)
    pub results: Vec<ExtractionResult>,
    /// The batch was stopped through the cancel token
    pub stopped: bool,
}

impl RunOutcome {
    pub fn duration_seconds(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    fn failed(started: Instant, error: &ExtractError) -> Self {
        Self {
            success: false,
            duration: started.elapsed(),
            error: Some(error.to_string()),
            results: Vec::new(),
            stopped: false,
        }
    }
}

/// Execute a run on the current thread.
pub fn run(
    request: &RunRequest,
    extractor: &Extractor,
    sink: &dyn EventSink,
    cancel: &CancelToken,
) -> RunOutcome {
    let started = Instant::now();

    match execute(request, extractor, sink, cancel) {
        Ok((results, stopped)) => {
            let outcome = RunOutcome {
                success: true,
                duration: started.elapsed(),
                error: None,
                results,
                stopped,
            };
            sink.success(&format!(
                "Extraction completed successfully in {:.2} seconds",
                outcome.duration_seconds()
            ));
            outcome
        }
        Err(e) => {
            tracing::debug!(error = %e, "Run aborted");
            sink.error(&format!("Error during extraction: {e}"));
            RunOutcome::failed(started, &e)
        }
    }
}

/// Execute a run on a background thread, sending events to `events`.
///
/// The channel closes when the worker finishes.
pub fn spawn(
    request: RunRequest,
    events: Sender<LogEvent>,
    cancel: CancelToken,
) -> JoinHandle<RunOutcome> {
    thread::spawn(move || {
        let sink = ChannelSink::new(events);
        let extractor = Extractor::new(request.options);
        run(&request, &extractor, &sink, &cancel)
    })
}

fn execute(
    request: &RunRequest,
    extractor: &Extractor,
    sink: &dyn EventSink,
    cancel: &CancelToken,
) -> Result<(Vec<ExtractionResult>, bool), ExtractError> {
    let batch_mode = request.options.batch_mode && request.input.is_dir();

    if !batch_mode && !request.input.is_file() {
        return Err(ExtractError::InputNotFound {
            path: request.input.clone(),
        });
    }
    if batch_mode {
        // Enumerate before creating anything so an empty batch writes nothing.
        if batch::find_documents(&request.input)?.is_empty() {
            return Err(ExtractError::EmptyBatch {
                dir: request.input.clone(),
            });
        }
    }

    ensure_output_dir(request, sink)?;

    if !request.options.combine_files {
        sink.warning("Separate output files are not supported; fragments are combined");
    }
    if request.options.convert_sass_to_css && !extractor.can_compile_sass() {
        sink.warning(&format!(
            "{}; Sass will only be written to style.scss",
            SassError::Unavailable
        ));
    }

    if batch_mode {
        let report = batch::run_batch(
            extractor,
            &request.input,
            &request.output_dir,
            sink,
            cancel,
        )?;
        sink.info(&format!(
            "Batch finished: {} succeeded, {} failed",
            report.succeeded(),
            report.failed()
        ));
        Ok((report.results, report.stopped))
    } else {
        let result = extractor.extract_file(&request.input, &request.output_dir, sink)?;
        Ok((vec![result], false))
    }
}

fn ensure_output_dir(request: &RunRequest, sink: &dyn EventSink) -> Result<(), ExtractError> {
    let dir = &request.output_dir;
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| ExtractError::write(dir, e))?;
    sink.info(&format!("Created output directory: {}", dir.display()));
    Ok(())
}
