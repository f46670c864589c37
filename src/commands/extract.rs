//! Extract subcommand handler

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;

use anyhow::{bail, Result};

use html_extractor::cli::ExtractArgs;
use html_extractor::events::EventSink;
use html_extractor::theme::TerminalSink;
use html_extractor::{CancelToken, RunRequest, Settings};

/// Pick the output directory: the flag, else the last one used.
fn resolve_output_dir(args: &ExtractArgs, settings: &Settings) -> Result<PathBuf> {
    if let Some(dir) = &args.output {
        return Ok(dir.clone());
    }
    match settings.last_output_dir() {
        Some(dir) => Ok(dir),
        None => bail!("Please select an output directory (--output)"),
    }
}

/// Run an extraction, printing progress as it happens.
///
/// The work runs on a background thread; Ctrl-C stops a batch after the
/// current document.
pub fn handle(args: &ExtractArgs) -> Result<ExitCode> {
    let mut settings = Settings::load();
    let options = args.options(&settings);
    let output_dir = resolve_output_dir(args, &settings)?;

    if !args.no_save {
        settings.remember(&options, &output_dir);
        settings.save();
    }

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || handler_token.cancel()) {
        tracing::warn!(error = %e, "Could not install Ctrl-C handler");
    }

    let request = RunRequest {
        input: args.input.clone(),
        output_dir,
        options,
    };
    let (tx, rx) = mpsc::channel();
    let worker = html_extractor::spawn(request, tx, cancel);

    let sink = TerminalSink::default();
    for event in rx {
        sink.emit(event);
    }

    let outcome = match worker.join() {
        Ok(outcome) => outcome,
        Err(_) => bail!("Extraction worker panicked"),
    };

    let any_failed = outcome.results.iter().any(|r| !r.is_success());
    if outcome.success && !any_failed {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
