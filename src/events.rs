//! Log events emitted by the extraction pipeline.
//!
//! The pipeline never prints. It reports progress through an [`EventSink`]
//! supplied by the caller, which can render events to a terminal, forward
//! them over a channel to another thread, or record them for tests.

use std::sync::mpsc::Sender;
use std::sync::Mutex;

use chrono::{DateTime, Local};

/// Severity of a log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
    /// Section heading (start of a document, summary block)
    Header,
}

impl Severity {
    /// Lowercase name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Header => "header",
        }
    }
}

/// A single timestamped log message.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub severity: Severity,
}

impl LogEvent {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            message: message.into(),
            severity,
        }
    }

    /// Timestamp as `HH:MM:SS` for log lines.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Receiver of pipeline log events.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: LogEvent);

    fn info(&self, message: &str) {
        self.emit(LogEvent::new(Severity::Info, message));
    }

    fn success(&self, message: &str) {
        self.emit(LogEvent::new(Severity::Success, message));
    }

    fn warning(&self, message: &str) {
        self.emit(LogEvent::new(Severity::Warning, message));
    }

    fn error(&self, message: &str) {
        self.emit(LogEvent::new(Severity::Error, message));
    }

    fn header(&self, message: &str) {
        self.emit(LogEvent::new(Severity::Header, message));
    }
}

/// Forwards events to another thread.
///
/// Send errors are ignored: the receiving side may have gone away.
pub struct ChannelSink {
    tx: Mutex<Sender<LogEvent>>,
}

impl ChannelSink {
    pub fn new(tx: Sender<LogEvent>) -> Self {
        Self { tx: Mutex::new(tx) }
    }
}

impl EventSink for ChannelSink {
    fn emit(&self, event: LogEvent) {
        if let Ok(tx) = self.tx.lock() {
            let _ = tx.send(event);
        }
    }
}

/// Keeps every event in memory.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<LogEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events.
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Messages of the given severity, in emission order.
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.severity == severity)
            .map(|e| e.message)
            .collect()
    }

    /// Whether any recorded message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.events().iter().any(|e| e.message.contains(needle))
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: LogEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
