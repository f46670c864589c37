//! Terminal colors for CLI output.
//!
//! Centralizes the color used for each log severity. Colors are plain ANSI
//! escape codes and are switched off when `NO_COLOR` is set or stdout is not
//! a terminal.

use std::io::Write;

use crate::events::{EventSink, LogEvent, Severity};

/// Raw ANSI escape sequences.
pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const GRAY: &str = "\x1b[37m";
    pub const DARK_GRAY: &str = "\x1b[90m";
}

/// Color per severity.
#[derive(Debug, Clone)]
pub struct Theme {
    pub info: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    /// Headers are additionally bold
    pub header: &'static str,
    /// Timestamps and hints
    pub secondary: &'static str,
    /// When false every helper returns the text unchanged
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::log_panel()
    }
}

impl Theme {
    /// Blue info, green success, yellow warnings, red errors, magenta headers.
    pub fn log_panel() -> Self {
        Self {
            info: ansi::BLUE,
            success: ansi::GREEN,
            warning: ansi::YELLOW,
            error: ansi::RED,
            header: ansi::MAGENTA,
            secondary: ansi::DARK_GRAY,
            enabled: true,
        }
    }

    /// Same palette, no escape codes.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::log_panel()
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color, text, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    /// Format text for a severity.
    pub fn severity_text(&self, severity: Severity, text: &str) -> String {
        match severity {
            Severity::Info => self.paint(self.info, text),
            Severity::Success => self.paint(self.success, text),
            Severity::Warning => self.paint(self.warning, text),
            Severity::Error => self.paint(self.error, text),
            Severity::Header => self.paint(&format!("{}{}", ansi::BOLD, self.header), text),
        }
    }

    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.secondary, text)
    }

    pub fn primary_text(&self, text: &str) -> String {
        self.paint(ansi::GRAY, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.severity_text(Severity::Success, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        self.severity_text(Severity::Error, text)
    }

    /// One log line: `[HH:MM:SS] message`.
    pub fn event_line(&self, event: &LogEvent) -> String {
        format!(
            "{} {}",
            self.secondary_text(&format!("[{}]", event.time_label())),
            self.severity_text(event.severity, &event.message)
        )
    }
}

/// Theme for this process's stdout.
pub fn current_theme() -> Theme {
    if std::env::var_os("NO_COLOR").is_some() || !atty::is(atty::Stream::Stdout) {
        Theme::plain()
    } else {
        Theme::default()
    }
}

/// Prints events as they arrive. Errors go to stderr, everything else to
/// stdout.
pub struct TerminalSink {
    theme: Theme,
}

impl TerminalSink {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new(current_theme())
    }
}

impl EventSink for TerminalSink {
    fn emit(&self, event: LogEvent) {
        let line = self.theme.event_line(&event);
        // Ignore broken pipes (e.g. output piped into `head`)
        if event.severity == Severity::Error {
            let _ = writeln!(std::io::stderr(), "{line}");
        } else {
            let _ = writeln!(std::io::stdout(), "{line}");
        }
    }
}
