use crate::event_bus::Event;
use std::io::IsTerminal;

pub const CONTEXT_COLOR: &str = "\x1b[32m"; // green
pub const LINE_COLOR: &str = "\x1b[35m"; // magenta / dark pink
pub const RESET_COLOR: &str = "\x1b[0m";

/// Formatter color mode for telemetry output.
///
/// Controls whether ANSI color codes are included in formatted output:
/// - [`FormatterMode::Auto`]: Automatically detects TTY capability via `stderr.is_terminal()`
/// - [`FormatterMode::Colored`]: Always include color codes
/// - [`FormatterMode::Plain`]: Never include color codes (for logs/files)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatterMode {
    /// Auto-detect TTY capability (checks `stderr.is_terminal()`)
    #[default]
    Auto,
    /// Always include ANSI color codes
    Colored,
    /// Never include ANSI color codes
    Plain,
}

impl FormatterMode {
    /// Auto-detect formatter mode based on stderr TTY capability.
    pub fn auto_detect() -> Self {
        if std::io::stderr().is_terminal() {
            FormatterMode::Colored
        } else {
            FormatterMode::Plain
        }
    }

    /// Returns true if this mode should use colored output.
    ///
    /// For `Auto` mode, performs TTY detection on each call.
    pub fn is_colored(&self) -> bool {
        match self {
            FormatterMode::Auto => std::io::stderr().is_terminal(),
            FormatterMode::Colored => true,
            FormatterMode::Plain => false,
        }
    }
}

/// Rendered output for a telemetry item that can be consumed by sinks.
#[derive(Clone, Debug, Default)]
pub struct EventRender {
    pub context: Option<String>,
    pub lines: Vec<String>,
}

impl EventRender {
    pub fn join_lines(&self) -> String {
        self.lines.join("")
    }
}

pub trait TelemetryFormatter: Send + Sync {
    fn render_event(&self, event: &Event) -> EventRender;
}

/// Plain text formatter with optional ANSI color codes.
///
/// # Examples
/// ```
/// use wayfinder::telemetry::{FormatterMode, PlainFormatter};
///
/// // Auto-detect TTY
/// let formatter = PlainFormatter::new();
///
/// // Force plain output (no colors), e.g. for a log file
/// let formatter = PlainFormatter::with_mode(FormatterMode::Plain);
/// ```
pub struct PlainFormatter {
    mode: FormatterMode,
}

impl PlainFormatter {
    /// Create a new formatter with auto-detected color mode.
    pub fn new() -> Self {
        Self {
            mode: FormatterMode::Auto,
        }
    }

    /// Create a new formatter with explicit color mode.
    pub fn with_mode(mode: FormatterMode) -> Self {
        Self { mode }
    }
}

impl Default for PlainFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryFormatter for PlainFormatter {
    fn render_event(&self, event: &Event) -> EventRender {
        let line = if self.mode.is_colored() {
            // Paths in the context color so completed routes stand out of
            // the step-by-step trace.
            match event {
                Event::Path(_) => format!("{CONTEXT_COLOR}{event}{RESET_COLOR}\n"),
                _ => format!("{LINE_COLOR}{event}{RESET_COLOR}\n"),
            }
        } else {
            format!("{event}\n")
        };
        EventRender {
            context: Some(event.scope_label().to_string()),
            lines: vec![line],
        }
    }
}
