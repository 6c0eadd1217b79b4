use std::fs::{File, OpenOptions};
use std::io::{self, Result as IoResult, Stdout, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::event::Event;
use crate::telemetry::{FormatterMode, PlainFormatter, TelemetryFormatter};

/// Abstraction over an output target that consumes full [`Event`] objects.
pub trait EventSink: Send + Sync {
    /// Handle a structured event. The sink decides how to serialize it.
    fn handle(&mut self, event: &Event) -> IoResult<()>;
}

/// Stdout sink with optional formatting.
pub struct StdOutSink<F: TelemetryFormatter = PlainFormatter> {
    handle: Stdout,
    formatter: F,
}

impl Default for StdOutSink {
    fn default() -> Self {
        Self {
            handle: io::stdout(),
            formatter: PlainFormatter::new(),
        }
    }
}

impl<F: TelemetryFormatter> StdOutSink<F> {
    pub fn with_formatter(formatter: F) -> Self {
        Self {
            handle: io::stdout(),
            formatter,
        }
    }
}

impl<F: TelemetryFormatter> EventSink for StdOutSink<F> {
    fn handle(&mut self, event: &Event) -> IoResult<()> {
        let rendered = self.formatter.render_event(event).join_lines();
        self.handle.write_all(rendered.as_bytes())?;
        self.handle.flush()
    }
}

/// In-memory sink for testing and snapshots.
#[derive(Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<Event>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a snapshot of all captured events.
    pub fn snapshot(&self) -> Vec<Event> {
        self.entries.lock().unwrap().clone()
    }

    /// Clear all captured events.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

impl EventSink for MemorySink {
    fn handle(&mut self, event: &Event) -> IoResult<()> {
        self.entries.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// Append-only file sink: the run's free-form diagnostic log.
///
/// Lines are rendered without color. The format is human-oriented text and
/// not a compatibility surface.
pub struct FileSink {
    path: PathBuf,
    file: File,
    formatter: PlainFormatter,
}

impl FileSink {
    /// Opens (creating if needed) the log file in append mode.
    pub fn new(path: impl AsRef<Path>) -> IoResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().append(true).create(true).open(&path)?;
        Ok(Self {
            path,
            file,
            formatter: PlainFormatter::with_mode(FormatterMode::Plain),
        })
    }

    /// Resolves the log path from `WAYFINDER_LOG` (via `.env` when present),
    /// defaulting to `wayfinder.log` in the working directory.
    pub fn from_env() -> IoResult<Self> {
        dotenvy::dotenv().ok();
        let path =
            std::env::var("WAYFINDER_LOG").unwrap_or_else(|_| "wayfinder.log".to_string());
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSink for FileSink {
    fn handle(&mut self, event: &Event) -> IoResult<()> {
        let rendered = self.formatter.render_event(event).join_lines();
        self.file.write_all(rendered.as_bytes())?;
        self.file.flush()
    }
}
