use std::fmt;
use thiserror::Error;

use super::event::Event;

/// Abstract event emitter: the one capability the search core needs from
/// the reporting collaborator.
///
/// The runner records named events with structured fields through this
/// trait and knows nothing about sinks or formatting. The bus's channel
/// sender implements it, so `bus.sender()` is the usual argument.
pub trait EventEmitter: Send + Sync + fmt::Debug {
    /// Emit an event in a synchronous, non-blocking manner.
    fn emit(&self, event: Event) -> Result<(), EmitterError>;
}

/// Errors that can occur when emitting an event.
#[derive(Debug, Error)]
pub enum EmitterError {
    #[error("event bus closed")]
    Closed,
    #[error("event emission failed: {0}")]
    Other(String),
}

impl EmitterError {
    pub fn other(error: impl Into<String>) -> Self {
        Self::Other(error.into())
    }
}

impl EventEmitter for flume::Sender<Event> {
    fn emit(&self, event: Event) -> Result<(), EmitterError> {
        self.send(event).map_err(|_| EmitterError::Closed)
    }
}
