//! Event reporting: structured events, sinks, and the synchronous bus.
//!
//! The module is organised around a channel-backed [`EventBus`] fanning out
//! to [`EventSink`]s, with [`Event`] as the single structured record type
//! producers emit ("record a named event with structured fields").

pub mod bus;
pub mod emitter;
pub mod event;
pub mod sink;

pub use bus::EventBus;
pub use emitter::{EmitterError, EventEmitter};
pub use event::{DiagnosticEvent, Event, PathEvent, SearchEvent, SnapshotEvent};
pub use sink::{EventSink, FileSink, MemorySink, StdOutSink};
