use std::sync::Mutex;

use super::event::Event;
use super::sink::{EventSink, StdOutSink};

/// Receives events from producers and broadcasts them to the attached sinks.
///
/// The bus is synchronous: producers send through cloned channel senders
/// while the search runs, and [`drain`](EventBus::drain) delivers everything
/// queued so far to every sink. The search itself is single-threaded with
/// no suspension points, so there is no background listener to manage.
pub struct EventBus {
    sinks: Mutex<Vec<Box<dyn EventSink>>>,
    channel: (flume::Sender<Event>, flume::Receiver<Event>),
}

impl Default for EventBus {
    fn default() -> Self {
        Self::with_sink(StdOutSink::default())
    }
}

impl EventBus {
    /// Create an EventBus with a single sink.
    pub fn with_sink<T>(sink: T) -> Self
    where
        T: EventSink + 'static,
    {
        Self {
            sinks: Mutex::new(vec![Box::new(sink)]),
            channel: flume::unbounded(),
        }
    }

    /// Create an EventBus with multiple sinks.
    pub fn with_sinks(sinks: Vec<Box<dyn EventSink>>) -> Self {
        Self {
            sinks: Mutex::new(sinks),
            channel: flume::unbounded(),
        }
    }

    /// Attach another sink (e.g. a file log next to stdout).
    ///
    /// # Example
    /// ```no_run
    /// use wayfinder::event_bus::{EventBus, FileSink};
    ///
    /// let bus = EventBus::default();
    /// bus.add_sink(FileSink::from_env().unwrap());
    /// // Events now reach both stdout and the log file on drain.
    /// ```
    pub fn add_sink<T: EventSink + 'static>(&self, sink: T) {
        self.sinks.lock().unwrap().push(Box::new(sink));
    }

    /// Get a clone of the sender side so producers can emit events.
    pub fn sender(&self) -> flume::Sender<Event> {
        self.channel.0.clone()
    }

    /// Deliver every queued event to all sinks; returns how many were
    /// delivered. Sink failures are reported on stderr and do not stop the
    /// drain.
    pub fn drain(&self) -> usize {
        let mut delivered = 0;
        let mut sinks = self.sinks.lock().unwrap();
        while let Ok(event) = self.channel.1.try_recv() {
            for sink in sinks.iter_mut() {
                if let Err(e) = sink.handle(&event) {
                    eprintln!("EventBus sink error: {e}");
                }
            }
            delivered += 1;
        }
        delivered
    }
}
