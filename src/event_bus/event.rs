use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::edge::Edge;
use crate::types::Weight;

/// A structured event describing one observable moment of a run.
///
/// Events are the only channel between the search core and the outside
/// world: per-step traces, set snapshots, discovered paths, and free-form
/// diagnostics all travel as `Event`s to whatever sinks are attached.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    Search(SearchEvent),
    Snapshot(SnapshotEvent),
    Path(PathEvent),
    Diagnostic(DiagnosticEvent),
}

impl Event {
    /// Step-scoped trace enriched with attempt and step numbers.
    pub fn search(
        attempt: u64,
        step: usize,
        scope: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Event::Search(SearchEvent {
            attempt: Some(attempt),
            step: Some(step as u64),
            scope: scope.into(),
            message: message.into(),
        })
    }

    /// Contents of a named working set at one step.
    pub fn snapshot(
        label: impl Into<String>,
        attempt: u64,
        step: usize,
        edges: &[Edge],
        total_cost: Option<Weight>,
    ) -> Self {
        Event::Snapshot(SnapshotEvent {
            label: label.into(),
            attempt: Some(attempt),
            step: Some(step as u64),
            edges: edges.to_vec(),
            total_cost,
        })
    }

    /// A reported path: the route of one attempt plus its cost.
    pub fn path(attempt: u64, edges: Vec<Edge>, total_cost: Weight, reached_finish: bool) -> Self {
        Event::Path(PathEvent {
            attempt,
            edges,
            total_cost,
            reached_finish,
            timestamp: Utc::now(),
        })
    }

    pub fn diagnostic(scope: impl Into<String>, message: impl Into<String>) -> Self {
        Event::Diagnostic(DiagnosticEvent {
            scope: scope.into(),
            message: message.into(),
        })
    }

    pub fn scope_label(&self) -> &str {
        match self {
            Event::Search(search) => &search.scope,
            Event::Snapshot(snapshot) => &snapshot.label,
            Event::Path(_) => "path",
            Event::Diagnostic(diag) => &diag.scope,
        }
    }

    /// Convert the event to a structured JSON value with normalized schema.
    ///
    /// Returns a JSON object shaped as:
    /// ```json
    /// {
    ///   "type": "search" | "snapshot" | "path" | "diagnostic",
    ///   "scope": "scope_label",
    ///   "message": "rendered_message",
    ///   "timestamp": "2026-08-07T12:34:56.789Z",
    ///   "metadata": { /* variant-specific fields */ }
    /// }
    /// ```
    ///
    /// # Example
    ///
    /// ```
    /// use wayfinder::event_bus::Event;
    ///
    /// let event = Event::search(1, 3, "advance", "committed (1,3):3");
    /// let json = event.to_json_value();
    ///
    /// assert_eq!(json["type"], "search");
    /// assert_eq!(json["scope"], "advance");
    /// assert_eq!(json["metadata"]["attempt"], 1);
    /// assert_eq!(json["metadata"]["step"], 3);
    /// ```
    pub fn to_json_value(&self) -> Value {
        let (event_type, metadata) = match self {
            Event::Search(search) => {
                let mut meta = serde_json::Map::new();
                if let Some(attempt) = search.attempt {
                    meta.insert("attempt".to_string(), json!(attempt));
                }
                if let Some(step) = search.step {
                    meta.insert("step".to_string(), json!(step));
                }
                ("search", Value::Object(meta))
            }
            Event::Snapshot(snapshot) => {
                let mut meta = serde_json::Map::new();
                if let Some(attempt) = snapshot.attempt {
                    meta.insert("attempt".to_string(), json!(attempt));
                }
                if let Some(step) = snapshot.step {
                    meta.insert("step".to_string(), json!(step));
                }
                meta.insert("edges".to_string(), json!(snapshot.edges));
                if let Some(cost) = snapshot.total_cost {
                    meta.insert("total_cost".to_string(), json!(cost));
                }
                ("snapshot", Value::Object(meta))
            }
            Event::Path(path) => {
                let mut meta = serde_json::Map::new();
                meta.insert("attempt".to_string(), json!(path.attempt));
                meta.insert("edges".to_string(), json!(path.edges));
                meta.insert("total_cost".to_string(), json!(path.total_cost));
                meta.insert("reached_finish".to_string(), json!(path.reached_finish));
                ("path", Value::Object(meta))
            }
            Event::Diagnostic(_) => ("diagnostic", Value::Object(serde_json::Map::new())),
        };

        let timestamp = match self {
            Event::Path(path) => path.timestamp,
            _ => Utc::now(),
        };

        json!({
            "type": event_type,
            "scope": self.scope_label(),
            "message": self.to_string(),
            "timestamp": timestamp.to_rfc3339(),
            "metadata": metadata,
        })
    }

    /// Compact JSON string representation.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_json_value())
    }
}

fn write_edges(f: &mut fmt::Formatter<'_>, edges: &[Edge]) -> fmt::Result {
    let mut first = true;
    for edge in edges {
        if !first {
            write!(f, " ")?;
        }
        write!(f, "{edge}")?;
        first = false;
    }
    Ok(())
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Search(search) => match (search.attempt, search.step) {
                (Some(attempt), Some(step)) => {
                    write!(f, "[a{attempt}@s{step}] {}: {}", search.scope, search.message)
                }
                _ => write!(f, "{}: {}", search.scope, search.message),
            },
            Event::Snapshot(snapshot) => {
                write!(f, "===> {} [", snapshot.label)?;
                write_edges(f, &snapshot.edges)?;
                write!(f, "]")?;
                if let Some(cost) = snapshot.total_cost {
                    write!(f, " total cost: {cost}")?;
                }
                Ok(())
            }
            Event::Path(path) => {
                let state = if path.reached_finish {
                    "path"
                } else {
                    "partial path"
                };
                write!(f, "{state} (attempt {}, cost {}): ", path.attempt, path.total_cost)?;
                write_edges(f, &path.edges)
            }
            Event::Diagnostic(diag) => write!(f, "{}: {}", diag.scope, diag.message),
        }
    }
}

/// Step-scoped trace record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchEvent {
    pub attempt: Option<u64>,
    pub step: Option<u64>,
    pub scope: String,
    pub message: String,
}

/// Contents of one working set (`open`, `best`) at one step.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotEvent {
    pub label: String,
    pub attempt: Option<u64>,
    pub step: Option<u64>,
    pub edges: Vec<Edge>,
    pub total_cost: Option<Weight>,
}

/// One discovered path, in path order including the start self-loop.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathEvent {
    pub attempt: u64,
    pub edges: Vec<Edge>,
    pub total_cost: Weight,
    pub reached_finish: bool,
    pub timestamp: DateTime<Utc>,
}

/// Free-form scope + message record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticEvent {
    pub scope: String,
    pub message: String,
}
