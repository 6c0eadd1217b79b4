//! # Wayfinder: Greedy Least-Cost Route Search
//!
//! Wayfinder computes a least-cost path between a start node and a finish
//! node in a small, static, weighted directed graph, and reports the path
//! along with its total cost. The search is a greedy walk with restarts:
//! each attempt commits one locally-best edge at a time, and the driver
//! restarts from the start node to discover alternative routes until none
//! remain. It is deliberately *not* classical priority-queue Dijkstra —
//! the walk's tie-breaks and restart policy are part of its contract.
//!
//! ## Core Concepts
//!
//! - **Edges**: Immutable `(source, dest, weight)` values; labels ride
//!   along for reporting only
//! - **Route map**: The fixed edge store, read-only once search begins
//! - **Working sets**: `open` (discovered, uncommitted), `closed`
//!   (committed across the whole run), and the committed route of the
//!   current attempt
//! - **Events**: Structured records of every step, snapshot, and
//!   discovered path, fanned out to pluggable sinks
//!
//! ## Quick Start
//!
//! ```rust
//! use wayfinder::event_bus::{EventBus, MemorySink};
//! use wayfinder::graph::RouteMap;
//! use wayfinder::search::{SearchConfig, SearchRunner};
//!
//! // Two roads from 1 to 4: direct but heavy, or via 2.
//! let config = SearchConfig::new(1, 4);
//! let map = RouteMap::from_rows(
//!     config.edge_bias,
//!     [(1u64, 4u64, 9u64, "direct"), (1, 2, 2, "a"), (2, 4, 3, "b")],
//! )
//! .unwrap();
//!
//! let sink = MemorySink::new();
//! let bus = EventBus::with_sink(sink.clone());
//!
//! let report = SearchRunner::new(&map, config, bus.sender()).run().unwrap();
//! bus.drain();
//!
//! // The direct finish edge is preferred the moment it is reachable.
//! assert_eq!(report.paths[0].total_cost, 9);
//! assert!(report.paths[0].reached_finish);
//! assert!(!sink.snapshot().is_empty());
//! ```
//!
//! ## Error Handling
//!
//! Dead ends are normal outcomes, not errors. Errors mean the graph was
//! malformed ([`graph::GraphError`]) or an invariant broke mid-run
//! ([`search::SearchError`]); both derive [`miette::Diagnostic`] and carry
//! codes and help texts.
//!
//! ## Module Guide
//!
//! - [`types`] - Node ids and weights
//! - [`edge`] - The edge value type
//! - [`sets`] - Ordered edge set and the insertion-ordered route
//! - [`graph`] - The route map (graph store)
//! - [`search`] - Successor finder, greedy selector, and the runner
//! - [`event_bus`] - Structured events, sinks, and the synchronous bus
//! - [`telemetry`] - Formatting of events for line-oriented sinks

pub mod edge;
pub mod event_bus;
pub mod graph;
pub mod search;
pub mod sets;
pub mod telemetry;
pub mod types;
