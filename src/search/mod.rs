//! Path search: successor discovery, greedy selection, and the driver.
//!
//! The search is a greedy walk with restarts, not classical Dijkstra.
//! Each *attempt* extends a committed route one edge at a time from the
//! start node until the finish is reached or the frontier dead-ends; the
//! outer *run* restarts from the start node to look for alternative routes
//! until the open set empties out. Edges committed by one attempt stay
//! committed for the whole run, so later attempts search a smaller graph.
//!
//! # Quick Start
//!
//! ```rust
//! use wayfinder::event_bus::EventBus;
//! use wayfinder::graph::RouteMap;
//! use wayfinder::search::{SearchConfig, SearchRunner};
//!
//! let config = SearchConfig::new(1, 9);
//! let map = RouteMap::from_rows(
//!     config.edge_bias,
//!     [
//!         (1u64, 2u64, 4u64, "Start"),
//!         (1, 3, 3, "Start"),
//!         (2, 9, 1, "A"),
//!         (3, 9, 4, "B"),
//!     ],
//! )
//! .unwrap();
//!
//! let bus = EventBus::default();
//! let report = SearchRunner::new(&map, config, bus.sender()).run().unwrap();
//! bus.drain();
//!
//! assert!(!report.paths.is_empty());
//! assert_eq!(report.paths[0].total_cost, 7);
//! ```

mod config;
mod runner;
mod selector;
mod successors;

pub use config::SearchConfig;
pub use runner::{AttemptEnd, DiscoveredPath, RunReport, SearchError, SearchRunner};
pub use selector::select_lowest;
pub use successors::find_successors;
