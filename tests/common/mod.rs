//! Shared fixtures for the integration suites.
#![allow(dead_code)] // not every suite uses every fixture

use wayfinder::edge::Edge;
use wayfinder::event_bus::{EventBus, MemorySink};
use wayfinder::graph::RouteMap;
use wayfinder::search::SearchConfig;
use wayfinder::types::Weight;

/// Shorthand edge constructor for assertions (label is identity-neutral).
pub fn edge(source: u64, dest: u64, weight: Weight) -> Edge {
    Edge::new(source, dest, weight, "test")
}

/// The nine-node reference road map: START=1, FINISH=9.
pub fn reference_rows() -> Vec<(u64, u64, Weight, &'static str)> {
    vec![
        (1, 2, 4, "Start"),
        (1, 5, 7, "Start"),
        (1, 3, 3, "Start"),
        (2, 4, 1, "A"),
        (3, 1, 3, "B"),
        (3, 5, 4, "B"),
        (4, 6, 1, "C"),
        (4, 5, 3, "C"),
        (5, 7, 5, "D"),
        (5, 9, 3, "D"),
        (5, 6, 1, "D"),
        (6, 8, 2, "E"),
        (6, 9, 4, "E"),
        (8, 6, 2, "G"),
        (8, 9, 3, "G"),
        (9, 9, 0, "Finish"),
    ]
}

pub fn reference_map(edge_bias: u64) -> RouteMap {
    RouteMap::from_rows(edge_bias, reference_rows()).expect("reference map is duplicate-free")
}

pub fn reference_config() -> SearchConfig {
    SearchConfig::new(1, 9)
}

/// A bus wired to a memory sink; drain the bus, then read the sink.
pub fn memory_bus() -> (EventBus, MemorySink) {
    let sink = MemorySink::new();
    let bus = EventBus::with_sink(sink.clone());
    (bus, sink)
}
