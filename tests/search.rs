mod common;

use common::*;
use wayfinder::event_bus::Event;
use wayfinder::graph::RouteMap;
use wayfinder::search::{SearchConfig, SearchError, SearchRunner};

/// Node sequence of a discovered path, skipping the start self-loop.
fn node_trail(path: &wayfinder::search::DiscoveredPath) -> Vec<u64> {
    let mut trail = vec![path.edges[0].source()];
    trail.extend(path.edges.iter().skip(1).map(|e| e.dest()));
    trail
}

#[test]
fn reference_run_discovers_the_expected_paths() {
    let config = reference_config();
    let map = reference_map(config.edge_bias);
    let (bus, _sink) = memory_bus();

    let report = SearchRunner::new(&map, config, bus.sender()).run().unwrap();

    // First discovered path is 1 -> 3 -> 5 -> 9 at cost 3 + 4 + 3.
    assert_eq!(node_trail(&report.paths[0]), vec![1, 3, 5, 9]);
    assert_eq!(report.paths[0].total_cost, 10);
    assert!(report.paths[0].reached_finish);

    // Alternative routes over the shrinking graph, in discovery order.
    assert_eq!(node_trail(&report.paths[1]), vec![1, 2, 4, 6, 9]);
    assert_eq!(report.paths[1].total_cost, 10);
    assert_eq!(node_trail(&report.paths[2]), vec![1, 5, 6, 8, 9]);
    assert_eq!(report.paths[2].total_cost, 13);
    assert_eq!(report.paths.len(), 3);

    // The run ends with a final zero-cost dead-end attempt once the
    // start node's edges are exhausted.
    assert_eq!(report.attempts, 4);
}

#[test]
fn reported_cost_matches_the_sum_of_route_weights() {
    let config = reference_config();
    let map = reference_map(config.edge_bias);
    let (bus, _sink) = memory_bus();

    let report = SearchRunner::new(&map, config, bus.sender()).run().unwrap();
    for path in &report.paths {
        let sum: u64 = path.edges.iter().map(|e| e.weight()).sum();
        assert_eq!(sum, path.total_cost, "attempt {}", path.attempt);
    }
}

#[test]
fn no_edge_appears_twice_in_a_route() {
    let config = reference_config();
    let map = reference_map(config.edge_bias);
    let (bus, _sink) = memory_bus();

    let report = SearchRunner::new(&map, config, bus.sender()).run().unwrap();
    for path in &report.paths {
        for (i, a) in path.edges.iter().enumerate() {
            for b in path.edges.iter().skip(i + 1) {
                assert_ne!(a, b, "attempt {}", path.attempt);
            }
        }
    }
}

#[test]
fn dead_end_reports_the_partial_route_and_ends_the_run() {
    // One road, stopping short of the finish.
    let config = SearchConfig::new(1, 9);
    let map = RouteMap::from_rows(config.edge_bias, [(1u64, 2u64, 5u64, "only")]).unwrap();
    let (bus, _sink) = memory_bus();

    let report = SearchRunner::new(&map, config, bus.sender()).run().unwrap();
    assert_eq!(report.paths.len(), 1);
    assert!(!report.paths[0].reached_finish);
    assert_eq!(report.paths[0].total_cost, 5);
    assert_eq!(node_trail(&report.paths[0]), vec![1, 2]);
    assert_eq!(report.attempts, 1);
}

#[test]
fn immediate_dead_end_reports_nothing() {
    // The start node has no outgoing edges at all.
    let config = SearchConfig::new(1, 9);
    let map = RouteMap::from_rows(config.edge_bias, [(2u64, 9u64, 1u64, "far")]).unwrap();
    let (bus, _sink) = memory_bus();

    let report = SearchRunner::new(&map, config, bus.sender()).run().unwrap();
    assert!(report.paths.is_empty());
    assert_eq!(report.attempts, 1);
}

#[test]
fn direct_finish_edge_beats_a_lighter_detour() {
    let config = SearchConfig::new(1, 9);
    let map = RouteMap::from_rows(
        config.edge_bias,
        [(1u64, 9u64, 8u64, "direct"), (1, 2, 1, "detour"), (2, 9, 1, "detour")],
    )
    .unwrap();
    let (bus, _sink) = memory_bus();

    let report = SearchRunner::new(&map, config, bus.sender()).run().unwrap();
    assert_eq!(node_trail(&report.paths[0]), vec![1, 9]);
    assert_eq!(report.paths[0].total_cost, 8);
}

#[test]
fn closed_edges_never_reappear_in_later_attempts() {
    let config = reference_config();
    let map = reference_map(config.edge_bias);
    let (bus, sink) = memory_bus();

    SearchRunner::new(&map, config, bus.sender()).run().unwrap();
    bus.drain();

    // Replay the event stream: once an edge shows up in a reported path of
    // attempt k, it must be absent from every open-set snapshot of
    // attempts > k.
    let events = sink.snapshot();
    for event in &events {
        let Event::Path(path) = event else { continue };
        for committed in path.edges.iter().skip(1) {
            for later in &events {
                let Event::Snapshot(snap) = later else { continue };
                if snap.label != "open" || snap.attempt.unwrap_or(0) <= path.attempt {
                    continue;
                }
                assert!(
                    !snap.edges.contains(committed),
                    "{committed} from attempt {} reappeared in open at attempt {}",
                    path.attempt,
                    snap.attempt.unwrap_or(0),
                );
            }
        }
    }
}

#[test]
fn step_limit_stops_a_cycling_walk() {
    // 1 -> 1 self-edges are excluded from selection but rediscovered every
    // attempt, so open never empties and the outer loop would spin.
    let config = SearchConfig::new(1, 9).with_max_steps(25);
    let map = RouteMap::from_rows(config.edge_bias, [(1u64, 1u64, 2u64, "loop")]).unwrap();
    let (bus, _sink) = memory_bus();

    let err = SearchRunner::new(&map, config, bus.sender())
        .run()
        .unwrap_err();
    assert!(matches!(err, SearchError::StepLimitExceeded { limit: 25 }));
}

#[test]
fn run_report_carries_the_configured_run_id() {
    let config = reference_config().with_run_id("fixed-id");
    let map = reference_map(config.edge_bias);
    let (bus, _sink) = memory_bus();

    let report = SearchRunner::new(&map, config, bus.sender()).run().unwrap();
    assert_eq!(report.run_id, "fixed-id");
}
