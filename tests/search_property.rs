#[macro_use]
extern crate proptest;

use proptest::prelude::{Strategy, prop};

mod common;
use common::*;

use rustc_hash::FxHashSet;
use wayfinder::graph::RouteMap;
use wayfinder::search::{SearchConfig, SearchError, SearchRunner};
use wayfinder::types::Weight;

/// Generate small random edge lists over nodes 1..=6 with weights 1..=9.
///
/// Triples are deduplicated so graph construction cannot reject rows; the
/// resulting graphs freely contain cycles and disconnected parts.
fn rows_strategy() -> impl Strategy<Value = Vec<(u64, u64, Weight, String)>> {
    prop::collection::vec((1u64..=6, 1u64..=6, 1u64..=9), 0..24).prop_map(|triples| {
        let mut seen = FxHashSet::default();
        triples
            .into_iter()
            .filter(|t| seen.insert(*t))
            .map(|(s, d, w)| (s, d, w, format!("edge-{s}-{d}")))
            .collect()
    })
}

proptest! {
    /// Incremental and final cost accounting never drift apart.
    #[test]
    fn prop_reported_cost_equals_route_weight_sum(rows in rows_strategy()) {
        let config = SearchConfig::new(1, 6).with_max_steps(500);
        let map = RouteMap::from_rows(config.edge_bias, rows).unwrap();
        let (bus, _sink) = memory_bus();

        match SearchRunner::new(&map, config, bus.sender()).run() {
            Ok(report) => {
                for path in &report.paths {
                    let sum: Weight = path.edges.iter().map(|e| e.weight()).sum();
                    prop_assert_eq!(sum, path.total_cost);
                }
            }
            // Cyclic graphs may legitimately exhaust the step budget.
            Err(SearchError::StepLimitExceeded { .. }) => {}
            Err(other) => return Err(proptest::test_runner::TestCaseError::fail(other.to_string())),
        }
    }

    /// Routes are duplicate-free and anchored at the start self-loop.
    #[test]
    fn prop_routes_are_well_formed(rows in rows_strategy()) {
        let config = SearchConfig::new(1, 6).with_max_steps(500);
        let map = RouteMap::from_rows(config.edge_bias, rows).unwrap();
        let (bus, _sink) = memory_bus();

        let Ok(report) = SearchRunner::new(&map, config, bus.sender()).run() else {
            return Ok(());
        };
        for path in &report.paths {
            prop_assert!(path.total_cost > 0);
            let first = &path.edges[0];
            prop_assert_eq!(first.source(), first.dest());
            prop_assert_eq!(first.weight(), 0);

            let mut seen = FxHashSet::default();
            for edge in &path.edges {
                prop_assert!(seen.insert(edge.identity()), "edge repeated in route");
            }
        }
    }

    /// An edge reported in one attempt never reappears in a later one:
    /// committed edges stay committed for the whole run.
    #[test]
    fn prop_attempts_never_reuse_committed_edges(rows in rows_strategy()) {
        let config = SearchConfig::new(1, 6).with_max_steps(500);
        let map = RouteMap::from_rows(config.edge_bias, rows).unwrap();
        let (bus, _sink) = memory_bus();

        let Ok(report) = SearchRunner::new(&map, config, bus.sender()).run() else {
            return Ok(());
        };
        let mut committed = FxHashSet::default();
        for path in &report.paths {
            for edge in path.edges.iter().skip(1) {
                prop_assert!(
                    committed.insert(edge.identity()),
                    "edge committed twice across attempts"
                );
            }
        }
    }
}
