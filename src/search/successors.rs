//! Successor discovery: which edges can extend the path from the frontier.

use crate::edge::Edge;
use crate::graph::RouteMap;
use crate::sets::EdgeSet;

use super::SearchConfig;

/// Collects every stored edge leaving the frontier's destination that is
/// not already committed.
///
/// The scan walks the whole store in storage order. A qualifying edge that
/// lands directly on the finish node is inserted and **ends the scan**: once
/// the finish is in reach nothing else is discovered that step. This is the
/// greedy restriction the walk is built around, not a shortcut.
///
/// Pure: returns a fresh set (empty means dead end) and never touches
/// `closed`.
#[must_use]
pub fn find_successors(
    map: &RouteMap,
    closed: &EdgeSet,
    frontier: &Edge,
    config: &SearchConfig,
) -> EdgeSet {
    let mut found = EdgeSet::new(config.edge_bias);
    for edge in map.iter() {
        if edge.source() != frontier.dest() || closed.contains(edge) {
            continue;
        }
        found.insert(edge.clone());
        if edge.dest() == config.finish {
            break;
        }
    }
    found
}
