//! Greedy selection of the next edge to commit.

use crate::edge::Edge;
use crate::sets::EdgeSet;
use crate::types::Weight;

use super::SearchConfig;

/// Picks the edge to extend the path with from the open set.
///
/// Scans `open` in storage order keeping a running best and a running
/// threshold seeded with `cost_ceiling`. An edge replaces the current best
/// when either:
///
/// - its destination is the finish node — finish edges always win, whatever
///   their weight and *wherever they depart from*; or
/// - it departs from the frontier's destination with a weight strictly
///   below the threshold, and does not lead back to the start node.
///
/// Each replacement lowers the threshold to the replacement's weight.
/// Returns `None` when nothing qualifies. Callers must also treat a
/// selected weight of exactly 0 as "no successor": zero is reserved for the
/// synthetic start loop, so a zero-weight selection reads as a dead end.
#[must_use]
pub fn select_lowest(
    open: &EdgeSet,
    frontier: &Edge,
    cost_ceiling: Weight,
    config: &SearchConfig,
) -> Option<Edge> {
    let mut lowest: Option<Edge> = None;
    let mut threshold = cost_ceiling;
    for edge in open.iter() {
        let departs_frontier = edge.source() == frontier.dest()
            && edge.weight() < threshold
            && edge.dest() != config.start;
        if departs_frontier || edge.dest() == config.finish {
            threshold = edge.weight();
            tracing::trace!(%edge, from = %frontier, "lowest weight candidate replaced");
            lowest = Some(edge.clone());
        }
    }
    lowest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SearchConfig {
        SearchConfig::new(1, 9).with_run_id("test")
    }

    fn open_set(edges: &[(u64, u64, Weight)]) -> EdgeSet {
        let mut set = EdgeSet::new(SearchConfig::DEFAULT_EDGE_BIAS);
        for &(s, d, w) in edges {
            set.insert(Edge::new(s, d, w, "t"));
        }
        set
    }

    #[test]
    fn picks_lowest_weight_from_frontier() {
        let cfg = config();
        let open = open_set(&[(5, 6, 1), (5, 7, 5)]);
        let frontier = Edge::new(3, 5, 4, "B");
        let picked = select_lowest(&open, &frontier, cfg.max_weight, &cfg).unwrap();
        assert_eq!(picked, Edge::new(5, 6, 1, ""));
    }

    #[test]
    fn finish_edge_beats_lower_weight() {
        let cfg = config();
        let open = open_set(&[(5, 6, 1), (5, 9, 3)]);
        let frontier = Edge::new(3, 5, 4, "B");
        let picked = select_lowest(&open, &frontier, cfg.max_weight, &cfg).unwrap();
        assert_eq!(picked, Edge::new(5, 9, 3, ""));
    }

    #[test]
    fn finish_edge_wins_even_off_frontier() {
        // A finish edge lingering in open from an earlier step is selected
        // although it does not depart the current frontier.
        let cfg = config();
        let open = open_set(&[(5, 6, 1), (6, 9, 4)]);
        let frontier = Edge::new(3, 5, 4, "B");
        let picked = select_lowest(&open, &frontier, cfg.max_weight, &cfg).unwrap();
        assert_eq!(picked, Edge::new(6, 9, 4, ""));
    }

    #[test]
    fn back_to_start_is_excluded() {
        let cfg = config();
        let open = open_set(&[(3, 1, 3)]);
        let frontier = Edge::new(1, 3, 3, "Start");
        assert!(select_lowest(&open, &frontier, cfg.max_weight, &cfg).is_none());
    }

    #[test]
    fn edges_off_the_frontier_do_not_qualify() {
        let cfg = config();
        let open = open_set(&[(1, 2, 4), (1, 5, 7)]);
        let frontier = Edge::new(1, 3, 3, "Start");
        assert!(select_lowest(&open, &frontier, cfg.max_weight, &cfg).is_none());
    }

    #[test]
    fn empty_open_selects_nothing() {
        let cfg = config();
        let open = EdgeSet::new(cfg.edge_bias);
        let frontier = Edge::start_loop(cfg.start);
        assert!(select_lowest(&open, &frontier, cfg.max_weight, &cfg).is_none());
    }

    #[test]
    fn threshold_ratchets_down_across_candidates() {
        let cfg = config();
        let open = open_set(&[(5, 6, 1), (5, 8, 2), (5, 7, 5)]);
        let frontier = Edge::new(3, 5, 4, "B");
        let picked = select_lowest(&open, &frontier, cfg.max_weight, &cfg).unwrap();
        assert_eq!(picked.weight(), 1);
    }
}
