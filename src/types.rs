//! Core identifier types for the wayfinder search engine.
//!
//! Node ids and weights share one numeric domain; both are plain aliases
//! so graph rows, configuration, and assertions read as the numbers they
//! are. The algorithm-level types (edges, sets, reports) live in their own
//! modules.

/// Identifies a node within the route graph.
///
/// Node identity carries no state beyond the number itself; two ids are
/// special per run (the configured start and finish nodes, see
/// [`crate::search::SearchConfig`]).
pub type NodeId = u64;

/// Nonnegative edge weight.
///
/// Weights accumulate into path costs. Zero is reserved for the synthetic
/// start self-loop; a selection of weight zero reads as "no successor
/// found" (see [`crate::search::select_lowest`]).
pub type Weight = u64;
