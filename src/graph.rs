//! The graph store: the fixed set of directed, weighted edges.
//!
//! [`RouteMap`] owns the canonical edge set for a run's lifetime and is
//! read-only once search begins. Construction is the job of an external
//! collaborator feeding `(source, dest, weight, label)` rows — a literal
//! table, a file, a generator; the store only enforces the no-duplicate
//! invariant and surfaces violations to the caller.
//!
//! # Examples
//!
//! ```rust
//! use wayfinder::graph::RouteMap;
//!
//! let map = RouteMap::from_rows(
//!     100,
//!     [(1, 2, 4, "Start"), (1, 3, 3, "Start"), (2, 4, 1, "A")],
//! )
//! .unwrap();
//! assert_eq!(map.len(), 3);
//! ```

use miette::Diagnostic;
use thiserror::Error;

use crate::edge::Edge;
use crate::sets::EdgeSet;
use crate::types::{NodeId, Weight};

/// Errors raised while populating a [`RouteMap`].
///
/// Duplicate insertion during setup is conventionally fatal: construction
/// is assumed to produce a well-formed graph, so callers treat a reject as
/// bad input rather than recovering.
#[derive(Debug, Error, Diagnostic)]
pub enum GraphError {
    /// An edge with the same `(source, dest, weight)` triple is already stored.
    #[error("duplicate edge {edge} prevented insertion")]
    #[diagnostic(
        code(wayfinder::graph::duplicate_edge),
        help("Each (source, dest, weight) triple may appear at most once in the graph.")
    )]
    DuplicateEdge { edge: Edge },
}

/// Holds the fixed set of directed, weighted edges for one run.
///
/// Edges iterate in storage order — the deterministic
/// `weight + source * bias` key — which fixes scan order for the successor
/// finder without implying any search priority.
#[derive(Clone, Debug)]
pub struct RouteMap {
    edges: EdgeSet,
}

impl RouteMap {
    /// Creates an empty store ordering edges with the given bias constant.
    ///
    /// The bias must exceed any plausible edge count; it should match the
    /// `edge_bias` of the [`SearchConfig`](crate::search::SearchConfig)
    /// driving the run so all ordered containers agree.
    #[must_use]
    pub fn new(edge_bias: u64) -> Self {
        Self {
            edges: EdgeSet::new(edge_bias),
        }
    }

    /// Inserts an edge if no equal edge exists.
    ///
    /// # Errors
    ///
    /// [`GraphError::DuplicateEdge`] when the `(source, dest, weight)`
    /// triple is already present. The reject is also logged; nothing is
    /// dropped silently.
    pub fn insert(
        &mut self,
        source: NodeId,
        dest: NodeId,
        weight: Weight,
        label: impl Into<String>,
    ) -> Result<(), GraphError> {
        let edge = Edge::new(source, dest, weight, label);
        if self.edges.insert(edge.clone()) {
            tracing::debug!(%edge, label = edge.label(), "edge inserted");
            Ok(())
        } else {
            tracing::warn!(%edge, "duplicate edge prevented insertion");
            Err(GraphError::DuplicateEdge { edge })
        }
    }

    /// Builds a store from `(source, dest, weight, label)` rows.
    ///
    /// This is the graph-construction collaborator entry point; the first
    /// duplicate row fails the whole construction.
    pub fn from_rows<S>(
        edge_bias: u64,
        rows: impl IntoIterator<Item = (NodeId, NodeId, Weight, S)>,
    ) -> Result<Self, GraphError>
    where
        S: Into<String>,
    {
        let mut map = Self::new(edge_bias);
        for (source, dest, weight, label) in rows {
            map.insert(source, dest, weight, label)?;
        }
        Ok(map)
    }

    /// Edges in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// The bias constant used for storage ordering.
    #[must_use]
    pub fn edge_bias(&self) -> u64 {
        self.edges.bias()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
