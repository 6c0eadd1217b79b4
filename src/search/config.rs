//! Run configuration for the search driver.
//!
//! Everything the original search kept as ambient constants — endpoint
//! ids, the "no successor" weight ceiling, the ordering bias — is an
//! explicit value handed to [`SearchRunner`](crate::search::SearchRunner)
//! at construction. The core has no mutable globals.

use uuid::Uuid;

use crate::types::{NodeId, Weight};

/// Configuration fixed for the lifetime of one run.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Node every attempt departs from.
    pub start: NodeId,
    /// Node the search is trying to reach.
    pub finish: NodeId,
    /// Ceiling seeding the selector's threshold; any real edge weight must
    /// sit below it. Not a capacity limit.
    pub max_weight: Weight,
    /// Bias constant for the storage ordering key; must exceed any
    /// plausible edge count. Not a capacity limit.
    pub edge_bias: u64,
    /// Upper bound on inner steps across the whole run. The greedy walk
    /// has no termination guarantee on cyclic graphs, so the runner stops
    /// with an error once this many steps have executed.
    pub max_steps: usize,
    /// Correlation id attached to the run's report.
    pub run_id: String,
}

impl SearchConfig {
    pub const DEFAULT_MAX_WEIGHT: Weight = 1_000;
    pub const DEFAULT_EDGE_BIAS: u64 = 100;
    pub const DEFAULT_MAX_STEPS: usize = 10_000;

    /// Creates a configuration for the given endpoints with defaults for
    /// everything else and a fresh run id.
    #[must_use]
    pub fn new(start: NodeId, finish: NodeId) -> Self {
        Self {
            start,
            finish,
            max_weight: Self::DEFAULT_MAX_WEIGHT,
            edge_bias: Self::DEFAULT_EDGE_BIAS,
            max_steps: Self::DEFAULT_MAX_STEPS,
            run_id: Uuid::new_v4().to_string(),
        }
    }

    #[must_use]
    pub fn with_max_weight(mut self, max_weight: Weight) -> Self {
        self.max_weight = max_weight;
        self
    }

    #[must_use]
    pub fn with_edge_bias(mut self, edge_bias: u64) -> Self {
        self.edge_bias = edge_bias;
        self
    }

    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    #[must_use]
    pub fn with_run_id(mut self, run_id: impl Into<String>) -> Self {
        self.run_id = run_id.into();
        self
    }
}
