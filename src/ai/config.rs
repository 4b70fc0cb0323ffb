//! Search configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Search depths, limits and seed for the AI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched by the medium tier (default: 3).
    pub minimax_depth: u8,

    /// Plies searched by the hard tier (default: 5).
    pub alphabeta_depth: u8,

    /// Maximum nodes visited per search before it aborts.
    /// The root then keeps the best move among fully searched children.
    pub node_budget: u64,

    /// Optional wall-clock limit per search.
    pub time_budget: Option<Duration>,

    /// Seed for the easy tier's RNG when owned by an `AiEngine`.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            minimax_depth: 3,
            alphabeta_depth: 5,
            node_budget: 2_000_000,
            time_budget: None,
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Set the medium tier depth.
    #[must_use]
    pub fn with_minimax_depth(mut self, depth: u8) -> Self {
        self.minimax_depth = depth;
        self
    }

    /// Set the hard tier depth.
    #[must_use]
    pub fn with_alphabeta_depth(mut self, depth: u8) -> Self {
        self.alphabeta_depth = depth;
        self
    }

    /// Set the node budget.
    #[must_use]
    pub fn with_node_budget(mut self, nodes: u64) -> Self {
        self.node_budget = nodes;
        self
    }

    /// Set a wall-clock limit.
    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// No node or time limit.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.node_budget = u64::MAX;
        self.time_budget = None;
        self
    }
}
