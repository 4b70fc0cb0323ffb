//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited, root included.
    pub nodes: u64,

    /// Alpha-beta cutoffs. Always 0 for plain minimax.
    pub cutoffs: u64,

    /// Whether the node or time budget cut the search short.
    pub aborted: bool,

    /// Root moves whose subtree was searched to completion.
    pub completed_root_moves: u32,

    /// Wall-clock time spent (microseconds).
    pub elapsed_us: u64,
}

impl SearchStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes per second, 0 when no time was measured.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.elapsed_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.elapsed_us as f64 / 1_000_000.0)
        }
    }
}
