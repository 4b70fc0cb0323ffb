//! Termination status of a position.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Result of a termination check.
///
/// `winner` is `Some` exactly when `over` is true.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    /// Whether the game has ended.
    pub over: bool,
    /// The winning side, once the game has ended.
    pub winner: Option<Side>,
}

impl Outcome {
    /// The game continues.
    pub const IN_PROGRESS: Outcome = Outcome {
        over: false,
        winner: None,
    };

    /// The game ended with `side` winning.
    #[must_use]
    pub const fn won_by(side: Side) -> Self {
        Self {
            over: true,
            winner: Some(side),
        }
    }

    /// Check if `side` won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner == Some(side)
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::IN_PROGRESS
    }
}
