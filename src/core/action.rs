//! Move representation.
//!
//! A move names the piece's origin and destination. Cannon captures also
//! carry the captured soldier's position, which is always the destination:
//! the cannon jumps onto the soldier's cell.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// A single move by one side.
///
/// ## Example
///
/// ```
/// use cannon_soldiers::core::{Move, Position};
///
/// // Ordinary step
/// let step = Move::step(Position::new(1, 2), Position::new(0, 2));
/// assert!(!step.is_capture());
///
/// // Cannon jump-capture onto (3, 2)
/// let jump = Move::capture(Position::new(1, 2), Position::new(3, 2));
/// assert_eq!(jump.capture, Some(Position::new(3, 2)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cell the piece leaves.
    pub from: Position,

    /// Cell the piece lands on.
    pub to: Position,

    /// Captured soldier, set only for cannon jump-captures.
    #[serde(default)]
    pub capture: Option<Position>,
}

impl Move {
    /// An ordinary one-cell step.
    #[must_use]
    pub const fn step(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            capture: None,
        }
    }

    /// A cannon capture landing on `target`.
    #[must_use]
    pub const fn capture(from: Position, target: Position) -> Self {
        Self {
            from,
            to: target,
            capture: Some(target),
        }
    }

    /// Whether this move removes a soldier.
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.capture.is_some()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_capture() {
            write!(f, "{} x {}", self.from, self.to)
        } else {
            write!(f, "{} -> {}", self.from, self.to)
        }
    }
}
