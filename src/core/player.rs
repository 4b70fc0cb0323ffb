//! Sides and piece kinds.
//!
//! The game has exactly two sides and each side owns exactly one kind of
//! piece, so a single enum serves both roles: `PieceKind` names what sits on
//! a cell and `Side` names whose turn it is.

use serde::{Deserialize, Serialize};

/// Kind of piece occupying a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    /// Two per game, never removed. Moves first.
    Cannon,
    /// Eighteen at the start; removed when captured.
    Soldier,
}

/// A player side. Each side owns the pieces of the same name.
pub type Side = PieceKind;

impl PieceKind {
    /// Both sides, cannon first.
    pub const ALL: [PieceKind; 2] = [PieceKind::Cannon, PieceKind::Soldier];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PieceKind::Cannon => PieceKind::Soldier,
            PieceKind::Soldier => PieceKind::Cannon,
        }
    }

    /// Single-character board symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Cannon => 'C',
            PieceKind::Soldier => 'S',
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceKind::Cannon => write!(f, "cannon"),
            PieceKind::Soldier => write!(f, "soldier"),
        }
    }
}
