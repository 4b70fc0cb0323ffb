//! Board coordinates.
//!
//! A `Position` is a `(row, col)` pair. Coordinates are signed so that
//! off-board input (negative or `>= BOARD_SIZE`) can be represented and
//! answered with a plain negative result by the rule functions instead of
//! being rejected at construction time.

use serde::{Deserialize, Serialize};

/// Side length of the square board.
pub const BOARD_SIZE: i8 = 6;

/// A `(row, col)` coordinate on the board.
///
/// Row 0 is the top edge (the cannons' side), row 5 the bottom edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

/// The four orthogonal step directions, in enumeration order: up, down, left, right.
pub const DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Position {
    /// Create a position. No range check is performed.
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Check whether both coordinates lie in `[0, BOARD_SIZE)`.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Offset this position by `(d_row, d_col)`, saturating at the `i8` range.
    #[must_use]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// Manhattan distance `|Δrow| + |Δcol|`.
    #[must_use]
    pub fn manhattan(self, other: Self) -> u32 {
        let d_row = (i32::from(self.row) - i32::from(other.row)).unsigned_abs();
        let d_col = (i32::from(self.col) - i32::from(other.col)).unsigned_abs();
        d_row + d_col
    }

    /// Whether the two positions share a row or a column.
    #[must_use]
    pub const fn is_aligned_with(self, other: Self) -> bool {
        self.row == other.row || self.col == other.col
    }

    /// Flat index `row * BOARD_SIZE + col`, or `None` when off the board.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        if !self.is_on_board() {
            return None;
        }
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        Some(row * BOARD_SIZE as usize + col)
    }

    /// Iterate over every on-board position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

impl From<(i8, i8)> for Position {
    fn from((row, col): (i8, i8)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
