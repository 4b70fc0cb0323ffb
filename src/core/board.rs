//! The 6×6 occupancy grid.
//!
//! `Board` is a small `Copy` value (36 cells), so search can duplicate it per
//! ply without allocation. It only records *what* is on each cell; the piece
//! registries that give the pieces an order live on `GameState`.

use serde::{Deserialize, Serialize};

use super::player::PieceKind;
use super::position::{Position, BOARD_SIZE};

/// Occupancy of one cell.
pub type Cell = Option<PieceKind>;

const SIDE: usize = BOARD_SIZE as usize;

/// Fixed-size board grid, indexed `[row][col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIDE]; SIDE],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Occupancy at `pos`. Off-board positions read as empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        let (row, col) = Self::coords(pos)?;
        self.cells[row][col]
    }

    /// Set the occupancy at `pos`.
    ///
    /// Returns `false` (and changes nothing) when `pos` is off the board.
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match Self::coords(pos) {
            Some((row, col)) => {
                self.cells[row][col] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether `pos` is on the board and unoccupied.
    #[must_use]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        pos.is_on_board() && self.get(pos).is_none()
    }

    /// Count the cells holding `kind`.
    #[must_use]
    pub fn count(&self, kind: PieceKind) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(kind))
            .count()
    }

    /// Iterate over occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, PieceKind)> + '_ {
        Position::all().filter_map(move |pos| self.get(pos).map(|kind| (pos, kind)))
    }

    fn coords(pos: Position) -> Option<(usize, usize)> {
        if !pos.is_on_board() {
            return None;
        }
        Some((usize::try_from(pos.row).ok()?, usize::try_from(pos.col).ok()?))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                let symbol = cell.map_or('.', PieceKind::symbol);
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert!(Position::all().all(|p| board.get(p).is_none()));
        assert_eq!(board.count(PieceKind::Cannon), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::empty();
        assert!(board.set(Position::new(2, 3), Some(PieceKind::Soldier)));
        assert_eq!(board.get(Position::new(2, 3)), Some(PieceKind::Soldier));
        assert!(!board.is_empty_at(Position::new(2, 3)));
        assert!(board.is_empty_at(Position::new(3, 2)));
    }

    #[test]
    fn test_off_board_access() {
        let mut board = Board::empty();
        assert!(!board.set(Position::new(6, 0), Some(PieceKind::Cannon)));
        assert_eq!(board.get(Position::new(-1, 0)), None);
        assert!(!board.is_empty_at(Position::new(0, 6)));
    }

    #[test]
    fn test_pieces_row_major() {
        let mut board = Board::empty();
        board.set(Position::new(4, 1), Some(PieceKind::Soldier));
        board.set(Position::new(0, 5), Some(PieceKind::Cannon));

        let pieces: Vec<_> = board.pieces().collect();
        assert_eq!(
            pieces,
            vec![
                (Position::new(0, 5), PieceKind::Cannon),
                (Position::new(4, 1), PieceKind::Soldier),
            ]
        );
    }

    #[test]
    fn test_display() {
        let mut board = Board::empty();
        board.set(Position::new(0, 0), Some(PieceKind::Cannon));
        board.set(Position::new(5, 5), Some(PieceKind::Soldier));

        let text = board.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "C.....");
        assert_eq!(lines[5], ".....S");
    }
}
