//! Game state: board, piece registries, turn and history.
//!
//! ## GameState
//!
//! A complete, self-contained description of a position:
//! - Board occupancy
//! - Cannon and soldier registries (ordered; the order drives move enumeration)
//! - Side to move, current selection, termination status
//! - Move history
//!
//! Registries and history use `im` persistent vectors, so cloning a state is
//! O(1) in the history length. The engine hands clones to listeners and the
//! search clones once per visited node.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::Move;
use super::board::Board;
use super::player::{PieceKind, Side};
use super::position::Position;
use crate::error::{Rejection, StateError};
use crate::rules::{self, Outcome};

/// Number of cannons on the board, always.
pub const CANNON_COUNT: usize = 2;

/// Number of soldiers at the start of a game.
pub const INITIAL_SOLDIERS: usize = 18;

/// Starting cells of the two cannons, in registry order.
pub const INITIAL_CANNONS: [Position; CANNON_COUNT] = [Position::new(1, 2), Position::new(1, 3)];

/// Complete game position.
///
/// Fields are public plain data so the state can cross a serialization
/// boundary unchanged. Mutate it through [`GameState::apply_move`] (or the
/// engine) to keep the board and the registries in agreement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Cell occupancy.
    pub board: Board,

    /// Side to move. Frozen once the game is over.
    pub current_player: Side,

    /// Cannon cells. Always exactly two entries.
    pub cannon_positions: Vector<Position>,

    /// Soldier cells. Starts with 18 entries and only shrinks.
    pub soldier_positions: Vector<Position>,

    /// Cell of the piece the side to move has picked up, if any.
    pub selected: Option<Position>,

    /// Whether the game has ended.
    pub over: bool,

    /// Winner, set exactly when `over` is true.
    pub winner: Option<Side>,

    /// Accepted moves, oldest first. Append-only.
    pub history: Vector<Move>,
}

impl GameState {
    /// The standard opening position.
    ///
    /// Cannons at (1, 2) and (1, 3); soldiers fill rows 3 to 5 (registered in
    /// row-major order); cannon moves first.
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for pos in INITIAL_CANNONS {
            board.set(pos, Some(PieceKind::Cannon));
        }

        let soldier_positions: Vector<Position> = Position::all().filter(|p| p.row >= 3).collect();
        for pos in &soldier_positions {
            board.set(*pos, Some(PieceKind::Soldier));
        }

        Self {
            board,
            current_player: Side::Cannon,
            cannon_positions: INITIAL_CANNONS.iter().copied().collect(),
            soldier_positions,
            selected: None,
            over: false,
            winner: None,
            history: Vector::new(),
        }
    }

    /// Build a position from explicit piece cells.
    ///
    /// Registry order follows the slices. Termination status is computed from
    /// the layout, so a layout that is already decided comes back with
    /// `over` set.
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] if a cell is off the board, two pieces share a
    /// cell, or there are more than 18 soldiers.
    pub fn from_layout(
        cannons: [Position; CANNON_COUNT],
        soldiers: &[Position],
        to_move: Side,
    ) -> Result<Self, StateError> {
        if soldiers.len() > INITIAL_SOLDIERS {
            return Err(StateError::TooManySoldiers(soldiers.len()));
        }

        let mut board = Board::empty();
        let placements = cannons
            .iter()
            .map(|p| (*p, PieceKind::Cannon))
            .chain(soldiers.iter().map(|p| (*p, PieceKind::Soldier)));
        for (pos, kind) in placements {
            if !pos.is_on_board() {
                return Err(StateError::OffBoard(pos));
            }
            if board.get(pos).is_some() {
                return Err(StateError::Overlap(pos));
            }
            board.set(pos, Some(kind));
        }

        let mut state = Self {
            board,
            current_player: to_move,
            cannon_positions: cannons.iter().copied().collect(),
            soldier_positions: soldiers.iter().copied().collect(),
            selected: None,
            over: false,
            winner: None,
            history: Vector::new(),
        };
        state.set_outcome(rules::check_game_over(&state));
        Ok(state)
    }

    /// Termination status as stored on the state.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome {
            over: self.over,
            winner: self.winner,
        }
    }

    /// Number of soldiers still on the board.
    #[must_use]
    pub fn soldier_count(&self) -> usize {
        self.soldier_positions.len()
    }

    /// Registry of `side`'s pieces, in enumeration order.
    #[must_use]
    pub fn positions_of(&self, side: Side) -> &Vector<Position> {
        match side {
            Side::Cannon => &self.cannon_positions,
            Side::Soldier => &self.soldier_positions,
        }
    }

    /// The last accepted move.
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Apply a move for the side to move.
    ///
    /// This is the single mutation routine behind both the engine and the
    /// search. On success the piece moves, a captured soldier leaves the board
    /// and its registry, the move is appended to the history, the selection is
    /// cleared, termination is recomputed and, unless the game just ended, the
    /// turn passes.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] and leaves the state untouched if the game is
    /// over, the source is not a piece of the side to move, or `mv` is not the
    /// legal step/capture from `mv.from` to `mv.to`.
    pub fn apply_move(&mut self, mv: Move) -> Result<Outcome, Rejection> {
        if self.over {
            return Err(Rejection::GameOver);
        }
        let piece = self.board.get(mv.from).ok_or(Rejection::NoPiece(mv.from))?;
        if piece != self.current_player {
            return Err(Rejection::NotYourPiece {
                at: mv.from,
                owner: piece,
            });
        }
        if rules::classify_move(&self.board, mv.from, mv.to) != Some(mv) {
            return Err(Rejection::IllegalDestination {
                from: mv.from,
                to: mv.to,
            });
        }

        self.board.set(mv.from, None);
        if let Some(target) = mv.capture {
            self.board.set(target, None);
            self.soldier_positions.retain(|p| *p != target);
        }
        self.board.set(mv.to, Some(piece));

        let registry = match piece {
            PieceKind::Cannon => &mut self.cannon_positions,
            PieceKind::Soldier => &mut self.soldier_positions,
        };
        if let Some(index) = registry.index_of(&mv.from) {
            registry.set(index, mv.to);
        }

        self.history.push_back(mv);
        self.selected = None;

        let outcome = rules::check_game_over(self);
        self.set_outcome(outcome);
        if !outcome.over {
            self.current_player = self.current_player.opponent();
        }
        Ok(outcome)
    }

    /// Check the board/registry invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`StateError`].
    pub fn validate(&self) -> Result<(), StateError> {
        if self.cannon_positions.len() != CANNON_COUNT {
            return Err(StateError::CannonCount(self.cannon_positions.len()));
        }
        if self.soldier_positions.len() > INITIAL_SOLDIERS {
            return Err(StateError::TooManySoldiers(self.soldier_positions.len()));
        }

        let mut seen = Board::empty();
        for side in Side::ALL {
            for &pos in self.positions_of(side) {
                if !pos.is_on_board() {
                    return Err(StateError::OffBoard(pos));
                }
                if seen.get(pos).is_some() {
                    return Err(StateError::Overlap(pos));
                }
                if self.board.get(pos) != Some(side) {
                    return Err(StateError::BoardMismatch { at: pos, expected: side });
                }
                seen.set(pos, Some(side));
            }
        }
        if seen != self.board {
            return Err(StateError::UnregisteredPiece);
        }

        if let Some(pos) = self.selected {
            if self.board.get(pos) != Some(self.current_player) {
                return Err(StateError::BadSelection(pos));
            }
        }

        if self.outcome() != rules::check_game_over(self) {
            return Err(StateError::OutcomeMismatch);
        }
        Ok(())
    }

    fn set_outcome(&mut self, outcome: Outcome) {
        self.over = outcome.over;
        self.winner = outcome.winner;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
