//! Error types.
//!
//! Rule queries never fail; these types cover the paths that can: engine
//! operations (as an optional reason behind the boolean API), building or
//! decoding a position, and parsing a difficulty.

use thiserror::Error;

use crate::core::{Position, Side};

/// Why the engine refused a selection or a move.
///
/// The boolean engine API collapses all of these to `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The game has already ended.
    #[error("the game is already over")]
    GameOver,
    /// The source cell is empty or off the board.
    #[error("no piece at {0}")]
    NoPiece(Position),
    /// The piece belongs to the side not on move.
    #[error("the piece at {at} belongs to {owner}, not the side to move")]
    NotYourPiece { at: Position, owner: Side },
    /// A move was requested with no piece selected.
    #[error("no piece is selected")]
    NothingSelected,
    /// The destination is neither an empty neighbour nor a capture target.
    #[error("{from} cannot move to {to}")]
    IllegalDestination { from: Position, to: Position },
}

/// A position that breaks the board/registry invariants.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("expected 2 cannons, found {0}")]
    CannonCount(usize),
    #[error("at most 18 soldiers are allowed, found {0}")]
    TooManySoldiers(usize),
    #[error("piece registered off the board at {0}")]
    OffBoard(Position),
    #[error("two pieces registered at {0}")]
    Overlap(Position),
    #[error("board cell {at} does not match the {expected} registry")]
    BoardMismatch { at: Position, expected: Side },
    #[error("board holds pieces that are not registered")]
    UnregisteredPiece,
    #[error("selected cell {0} does not hold a piece of the side to move")]
    BadSelection(Position),
    #[error("stored game status disagrees with the rules")]
    OutcomeMismatch,
}

/// Failure to decode a snapshot frame.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed frame: {0}")]
    Frame(#[from] bincode::Error),
    #[error("decoded state is inconsistent: {0}")]
    Invalid(#[from] StateError),
}

/// A difficulty outside `1..=3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("difficulty must be 1, 2 or 3, got {0}")]
pub struct InvalidDifficulty(pub u8);
