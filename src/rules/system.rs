//! Rule queries.
//!
//! Every function here is pure: it reads a board (and sometimes piece
//! registries) and answers a question. Nothing is mutated and nothing panics.
//! Malformed input such as off-board positions or an empty source cell is an
//! ordinary negative answer: `false` or an empty list.
//!
//! Both the game engine and the search consult these functions, so there is
//! exactly one definition of what is legal.

use smallvec::SmallVec;

use crate::core::{Board, GameState, Move, PieceKind, Position, Side, DIRECTIONS};

use super::outcome::Outcome;

/// The cannon side wins once fewer than this many soldiers remain.
pub const MIN_SOLDIERS: usize = 6;

/// Destinations reachable from one cell (at most four orthogonal neighbours).
pub type Targets = SmallVec<[Position; 4]>;

/// Check whether `pos` lies on the board.
#[must_use]
pub fn is_valid_position(pos: Position) -> bool {
    pos.is_on_board()
}

/// Check whether `from -> to` is a single orthogonal step between on-board cells.
///
/// Occupancy is not considered.
#[must_use]
pub fn is_valid_move(from: Position, to: Position) -> bool {
    is_valid_position(from) && is_valid_position(to) && from.manhattan(to) == 1
}

/// On-board orthogonal neighbours of `pos`, in up/down/left/right order.
///
/// Corners have 2, edges 3, interior cells 4.
#[must_use]
pub fn adjacent_positions(pos: Position) -> Targets {
    DIRECTIONS
        .iter()
        .map(|&(d_row, d_col)| pos.offset(d_row, d_col))
        .filter(|p| is_valid_position(*p))
        .collect()
}

/// Empty neighbours of the piece at `pos`.
///
/// Returns an empty list when `pos` holds no piece.
#[must_use]
pub fn legal_moves(board: &Board, pos: Position) -> Targets {
    if board.get(pos).is_none() {
        return Targets::new();
    }

    adjacent_positions(pos)
        .into_iter()
        .filter(|p| board.is_empty_at(*p))
        .collect()
}

/// Check whether the cannon at `cannon` can jump-capture the soldier at `target`.
///
/// The two cells must share a row or column exactly two apart, with the
/// cell between them empty. Longer lines never capture.
#[must_use]
pub fn can_cannon_capture(board: &Board, cannon: Position, target: Position) -> bool {
    if board.get(cannon) != Some(PieceKind::Cannon) {
        return false;
    }
    if board.get(target) != Some(PieceKind::Soldier) {
        return false;
    }
    if !cannon.is_aligned_with(target) || cannon.manhattan(target) != 2 {
        return false;
    }

    let middle = Position::new(
        (cannon.row + target.row) / 2,
        (cannon.col + target.col) / 2,
    );
    board.get(middle).is_none()
}

/// Soldiers from `soldiers` that the cannon at `cannon` can capture, in input order.
#[must_use]
pub fn capturable_targets<'a, I>(board: &Board, cannon: Position, soldiers: I) -> Targets
where
    I: IntoIterator<Item = &'a Position>,
{
    soldiers
        .into_iter()
        .copied()
        .filter(|s| can_cannon_capture(board, cannon, *s))
        .collect()
}

/// Build the move that takes the piece at `from` to `to`, if it is legal.
///
/// An empty neighbour gives an ordinary step; for a cannon, a capturable
/// soldier gives a capture. Whose turn it is is not checked here.
#[must_use]
pub fn classify_move(board: &Board, from: Position, to: Position) -> Option<Move> {
    let piece = board.get(from)?;
    if is_valid_move(from, to) && board.is_empty_at(to) {
        return Some(Move::step(from, to));
    }
    if piece == PieceKind::Cannon && can_cannon_capture(board, from, to) {
        return Some(Move::capture(from, to));
    }
    None
}

/// Check whether at least one cannon can make an ordinary step.
///
/// Capture availability does not count towards mobility.
#[must_use]
pub fn cannon_can_move<'a, I>(board: &Board, cannons: I) -> bool
where
    I: IntoIterator<Item = &'a Position>,
{
    cannons
        .into_iter()
        .any(|pos| !legal_moves(board, *pos).is_empty())
}

/// Termination status for a board, its cannons and the number of soldiers left.
#[must_use]
pub fn outcome_of<'a, I>(board: &Board, cannons: I, soldier_count: usize) -> Outcome
where
    I: IntoIterator<Item = &'a Position>,
{
    if soldier_count < MIN_SOLDIERS {
        return Outcome::won_by(Side::Cannon);
    }
    if !cannon_can_move(board, cannons) {
        return Outcome::won_by(Side::Soldier);
    }
    Outcome::IN_PROGRESS
}

/// Termination status of `state`.
///
/// Fewer than six soldiers: cannon wins. Otherwise, every cannon unable to
/// step to an empty neighbour: soldier wins. Whose turn it is does not matter.
#[must_use]
pub fn check_game_over(state: &GameState) -> Outcome {
    outcome_of(
        &state.board,
        state.cannon_positions.iter(),
        state.soldier_positions.len(),
    )
}
