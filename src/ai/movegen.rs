//! Candidate move enumeration.
//!
//! Order is fixed: pieces in registry order; per piece, ordinary steps in
//! up/down/left/right order, then (cannons only) captures in soldier registry
//! order. Search tie-breaks depend on this order.

use crate::core::{GameState, Move, PieceKind, Side};
use crate::rules;

/// All candidate moves for `side`, steps and captures.
#[must_use]
pub fn generate_moves(state: &GameState, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    for &from in state.positions_of(side) {
        moves.extend(
            rules::legal_moves(&state.board, from)
                .into_iter()
                .map(|to| Move::step(from, to)),
        );
        if side == PieceKind::Cannon {
            moves.extend(
                rules::capturable_targets(&state.board, from, state.soldier_positions.iter())
                    .into_iter()
                    .map(|target| Move::capture(from, target)),
            );
        }
    }
    moves
}

/// Ordinary steps only, for every piece of `side`.
#[must_use]
pub fn ordinary_moves(state: &GameState, side: Side) -> Vec<Move> {
    state
        .positions_of(side)
        .iter()
        .flat_map(|&from| {
            rules::legal_moves(&state.board, from)
                .into_iter()
                .map(move |to| Move::step(from, to))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    fn p(row: i8, col: i8) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_initial_cannon_moves_in_order() {
        let state = GameState::initial();
        let moves = generate_moves(&state, Side::Cannon);

        assert_eq!(
            moves,
            vec![
                Move::step(p(1, 2), p(0, 2)),
                Move::step(p(1, 2), p(2, 2)),
                Move::step(p(1, 2), p(1, 1)),
                Move::capture(p(1, 2), p(3, 2)),
                Move::step(p(1, 3), p(0, 3)),
                Move::step(p(1, 3), p(2, 3)),
                Move::step(p(1, 3), p(1, 4)),
                Move::capture(p(1, 3), p(3, 3)),
            ]
        );
    }

    #[test]
    fn test_initial_soldier_moves() {
        let state = GameState::initial();
        let moves = generate_moves(&state, Side::Soldier);

        // only the front row can advance
        assert_eq!(moves.len(), 6);
        assert!(moves.iter().all(|m| m.from.row == 3 && m.to.row == 2));
        assert_eq!(moves, ordinary_moves(&state, Side::Soldier));
    }

    #[test]
    fn test_ordinary_moves_skip_captures() {
        let state = GameState::initial();
        let moves = ordinary_moves(&state, Side::Cannon);
        assert_eq!(moves.len(), 6);
        assert!(moves.iter().all(|m| !m.is_capture()));
    }
}
