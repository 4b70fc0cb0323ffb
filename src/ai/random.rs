//! Easy tier: random play that never misses a capture.

use crate::core::{GameRng, GameState, Move, PieceKind, Side};
use crate::rules;

use super::movegen::ordinary_moves;

/// Pick an easy-tier move for `side`.
///
/// As cannon, the first cannon (registry order) with a capture available takes
/// one of its targets at random. Otherwise a uniformly random ordinary step.
/// `None` if the game is over or `side` cannot move.
pub fn easy_move(state: &GameState, side: Side, rng: &mut GameRng) -> Option<Move> {
    if state.over {
        return None;
    }

    if side == PieceKind::Cannon {
        for &cannon in &state.cannon_positions {
            let targets =
                rules::capturable_targets(&state.board, cannon, state.soldier_positions.iter());
            if let Some(&target) = rng.choose(&targets) {
                return Some(Move::capture(cannon, target));
            }
        }
    }

    let moves = ordinary_moves(state, side);
    rng.choose(&moves).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    fn p(row: i8, col: i8) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_cannon_takes_first_cannon_capture() {
        let state = GameState::initial();
        let mut rng = GameRng::new(0);

        for _ in 0..20 {
            // (1, 2) is first in the registry and can only take (3, 2)
            assert_eq!(
                easy_move(&state, Side::Cannon, &mut rng),
                Some(Move::capture(p(1, 2), p(3, 2)))
            );
        }
    }

    #[test]
    fn test_capture_choice_is_random_among_targets() {
        // cannon at (2, 2) can take (0, 2), (4, 2), (2, 0) and (2, 4)
        let soldiers = [p(0, 2), p(4, 2), p(2, 0), p(2, 4), p(5, 0), p(5, 5)];
        let state = GameState::from_layout([p(2, 2), p(0, 5)], &soldiers, Side::Cannon).unwrap();
        let mut rng = GameRng::new(11);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let mv = easy_move(&state, Side::Cannon, &mut rng).unwrap();
            assert_eq!(mv.from, p(2, 2));
            assert!(mv.is_capture());
            seen.insert(mv.to);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_soldier_plays_legal_step() {
        let state = GameState::initial();
        let mut rng = GameRng::new(3);

        let mv = easy_move(&state, Side::Soldier, &mut rng).unwrap();
        assert!(!mv.is_capture());
        assert!(ordinary_moves(&state, Side::Soldier).contains(&mv));
    }

    #[test]
    fn test_same_seed_same_choice() {
        let state = GameState::initial();
        let a = easy_move(&state, Side::Soldier, &mut GameRng::new(99));
        let b = easy_move(&state, Side::Soldier, &mut GameRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_finished_game_has_no_move() {
        let state = GameState::from_layout([p(0, 0), p(0, 5)], &[p(3, 3)], Side::Cannon).unwrap();
        assert_eq!(easy_move(&state, Side::Cannon, &mut GameRng::new(1)), None);
    }
}
