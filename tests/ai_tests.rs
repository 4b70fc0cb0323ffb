//! AI integration tests: search correctness, determinism, self-play invariants.

use cannon_soldiers::ai::{
    self, score_root_moves, search, search_alphabeta, Algorithm, AiEngine, Difficulty,
    SearchConfig, WIN_SCORE,
};
use cannon_soldiers::core::{GameRng, GameState, Position, Side};
use cannon_soldiers::engine::Engine;
use proptest::prelude::*;

fn p(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

/// A midgame position with captures available to the cannon side.
fn capture_position() -> GameState {
    let soldiers = [
        p(3, 0), p(3, 2), p(3, 4),
        p(4, 0), p(4, 1), p(4, 2), p(4, 3), p(4, 4), p(4, 5),
        p(5, 1), p(5, 4),
    ];
    GameState::from_layout([p(1, 2), p(2, 5)], &soldiers, Side::Cannon).unwrap()
}

// =============================================================================
// Search correctness
// =============================================================================

#[test]
fn test_hard_move_scores_at_least_every_quiet_alternative() {
    let state = capture_position();
    let depth = 3;
    let config = SearchConfig::default().with_alphabeta_depth(depth).unbounded();

    let outcome = search_alphabeta(&state, Side::Cannon, &config);
    let chosen = outcome.best_move.unwrap();
    let scores = score_root_moves(&state, Side::Cannon, depth);

    assert!(scores.iter().any(|(mv, _)| mv.is_capture()));
    let chosen_score = scores
        .iter()
        .find(|(mv, _)| *mv == chosen)
        .map(|(_, s)| *s)
        .unwrap();
    assert_eq!(chosen_score, outcome.score);
    for (mv, score) in scores.iter().filter(|(mv, _)| !mv.is_capture()) {
        assert!(chosen_score >= *score, "{mv} scores {score} > {chosen_score}");
    }
}

#[test]
fn test_tie_break_keeps_first_best() {
    let state = capture_position();
    let depth = 2;
    let config = SearchConfig::default().unbounded();

    let outcome = search(&state, Side::Cannon, Algorithm::Minimax, depth, &config);
    let scores = score_root_moves(&state, Side::Cannon, depth);
    let best = scores.iter().map(|(_, s)| *s).max().unwrap();
    let first_best = scores.iter().find(|(_, s)| *s == best).map(|(mv, _)| *mv);

    assert_eq!(outcome.best_move, first_best);
}

#[test]
fn test_alphabeta_agrees_with_minimax() {
    let state = capture_position();
    let config = SearchConfig::default().unbounded();

    for side in Side::ALL {
        let mm = search(&state, side, Algorithm::Minimax, 3, &config);
        let ab = search(&state, side, Algorithm::AlphaBeta, 3, &config);
        assert_eq!(mm.best_move, ab.best_move, "{side}");
        assert_eq!(mm.score, ab.score, "{side}");
    }
}

#[test]
fn test_soldiers_close_the_trap() {
    // Cannon at (0, 0) boxed by (1, 0); soldiers to move can seal (0, 1).
    let soldiers = [p(1, 0), p(1, 1), p(0, 3), p(5, 0), p(5, 1), p(5, 2), p(5, 3)];
    let state = GameState::from_layout([p(0, 0), p(0, 2)], &soldiers, Side::Soldier).unwrap();
    let config = SearchConfig::default().unbounded();

    let outcome = search(&state, Side::Soldier, Algorithm::AlphaBeta, 1, &config);
    let mv = outcome.best_move.unwrap();
    let mut after = state.clone();
    after.apply_move(mv).unwrap();

    assert!(
        after.board.get(p(0, 1)).is_some() || after.board.get(p(1, 2)).is_some(),
        "soldiers should crowd the cannons, played {mv}"
    );
}

#[test]
fn test_default_hard_search_finds_forced_win() {
    let soldiers = [p(3, 3), p(5, 0), p(5, 1), p(5, 2), p(5, 4), p(5, 5)];
    let state = GameState::from_layout([p(1, 3), p(0, 0)], &soldiers, Side::Cannon).unwrap();

    let outcome = search_alphabeta(&state, Side::Cannon, &SearchConfig::default());
    assert_eq!(outcome.score, WIN_SCORE);
    assert!(!outcome.stats.aborted);

    let mv = ai::best_move(
        &state,
        Difficulty::Hard,
        Side::Cannon,
        &mut GameRng::new(0),
        &SearchConfig::default(),
    );
    assert_eq!(mv, outcome.best_move);
}

#[test]
fn test_medium_does_not_blunder_a_win() {
    let soldiers = [p(3, 3), p(5, 0), p(5, 1), p(5, 2), p(5, 4), p(5, 5)];
    let state = GameState::from_layout([p(1, 3), p(0, 0)], &soldiers, Side::Cannon).unwrap();
    let mut ai = AiEngine::default();

    let outcome = ai.analyze(&state, Difficulty::Medium, Side::Cannon);

    assert_eq!(outcome.score, WIN_SCORE);
    assert!(outcome.best_move.unwrap().is_capture());
}

#[test]
fn test_budgeted_search_still_answers() {
    let state = GameState::initial();
    let config = SearchConfig::default().with_node_budget(50);

    let outcome = search_alphabeta(&state, Side::Cannon, &config);

    assert!(outcome.stats.aborted);
    let mv = outcome.best_move.unwrap();
    assert!(state.clone().apply_move(mv).is_ok());
}

#[test]
fn test_time_budget_stops_search() {
    let state = GameState::initial();
    let config = SearchConfig::default()
        .with_alphabeta_depth(12)
        .with_node_budget(u64::MAX)
        .with_time_budget(std::time::Duration::from_millis(20));

    let outcome = search_alphabeta(&state, Side::Soldier, &config);

    assert!(outcome.stats.aborted);
    assert!(outcome.best_move.is_some());
}

// =============================================================================
// Self-play
// =============================================================================

fn play_out(seed: u64, cannon: Difficulty, soldier: Difficulty, max_plies: usize) -> Engine {
    let config = SearchConfig::default()
        .with_minimax_depth(2)
        .with_alphabeta_depth(3)
        .with_seed(seed);
    let mut ai = AiEngine::new(config);
    let mut engine = Engine::new();

    for _ in 0..max_plies {
        let state = engine.state();
        if state.over {
            break;
        }
        let side = state.current_player;
        let difficulty = if side == Side::Cannon { cannon } else { soldier };
        let Some(mv) = ai.best_move(&state, difficulty, side) else {
            break;
        };
        engine.play(mv).unwrap();
    }
    engine
}

#[test]
fn test_self_play_is_reproducible() {
    let a = play_out(17, Difficulty::Easy, Difficulty::Easy, 60);
    let b = play_out(17, Difficulty::Easy, Difficulty::Easy, 60);
    assert_eq!(a.state(), b.state());
}

#[test]
fn test_search_tiers_play_legal_games() {
    let engine = play_out(3, Difficulty::Hard, Difficulty::Medium, 30);
    let state = engine.state();
    assert_eq!(state.validate(), Ok(()));
    assert!(!state.history.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_random_play_keeps_invariants(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let mut state = GameState::initial();
        let config = SearchConfig::default();

        for _ in 0..120 {
            if state.over {
                break;
            }
            let side = state.current_player;
            let Some(mv) = ai::best_move(&state, Difficulty::Easy, side, &mut rng, &config) else {
                break;
            };
            let soldiers_before = state.soldier_count();
            let history_before = state.history.len();

            state.apply_move(mv).unwrap();

            prop_assert_eq!(state.cannon_positions.len(), 2);
            let expected = soldiers_before - usize::from(mv.is_capture());
            prop_assert_eq!(state.soldier_count(), expected);
            prop_assert_eq!(state.history.len(), history_before + 1);
            prop_assert_eq!(state.validate(), Ok(()));
            if !state.over {
                prop_assert_eq!(state.current_player, side.opponent());
            } else {
                prop_assert_eq!(state.current_player, side);
            }
        }
    }
}
