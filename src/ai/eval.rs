//! Position evaluation.
//!
//! Scores are always from the point of view of the side being optimized:
//! higher is better for that side. The two sides use different heuristics.

use crate::core::{GameState, Position, Side, INITIAL_SOLDIERS};
use crate::rules;

/// Score of a decided game. Dominates every heuristic term.
pub const WIN_SCORE: i32 = 10_000;

/// Evaluate `state` for `side`.
#[must_use]
pub fn evaluate(state: &GameState, side: Side) -> i32 {
    if state.over {
        return terminal_score(state, side);
    }
    match side {
        Side::Cannon => cannon_score(state),
        Side::Soldier => soldier_score(state),
    }
}

/// `+WIN_SCORE` if `side` won, `-WIN_SCORE` otherwise.
#[must_use]
pub fn terminal_score(state: &GameState, side: Side) -> i32 {
    if state.winner == Some(side) {
        WIN_SCORE
    } else {
        -WIN_SCORE
    }
}

fn captured(state: &GameState) -> i32 {
    to_score(INITIAL_SOLDIERS.saturating_sub(state.soldier_count()))
}

fn cannon_mobility(state: &GameState) -> i32 {
    state
        .cannon_positions
        .iter()
        .map(|&c| to_score(rules::legal_moves(&state.board, c).len()))
        .sum()
}

/// Material, mobility, capture threats and centrality.
fn cannon_score(state: &GameState) -> i32 {
    let threats: i32 = state
        .cannon_positions
        .iter()
        .map(|&c| {
            to_score(rules::capturable_targets(&state.board, c, state.soldier_positions.iter()).len())
        })
        .sum();
    let centrality: i32 = state.cannon_positions.iter().map(|&c| centrality(c)).sum();

    100 * captured(state) + 5 * cannon_mobility(state) + 50 * threats + centrality
}

/// Material kept, cannons hemmed in, soldiers close to cannons.
fn soldier_score(state: &GameState) -> i32 {
    let spread: i32 = state
        .soldier_positions
        .iter()
        .flat_map(|&s| state.cannon_positions.iter().map(move |&c| s.manhattan(c)))
        .map(|d| i32::try_from(d).unwrap_or(i32::MAX / 4))
        .sum();

    -100 * captured(state) - 15 * cannon_mobility(state) - 2 * spread
}

/// `3 * (7 - d)` where `d` is the Manhattan distance to the board centre
/// (2.5, 2.5). Computed in doubled coordinates; the doubled distance is
/// always even, so the result is exact.
fn centrality(pos: Position) -> i32 {
    let doubled = (2 * i32::from(pos.row) - 5).abs() + (2 * i32::from(pos.col) - 5).abs();
    3 * (7 - doubled / 2)
}

fn to_score(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX / 4)
}
