//! Minimax and alpha-beta search.
//!
//! ## Tree
//!
//! Both algorithms walk the same tree: at every node the side to move plays
//! each candidate from [`generate_moves`] on its own copy of the state
//! (`GameState::apply_move`), and the copy is searched one ply shallower. A
//! node is a leaf at depth 0 or when the game is over.
//!
//! ## Scores
//!
//! Every score is [`evaluate`]d for the root side. A node maximizes when the
//! root side is to move there and minimizes otherwise. The first move (in
//! enumeration order) reaching the best score is kept.
//!
//! ## Limits
//!
//! Each visited node counts against the node budget, and the clock is checked
//! periodically against the optional time budget. Running out aborts the root
//! child being searched; the root then answers with the best child that
//! finished, or the first candidate if none did.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameState, Move, Side};

use super::config::SearchConfig;
use super::eval::evaluate;
use super::movegen::generate_moves;
use super::stats::SearchStats;

const INF: i32 = i32::MAX;

/// How often (in nodes) the clock is read.
const CLOCK_INTERVAL: u64 = 256;

/// Which tree search to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

/// Result of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Chosen move, `None` if the root side has no candidates.
    pub best_move: Option<Move>,
    /// Score of `best_move` for the root side.
    pub score: i32,
    pub stats: SearchStats,
}

/// Budget exhausted.
#[derive(Clone, Copy, Debug)]
struct SearchAbort;

/// Per-search limits and counters.
struct SearchContext {
    side: Side,
    node_budget: u64,
    deadline: Option<Instant>,
    stats: SearchStats,
}

impl SearchContext {
    fn new(side: Side, node_budget: u64, time_budget: Option<Duration>, started: Instant) -> Self {
        Self {
            side,
            node_budget,
            deadline: time_budget.and_then(|budget| started.checked_add(budget)),
            stats: SearchStats::default(),
        }
    }

    /// Count a node, failing once a budget is spent.
    fn visit(&mut self) -> Result<(), SearchAbort> {
        self.stats.nodes = self.stats.nodes.saturating_add(1);
        if self.stats.nodes > self.node_budget {
            return Err(SearchAbort);
        }
        if let Some(deadline) = self.deadline {
            if self.stats.nodes % CLOCK_INTERVAL == 0 && Instant::now() >= deadline {
                return Err(SearchAbort);
            }
        }
        Ok(())
    }
}

/// Medium tier: plain minimax to `config.minimax_depth` plies.
#[must_use]
pub fn search_minimax(state: &GameState, side: Side, config: &SearchConfig) -> SearchOutcome {
    search(state, side, Algorithm::Minimax, config.minimax_depth, config)
}

/// Hard tier: alpha-beta to `config.alphabeta_depth` plies.
#[must_use]
pub fn search_alphabeta(state: &GameState, side: Side, config: &SearchConfig) -> SearchOutcome {
    search(state, side, Algorithm::AlphaBeta, config.alphabeta_depth, config)
}

/// Search `state` for `side` with an explicit algorithm and depth.
///
/// If `side` is not the side to move, the search asks what `side` would
/// play if it were its turn. A finished game yields no move.
#[must_use]
pub fn search(
    state: &GameState,
    side: Side,
    algorithm: Algorithm,
    depth: u8,
    config: &SearchConfig,
) -> SearchOutcome {
    let started = Instant::now();
    let mut ctx = SearchContext::new(side, config.node_budget, config.time_budget, started);

    let root = root_for(state, side);
    let (best_move, score) = match root {
        Some(root) => search_root(&root, algorithm, depth, &mut ctx),
        None => (None, evaluate(state, side)),
    };

    ctx.stats.elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    let stats = ctx.stats;
    debug!(
        ?algorithm,
        depth,
        %side,
        best = ?best_move,
        score,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        aborted = stats.aborted,
        elapsed_us = stats.elapsed_us,
        "search finished"
    );

    SearchOutcome {
        best_move,
        score,
        stats,
    }
}

/// Exact score of every root candidate, in enumeration order.
///
/// Each candidate is searched with a full alpha-beta window to `depth - 1`
/// further plies, ignoring the node and time budget. Useful for hints and
/// for checking what [`search`] picked.
#[must_use]
pub fn score_root_moves(state: &GameState, side: Side, depth: u8) -> Vec<(Move, i32)> {
    let Some(root) = root_for(state, side) else {
        return Vec::new();
    };
    let mut ctx = SearchContext::new(side, u64::MAX, None, Instant::now());
    let next_depth = depth.saturating_sub(1);

    generate_moves(&root, side)
        .into_iter()
        .filter_map(|mv| {
            let mut child = root.clone();
            child.apply_move(mv).ok()?;
            alphabeta(&child, next_depth, -INF, INF, &mut ctx)
                .ok()
                .map(|score| (mv, score))
        })
        .collect()
}

/// The state to search from, with `side` to move. `None` once the game is over.
fn root_for(state: &GameState, side: Side) -> Option<GameState> {
    if state.over {
        return None;
    }
    let mut root = state.clone();
    root.current_player = side;
    root.selected = None;
    Some(root)
}

fn search_root(
    root: &GameState,
    algorithm: Algorithm,
    depth: u8,
    ctx: &mut SearchContext,
) -> (Option<Move>, i32) {
    let side = ctx.side;
    let moves = generate_moves(root, side);
    let Some(&fallback) = moves.first() else {
        return (None, evaluate(root, side));
    };
    if ctx.visit().is_err() {
        ctx.stats.aborted = true;
        return (Some(fallback), evaluate(root, side));
    }

    let next_depth = depth.saturating_sub(1);
    let mut best: Option<(Move, i32)> = None;
    let mut alpha = -INF;

    for mv in moves {
        let mut child = root.clone();
        if child.apply_move(mv).is_err() {
            continue;
        }
        let result = match algorithm {
            Algorithm::Minimax => minimax(&child, next_depth, ctx),
            Algorithm::AlphaBeta => alphabeta(&child, next_depth, alpha, INF, ctx),
        };
        let Ok(score) = result else {
            ctx.stats.aborted = true;
            break;
        };
        ctx.stats.completed_root_moves += 1;

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
        alpha = alpha.max(score);
    }

    match best {
        Some((mv, score)) => (Some(mv), score),
        None => (Some(fallback), evaluate(root, side)),
    }
}

fn minimax(state: &GameState, depth: u8, ctx: &mut SearchContext) -> Result<i32, SearchAbort> {
    ctx.visit()?;
    if depth == 0 || state.over {
        return Ok(evaluate(state, ctx.side));
    }

    let moves = generate_moves(state, state.current_player);
    if moves.is_empty() {
        return Ok(evaluate(state, ctx.side));
    }

    let maximizing = state.current_player == ctx.side;
    let mut best = if maximizing { -INF } else { INF };

    for mv in moves {
        let mut child = state.clone();
        if child.apply_move(mv).is_err() {
            continue;
        }
        let score = minimax(&child, depth - 1, ctx)?;
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    Ok(best)
}

fn alphabeta(
    state: &GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ctx: &mut SearchContext,
) -> Result<i32, SearchAbort> {
    ctx.visit()?;
    if depth == 0 || state.over {
        return Ok(evaluate(state, ctx.side));
    }

    let moves = generate_moves(state, state.current_player);
    if moves.is_empty() {
        return Ok(evaluate(state, ctx.side));
    }

    let maximizing = state.current_player == ctx.side;
    let mut best = if maximizing { -INF } else { INF };

    for mv in moves {
        let mut child = state.clone();
        if child.apply_move(mv).is_err() {
            continue;
        }
        let score = alphabeta(&child, depth - 1, alpha, beta, ctx)?;
        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if beta <= alpha {
            ctx.stats.cutoffs += 1;
            break;
        }
    }

    Ok(best)
}
