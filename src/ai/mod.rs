//! Computer opponent.
//!
//! ## Tiers
//!
//! - [`Difficulty::Easy`]: random step, but always grabs a capture as cannon
//! - [`Difficulty::Medium`]: minimax, depth 3 by default
//! - [`Difficulty::Hard`]: alpha-beta, depth 5 by default
//!
//! All entry points take a state by reference and never modify it. The
//! free function [`best_move`] is stateless; [`AiEngine`] bundles a config
//! and an RNG for callers that play many moves.
//!
//! ## Example
//!
//! ```
//! use cannon_soldiers::ai::{AiEngine, Difficulty, SearchConfig};
//! use cannon_soldiers::core::{GameState, Side};
//!
//! let mut ai = AiEngine::new(SearchConfig::default().with_alphabeta_depth(3));
//! let state = GameState::initial();
//! let mv = ai.best_move(&state, Difficulty::Hard, Side::Cannon);
//! assert!(mv.is_some());
//! ```

pub mod config;
pub mod difficulty;
pub mod eval;
pub mod movegen;
pub mod random;
pub mod search;
pub mod stats;

pub use config::SearchConfig;
pub use difficulty::Difficulty;
pub use eval::{evaluate, WIN_SCORE};
pub use movegen::{generate_moves, ordinary_moves};
pub use random::easy_move;
pub use search::{
    score_root_moves, search, search_alphabeta, search_minimax, Algorithm, SearchOutcome,
};
pub use stats::SearchStats;

use crate::core::{GameRng, GameRngState, GameState, Move, Side};

/// Choose a move for `side` at the given difficulty.
///
/// `rng` is only consulted by the easy tier. Returns `None` when the game is
/// over or `side` has nothing to play.
pub fn best_move(
    state: &GameState,
    difficulty: Difficulty,
    side: Side,
    rng: &mut GameRng,
    config: &SearchConfig,
) -> Option<Move> {
    match difficulty {
        Difficulty::Easy => easy_move(state, side, rng),
        Difficulty::Medium => search_minimax(state, side, config).best_move,
        Difficulty::Hard => search_alphabeta(state, side, config).best_move,
    }
}

/// AI front-end owning its configuration and random stream.
#[derive(Clone, Debug)]
pub struct AiEngine {
    config: SearchConfig,
    rng: GameRng,
}

impl AiEngine {
    /// Create an AI seeded from `config.seed`.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self { config, rng }
    }

    /// Replace the random stream.
    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Position of the random stream, for resuming later.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Choose a move for `side`. See [`best_move`].
    pub fn best_move(&mut self, state: &GameState, difficulty: Difficulty, side: Side) -> Option<Move> {
        best_move(state, difficulty, side, &mut self.rng, &self.config)
    }

    /// Run the search behind a tier and return its statistics too.
    ///
    /// The easy tier does not search; its outcome carries the evaluation of
    /// the position after the chosen move and empty statistics.
    pub fn analyze(&mut self, state: &GameState, difficulty: Difficulty, side: Side) -> SearchOutcome {
        match difficulty {
            Difficulty::Easy => {
                let best_move = easy_move(state, side, &mut self.rng);
                let mut after = state.clone();
                if let Some(mv) = best_move {
                    after.current_player = side;
                    // easy_move only returns legal moves for `side`
                    let _ = after.apply_move(mv);
                }
                SearchOutcome {
                    best_move,
                    score: evaluate(&after, side),
                    stats: SearchStats::default(),
                }
            }
            Difficulty::Medium => search_minimax(state, side, &self.config),
            Difficulty::Hard => search_alphabeta(state, side, &self.config),
        }
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
