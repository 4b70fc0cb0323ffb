//! # cannon-soldiers
//!
//! Rules, game engine and computer opponent for "cannons vs. soldiers", a
//! two-sided perfect-information game on a 6×6 board.
//!
//! ## The game
//!
//! - The cannon side has 2 pieces, the soldier side 18.
//! - Every piece steps one cell orthogonally onto an empty cell.
//! - A cannon may also jump exactly two cells along a row or column, over an
//!   empty cell, onto a soldier, capturing it.
//! - Cannons win once fewer than 6 soldiers remain; soldiers win once no
//!   cannon can step.
//!
//! ## Architecture
//!
//! - **One rule module**: [`rules`] answers every legality and termination
//!   question for both the engine and the AI.
//!
//! - **One mutation path**: [`GameState::apply_move`] is used by the engine
//!   and by every search node.
//!
//! - **Persistent data structures**: piece registries and history are `im`
//!   vectors, so the per-node state copies in search and the snapshots handed
//!   to listeners are cheap.
//!
//! ## Modules
//!
//! - `core`: positions, pieces, board, moves, state, RNG
//! - `rules`: pure rule queries and termination
//! - `engine`: live game with selection, moves and listeners
//! - `ai`: easy / minimax / alpha-beta opponents
//! - `codec`: bincode snapshots
//! - `error`: error types

pub mod ai;
pub mod codec;
pub mod core;
pub mod engine;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, GameRng, GameRngState, GameState, Move, PieceKind, Position, Side, BOARD_SIZE,
};

pub use crate::rules::{check_game_over, Outcome};

pub use crate::engine::{Engine, ListenerId};

pub use crate::ai::{best_move, AiEngine, Difficulty, SearchConfig, SearchOutcome, SearchStats};

pub use crate::codec::{decode_move, decode_state, encode_move, encode_state};

pub use crate::error::{CodecError, InvalidDifficulty, Rejection, StateError};
