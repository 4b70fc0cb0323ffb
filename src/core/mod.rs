//! Core types: positions, pieces, the board, moves, game state and RNG.
//!
//! Everything here is plain data with serde support. Rule knowledge lives in
//! [`crate::rules`]; the only mutation path is [`GameState::apply_move`].

pub mod action;
pub mod board;
pub mod player;
pub mod position;
pub mod rng;
pub mod state;

pub use action::Move;
pub use board::{Board, Cell};
pub use player::{PieceKind, Side};
pub use position::{Position, BOARD_SIZE, DIRECTIONS};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, CANNON_COUNT, INITIAL_CANNONS, INITIAL_SOLDIERS};
