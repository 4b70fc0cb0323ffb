//! Game rules.
//!
//! Pure queries over a board: adjacency, legal steps, cannon captures and
//! termination. Both the engine and the AI go through these functions.

pub mod outcome;
pub mod system;

pub use outcome::Outcome;
pub use system::{
    adjacent_positions, can_cannon_capture, cannon_can_move, capturable_targets,
    check_game_over, classify_move, is_valid_move, is_valid_position, legal_moves, outcome_of,
    Targets, MIN_SOLDIERS,
};
