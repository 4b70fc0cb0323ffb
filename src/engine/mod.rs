//! Game engine: the live game plus its listeners.

pub mod game;
pub mod listeners;

pub use game::Engine;
pub use listeners::{Callback, ListenerId, Listeners};
