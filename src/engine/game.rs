//! Turn-taking engine over one live game.
//!
//! ## States
//!
//! - **Idle**: nothing selected. `select_piece` picks up a piece of the side
//!   to move.
//! - **Selected**: `move_piece` sends the selected piece to a destination,
//!   `select_piece` switches to another own piece, `deselect_piece` drops it.
//!
//! Once the game is over every selection or move is rejected until `reset`.
//!
//! Every successful mutating call notifies listeners synchronously, in
//! registration order, each with its own snapshot. Rejected calls change
//! nothing and notify no one.

use std::sync::mpsc::Receiver;

use tracing::debug;

use crate::core::{GameState, Move, Position};
use crate::error::Rejection;
use crate::rules::{self, Outcome, Targets};

use super::listeners::{ListenerId, Listeners};

/// The authoritative game engine.
///
/// ## Example
///
/// ```
/// use cannon_soldiers::core::Position;
/// use cannon_soldiers::engine::Engine;
///
/// let mut engine = Engine::new();
/// assert!(engine.select_piece(Position::new(1, 2)));
/// assert!(engine.move_piece(Position::new(0, 2)));
/// assert_eq!(engine.state().history.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Engine {
    state: GameState,
    listeners: Listeners,
}

impl Engine {
    /// Start a new game from the initial position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(GameState::initial())
    }

    /// Take over an existing position, e.g. one built with
    /// [`GameState::from_layout`] or decoded from a snapshot.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            listeners: Listeners::new(),
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state.clone()
    }

    /// Borrow the current state without cloning.
    #[must_use]
    pub fn state_ref(&self) -> &GameState {
        &self.state
    }

    /// Termination status of the current game.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Pick up the piece at `pos`. See [`Engine::try_select_piece`].
    pub fn select_piece(&mut self, pos: Position) -> bool {
        self.try_select_piece(pos).is_ok()
    }

    /// Pick up the piece at `pos`, replacing any current selection.
    ///
    /// # Errors
    ///
    /// Rejects when the game is over, the cell is empty or off the board, or
    /// the piece does not belong to the side to move.
    pub fn try_select_piece(&mut self, pos: Position) -> Result<(), Rejection> {
        if self.state.over {
            return Err(self.reject(Rejection::GameOver));
        }
        let owner = match self.state.board.get(pos) {
            Some(owner) => owner,
            None => return Err(self.reject(Rejection::NoPiece(pos))),
        };
        if owner != self.state.current_player {
            return Err(self.reject(Rejection::NotYourPiece { at: pos, owner }));
        }

        self.state.selected = Some(pos);
        debug!(%pos, side = %owner, "piece selected");
        self.notify();
        Ok(())
    }

    /// Drop the current selection.
    ///
    /// Does nothing, and notifies no one, when nothing is selected.
    pub fn deselect_piece(&mut self) {
        if self.state.selected.take().is_some() {
            debug!("selection cleared");
            self.notify();
        }
    }

    /// Move the selected piece to `to`. See [`Engine::try_move_piece`].
    pub fn move_piece(&mut self, to: Position) -> bool {
        self.try_move_piece(to).is_ok()
    }

    /// Move the selected piece to `to`.
    ///
    /// `to` may be an empty neighbour (ordinary step) or, for a cannon, a
    /// capturable soldier. On success returns the termination status after
    /// the move.
    ///
    /// # Errors
    ///
    /// Rejects when the game is over, nothing is selected, or `to` is not a
    /// legal destination. The selection survives a rejected destination.
    pub fn try_move_piece(&mut self, to: Position) -> Result<Outcome, Rejection> {
        if self.state.over {
            return Err(self.reject(Rejection::GameOver));
        }
        let from = match self.state.selected {
            Some(from) => from,
            None => return Err(self.reject(Rejection::NothingSelected)),
        };
        let mv = match rules::classify_move(&self.state.board, from, to) {
            Some(mv) => mv,
            None => return Err(self.reject(Rejection::IllegalDestination { from, to })),
        };
        self.commit(mv)
    }

    /// Apply a complete move in one call, as if `mv.from` had been selected
    /// and the piece moved to `mv.to`.
    ///
    /// Listeners are notified once, after the move. On rejection the current
    /// selection is left as it was.
    ///
    /// # Errors
    ///
    /// Same reasons as [`GameState::apply_move`].
    pub fn play(&mut self, mv: Move) -> Result<Outcome, Rejection> {
        self.commit(mv)
    }

    /// Legal destinations for the selected piece: empty neighbours in
    /// direction order, then (for a cannon) capturable soldiers in registry
    /// order. Empty when nothing is selected.
    #[must_use]
    pub fn selected_targets(&self) -> Targets {
        let Some(from) = self.state.selected else {
            return Targets::new();
        };
        let board = &self.state.board;
        let mut targets = rules::legal_moves(board, from);
        targets.extend(rules::capturable_targets(
            board,
            from,
            self.state.soldier_positions.iter(),
        ));
        targets
    }

    /// Start over from the initial position. Listeners stay registered.
    pub fn reset(&mut self) {
        self.state = GameState::initial();
        debug!("game reset");
        self.notify();
    }

    /// Register a listener, called with a snapshot after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(GameState) + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    /// Register a channel listener and return its receiver.
    ///
    /// Snapshots are sent on the same synchronous path as callbacks. Dropping
    /// the receiver unsubscribes it at the next notification.
    pub fn subscribe_channel(&mut self) -> Receiver<GameState> {
        let (_, rx) = self.listeners.add_channel();
        rx
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn commit(&mut self, mv: Move) -> Result<Outcome, Rejection> {
        let outcome = self.state.apply_move(mv).map_err(|r| self.reject(r))?;
        debug!(%mv, over = outcome.over, winner = ?outcome.winner, "move accepted");
        self.notify();
        Ok(outcome)
    }

    fn reject(&self, rejection: Rejection) -> Rejection {
        debug!(%rejection, "rejected");
        rejection
    }

    fn notify(&mut self) {
        self.listeners.notify(&self.state);
    }
}
