//! State-change listeners.
//!
//! Listeners are called synchronously, in registration order, after every
//! mutating engine operation. Each one receives its own clone of the new
//! state, so nothing a listener does can reach back into the engine.

use std::sync::mpsc::{self, Receiver, Sender};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::GameState;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl ListenerId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

/// Callback invoked with a snapshot of the new state.
pub type Callback = Box<dyn FnMut(GameState)>;

enum Sink {
    Callback(Callback),
    Channel(Sender<GameState>),
}

/// Ordered listener registry.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<(ListenerId, Sink)>,
    next_id: u32,
}

impl Listeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. It runs after all previously registered listeners.
    pub fn add(&mut self, callback: Callback) -> ListenerId {
        self.push(Sink::Callback(callback))
    }

    /// Register a channel and return its receiving end.
    ///
    /// The sender is dropped from the registry the first time a send fails,
    /// i.e. once the receiver has been dropped.
    pub fn add_channel(&mut self) -> (ListenerId, Receiver<GameState>) {
        let (tx, rx) = mpsc::channel();
        (self.push(Sink::Channel(tx)), rx)
    }

    /// Remove a listener. Returns `false` if `id` is not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver `state` to every listener, in registration order.
    pub fn notify(&mut self, state: &GameState) {
        let mut closed = Vec::new();
        for (id, sink) in &mut self.entries {
            trace!(listener = %id, "notify");
            match sink {
                Sink::Callback(callback) => callback(state.clone()),
                Sink::Channel(tx) => {
                    if tx.send(state.clone()).is_err() {
                        closed.push(*id);
                    }
                }
            }
        }
        for id in closed {
            trace!(listener = %id, "receiver dropped, removing");
            self.remove(id);
        }
    }

    fn push(&mut self, sink: Sink) -> ListenerId {
        let id = ListenerId::new(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, sink));
        id
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("ids", &self.entries.iter().map(|(id, _)| *id).collect::<Vec<_>>())
            .field("next_id", &self.next_id)
            .finish()
    }
}
