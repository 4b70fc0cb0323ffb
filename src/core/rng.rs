//! Seedable randomness for the easy AI tier.
//!
//! All randomness in the crate flows through [`GameRng`], so a fixed seed
//! reproduces a whole self-play game move for move.
//!
//! ```
//! use cannon_soldiers::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.index(10), b.index(10));
//!
//! // A fork gets its own stream, reproducible from the parent's seed.
//! let mut side_stream = a.fork();
//! let _ = side_stream.index(10);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic random source backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    /// Create a generator from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Create a generator seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Split off an independent generator.
    ///
    /// The n-th fork of a given seed is always the same stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Uniform index in `0..len`. Returns 0 when `len` is 0.
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.inner.gen_range(0..len)
    }

    /// Pick a uniformly random element.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i = self.index(items.len());
        items.get(i)
    }

    /// Capture the stream position so it can be resumed later.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            forks: self.forks,
        }
    }

    /// Resume a stream captured by [`GameRng::state`].
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            forks: state.forks,
        }
    }
}

/// Serializable position of a [`GameRng`] stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word counter.
    pub word_pos: u128,
    pub forks: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);

        for _ in 0..50 {
            assert_eq!(a.index(36), b.index(36));
        }
    }

    #[test]
    fn test_fork_differs_from_parent() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let parent: Vec<_> = (0..16).map(|_| rng.index(1000)).collect();
        let child: Vec<_> = (0..16).map(|_| forked.index(1000)).collect();

        assert_ne!(parent, child);
    }

    #[test]
    fn test_fork_is_reproducible() {
        let mut a = GameRng::new(9);
        let mut b = GameRng::new(9);
        let _ = a.fork();
        let _ = b.fork();

        assert_eq!(a.fork().seed(), b.fork().seed());
    }

    #[test]
    fn test_index_bounds() {
        let mut rng = GameRng::new(1);
        assert_eq!(rng.index(0), 0);
        assert_eq!(rng.index(1), 0);
        for _ in 0..100 {
            assert!(rng.index(4) < 4);
        }
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(3);
        let items = [10, 20, 30];

        let picked = rng.choose(&items).copied();
        assert!(matches!(picked, Some(10 | 20 | 30)));

        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_state_resume() {
        let mut rng = GameRng::new(42);
        for _ in 0..37 {
            rng.index(100);
        }

        let saved = rng.state();
        let expected: Vec<_> = (0..8).map(|_| rng.index(100)).collect();

        let mut resumed = GameRng::from_state(&saved);
        let actual: Vec<_> = (0..8).map(|_| resumed.index(100)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRng::new(5).state();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameRngState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
