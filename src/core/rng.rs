//! Deterministic random number generation for automated participants.
//!
//! Every match owns one `MatchRng`. Seeding it makes the automated seat's
//! choices reproducible, which is how tests pin down a specific draw.
//!
//! ```
//! use rps_engine::core::MatchRng;
//!
//! let mut a = MatchRng::new(7);
//! let mut b = MatchRng::new(7);
//!
//! assert_eq!(a.pick_index(5), b.pick_index(5));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct MatchRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl MatchRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed drawn from the thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick a uniform index in `0..len`.
    ///
    /// Returns `None` if `len` is zero.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.inner.gen_range(0..len))
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        self.pick_index(slice.len()).map(|i| &slice[i])
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> MatchRngState {
        MatchRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &MatchRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// The ChaCha8 word position restores the stream in O(1) regardless of how
/// many draws were made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRngState {
    /// Seed the stream started from
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = MatchRng::new(42);
        let mut rng2 = MatchRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.pick_index(5), rng2.pick_index(5));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = MatchRng::new(1);
        let mut rng2 = MatchRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.pick_index(1000)).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.pick_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_pick_index_bounds() {
        let mut rng = MatchRng::new(3);
        assert_eq!(rng.pick_index(0), None);
        assert_eq!(rng.pick_index(1), Some(0));
        for _ in 0..200 {
            let i = rng.pick_index(3).unwrap();
            assert!(i < 3);
        }
    }

    #[test]
    fn test_pick_index_covers_range() {
        let mut rng = MatchRng::new(11);
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[rng.pick_index(5).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_choose() {
        let mut rng = MatchRng::new(42);
        let items = ["rock", "paper", "scissors"];

        let chosen = rng.choose(&items);
        assert!(items.contains(chosen.unwrap()));

        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_state_restore() {
        let mut rng = MatchRng::new(42);
        for _ in 0..37 {
            rng.pick_index(5);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.pick_index(5)).collect();

        let mut restored = MatchRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.pick_index(5)).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = MatchRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: MatchRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
