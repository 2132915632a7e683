//! Deterministic random number generation for opponent draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Entropy-seeded**: `from_entropy` pulls a seed from the OS and reports failure
//! - **Forkable**: Create independent branches (e.g. one per session)
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use rust_rps::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut branch = rng.fork();
//!
//! let mut rng2 = GameRng::new(42);
//! let mut branch2 = rng2.fork();
//!
//! assert_eq!(branch.gen_index(3), branch2.gen_index(3));
//! ```

use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system's entropy source.
    ///
    /// Fails with `RandomnessUnavailable` if the OS source cannot be read.
    pub fn from_entropy() -> Result<Self> {
        let mut bytes = [0u8; 8];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| EngineError::RandomnessUnavailable(e.to_string()))?;
        Ok(Self::new(u64::from_le_bytes(bytes)))
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Uniform index in `0..n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn gen_index(&mut self, n: usize) -> usize {
        self.inner.gen_range(0..n)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position so capture is O(1) regardless of
/// how many draws have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_index(3), rng2.gen_index(3));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..32).map(|_| rng1.gen_index(3)).collect();
        let seq2: Vec<_> = (0..32).map(|_| rng2.gen_index(3)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_gen_index_in_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            assert!(rng.gen_index(3) < 3);
        }
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed, forked2.seed);
        assert_ne!(forked1.seed, rng1.seed);
    }

    #[test]
    fn test_from_entropy() {
        let rng = GameRng::from_entropy().expect("OS entropy should be available in tests");
        assert_eq!(rng.fork_counter, 0);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            rng.gen_index(3);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..20).map(|_| rng.gen_index(3)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..20).map(|_| restored.gen_index(3)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
