//! Engine configuration.
//!
//! Rules are fixed. The only knob is where opponent randomness comes from.

use serde::{Deserialize, Serialize};

/// Engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the opponent RNG.
    /// `None` seeds from operating-system entropy.
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Create a config with a fixed seed, for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
