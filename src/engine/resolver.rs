//! The shape-resolution engine.
//!
//! Stateless apart from its opponent source. The tally is owned by the
//! caller and handed in by `&mut` on each call.

use log::{debug, info};

use crate::core::{EngineConfig, Result, Shape};
use crate::rules::MatchOutcome;

use super::opponent::{OpponentSource, RandomOpponent};
use super::tally::MatchTally;

/// Draws the CPU's shape, resolves the match and updates the tally.
#[derive(Clone, Debug)]
pub struct ShapeResolutionEngine<O: OpponentSource = RandomOpponent> {
    opponent: O,
}

impl ShapeResolutionEngine<RandomOpponent> {
    /// Build a random-opponent engine from configuration.
    ///
    /// Fails with `RandomnessUnavailable` when no seed is configured and
    /// the OS entropy source is unreadable.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let opponent = match config.seed {
            Some(seed) => {
                info!("engine seeded with {seed}");
                RandomOpponent::seeded(seed)
            }
            None => RandomOpponent::from_entropy()?,
        };
        Ok(Self::new(opponent))
    }

    /// Deterministic random-opponent engine.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomOpponent::seeded(seed))
    }
}

impl<O: OpponentSource> ShapeResolutionEngine<O> {
    /// Engine drawing opponent shapes from `opponent`.
    pub fn new(opponent: O) -> Self {
        Self { opponent }
    }

    /// Resolve a match for a user-supplied shape name.
    ///
    /// The name is validated before any randomness is consumed. On error the
    /// tally is left untouched.
    pub fn resolve_match(&mut self, user_shape_name: &str, tally: &mut MatchTally) -> Result<MatchOutcome> {
        let user_shape: Shape = user_shape_name.parse()?;
        self.resolve_shape(user_shape, tally)
    }

    /// Resolve a match for an already-validated shape.
    pub fn resolve_shape(&mut self, user_shape: Shape, tally: &mut MatchTally) -> Result<MatchOutcome> {
        let opponent_shape = self.opponent.next_shape()?;
        debug!("CPU drew {opponent_shape}");
        Ok(resolve_against(user_shape, opponent_shape, tally))
    }
}

/// Resolve with an explicit opponent shape, bypassing any opponent source.
pub fn resolve_against(user_shape: Shape, opponent_shape: Shape, tally: &mut MatchTally) -> MatchOutcome {
    let outcome = MatchOutcome::new(user_shape, opponent_shape);
    tally.record(outcome.result);
    debug!("{outcome} ({tally})");
    outcome
}

/// A fresh, zeroed tally.
#[must_use]
pub fn reset_tally() -> MatchTally {
    MatchTally::new()
}
