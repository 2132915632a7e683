//! Game session: the state a front end drives.

use log::info;

use crate::core::{EngineConfig, Result};
use crate::engine::{reset_tally, MatchTally, OpponentSource, RandomOpponent, ShapeResolutionEngine};
use crate::rules::MatchOutcome;

/// One game session.
///
/// Owns the tally and the latest result. Front ends forward the two user
/// events here and render `message()` and `tally()` afterwards.
#[derive(Clone, Debug)]
pub struct GameSession<O: OpponentSource = RandomOpponent> {
    engine: ShapeResolutionEngine<O>,
    tally: MatchTally,
    history: Vec<MatchOutcome>,
}

impl GameSession<RandomOpponent> {
    /// Start a random-opponent session from configuration.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        ShapeResolutionEngine::from_config(config).map(Self::new)
    }
}

impl<O: OpponentSource> GameSession<O> {
    pub fn new(engine: ShapeResolutionEngine<O>) -> Self {
        info!("new game session");
        Self {
            engine,
            tally: MatchTally::new(),
            history: Vec::new(),
        }
    }

    /// User picked a shape.
    ///
    /// On error nothing changes: the tally, history and message stay as
    /// they were.
    pub fn on_shape_selected(&mut self, shape_name: &str) -> Result<&MatchOutcome> {
        let outcome = self.engine.resolve_match(shape_name, &mut self.tally)?;
        self.history.push(outcome);
        Ok(&self.history[self.history.len() - 1])
    }

    /// User asked for a reset.
    pub fn on_reset_requested(&mut self) {
        info!("reset after {} rounds ({})", self.tally.total(), self.tally);
        self.tally = reset_tally();
        self.history.clear();
    }

    /// Counters since the last reset.
    #[must_use]
    pub fn tally(&self) -> &MatchTally {
        &self.tally
    }

    /// Most recent outcome since the last reset.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&MatchOutcome> {
        self.history.last()
    }

    /// Outcome text for display, empty before the first match and after reset.
    #[must_use]
    pub fn message(&self) -> String {
        self.last_outcome().map(ToString::to_string).unwrap_or_default()
    }

    /// Outcomes since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MatchOutcome] {
        &self.history
    }

    /// Matches since the last reset.
    #[must_use]
    pub fn rounds(&self) -> u64 {
        self.tally.total()
    }
}
