//! Cumulative win/loss/draw counters.

use serde::{Deserialize, Serialize};

use crate::rules::MatchResult;

/// Running tally for one game session.
///
/// Counters only move up by one per recorded match, and are only ever
/// cleared together via `reset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchTally {
    wins: u64,
    losses: u64,
    draws: u64,
}

impl MatchTally {
    /// A zeroed tally.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    #[must_use]
    pub const fn wins(&self) -> u64 {
        self.wins
    }

    #[must_use]
    pub const fn losses(&self) -> u64 {
        self.losses
    }

    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }

    /// Total matches recorded since creation or the last reset.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.wins + self.losses + self.draws
    }

    /// Count for one result.
    #[must_use]
    pub const fn count(&self, result: MatchResult) -> u64 {
        match result {
            MatchResult::Win => self.wins,
            MatchResult::Loss => self.losses,
            MatchResult::Draw => self.draws,
        }
    }

    /// Increment exactly the counter matching `result`.
    pub fn record(&mut self, result: MatchResult) {
        let counter = match result {
            MatchResult::Win => &mut self.wins,
            MatchResult::Loss => &mut self.losses,
            MatchResult::Draw => &mut self.draws,
        };
        *counter += 1;
    }

    /// Zero all three counters.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// `(wins, losses, draws)`
    #[must_use]
    pub const fn as_tuple(&self) -> (u64, u64, u64) {
        (self.wins, self.losses, self.draws)
    }
}

impl std::fmt::Display for MatchTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "wins: {}  losses: {}  draws: {}",
            self.wins, self.losses, self.draws
        )
    }
}
