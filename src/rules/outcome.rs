//! Match results and the pure outcome function.

use serde::{Deserialize, Serialize};

use crate::core::Shape;

/// Result of one match, from the user's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
}

impl MatchResult {
    /// The same match seen from the other side.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            MatchResult::Win => MatchResult::Loss,
            MatchResult::Loss => MatchResult::Win,
            MatchResult::Draw => MatchResult::Draw,
        }
    }

    /// Verb used in outcome messages.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            MatchResult::Win => "wins",
            MatchResult::Loss => "loses",
            MatchResult::Draw => "draws",
        }
    }
}

/// Resolve `user` against `opponent`.
///
/// Total over all nine pairs; there is no fallback arm.
#[must_use]
pub const fn resolve(user: Shape, opponent: Shape) -> MatchResult {
    use MatchResult::{Draw, Loss, Win};
    use Shape::{Paper, Rock, Scissors};

    match (user, opponent) {
        (Rock, Scissors) | (Scissors, Paper) | (Paper, Rock) => Win,
        (Rock, Paper) | (Scissors, Rock) | (Paper, Scissors) => Loss,
        (Rock, Rock) | (Paper, Paper) | (Scissors, Scissors) => Draw,
    }
}

/// One resolved match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub user_shape: Shape,
    pub opponent_shape: Shape,
    pub result: MatchResult,
}

impl MatchOutcome {
    /// Build the outcome for a pair of shapes.
    #[must_use]
    pub const fn new(user_shape: Shape, opponent_shape: Shape) -> Self {
        Self {
            user_shape,
            opponent_shape,
            result: resolve(user_shape, opponent_shape),
        }
    }
}

/// `USER <wins|loses|draws> with <UserShape> against CPU <OpponentShape>`
impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "USER {} with {} against CPU {}",
            self.result.verb(),
            self.user_shape,
            self.opponent_shape
        )
    }
}
