//! The three playable shapes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::EngineError;

/// One of ROCK, PAPER, SCISSORS.
///
/// The discriminants give the canonical ordering used for random draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    /// All shapes in canonical order.
    pub const ALL: [Shape; 3] = [Shape::Rock, Shape::Paper, Shape::Scissors];

    /// Upper-case identifier, as shown to the user.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Rock => "ROCK",
            Shape::Paper => "PAPER",
            Shape::Scissors => "SCISSORS",
        }
    }

    /// Position in `Shape::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of `index`. Returns `None` for indices past the last shape.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Shape> {
        match index {
            0 => Some(Shape::Rock),
            1 => Some(Shape::Paper),
            2 => Some(Shape::Scissors),
            _ => None,
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = EngineError;

    /// Parse an exact shape identifier (`ROCK`, `PAPER` or `SCISSORS`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.name() == s)
            .ok_or_else(|| EngineError::InvalidShape { name: s.to_string() })
    }
}
