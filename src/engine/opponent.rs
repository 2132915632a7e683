//! Where the CPU's shape comes from.
//!
//! - `RandomOpponent`: uniform draw through `GameRng` (the normal game)
//! - `FixedOpponent`: always the same shape
//! - `ScriptedOpponent`: replays a fixed sequence, cycling
//!
//! None of these look at the user's choice.

use crate::core::{EngineError, GameRng, GameRngState, Result, Shape};

/// Source of opponent shapes.
pub trait OpponentSource {
    /// Produce the opponent's next shape.
    fn next_shape(&mut self) -> Result<Shape>;
}

/// Uniform random opponent.
#[derive(Clone, Debug)]
pub struct RandomOpponent {
    rng: GameRng,
}

impl RandomOpponent {
    /// Opponent drawing from the given RNG.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Deterministic opponent.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Opponent seeded from OS entropy.
    pub fn from_entropy() -> Result<Self> {
        GameRng::from_entropy().map(Self::new)
    }

    /// Capture the RNG position.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl OpponentSource for RandomOpponent {
    fn next_shape(&mut self) -> Result<Shape> {
        let index = self.rng.gen_index(Shape::ALL.len());
        Shape::from_index(index).ok_or_else(|| {
            EngineError::RandomnessUnavailable(format!("draw out of range: {index}"))
        })
    }
}

/// Always plays the same shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedOpponent(pub Shape);

impl OpponentSource for FixedOpponent {
    fn next_shape(&mut self) -> Result<Shape> {
        Ok(self.0)
    }
}

/// Replays a sequence of shapes, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct ScriptedOpponent {
    script: Vec<Shape>,
    cursor: usize,
}

impl ScriptedOpponent {
    /// # Panics
    ///
    /// Panics if `script` is empty.
    #[must_use]
    pub fn new(script: Vec<Shape>) -> Self {
        assert!(!script.is_empty(), "Script must contain at least one shape");
        Self { script, cursor: 0 }
    }
}

impl OpponentSource for ScriptedOpponent {
    fn next_shape(&mut self) -> Result<Shape> {
        let shape = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        Ok(shape)
    }
}

impl<O: OpponentSource + ?Sized> OpponentSource for Box<O> {
    fn next_shape(&mut self) -> Result<Shape> {
        (**self).next_shape()
    }
}
