//! # rust-rps
//!
//! A rock-paper-scissors shape-resolution engine.
//!
//! ## Design Principles
//!
//! 1. **Total by construction**: Outcomes come from an exhaustive match over
//!    the nine shape pairs. There is no "no rule matched" branch to get wrong.
//!
//! 2. **Caller owns the tally**: The engine is stateless apart from its
//!    opponent source; `MatchTally` is passed in by `&mut`.
//!
//! 3. **Fail loudly**: Unknown shape names and unreadable entropy are errors,
//!    never silent defaults.
//!
//! ## Modules
//!
//! - `core`: Shapes, errors, RNG, configuration
//! - `rules`: Rule table and the pure outcome function
//! - `engine`: Tally, opponent sources, `ShapeResolutionEngine`
//! - `session`: `GameSession`, the state a front end drives
//!
//! ```
//! use rust_rps::{FixedOpponent, MatchResult, MatchTally, Shape, ShapeResolutionEngine};
//!
//! let mut engine = ShapeResolutionEngine::new(FixedOpponent(Shape::Scissors));
//! let mut tally = MatchTally::new();
//!
//! let outcome = engine.resolve_match("ROCK", &mut tally).unwrap();
//! assert_eq!(outcome.result, MatchResult::Win);
//! assert_eq!(outcome.to_string(), "USER wins with ROCK against CPU SCISSORS");
//! assert_eq!(tally.as_tuple(), (1, 0, 0));
//! ```

pub mod core;
pub mod rules;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{EngineConfig, EngineError, GameRng, GameRngState, Result, Shape};

pub use crate::rules::{resolve, rule_for, MatchOutcome, MatchResult, Rule, RULES};

pub use crate::engine::{
    reset_tally, resolve_against, FixedOpponent, MatchTally, OpponentSource, RandomOpponent,
    ScriptedOpponent, ShapeResolutionEngine,
};

pub use crate::session::GameSession;
