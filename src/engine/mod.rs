//! Match resolution.
//!
//! - `tally`: cumulative win/loss/draw counters
//! - `opponent`: the `OpponentSource` seam and its implementations
//! - `resolver`: `ShapeResolutionEngine`, `resolve_against`, `reset_tally`

pub mod tally;
pub mod opponent;
pub mod resolver;

pub use tally::MatchTally;
pub use opponent::{FixedOpponent, OpponentSource, RandomOpponent, ScriptedOpponent};
pub use resolver::{reset_tally, resolve_against, ShapeResolutionEngine};
