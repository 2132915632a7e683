//! Core types: shapes, errors, RNG, configuration.

pub mod shape;
pub mod error;
pub mod rng;
pub mod config;

pub use shape::Shape;
pub use error::{EngineError, Result};
pub use rng::{GameRng, GameRngState};
pub use config::EngineConfig;
