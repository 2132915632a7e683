//! Engine error type.

use thiserror::Error;

/// Errors surfaced by the resolution engine.
///
/// Every failure is returned to the caller as-is. Nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The supplied name is not one of ROCK, PAPER, SCISSORS.
    #[error("invalid shape {name:?} (expected ROCK, PAPER or SCISSORS)")]
    InvalidShape { name: String },

    /// The randomness source could not produce a value.
    #[error("randomness unavailable: {0}")]
    RandomnessUnavailable(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_shape_message() {
        let err = EngineError::InvalidShape {
            name: "LIZARD".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid shape \"LIZARD\" (expected ROCK, PAPER or SCISSORS)"
        );
    }

    #[test]
    fn test_randomness_message() {
        let err = EngineError::RandomnessUnavailable("no entropy".into());
        assert_eq!(err.to_string(), "randomness unavailable: no entropy");
    }
}
