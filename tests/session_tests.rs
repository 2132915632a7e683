//! Integration tests for GameSession.

use rust_rps::{
    EngineConfig, EngineError, FixedOpponent, GameSession, MatchResult, OpponentSource,
    ScriptedOpponent, Shape, ShapeResolutionEngine,
};

/// Opponent source whose randomness is gone.
struct DeadEntropy;

impl OpponentSource for DeadEntropy {
    fn next_shape(&mut self) -> rust_rps::Result<Shape> {
        Err(EngineError::RandomnessUnavailable("entropy pool closed".to_string()))
    }
}

#[test]
fn test_seeded_sessions_replay_identically() {
    let config = EngineConfig::default().with_seed(99);
    let mut a = GameSession::from_config(&config).unwrap();
    let mut b = GameSession::from_config(&config).unwrap();

    for name in ["ROCK", "PAPER", "SCISSORS", "ROCK", "ROCK"] {
        let oa = *a.on_shape_selected(name).unwrap();
        let ob = *b.on_shape_selected(name).unwrap();
        assert_eq!(oa, ob);
    }

    assert_eq!(a.tally(), b.tally());
    assert_eq!(a.history(), b.history());
}

#[test]
fn test_tally_matches_history() {
    let mut session = GameSession::from_config(&EngineConfig::default().with_seed(3)).unwrap();

    for _ in 0..30 {
        session.on_shape_selected("SCISSORS").unwrap();
    }

    let wins = session
        .history()
        .iter()
        .filter(|o| o.result == MatchResult::Win)
        .count() as u64;
    assert_eq!(session.tally().wins(), wins);
    assert_eq!(session.rounds(), 30);
}

#[test]
fn test_reset_is_idempotent() {
    let mut session = GameSession::new(ShapeResolutionEngine::new(FixedOpponent(Shape::Rock)));
    session.on_shape_selected("PAPER").unwrap();

    session.on_reset_requested();
    let once = *session.tally();
    session.on_reset_requested();

    assert_eq!(*session.tally(), once);
    assert_eq!(session.tally().as_tuple(), (0, 0, 0));
    assert_eq!(session.message(), "");
}

#[test]
fn test_play_after_reset_starts_from_zero() {
    let mut session = GameSession::new(ShapeResolutionEngine::new(ScriptedOpponent::new(vec![
        Shape::Scissors,
        Shape::Scissors,
        Shape::Rock,
        Shape::Paper,
    ])));

    session.on_shape_selected("ROCK").unwrap();
    session.on_shape_selected("PAPER").unwrap();
    session.on_shape_selected("ROCK").unwrap();
    assert_eq!(session.tally().as_tuple(), (1, 1, 1));

    session.on_reset_requested();
    session.on_shape_selected("ROCK").unwrap();

    assert_eq!(session.tally().as_tuple(), (0, 1, 0));
    assert_eq!(session.message(), "USER loses with ROCK against CPU PAPER");
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_invalid_shape_surfaces_error() {
    let mut session = GameSession::new(ShapeResolutionEngine::new(FixedOpponent(Shape::Paper)));

    let err = session.on_shape_selected("LIZARD").unwrap_err();

    assert_eq!(err, EngineError::InvalidShape { name: "LIZARD".to_string() });
    assert_eq!(session.rounds(), 0);
}

#[test]
fn test_lower_case_name_is_rejected() {
    let mut session = GameSession::new(ShapeResolutionEngine::new(FixedOpponent(Shape::Rock)));

    let err = session.on_shape_selected("rock").unwrap_err();

    assert_eq!(err, EngineError::InvalidShape { name: "rock".to_string() });
    assert_eq!(session.message(), "");
}

#[test]
fn test_randomness_failure_leaves_session_untouched() {
    let mut session = GameSession::new(ShapeResolutionEngine::new(DeadEntropy));

    let err = session.on_shape_selected("PAPER").unwrap_err();

    assert!(matches!(err, EngineError::RandomnessUnavailable(_)));
    assert_eq!(session.tally().as_tuple(), (0, 0, 0));
    assert!(session.history().is_empty());
    assert_eq!(session.message(), "");
}
