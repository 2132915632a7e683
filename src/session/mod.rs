//! Session state held on behalf of a front end.

pub mod game;

pub use game::GameSession;
