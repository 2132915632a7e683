//! Rock-paper-scissors rules.
//!
//! - `table`: the three `Rule` records (beats / loses to / draws with)
//! - `outcome`: the pure outcome function and match descriptors

pub mod table;
pub mod outcome;

pub use table::{rule_for, Rule, RULES};
pub use outcome::{resolve, MatchOutcome, MatchResult};
