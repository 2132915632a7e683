//! The fixed dominance table.
//!
//! One `Rule` per shape. The table is data for display and inspection;
//! match resolution goes through `outcome::resolve`, and the tests below
//! keep the two in agreement.

use serde::{Deserialize, Serialize};

use crate::core::Shape;

/// Dominance relation for one shape against the other two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub shape: Shape,
    /// The shape this one defeats.
    pub beats: Shape,
    /// The shape that defeats this one.
    pub loses_to: Shape,
    /// Always equal to `shape`.
    pub draws_with: Shape,
}

impl Rule {
    const fn of(shape: Shape, beats: Shape, loses_to: Shape) -> Self {
        Self {
            shape,
            beats,
            loses_to,
            draws_with: shape,
        }
    }
}

/// The rule table, indexed by `Shape::index`.
pub static RULES: [Rule; 3] = [
    Rule::of(Shape::Rock, Shape::Scissors, Shape::Paper),
    Rule::of(Shape::Paper, Shape::Rock, Shape::Scissors),
    Rule::of(Shape::Scissors, Shape::Paper, Shape::Rock),
];

/// Look up the rule for a shape.
#[must_use]
pub fn rule_for(shape: Shape) -> &'static Rule {
    &RULES[shape.index()]
}
