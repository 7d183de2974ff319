//! UCT selection score.

use crate::fixed::{self, Fixed, SCALE_BITS};

/// Default exploration constant: sqrt(2) in fixed point.
pub const DEFAULT_EXPLORATION: Fixed = fixed::sqrt(Fixed::from_int(2));

/// Upper Confidence bound for Trees, in fixed-point arithmetic.
///
/// For a parent with `parent_visits` and a child with `visits` and
/// accumulated `score`:
///
/// - an unvisited child scores [`Fixed::MAX`], so every child is tried once
///   before any sibling is revisited;
/// - otherwise `score / visits + (c * sqrt(log(parent_visits) / visits))
///   >> SCALE_BITS`, summed with wrapping arithmetic.
///
/// The result is an opaque comparison key, not a probability.
#[must_use]
pub fn uct_score(parent_visits: u32, visits: u32, score: Fixed, exploration: Fixed) -> Fixed {
    if visits == 0 {
        return Fixed::MAX;
    }

    let exploitation = score.0 / u64::from(visits);

    let spread = fixed::log(u64::from(parent_visits)).0 / u64::from(visits);
    let uncertainty = fixed::sqrt(Fixed(spread));
    let bonus = exploration.0.wrapping_mul(uncertainty.0) >> SCALE_BITS;

    Fixed(exploitation.wrapping_add(bonus))
}
