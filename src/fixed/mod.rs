//! Fixed-point numeric primitives backing the UCT formula.
//!
//! Everything the engine compares is a scaled `u64`: a raw value `v` stands
//! for the real number `v / 2^SCALE_BITS`. Keeping the search on integers
//! makes move selection bit-for-bit reproducible across platforms; there is
//! no floating point anywhere on the search path.
//!
//! All arithmetic uses explicit wrapping operations. On overflow the
//! functions return an implementation-defined large value deterministically
//! instead of panicking; the results are priority scores, never quantities
//! a caller may treat as exact. `log` in particular diverges for large
//! arguments — callers get monotone-enough ordering at realistic visit
//! counts, nothing more.

use serde::{Deserialize, Serialize};

/// Number of fractional bits in the scaled representation.
pub const SCALE_BITS: u32 = 16;

/// A fixed-point value: raw `v` represents `v / 2^SCALE_BITS`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Fixed(pub u64);

impl Fixed {
    /// Zero.
    pub const ZERO: Fixed = Fixed(0);

    /// One half of a unit; the score of a draw.
    pub const HALF: Fixed = Fixed(1 << (SCALE_BITS - 1));

    /// One unit; the score of a win.
    pub const ONE: Fixed = Fixed(1 << SCALE_BITS);

    /// Largest representable value; stands in for infinity.
    pub const MAX: Fixed = Fixed(u64::MAX);

    /// Convert an integer to scaled form.
    #[inline]
    #[must_use]
    pub const fn from_int(v: u64) -> Fixed {
        Fixed(v << SCALE_BITS)
    }

    /// The raw scaled integer.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Rescale a double-width product down by `SCALE_BITS` with round-to-nearest.
#[inline]
const fn rescale(v: u64) -> u64 {
    v.wrapping_add(1 << (SCALE_BITS - 1)) >> SCALE_BITS
}

/// Compute `x^n` for a scaled `x` by iterative squaring.
///
/// Each intermediate product is rescaled with round-to-nearest to keep the
/// representation in range. Overflow wraps; callers must bound `n` (the
/// engine never passes more than 16).
#[must_use]
pub const fn power(x: Fixed, n: u32) -> Fixed {
    let mut base = x.0;
    let mut n = n;
    let mut result = Fixed::ONE.0;

    while n != 0 {
        if n & 1 != 0 {
            result = rescale(result.wrapping_mul(base));
        }
        n >>= 1;
        if n == 0 {
            break;
        }
        base = rescale(base.wrapping_mul(base));
    }

    Fixed(result)
}

/// Approximate the natural logarithm of an *unscaled* `x`.
///
/// Evaluates the truncated alternating series
/// `sum_{i=1..16} (-1)^(i+1) * (x << SCALE_BITS)^i / i` in scaled
/// arithmetic. `log(0)` returns [`Fixed::MAX`]: an unvisited count is
/// treated as infinitely uncertain, which the selection score exploits to
/// force exploration. `log(1)` is exactly zero.
#[must_use]
pub const fn log(x: u64) -> Fixed {
    if x == 0 {
        return Fixed::MAX;
    }
    if x == 1 {
        return Fixed::ZERO;
    }

    let scaled = Fixed(x << SCALE_BITS);
    let mut result: u64 = 0;

    let mut i: u32 = 1;
    while i <= 16 {
        let term = power(scaled, i).0 / i as u64;
        if i % 2 == 0 {
            result = result.wrapping_sub(term);
        } else {
            result = result.wrapping_add(term);
        }
        i += 1;
    }

    Fixed(result)
}

/// Approximate the square root of a scaled `x` by binary search.
///
/// Narrows `[0, x]` until the interval is no wider than `2^(SCALE_BITS-2)`
/// and answers the midpoint. Raw values of 0 or 1 are returned unchanged.
#[must_use]
pub const fn sqrt(x: Fixed) -> Fixed {
    if x.0 <= 1 {
        return x;
    }

    let mut low: u64 = 0;
    let mut high: u64 = x.0;
    let precision: u64 = 1 << (SCALE_BITS - 2);

    while high - low > precision {
        // Overflow-free midpoint: `low + high` can exceed u64::MAX when
        // the input comes from a wrapped `log` value.
        let mid = low + (high - low) / 2;
        let square = mid.wrapping_mul(mid) >> SCALE_BITS;
        if square < x.0 {
            low = mid;
        } else {
            high = mid;
        }
    }

    Fixed(low + (high - low) / 2)
}
