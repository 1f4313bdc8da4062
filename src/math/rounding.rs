//! Decimal rounding for presentation precision.
//!
//! ## Purpose
//!
//! This module rounds smoothed values to a fixed number of decimal digits.
//! Rounding is applied exactly once, after averaging.
//!
//! ## Design notes
//!
//! * **Scaling**: Values are scaled by `10^precision`, rounded to an integer, then scaled back.
//! * **Tie-breaking**: Ties go away from zero by default; banker's rounding is available.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Non-finite inputs pass through unchanged.
//! * Values too large to carry a fractional digit at the requested precision pass through unchanged.
//! * Precision 0 rounds to whole numbers.
//!
//! ## Non-goals
//!
//! * This module does not produce decimal string representations (see the output adapter).

// External dependencies
use num_traits::Float;

// ============================================================================
// Rounding Mode
// ============================================================================

/// Tie-breaking rule used when a scaled value lies exactly halfway between integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Round half away from zero (`0.25 -> 0.3`, `-0.25 -> -0.3`).
    #[default]
    HalfAwayFromZero,

    /// Round half to even (`0.25 -> 0.2`, `0.75 -> 0.8`).
    HalfEven,
}

impl RoundingMode {
    /// Round `value` to `precision` decimal digits.
    #[inline]
    pub fn round<T: Float>(self, value: T, precision: u32) -> T {
        if !value.is_finite() {
            return value;
        }

        let scale = pow10::<T>(precision);
        let scaled = value * scale;

        // Scaled magnitudes at or past 1 / epsilon are already integral.
        if !scaled.is_finite() || scaled.abs() >= T::one() / T::epsilon() {
            return value;
        }

        let rounded = match self {
            Self::HalfAwayFromZero => scaled.round(),
            Self::HalfEven => round_half_even(scaled),
        };

        rounded / scale
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Compute `10^precision` in the target float type.
#[inline]
fn pow10<T: Float>(precision: u32) -> T {
    // Repeated multiplication keeps every power up to 10^15 exact in f64.
    let ten = T::from(10u8).unwrap_or_else(T::one);
    (0..precision).fold(T::one(), |acc, _| acc * ten)
}

/// Round to the nearest integer, breaking exact ties toward the even neighbour.
#[inline]
fn round_half_even<T: Float>(x: T) -> T {
    let floor = x.floor();
    let diff = x - floor;
    let half = T::one() / (T::one() + T::one());

    if diff != half {
        return x.round();
    }

    let two = T::one() + T::one();
    if (floor / two).fract() == T::zero() {
        floor
    } else {
        floor + T::one()
    }
}
