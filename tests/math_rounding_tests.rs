#![cfg(feature = "dev")]
//! Tests for decimal rounding.
//!
//! These tests verify the presentation rounding applied to smoothed values:
//! - Default one-decimal rounding
//! - Tie-breaking at exact `x.x5` boundaries for both modes
//! - Other precisions and non-finite inputs
//!
//! Tie inputs are chosen to be exactly representable (`0.25`, `0.75`,
//! `1.125`) so the boundary really is a tie after scaling.

use approx::assert_relative_eq;

use cma_rs::internals::math::rounding::RoundingMode;
use cma_rs::internals::math::rounding::RoundingMode::{HalfAwayFromZero, HalfEven};

// ============================================================================
// Default Mode
// ============================================================================

#[test]
fn test_default_mode_is_half_away_from_zero() {
    assert_eq!(RoundingMode::default(), HalfAwayFromZero);
}

#[test]
fn test_round_one_decimal() {
    assert_relative_eq!(HalfAwayFromZero.round(2.44_f64, 1), 2.4);
    assert_relative_eq!(HalfAwayFromZero.round(2.46_f64, 1), 2.5);
    assert_relative_eq!(HalfAwayFromZero.round(93.2_f64, 1), 93.2);
    assert_relative_eq!(HalfAwayFromZero.round(5.0_f64, 1), 5.0);
}

// ============================================================================
// Tie Breaking
// ============================================================================

#[test]
fn test_half_away_from_zero_ties() {
    assert_eq!(HalfAwayFromZero.round(0.25_f64, 1), 0.3);
    assert_eq!(HalfAwayFromZero.round(0.75_f64, 1), 0.8);
    assert_eq!(HalfAwayFromZero.round(-0.25_f64, 1), -0.3);
    assert_eq!(HalfAwayFromZero.round(1.25_f64, 1), 1.3);
}

#[test]
fn test_half_even_ties() {
    assert_eq!(HalfEven.round(0.25_f64, 1), 0.2);
    assert_eq!(HalfEven.round(0.75_f64, 1), 0.8);
    assert_eq!(HalfEven.round(-0.25_f64, 1), -0.2);
    assert_eq!(HalfEven.round(1.25_f64, 1), 1.2);
}

#[test]
fn test_half_even_matches_default_off_ties() {
    for &v in &[0.24_f64, 0.26, 3.14159, -7.77, 100.04] {
        assert_eq!(HalfEven.round(v, 1), HalfAwayFromZero.round(v, 1));
    }
}

// ============================================================================
// Precision
// ============================================================================

#[test]
fn test_precision_zero() {
    assert_eq!(HalfAwayFromZero.round(2.5_f64, 0), 3.0);
    assert_eq!(HalfEven.round(2.5_f64, 0), 2.0);
    assert_eq!(HalfEven.round(3.5_f64, 0), 4.0);
    assert_eq!(HalfEven.round(-2.5_f64, 0), -2.0);
}

#[test]
fn test_precision_two() {
    assert_eq!(HalfAwayFromZero.round(1.125_f64, 2), 1.13);
    assert_eq!(HalfEven.round(1.125_f64, 2), 1.12);
    assert_relative_eq!(HalfAwayFromZero.round(136.4567_f64, 2), 136.46);
}

#[test]
fn test_f32_support() {
    assert_eq!(HalfAwayFromZero.round(0.25_f32, 1), 0.3_f32);
    assert_eq!(HalfEven.round(0.25_f32, 1), 0.2_f32);
}

// ============================================================================
// Non-finite Values
// ============================================================================

#[test]
fn test_non_finite_pass_through() {
    assert!(HalfAwayFromZero.round(f64::NAN, 1).is_nan());
    assert_eq!(HalfEven.round(f64::INFINITY, 1), f64::INFINITY);
    assert_eq!(HalfAwayFromZero.round(f64::NEG_INFINITY, 1), f64::NEG_INFINITY);
}

// ============================================================================
// Large Values
// ============================================================================

#[test]
fn test_large_values_do_not_overflow() {
    // Scaling by 10 would overflow to infinity.
    assert_eq!(HalfAwayFromZero.round(1.7e308_f64, 1), 1.7e308);
    assert_eq!(HalfEven.round(-1.7e308_f64, 1), -1.7e308);
    assert_eq!(HalfAwayFromZero.round(1e300_f64, 15), 1e300);
    assert_eq!(HalfAwayFromZero.round(f64::MAX, 0), f64::MAX);
    assert_eq!(HalfAwayFromZero.round(3.0e38_f32, 1), 3.0e38_f32);
}

#[test]
fn test_values_without_fractional_digits_unchanged() {
    // 2^53 + 2 has no fractional part at any precision.
    let v = 9_007_199_254_740_994.0_f64;
    assert_eq!(HalfAwayFromZero.round(v, 1), v);
    assert_eq!(HalfEven.round(v, 3), v);

    // Ordinary values beside a huge one are still rounded.
    assert_relative_eq!(HalfAwayFromZero.round(12345.678_f64, 1), 12345.7);
}
