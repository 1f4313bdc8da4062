//! Arithmetic mean over a window of samples.
//!
//! ## Purpose
//!
//! This module computes the unweighted mean of a contiguous window. Each
//! window is summed from scratch, giving O(n * w) work over a full series.
//!
//! ## Invariants
//!
//! * The mean of a single value is that value.
//! * The mean of an empty slice is NaN; the smoothing engine never requests one.
//!
//! ## Non-goals
//!
//! * This module does not provide weighted means (exponential, Gaussian).
//! * This module does not maintain running sums across windows.

// External dependencies
use num_traits::Float;

/// Compute the unweighted mean of `window`.
#[inline]
pub fn window_mean<T: Float>(window: &[T]) -> T {
    let sum = window.iter().fold(T::zero(), |acc, &v| acc + v);
    match T::from(window.len()) {
        Some(count) if !window.is_empty() => sum / count,
        _ => T::nan(),
    }
}
