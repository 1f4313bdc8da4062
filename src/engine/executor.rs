//! Execution engine for centered moving averages.
//!
//! ## Purpose
//!
//! This module runs the smoothing pass: for every position it determines the
//! window bounds, averages the window, and rounds the result once.
//!
//! ## Design notes
//!
//! * **Window policy**: `half = w / 2`, `start = max(0, i - half)`, `end = min(n, start + w)`.
//!   The start is clamped before the end is sized, so left-edge windows are
//!   stretched to the right instead of shrinking.
//! * **Rounding**: Applied once per output value, never to intermediate sums.
//! * **Purity**: No state is kept between runs.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * Labels are moved to the output in their original order.
//! * Every window holds at least one sample when `w >= 1`.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (see `validator`).
//! * This module does not maintain running sums or process data incrementally.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::average::window_mean;
use crate::math::rounding::RoundingMode;
use crate::primitives::series::{Sample, Series};
use crate::primitives::window::Window;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a smoothing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothConfig {
    /// Nominal number of samples per window (`w >= 1`).
    pub window_size: usize,

    /// Decimal digits kept after rounding.
    pub precision: u32,

    /// Tie-breaking rule for rounding.
    pub rounding: RoundingMode,
}

impl SmoothConfig {
    /// Create a configuration with the default precision (1 decimal) and rounding mode.
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            precision: 1,
            rounding: RoundingMode::default(),
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Executor for centered moving-average passes.
#[derive(Debug, Clone, Copy)]
pub struct SmoothExecutor {
    config: SmoothConfig,
}

impl SmoothExecutor {
    /// Create an executor from a configuration.
    pub fn from_config(config: SmoothConfig) -> Self {
        Self { config }
    }

    /// Configuration used by this executor.
    pub fn config(&self) -> &SmoothConfig {
        &self.config
    }

    /// Window averaged for position `idx` in a series of length `n`.
    #[inline]
    pub fn window_for(&self, idx: usize, n: usize) -> Window {
        Window::centered(idx, self.config.window_size, n)
    }

    /// Smooth a slice of values, returning one rounded average per position.
    pub fn smooth_values<T: Float>(&self, values: &[T]) -> Vec<T> {
        let n = values.len();
        debug!(
            "smoothing {} values with window {} (precision {})",
            n, self.config.window_size, self.config.precision
        );

        (0..n)
            .map(|i| {
                let window = self.window_for(i, n);
                let average = window_mean(&values[window.range()]);
                self.config.rounding.round(average, self.config.precision)
            })
            .collect()
    }

    /// Smooth a labeled series, moving each label to its smoothed sample.
    pub fn smooth_series<T: Float>(&self, series: Series<T>) -> Series<T> {
        let smoothed = self.smooth_values(&series.values());

        series
            .into_iter()
            .zip(smoothed)
            .map(|(sample, value)| Sample {
                label: sample.label,
                value,
            })
            .collect()
    }

    // ========================================================================
    // Main Entry Point
    // ========================================================================

    /// Smooth values using a `SmoothConfig` payload.
    pub fn run_with_config<T: Float>(values: &[T], config: SmoothConfig) -> Vec<T> {
        Self::from_config(config).smooth_values(values)
    }
}
