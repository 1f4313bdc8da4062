//! High-level API for centered moving-average smoothing.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the window size, rounding precision and
//! rounding mode, and produces a reusable [`Smoother`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for everything except the window.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Smoothing is generic over `Float` types.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`MovingAverageBuilder`] via `MovingAverage::new()`.
//! 2. Chain configuration methods (`.window()`, `.precision()`, `.rounding()`).
//! 3. Call `.build()` to obtain a [`Smoother`], then `.fit(series)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{SmoothConfig, SmoothExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::output::SmoothResult;
pub use crate::math::rounding::RoundingMode;
pub use crate::primitives::errors::CmaError;
pub use crate::primitives::series::{Sample, Series};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a centered moving average.
#[derive(Debug, Clone, Default)]
pub struct MovingAverageBuilder {
    /// Number of samples per window (required).
    pub window: Option<usize>,

    /// Decimal digits kept after rounding (default: 1).
    pub precision: Option<u32>,

    /// Tie-breaking rule for rounding (default: HalfAwayFromZero).
    pub rounding: Option<RoundingMode>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl MovingAverageBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            window: None,
            precision: None,
            rounding: None,
            duplicate_param: None,
        }
    }

    /// Set the window size in samples.
    pub fn window(mut self, window: usize) -> Self {
        if self.window.is_some() {
            self.duplicate_param = Some("window");
        }
        self.window = Some(window);
        self
    }

    /// Set the number of decimal digits kept after rounding.
    pub fn precision(mut self, precision: u32) -> Self {
        if self.precision.is_some() {
            self.duplicate_param = Some("precision");
        }
        self.precision = Some(precision);
        self
    }

    /// Set the tie-breaking rule for rounding.
    pub fn rounding(mut self, mode: RoundingMode) -> Self {
        if self.rounding.is_some() {
            self.duplicate_param = Some("rounding");
        }
        self.rounding = Some(mode);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build a smoother.
    pub fn build(self) -> Result<Smoother, CmaError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let window_size = Validator::validate_required(self.window, "window")?;
        Validator::validate_window(window_size)?;

        let precision = self.precision.unwrap_or(1);
        Validator::validate_precision(precision)?;

        let config = SmoothConfig {
            precision,
            rounding: self.rounding.unwrap_or_default(),
            ..SmoothConfig::new(window_size)
        };

        Ok(Smoother {
            executor: SmoothExecutor::from_config(config),
        })
    }
}

// ============================================================================
// Smoother
// ============================================================================

/// Validated, reusable centered moving-average smoother.
#[derive(Debug, Clone, Copy)]
pub struct Smoother {
    executor: SmoothExecutor,
}

impl Smoother {
    /// Window size in samples.
    pub fn window_size(&self) -> usize {
        self.executor.config().window_size
    }

    /// Decimal digits kept after rounding.
    pub fn precision(&self) -> u32 {
        self.executor.config().precision
    }

    /// Tie-breaking rule for rounding.
    pub fn rounding(&self) -> RoundingMode {
        self.executor.config().rounding
    }

    /// Smooth a labeled series, consuming it.
    pub fn fit<T: Float>(&self, series: Series<T>) -> Result<SmoothResult<T>, CmaError> {
        let config = self.executor.config();
        Ok(SmoothResult {
            series: self.executor.smooth_series(series),
            window_size: config.window_size,
            precision: config.precision,
        })
    }

    /// Smooth bare values without labels.
    pub fn smooth_values<T: Float>(&self, values: &[T]) -> Vec<T> {
        SmoothExecutor::run_with_config(values, *self.executor.config())
    }
}
