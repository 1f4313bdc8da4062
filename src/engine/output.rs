//! Output types for moving-average operations.
//!
//! ## Purpose
//!
//! This module defines `SmoothResult`, which carries the smoothed series
//! together with the parameters that produced it.
//!
//! ## Design notes
//!
//! * **Ownership**: Labels are moved from the input series, not copied.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * The series has the same length and label order as the input.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not serialize results (see the `io` adapters).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::primitives::series::Series;

// ============================================================================
// Result Structure
// ============================================================================

/// Smoothed series plus the parameters used to produce it.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothResult<T = f64> {
    /// Smoothed samples, in input order.
    pub series: Series<T>,

    /// Window size used for every position.
    pub window_size: usize,

    /// Decimal digits kept after rounding.
    pub precision: u32,
}

impl<T: Float> SmoothResult<T> {
    /// Number of smoothed samples.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Check if the result holds no samples.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Smoothed values in order.
    pub fn values(&self) -> Vec<T> {
        self.series.values()
    }

    /// Labels in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.series.labels()
    }

    /// Take ownership of the smoothed series.
    pub fn into_series(self) -> Series<T> {
        self.series
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for SmoothResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.series.len())?;
        writeln!(f, "  Window:      {}", self.window_size)?;
        writeln!(f, "  Precision:   {}", self.precision)?;
        writeln!(f)?;

        writeln!(f, "Smoothed Data:")?;

        let label_width = self
            .series
            .labels()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0)
            .max(5);
        let precision = self.precision as usize;

        writeln!(f, "{:>label_width$} {:>12}", "Label", "Value")?;
        writeln!(f, "{:-<width$}", "", width = label_width + 13)?;

        // Show first 10 and last 10 rows if more than 20 points
        let samples = self.series.samples();
        let n = samples.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>label_width$}", "...")?;
            }
            prev_idx = idx;

            let sample = &samples[idx];
            writeln!(
                f,
                "{:>label_width$} {:>12.precision$}",
                sample.label, sample.value
            )?;
        }

        Ok(())
    }
}
