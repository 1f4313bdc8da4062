//! # CMA: Centered Moving Average smoothing for Rust
//!
//! A small, dependable implementation of the centered moving average for
//! ordered, labeled time series, with CSV adapters and a command-line tool.
//!
//! ## What is a centered moving average?
//!
//! Each output point is the unweighted mean of a window of input points
//! approximately centered on it. The result is an equal-length series with
//! short-term fluctuations (e.g., month-to-month noise in production figures)
//! smoothed out.
//!
//! **How windows are placed:**
//!
//! For position `i` in a series of length `n` with window size `w`:
//!
//! ```text
//! half  = w / 2                  (integer division)
//! start = max(0, i - half)
//! end   = min(n, start + w)      (exclusive)
//! ```
//!
//! The start is clamped first and the end is sized from the clamped start.
//! Near the left edge the window therefore keeps its full width `w` and
//! reaches further right; near the right edge it shrinks. This is not the
//! same as a symmetric window clamped independently at both ends.
//!
//! ## Quick Start
//!
//! ```rust
//! use cma_rs::prelude::*;
//!
//! let series: Series = [
//!     ("d0", 1.0),
//!     ("d1", 2.0),
//!     ("d2", 3.0),
//!     ("d3", 4.0),
//!     ("d4", 5.0),
//!     ("d5", 6.0),
//! ]
//! .into_iter()
//! .collect();
//!
//! let smoother = MovingAverage::new()
//!     .window(4)      // 4 samples per window
//!     .build()?;
//!
//! let result = smoother.fit(series)?;
//! assert_eq!(result.values(), vec![2.5, 2.5, 2.5, 3.5, 4.5, 5.0]);
//!
//! println!("{}", result);
//! # Result::<(), CmaError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 6
//!   Window:      4
//!   Precision:   1
//!
//! Smoothed Data:
//! Label        Value
//! ------------------
//!    d0          2.5
//!    d1          2.5
//!    d2          2.5
//!    d3          3.5
//!    d4          4.5
//!    d5          5.0
//! ```
//!
//! ## Rounding
//!
//! Averages are rounded once, to one decimal by default. Ties go away from
//! zero unless [`RoundingMode::HalfEven`](crate::prelude::HalfEven) is chosen:
//!
//! ```rust
//! use cma_rs::prelude::*;
//!
//! let smoother = MovingAverage::new()
//!     .window(2)
//!     .precision(1)
//!     .rounding(HalfEven)
//!     .build()?;
//!
//! // Windows: [1.0, 1.5] -> 1.25 -> 1.2 (ties to even)
//! assert_eq!(smoother.smooth_values(&[1.0, 1.5]), vec![1.2, 1.2]);
//! # Result::<(), CmaError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Configuration is validated by `build()`: a window of `0`, a precision above
//! 15, a duplicated parameter, or a missing window all return a [`CmaError`](crate::prelude::CmaError).
//! Once built, smoothing never fails.
//!
//! ```rust
//! use cma_rs::prelude::*;
//!
//! match MovingAverage::new().window(0).build() {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert_eq!(e, CmaError::InvalidWindow(0)),
//! }
//! ```
//!
//! ## Command Line
//!
//! With the default `cli` feature the crate ships the `cma` binary:
//!
//! ```text
//! cma -w 6 -o beer_production_6mo_avg.csv
//! ```
//!
//! It reads `beer_production.csv` (columns `date` and `production`), writes the
//! smoothed series next to it, and logs progress through `env_logger`
//! (set `RUST_LOG` to change verbosity). Pass `--rounding even` to break
//! `x.x5` ties toward the even digit.
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to build the core without the standard library:
//!
//! ```toml
//! [dependencies]
//! cma-rs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains `Sample`, `Series`, `Window` and the shared error type.
mod primitives;

// Layer 2: Math - pure numerical helpers.
//
// Contains decimal rounding with configurable tie-breaking.
mod math;

// Layer 3: Algorithms - the averaging step.
mod algorithms;

// Layer 4: Engine - orchestration, validation and results.
mod engine;

// High-level fluent API.
//
// Provides the `MovingAverage` builder and the `Smoother` it produces.
mod api;

/// CSV input and output adapters.
#[cfg(feature = "cli")]
pub mod io;

/// Command-line argument parsing and the read, smooth, write run.
#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use cma_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        CmaError, MovingAverageBuilder as MovingAverage, RoundingMode,
        RoundingMode::{HalfAwayFromZero, HalfEven},
        Sample, Series, SmoothResult, Smoother,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
