//! Validation for smoother configuration.
//!
//! ## Purpose
//!
//! This module checks smoother parameters before any data is touched: the
//! window size, the rounding precision, and builder misuse such as
//! duplicate or missing parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Trust**: Series contents are not validated; labels are opaque and values are averaged as given.
//!
//! ## Invariants
//!
//! * A configuration that passes validation can never produce an empty window.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the smoothing itself.

// Internal dependencies
use crate::primitives::errors::CmaError;

/// Largest supported rounding precision (decimal digits kept).
pub const MAX_PRECISION: u32 = 15;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for smoother configuration.
///
/// All methods return `Result<(), CmaError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    /// Validate the window size; it must be at least 1.
    pub fn validate_window(window_size: usize) -> Result<(), CmaError> {
        if window_size == 0 {
            return Err(CmaError::InvalidWindow(window_size));
        }
        Ok(())
    }

    /// Validate the rounding precision.
    pub fn validate_precision(precision: u32) -> Result<(), CmaError> {
        if precision > MAX_PRECISION {
            return Err(CmaError::InvalidPrecision(precision));
        }
        Ok(())
    }

    /// Validate that a required builder parameter was provided.
    pub fn validate_required<V>(
        value: Option<V>,
        parameter: &'static str,
    ) -> Result<V, CmaError> {
        value.ok_or(CmaError::MissingParameter(parameter))
    }

    /// Validate that no parameter was set more than once.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), CmaError> {
        if let Some(parameter) = duplicate_param {
            return Err(CmaError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
