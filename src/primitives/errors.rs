//! Error types for moving-average operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! a smoother, reading or writing delimited data, and parsing command-line
//! arguments.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (window, precision, argument).
//! * **Deferred**: Builder misuse is recorded while chaining and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Parameter validation**: Invalid window size or precision, duplicate or missing parameters.
//! 2. **Data adapters**: Unreadable files, malformed rows, non-numeric values.
//! 3. **Command line**: Missing, malformed, or unknown arguments.
//!
//! ## Invariants
//!
//! * The smoothing core itself never produces an error for a validated configuration.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for moving-average operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CmaError {
    /// Window size must be at least 1.
    InvalidWindow(usize),

    /// Rounding precision exceeds the number of meaningful decimal digits.
    InvalidPrecision(u32),

    /// A required builder parameter was never set.
    MissingParameter(&'static str),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Underlying file or stream could not be read or written.
    Io(String),

    /// Delimited input could not be parsed.
    Csv {
        /// 1-based line number of the offending record, when known.
        line: Option<u64>,
        /// Description of the failure.
        message: String,
    },

    /// A required command-line argument was not supplied.
    MissingArgument(&'static str),

    /// A command-line argument has a missing or malformed value.
    InvalidArgument {
        /// Name of the argument.
        name: &'static str,
        /// Value as given on the command line.
        value: String,
    },

    /// Command-line argument is not recognized.
    UnknownArgument(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for CmaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidWindow(window) => {
                write!(f, "Invalid window: {window} (must be at least 1)")
            }
            Self::InvalidPrecision(precision) => {
                write!(f, "Invalid precision: {precision} (must be at most 15)")
            }
            Self::MissingParameter(parameter) => {
                write!(f, "Missing parameter: '{parameter}' must be set before build")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Csv {
                line: Some(line),
                message,
            } => write!(f, "Malformed input at line {line}: {message}"),
            Self::Csv {
                line: None,
                message,
            } => write!(f, "Malformed input: {message}"),
            Self::MissingArgument(name) => write!(f, "Missing required argument: {name}"),
            Self::InvalidArgument { name, value } => {
                write!(f, "Invalid value for {name}: '{value}'")
            }
            Self::UnknownArgument(arg) => write!(f, "Unknown argument: {arg}"),
        }
    }
}

// ============================================================================
// Error Trait Implementation
// ============================================================================

#[cfg(feature = "std")]
impl Error for CmaError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for CmaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(feature = "cli")]
impl From<csv::Error> for CmaError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            return Self::Io(err.to_string());
        }
        Self::Csv {
            line: err.position().map(|pos| pos.line()),
            message: err.to_string(),
        }
    }
}
