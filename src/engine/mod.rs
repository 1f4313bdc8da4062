//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the smoothing pass by coordinating primitives
//! (series, windows), math (rounding) and algorithms (window mean). It also
//! owns configuration validation and the result type.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for moving-average passes.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for moving-average operations.
pub mod output;
