//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numerical helpers with no algorithm-specific
//! logic. Currently this is decimal rounding for presentation precision.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Decimal rounding with configurable tie-breaking.
pub mod rounding;
