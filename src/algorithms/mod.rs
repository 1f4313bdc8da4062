//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the averaging step applied to each window. It builds
//! on Layer 1 (Primitives) and is orchestrated by Layer 4 (Engine).
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unweighted window mean.
pub mod average;
