//! Labeled, ordered series of numeric samples.
//!
//! ## Purpose
//!
//! This module defines `Sample` and `Series`, the data shape that flows
//! through the smoother: each sample pairs an opaque label (typically a date
//! string) with a numeric value.
//!
//! ## Design notes
//!
//! * **Opaque labels**: Labels are never parsed or validated; they are carried verbatim.
//! * **Ordering**: Insertion order defines temporal adjacency.
//! * **Ownership**: A `Series` is consumed by the smoother, which moves labels into its output.
//!
//! ## Invariants
//!
//! * Sample order never changes once pushed.
//!
//! ## Non-goals
//!
//! * This module does not sort, deduplicate, or gap-fill samples.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::IntoIter, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::IntoIter, vec::Vec};

// External dependencies
use core::slice::Iter;

// ============================================================================
// Sample
// ============================================================================

/// A single labeled observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<T = f64> {
    /// Opaque ordering key, preserved verbatim.
    pub label: String,

    /// Observed (or smoothed) value.
    pub value: T,
}

impl<T> Sample<T> {
    /// Create a new sample.
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

// ============================================================================
// Series
// ============================================================================

/// An ordered sequence of labeled samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T = f64> {
    samples: Vec<Sample<T>>,
}

impl<T> Default for Series<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Series<T> {
    /// Create an empty series.
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Create an empty series with room for `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Append a sample at the end of the series.
    pub fn push(&mut self, label: impl Into<String>, value: T) {
        self.samples.push(Sample::new(label, value));
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the series has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Borrow the samples in order.
    pub fn samples(&self) -> &[Sample<T>] {
        &self.samples
    }

    /// Iterate over the samples in order.
    pub fn iter(&self) -> Iter<'_, Sample<T>> {
        self.samples.iter()
    }

    /// Iterate over the labels in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.samples.iter().map(|s| s.label.as_str())
    }

    /// Take ownership of the underlying samples.
    pub fn into_samples(self) -> Vec<Sample<T>> {
        self.samples
    }
}

impl<T: Copy> Series<T> {
    /// Copy the values out in order.
    pub fn values(&self) -> Vec<T> {
        self.samples.iter().map(|s| s.value).collect()
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl<T> From<Vec<Sample<T>>> for Series<T> {
    fn from(samples: Vec<Sample<T>>) -> Self {
        Self { samples }
    }
}

impl<T> FromIterator<Sample<T>> for Series<T> {
    fn from_iter<I: IntoIterator<Item = Sample<T>>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<L: Into<String>, T> FromIterator<(L, T)> for Series<T> {
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(label, value)| Sample::new(label, value))
            .collect()
    }
}

impl<T> IntoIterator for Series<T> {
    type Item = Sample<T>;
    type IntoIter = IntoIter<Sample<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Series<T> {
    type Item = &'a Sample<T>;
    type IntoIter = Iter<'a, Sample<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
