//! Windowing primitives for centered moving averages.
//!
//! This module computes the index range averaged for each output position.
//! The window is anchored by clamping its start at the left edge first and
//! then sizing its end from that clamped start, so windows near the left edge
//! keep the full nominal width while windows near the right edge shrink.

// External dependencies
use core::ops::Range;

/// Half-open window bounds `[start, end)` for one output position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    /// First index in the window (inclusive).
    pub start: usize,

    /// One past the last index in the window (exclusive).
    pub end: usize,
}

impl Window {
    /// Compute the window for position `idx` in a series of length `n`.
    ///
    /// ```text
    /// half  = window_size / 2
    /// start = max(0, idx - half)
    /// end   = min(n, start + window_size)
    /// ```
    #[inline]
    pub fn centered(idx: usize, window_size: usize, n: usize) -> Self {
        debug_assert!(window_size >= 1, "centered: window_size must be at least 1");
        debug_assert!(idx < n, "centered: index out of bounds");

        let half = window_size / 2;
        let start = idx.saturating_sub(half);
        let end = n.min(start.saturating_add(window_size));

        Self { start, end }
    }

    /// Index range covered by the window.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
