#![cfg(feature = "dev")]
//! Tests for window bound computation.
//!
//! These tests verify the centered window placement used for every output
//! position:
//! - Left-edge stretching (start clamped first, end sized from it)
//! - Right-edge shrinking
//! - Degenerate sizes (w = 1, w >= n)
//!
//! ## Test Organization
//!
//! 1. **Interior Windows** - Full-width windows away from the edges
//! 2. **Edge Windows** - Left stretching and right shrinking
//! 3. **Degenerate Sizes** - Single-sample and saturated windows

use cma_rs::internals::primitives::window::Window;

// ============================================================================
// Interior Window Tests
// ============================================================================

/// Test an odd window centered in the interior.
#[test]
fn test_centered_odd_interior() {
    // w = 5, half = 2: position 5 averages [3, 8)
    let win = Window::centered(5, 5, 10);

    assert_eq!(win, Window { start: 3, end: 8 });
    assert_eq!(win.range().len(), 5);
    assert!(win.range().contains(&5), "Index should be within window");
}

/// Test an even window: the extra sample falls to the right.
#[test]
fn test_centered_even_interior() {
    // w = 4, half = 2: position 5 averages [3, 7) = {3, 4, 5, 6}
    let win = Window::centered(5, 4, 10);

    assert_eq!((win.start, win.end), (3, 7));
    assert_eq!(win.range().len(), 4);
}

// ============================================================================
// Edge Window Tests
// ============================================================================

/// Test that left-edge windows keep their full width instead of shrinking.
#[test]
fn test_left_edge_stretches_right() {
    let n = 6;
    let w = 4;

    for idx in 0..=2 {
        let win = Window::centered(idx, w, n);
        assert_eq!(
            (win.start, win.end),
            (0, 4),
            "Position {idx} should reuse the first full window"
        );
    }
}

/// Test that right-edge windows shrink once start + w passes the end.
#[test]
fn test_right_edge_shrinks() {
    let n = 6;
    let w = 4;

    let win = Window::centered(5, w, n);
    assert_eq!((win.start, win.end), (3, 6));
    assert_eq!(win.range().len(), 3);

    let win = Window::centered(4, w, n);
    assert_eq!((win.start, win.end), (2, 6));
    assert_eq!(win.range().len(), 4);
}

/// Test that a symmetric clamp would differ at the left edge.
#[test]
fn test_not_symmetric_at_left_edge() {
    // Symmetric clamping would give [0, 3) for idx 0, w = 5.
    let win = Window::centered(0, 5, 10);
    assert_eq!((win.start, win.end), (0, 5));
}

/// Test that the last window always ends at n.
#[test]
fn test_windows_stay_in_bounds() {
    let n = 13;
    for w in 1..=20 {
        for idx in 0..n {
            let win = Window::centered(idx, w, n);
            assert!(win.start < win.end, "Window must be non-empty");
            assert!(win.end <= n, "Window must stay within bounds");
            assert!(win.range().len() <= w, "Window never exceeds nominal width");
        }
    }
}

// ============================================================================
// Degenerate Size Tests
// ============================================================================

/// Test that a size-one window covers exactly its own position.
#[test]
fn test_window_size_one() {
    let n = 7;
    for idx in 0..n {
        let win = Window::centered(idx, 1, n);
        assert_eq!((win.start, win.end), (idx, idx + 1));
        assert!(!win.range().is_empty());
    }
}

/// Test that windows with `w / 2 >= n - 1` cover the whole series at every position.
#[test]
fn test_window_saturates_series() {
    let n = 4;
    for w in [6, 7, 100] {
        for idx in 0..n {
            let win = Window::centered(idx, w, n);
            assert_eq!(
                (win.start, win.end),
                (0, n),
                "w = {w}, idx = {idx} should span the whole series"
            );
        }
    }
}

/// Test that `w == n` does not saturate: the last window starts past 0.
#[test]
fn test_window_equal_to_length_does_not_saturate() {
    // n = 4, w = 4, half = 2: position 3 starts at 1
    let win = Window::centered(3, 4, 4);
    assert_eq!((win.start, win.end), (1, 4));

    let win = Window::centered(2, 4, 4);
    assert_eq!((win.start, win.end), (0, 4));
}
