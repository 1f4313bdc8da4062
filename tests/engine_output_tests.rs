#![cfg(feature = "dev")]
//! Tests for `SmoothResult` accessors and formatting.

use cma_rs::internals::engine::output::SmoothResult;
use cma_rs::internals::primitives::series::Series;

fn result_of(n: usize) -> SmoothResult<f64> {
    let series: Series = (0..n).map(|i| (format!("m{i:02}"), i as f64 + 0.5)).collect();
    SmoothResult {
        series,
        window_size: 3,
        precision: 1,
    }
}

#[test]
fn test_accessors() {
    let result = result_of(3);

    assert_eq!(result.len(), 3);
    assert!(!result.is_empty());
    assert_eq!(result.values(), vec![0.5, 1.5, 2.5]);
    assert_eq!(result.labels().collect::<Vec<_>>(), vec!["m00", "m01", "m02"]);
    assert_eq!(result.into_series().len(), 3);
}

#[test]
fn test_display_small_result() {
    let text = result_of(2).to_string();

    let expected = "\
Summary:
  Data points: 2
  Window:      3
  Precision:   1

Smoothed Data:
Label        Value
------------------
  m00          0.5
  m01          1.5
";
    assert_eq!(text, expected);
}

#[test]
fn test_display_elides_long_results() {
    let text = result_of(30).to_string();

    assert!(text.contains("  Data points: 30"));
    assert!(text.contains("m09"));
    assert!(text.contains("m20"));
    assert!(!text.contains("m10"), "middle rows should be elided");
    assert!(!text.contains("m19"), "middle rows should be elided");
    assert_eq!(text.matches("...").count(), 1);
}

#[test]
fn test_display_uses_precision() {
    let mut result = result_of(1);
    result.precision = 3;

    assert!(result.to_string().contains("0.500"));
}

#[test]
fn test_display_aligns_non_ascii_labels() {
    let series: Series = [("Février", 1.0), ("Mai-56", 2.0)].into_iter().collect();
    let result = SmoothResult {
        series,
        window_size: 2,
        precision: 1,
    };
    let text = result.to_string();

    // Label column is 7 characters wide ("Février" is 8 bytes).
    let table: Vec<&str> = text
        .lines()
        .skip_while(|line| *line != "Smoothed Data:")
        .skip(1)
        .collect();
    assert_eq!(table.len(), 4);
    for line in &table {
        assert_eq!(line.chars().count(), 7 + 1 + 12, "misaligned: {line:?}");
    }
    assert_eq!(table[2], "Février          1.0");
}
