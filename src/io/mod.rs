//! Delimited-text adapters for labeled series.
//!
//! ## Purpose
//!
//! This module reads a `Series<f64>` from comma-separated text with a header
//! row and writes a smoothed series back in the same two-column shape.
//!
//! ## Key concepts
//!
//! * **Columns**: Input must name `date` and `production`; other columns are ignored.
//! * **Formatting**: Output values are written with a fixed number of decimals.

/// CSV input adapter.
pub mod reader;

/// CSV output adapter.
pub mod writer;

pub use reader::{read_series, read_series_from_path};
pub use writer::{write_series, write_series_to_path};

/// Header of the label column.
pub const LABEL_COLUMN: &str = "date";

/// Header of the value column.
pub const VALUE_COLUMN: &str = "production";
