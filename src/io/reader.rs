//! CSV input adapter.
//!
//! Rows are deserialized with `serde`; fields are trimmed before parsing so
//! `" 93.2"` reads as `93.2`. A non-numeric value or a missing column fails
//! with the line number of the offending record.

// External dependencies
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;
use serde::Deserialize;

// Internal dependencies
use crate::primitives::errors::CmaError;
use crate::primitives::series::Series;

/// One input row; columns other than these two are ignored.
#[derive(Debug, Deserialize)]
struct InputRecord {
    date: String,
    production: f64,
}

/// Read a series from CSV text with a `date,production` header.
pub fn read_series<R: Read>(reader: R) -> Result<Series<f64>, CmaError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut series = Series::new();
    for record in rdr.deserialize::<InputRecord>() {
        let record = record?;
        series.push(record.date, record.production);
    }

    Ok(series)
}

/// Read a series from a CSV file.
pub fn read_series_from_path<P: AsRef<Path>>(path: P) -> Result<Series<f64>, CmaError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|err| CmaError::Io(format!("{}: {}", path.display(), err)))?;

    let series = read_series(file)?;
    info!("read {} rows from {}", series.len(), path.display());
    Ok(series)
}
