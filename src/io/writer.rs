//! CSV output adapter.

// External dependencies
use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;
use serde::Serialize;

// Internal dependencies
use crate::primitives::errors::CmaError;
use crate::primitives::series::Series;

/// One output row; the value is pre-formatted to the requested precision.
#[derive(Debug, Serialize)]
struct OutputRecord<'a> {
    date: &'a str,
    production: String,
}

/// Write a series as `date,production` CSV, rendering values with `precision` decimals.
///
/// Records end with `\r\n`.
pub fn write_series<W: Write>(
    writer: W,
    series: &Series<f64>,
    precision: u32,
) -> Result<(), CmaError> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);
    let precision = precision as usize;

    // An empty series still gets its header row.
    if series.is_empty() {
        wtr.write_record([super::LABEL_COLUMN, super::VALUE_COLUMN])?;
    }

    for sample in series {
        wtr.serialize(OutputRecord {
            date: &sample.label,
            production: format!("{:.precision$}", sample.value),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write a series to a CSV file, creating or truncating it.
pub fn write_series_to_path<P: AsRef<Path>>(
    path: P,
    series: &Series<f64>,
    precision: u32,
) -> Result<(), CmaError> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|err| CmaError::Io(format!("{}: {}", path.display(), err)))?;

    write_series(file, series, precision)?;
    info!("wrote {} rows to {}", series.len(), path.display());
    Ok(())
}
