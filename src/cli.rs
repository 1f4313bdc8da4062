//! Command-line front end for the `cma` binary.
//!
//! ## Purpose
//!
//! This module parses command-line arguments, resolves file paths, and runs
//! the read, smooth, write sequence over a CSV dataset.
//!
//! ## Design notes
//!
//! * **Testable**: Parsing takes any iterator of arguments, not `std::env::args` directly.
//! * **Path resolution**: A relative output path lands next to the input file.
//! * **Fail-Fast**: The smoother is built (and the window validated) before any file is opened.
//!
//! ## Non-goals
//!
//! * This module does not support more than one value column.

// External dependencies
use core::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use log::info;

// Internal dependencies
use crate::api::MovingAverageBuilder;
use crate::io::{read_series_from_path, write_series_to_path};
use crate::math::rounding::RoundingMode;
use crate::primitives::errors::CmaError;

/// Input dataset used when `--input` is not given.
pub const DEFAULT_INPUT: &str = "beer_production.csv";

/// Usage text printed for `--help` and on argument errors.
pub const USAGE: &str = "\
Generate a centered moving average dataset from monthly production data

Usage: cma -w <WINDOW> -o <OUTPUT> [-i <INPUT>] [-p <PRECISION>] [-r <ROUNDING>]

Options:
  -w, --window <WINDOW>        Window size in months (e.g., 6 for a 6-month average)
  -o, --output <OUTPUT>        Output CSV file name (e.g., beer_production_6mo_avg.csv)
  -i, --input <INPUT>          Input CSV file [default: beer_production.csv]
  -p, --precision <PRECISION>  Decimal digits kept in the output [default: 1]
  -r, --rounding <ROUNDING>    Tie-breaking rule: away or even [default: away]
  -h, --help                   Print help";

// ============================================================================
// Arguments
// ============================================================================

/// Parsed command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Window size in samples.
    pub window: usize,

    /// Output file as given on the command line.
    pub output: PathBuf,

    /// Input CSV file.
    pub input: PathBuf,

    /// Decimal digits kept in the output.
    pub precision: u32,

    /// Tie-breaking rule for rounding.
    pub rounding: RoundingMode,
}

/// What the binary should do after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Smooth a dataset.
    Run(CliArgs),

    /// Print usage and exit.
    Help,
}

impl CliArgs {
    /// Parse arguments, excluding the program name.
    ///
    /// Accepts `--flag value` and `--flag=value`.
    pub fn parse_from<I, S>(args: I) -> Result<Command, CmaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut window = None;
        let mut output = None;
        let mut input = None;
        let mut precision = None;
        let mut rounding = None;

        let mut args = args.into_iter().map(Into::<String>::into);
        while let Some(arg) = args.next() {
            let (flag, inline) = split_inline_value(arg);

            let name = match flag.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "-w" | "--window" => "--window",
                "-o" | "--output" => "--output",
                "-i" | "--input" => "--input",
                "-p" | "--precision" => "--precision",
                "-r" | "--rounding" => "--rounding",
                _ => return Err(CmaError::UnknownArgument(flag)),
            };

            let value = match inline.or_else(|| args.next()) {
                Some(value) if !value.is_empty() => value,
                _ => {
                    return Err(CmaError::InvalidArgument {
                        name,
                        value: String::new(),
                    })
                }
            };

            match name {
                "--window" => window = Some(parse_number(name, &value)?),
                "--output" => output = Some(PathBuf::from(value)),
                "--input" => input = Some(PathBuf::from(value)),
                "--rounding" => rounding = Some(parse_rounding(name, &value)?),
                _ => precision = Some(parse_number(name, &value)?),
            }
        }

        Ok(Command::Run(CliArgs {
            window: window.ok_or(CmaError::MissingArgument("--window"))?,
            output: output.ok_or(CmaError::MissingArgument("--output"))?,
            input: input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            precision: precision.unwrap_or(1),
            rounding: rounding.unwrap_or_default(),
        }))
    }

    /// Output path resolved against the input file's directory.
    pub fn output_path(&self) -> PathBuf {
        resolve_output(&self.input, &self.output)
    }
}

fn split_inline_value(arg: String) -> (String, Option<String>) {
    if arg.starts_with("--") {
        if let Some((flag, value)) = arg.split_once('=') {
            return (flag.to_string(), Some(value.to_string()));
        }
    }
    (arg, None)
}

fn parse_number<N: core::str::FromStr>(name: &'static str, value: &str) -> Result<N, CmaError> {
    value.parse().map_err(|_| CmaError::InvalidArgument {
        name,
        value: value.to_string(),
    })
}

fn parse_rounding(name: &'static str, value: &str) -> Result<RoundingMode, CmaError> {
    match value {
        "away" | "half-away" => Ok(RoundingMode::HalfAwayFromZero),
        "even" | "half-even" => Ok(RoundingMode::HalfEven),
        _ => Err(CmaError::InvalidArgument {
            name,
            value: value.to_string(),
        }),
    }
}

/// Resolve a relative `output` against the directory that holds `input`.
pub fn resolve_output(input: &Path, output: &Path) -> PathBuf {
    if output.is_absolute() {
        return output.to_path_buf();
    }
    match input.parent() {
        Some(dir) => dir.join(output),
        None => output.to_path_buf(),
    }
}

// ============================================================================
// Run
// ============================================================================

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Input file that was read.
    pub input: PathBuf,

    /// Output file that was written.
    pub output: PathBuf,

    /// Number of samples read.
    pub input_points: usize,

    /// Number of samples written.
    pub output_points: usize,

    /// Window size used.
    pub window: usize,
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Done! Generated moving average dataset.")?;
        writeln!(f, "   Input:  {} points", self.input_points)?;
        writeln!(f, "   Output: {} points", self.output_points)?;
        write!(f, "   Window: {} months", self.window)
    }
}

/// Read the input dataset, smooth it, and write the output dataset.
pub fn run(args: &CliArgs) -> Result<RunSummary, CmaError> {
    let smoother = MovingAverageBuilder::new()
        .window(args.window)
        .precision(args.precision)
        .rounding(args.rounding)
        .build()?;
    let output = args.output_path();

    info!("Reading input file: {}", args.input.display());
    let series = read_series_from_path(&args.input)?;
    let input_points = series.len();
    info!("Loaded {} data points", input_points);

    info!("Computing {}-month moving average...", args.window);
    let result = smoother.fit(series)?;

    info!("Writing output file: {}", output.display());
    write_series_to_path(&output, &result.series, result.precision)?;

    Ok(RunSummary {
        input: args.input.clone(),
        output,
        input_points,
        output_points: result.len(),
        window: args.window,
    })
}
