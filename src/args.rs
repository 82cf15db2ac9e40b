//! Command-line validation for the `fluid` binary.
//!
//! Usage: `fluid <iterations> <input>.fld <output>.fld`

use std::fs::{File, OpenOptions};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Number of user arguments (program name excluded).
pub const ARG_COUNT: usize = 3;

/// Validated program arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgArgs {
    pub iterations: u32,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ProgArgs {
    /// Validate the user arguments, program name excluded.
    ///
    /// Checks run in order: argument count, integer iterations, non-negative
    /// iterations, readable input, writable output. The output file is
    /// created if missing but never truncated here, so it may name the input.
    pub fn parse(args: &[String]) -> Result<Self> {
        if args.len() != ARG_COUNT {
            return Err(Error::ArgCount { found: args.len() });
        }

        let raw = &args[0];
        if !is_integer(raw) {
            return Err(Error::InvalidIterations(raw.clone()));
        }
        let value: i64 = raw
            .parse()
            .map_err(|_| Error::InvalidIterations(raw.clone()))?;
        if value < 0 {
            return Err(Error::NegativeIterations(value));
        }
        let iterations =
            u32::try_from(value).map_err(|_| Error::InvalidIterations(raw.clone()))?;

        let input = PathBuf::from(&args[1]);
        File::open(&input).map_err(|source| Error::InputFile {
            path: input.clone(),
            source,
        })?;

        let output = PathBuf::from(&args[2]);
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&output)
            .map_err(|source| Error::OutputFile {
                path: output.clone(),
                source,
            })?;

        Ok(Self {
            iterations,
            input,
            output,
        })
    }
}

/// True for an optional leading sign followed by one or more ASCII digits.
pub fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
