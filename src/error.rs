use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised around the simulation core: argument validation and
/// particle file I/O.
///
/// The core itself is infallible. Each variant maps to the process exit
/// status reported by the `fluid` binary.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong number of command-line arguments.
    #[error("incorrect number of arguments: expected 3, got {found}")]
    ArgCount { found: usize },

    /// The iteration count is not an integer.
    #[error("first argument ('{0}') must be an integer")]
    InvalidIterations(String),

    #[error("number of iterations ({0}) cannot be negative")]
    NegativeIterations(i64),

    #[error("cannot open {} for reading: {source}", .path.display())]
    InputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open {} for writing: {source}", .path.display())]
    OutputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header declares a non-positive particle count.
    #[error("invalid number of particles: {0}")]
    InvalidParticleCount(i32),

    #[error("number of particles mismatch: header {header}, found {found}")]
    ParticleCountMismatch { header: i32, found: usize },

    /// Propagated I/O errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ArgCount { .. } | Error::InvalidIterations(_) => -1,
            Error::NegativeIterations(_) => -2,
            Error::InputFile { .. } | Error::Io(_) => -3,
            Error::OutputFile { .. } => -4,
            Error::InvalidParticleCount(_) | Error::ParticleCountMismatch { .. } => -5,
        }
    }
}
