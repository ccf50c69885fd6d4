//! Error types for cube construction, table management, and solving.

use std::fmt;
use std::io;

/// Errors surfaced by the solver library.
#[derive(Debug)]
pub enum Error {
    /// A scramble token is not one of the eighteen move tokens.
    ParseMove(String),
    /// A coordinate fell outside its axis cardinality while building tables.
    /// This only happens on a programming error or a corrupt move table.
    InvalidCoordinate { axis: &'static str, coord: u32 },
    /// An I/O failure while creating the data directory or persisting tables.
    /// Failures while *loading* tables never surface here; they trigger
    /// regeneration instead.
    Io(io::Error),
    /// A phase exhausted its depth limit without finding a solution.
    Unsolvable { phase: u8, limit: u8 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParseMove(token) => write!(f, "invalid move token: {:?}", token),
            Error::InvalidCoordinate { axis, coord } => {
                write!(f, "{} coordinate {} is out of range", axis, coord)
            }
            Error::Io(err) => write!(f, "table I/O failed: {}", err),
            Error::Unsolvable { phase, limit } => {
                write!(f, "phase {} found no solution within depth {}", phase, limit)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
