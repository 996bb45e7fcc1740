//! Error types for reading grids and coordinates

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong before a search starts. The search itself cannot fail: an
/// unreachable goal is reported through [SearchOutcome::NoPath](crate::SearchOutcome::NoPath).
#[derive(Error, Debug)]
pub enum GridError {
    #[error("could not open grid file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),

    #[error("invalid token '{token}' on line {line}")]
    Token { line: usize, token: String },

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("expected two integers for a coordinate, got '{0}'")]
    Coordinate(String),
}

pub type Result<T> = std::result::Result<T, GridError>;
