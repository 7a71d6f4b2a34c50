// Domain error types.
//
// Two failure kinds are part of the pipeline's contract and get their own
// types so callers can match on them. Everything else (model loading,
// library failures) travels as anyhow::Error with context attached.

use std::path::PathBuf;

use thiserror::Error;

/// The review dataset could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open review file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("column '{column}' not found in header (available: {})", .available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },
}

/// Which side of a pairwise comparison was at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::First => write!(f, "first"),
            Side::Second => write!(f, "second"),
        }
    }
}

/// A similarity comparison was requested on input it cannot be defined for.
#[derive(Debug, Error, PartialEq)]
pub enum ComparisonError {
    #[error("{0} text is empty; similarity is undefined for empty input")]
    EmptyInput(Side),

    #[error("{0} text embedded to a zero vector")]
    ZeroVector(Side),

    #[error("embedding dimensions differ ({first} vs {second})")]
    DimensionMismatch { first: usize, second: usize },
}
