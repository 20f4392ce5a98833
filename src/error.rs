//! Error types for the gridrl crate

use thiserror::Error;

/// Main error type for the gridrl crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid grid dimensions {rows}x{cols} (both must be at least 1)")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("{name} position ({row}, {col}) is out of bounds for a {rows}x{cols} grid")]
    OutOfBounds {
        name: &'static str,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("goal position ({row}, {col}) overlaps a pit")]
    GoalPitOverlap { row: usize, col: usize },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
