//! Error types for the schelling-graph crate

use thiserror::Error;

use crate::color::Color;

/// Main error type for the schelling-graph crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("two nodes cannot occupy the same position ({x},{y})")]
    DuplicatePosition { x: usize, y: usize },

    #[error(
        "out-edge node at ({x},{y}) is {found}, but the arrow is {arrow} (all out-edge nodes must match the arrow color)"
    )]
    ArrowColorMismatch {
        arrow: Color,
        found: Color,
        x: usize,
        y: usize,
    },

    #[error("unrecognized color '{input}'. Expected one of: {expected}")]
    UnknownColor { input: String, expected: String },

    #[error("no node at position ({x},{y})")]
    MissingNode { x: usize, y: usize },

    #[error("chip initialization expects {expected} values (one per node), got {got}")]
    InitLengthMismatch { expected: usize, got: usize },

    #[error("probability weights must sum to 1.0 within {tolerance}, got {sum}")]
    ProbabilitySum { sum: f64, tolerance: f64 },

    #[error("invalid chip range: min {min} exceeds max {max}")]
    InvalidChipRange { min: u32, max: u32 },

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
