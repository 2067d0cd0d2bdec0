//! Error types for the designer crate.

use glazekit_core::DimensionError;
use thiserror::Error;

/// Errors that can occur while drawing a window record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrawingError {
    /// The record's size cannot be drawn.
    #[error("Invalid dimension: {0}")]
    InvalidDimension(#[from] DimensionError),

    /// The catalog entry has no drawing layout.
    #[error("No drawing layout for catalog type '{0}'")]
    UnsupportedType(String),

    /// More Georgian bars than a pane can show.
    #[error("{count} {axis} Georgian bars exceeds the limit of {max}")]
    TooManyBars {
        axis: &'static str,
        count: u32,
        max: u32,
    },

    /// A drawing setting is invalid.
    #[error("Invalid drawing setting '{key}': {reason}")]
    InvalidConfig { key: String, reason: String },
}

/// Result type alias for drawing operations.
pub type DrawingResult<T> = Result<T, DrawingError>;
