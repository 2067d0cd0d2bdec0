//! Error handling for GlazeKit
//!
//! Provides error types for the layers that live in the core crate:
//! - Dimension errors (window sizes rejected before drawing)
//! - Project file errors (loading/saving project documents)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::fmt;
use thiserror::Error;

/// The axis a dimension applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Overall width in millimetres
    Width,
    /// Overall height in millimetres
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => write!(f, "width"),
            Self::Height => write!(f, "height"),
        }
    }
}

/// Dimension error type
///
/// Raised when a window record carries a size that cannot be drawn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    /// Zero or negative size
    #[error("{dimension} must be greater than zero, got {value}mm")]
    NonPositive {
        /// The offending axis.
        dimension: Dimension,
        /// The value supplied, in millimetres.
        value: i64,
    },

    /// Size outside the catalog range of the window type
    #[error("{dimension} {value}mm is outside {min}..={max}mm for type '{type_id}'")]
    OutOfRange {
        /// Catalog id of the type the range belongs to.
        type_id: String,
        /// The offending axis.
        dimension: Dimension,
        /// The value supplied, in millimetres.
        value: i64,
        /// Smallest allowed value.
        min: i64,
        /// Largest allowed value.
        max: i64,
    },
}

impl DimensionError {
    /// The axis this error refers to
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::NonPositive { dimension, .. } | Self::OutOfRange { dimension, .. } => *dimension,
        }
    }
}

/// Project file error type
#[derive(Error, Debug)]
pub enum ProjectError {
    /// The file was written by an incompatible version
    #[error("Unsupported project file version: {0}")]
    UnsupportedVersion(String),

    /// Window record belongs to another project
    #[error("Window {window_id} belongs to project {found}, expected {expected}")]
    ForeignWindow {
        /// The window id.
        window_id: u64,
        /// The project id the window carries.
        found: u64,
        /// The project id of the file.
        expected: u64,
    },

    /// Duplicate window id inside one project
    #[error("Duplicate window id {0}")]
    DuplicateWindow(u64),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main error type for GlazeKit core
#[derive(Error, Debug)]
pub enum Error {
    /// Dimension error
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    /// Project file error
    #[error(transparent)]
    Project(#[from] ProjectError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a dimension error
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, Error::Dimension(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
