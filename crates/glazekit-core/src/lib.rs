//! # GlazeKit Core
//!
//! Core types shared by the GlazeKit crates.
//! Provides the window/door record model, the static type catalog,
//! project files, unit formatting and the error types.

pub mod catalog;
pub mod error;
pub mod project;
pub mod units;
pub mod window;

pub use catalog::{CatalogMatch, TypeCatalog, TypeCatalogEntry, WindowCategory};
pub use error::{Dimension, DimensionError, Error, ProjectError, Result};
pub use project::{Project, ProjectFile, ProjectMetadata};
pub use units::MeasurementSystem;
pub use window::{CasementSide, GlassType, WindowSpec};
