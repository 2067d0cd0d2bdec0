//! # GlazeKit
//!
//! Schematic drawings for joinery window and door schedules:
//! - Static catalog of window and door types with allowed sizes
//! - Scaled drawings with frames, mullions, transoms, Georgian bars and
//!   hinge indicators
//! - SVG or scene graph JSON output
//!
//! ## Architecture
//!
//! GlazeKit is organized as a workspace with multiple crates:
//!
//! 1. **glazekit-core** - Window records, type catalog, project files, units
//! 2. **glazekit-designer** - Drawing engine, scene graph, SVG serializer
//! 3. **glazekit-settings** - Configuration files
//! 4. **glazekit** - Command line binary that integrates all crates

pub mod commands;

pub use glazekit_core as model;
pub use glazekit_designer as designer;
pub use glazekit_settings as settings;

pub use glazekit_core::{
    Error, GlassType, MeasurementSystem, ProjectFile, Result, TypeCatalog, TypeCatalogEntry,
    WindowCategory, WindowSpec,
};
pub use glazekit_designer::{render, to_svg, Drawing, DrawingConfig, DrawingEngine, SvgStyle};
pub use glazekit_settings::{Config, OutputFormat};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, leaving stdout to command output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
