//! GlazeKit Settings Crate
//!
//! Handles application configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{default_config_path, ensure_config_dir, Config, OutputFormat, OutputSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
