//! Configuration and settings management for GlazeKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Drawing settings (display bounds, section sizes, margins, units)
//! - Output preferences (format, directory, SVG style)

pub use glazekit_core::units::MeasurementSystem;
use glazekit_designer::{DrawingConfig, SvgStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Directory name under the platform config directory
pub const APP_DIR: &str = "glazekit";
/// File name of the default configuration
pub const CONFIG_FILE: &str = "config.toml";

/// Largest number of decimals written to SVG output
const MAX_SVG_PRECISION: usize = 6;

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    /// Scene graph as JSON
    Json,
}

impl OutputFormat {
    /// File extension for the format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Output preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Default output format
    pub format: OutputFormat,
    /// Default output directory
    pub output_directory: PathBuf,
    /// Colours and precision of SVG output
    pub svg: SvgStyle,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            output_directory: PathBuf::from("."),
            svg: SvgStyle::default(),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Drawing engine settings
    pub drawing: DrawingConfig,
    /// Output preferences
    pub output: OutputSettings,
}

/// File formats a config can be stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(FileFormat::Json),
            Some("toml") => Ok(FileFormat::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )
            .into()),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if content.trim().is_empty() {
            return Err(ConfigError::Corrupted(format!("{} is empty", path.display())).into());
        }

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match FileFormat::from_path(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Load `path` when given, else the default config file when it exists,
    /// else defaults
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.drawing.validate()?;

        let svg = &self.output.svg;
        if svg.precision > MAX_SVG_PRECISION {
            return Err(SettingsError::InvalidSetting {
                key: "output.svg.precision".to_string(),
                reason: format!("must be at most {}", MAX_SVG_PRECISION),
            });
        }

        let positive = [
            ("output.svg.stroke_width", svg.stroke_width),
            ("output.svg.font_size", svg.font_size),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}

/// `<platform config dir>/glazekit/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Create the platform config directory for GlazeKit
pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
    let dir = dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no config directory on this platform".to_string())
        })?;
    std::fs::create_dir_all(&dir)
        .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e)))?;
    Ok(dir)
}
