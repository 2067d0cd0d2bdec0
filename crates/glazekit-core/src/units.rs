//! Unit formatting utilities
//!
//! Window sizes are stored in whole millimetres. Drawing annotations can be
//! shown in millimetres or in decimal inches.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

/// Writes the unit label, `mm` or `in`
impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(unit_label(*self))
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" | "mm" | "millimetres" | "millimeters" => Ok(Self::Metric),
            "imperial" | "in" | "inch" | "inches" => Ok(Self::Imperial),
            other => Err(format!("unknown measurement system '{}'", other)),
        }
    }
}

/// Get the unit label for the given system ("mm" or "in")
pub fn unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}

/// Format a length for a dimension annotation.
///
/// * `value_mm` - Value in millimetres
/// * `system` - Target measurement system
pub fn format_length(value_mm: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.0} {}", value_mm, unit_label(system)),
        MeasurementSystem::Imperial => {
            format!("{:.2} {}", value_mm / MM_PER_INCH, unit_label(system))
        }
    }
}
