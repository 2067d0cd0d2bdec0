//! Drawing configuration.
//!
//! All lengths ending in `_mm` are real-world millimetres; all other lengths
//! are output pixels.

use glazekit_core::MeasurementSystem;
use serde::{Deserialize, Serialize};

use crate::error::{DrawingError, DrawingResult};

/// Constants that control scaling, structural thicknesses and margins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingConfig {
    /// Largest drawn width of the window outline
    pub max_draw_width: f64,
    /// Largest drawn height of the window outline
    pub max_draw_height: f64,
    /// Upper bound on the scale so small windows are not blown up
    pub cap_scale: f64,

    /// Outer frame section
    pub frame_mm: f64,
    /// Mullion and transom bar section
    pub mullion_mm: f64,
    /// Sash (inner decorative border) section
    pub border_mm: f64,
    /// Georgian bar section
    pub bar_mm: f64,
    /// Board width on boarded doors
    pub board_mm: f64,

    pub min_frame_px: f64,
    pub min_mullion_px: f64,
    pub min_border_px: f64,
    pub min_bar_px: f64,

    /// Space right of and below the outline for dimension annotations
    pub dimension_margin: f64,
    /// Space below the dimensions for the name label
    pub label_margin: f64,

    /// Transom offset used when a transom record has none
    pub default_transom_mm: f64,
    /// Most Georgian bars allowed in one direction of a pane
    pub max_bars_per_axis: u32,
    /// Units of the dimension annotations
    pub measurement_system: MeasurementSystem,
    /// Reject sizes outside the catalog range of the resolved type
    pub enforce_catalog_ranges: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            max_draw_width: 500.0,
            max_draw_height: 400.0,
            cap_scale: 0.35,
            frame_mm: 45.0,
            mullion_mm: 30.0,
            border_mm: 50.0,
            bar_mm: 25.0,
            board_mm: 100.0,
            min_frame_px: 3.0,
            min_mullion_px: 2.0,
            min_border_px: 3.0,
            min_bar_px: 1.5,
            dimension_margin: 60.0,
            label_margin: 40.0,
            default_transom_mm: 400.0,
            max_bars_per_axis: 12,
            measurement_system: MeasurementSystem::default(),
            enforce_catalog_ranges: true,
        }
    }
}

impl DrawingConfig {
    /// Validate configuration
    pub fn validate(&self) -> DrawingResult<()> {
        let positive = [
            ("max_draw_width", self.max_draw_width),
            ("max_draw_height", self.max_draw_height),
            ("cap_scale", self.cap_scale),
            ("frame_mm", self.frame_mm),
            ("mullion_mm", self.mullion_mm),
            ("border_mm", self.border_mm),
            ("bar_mm", self.bar_mm),
            ("board_mm", self.board_mm),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(key, "must be > 0"));
            }
        }

        let non_negative = [
            ("min_frame_px", self.min_frame_px),
            ("min_mullion_px", self.min_mullion_px),
            ("min_border_px", self.min_border_px),
            ("min_bar_px", self.min_bar_px),
            ("dimension_margin", self.dimension_margin),
            ("label_margin", self.label_margin),
            ("default_transom_mm", self.default_transom_mm),
        ];
        for (key, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(key, "must be >= 0"));
            }
        }

        if self.max_bars_per_axis == 0 {
            return Err(invalid("max_bars_per_axis", "must be > 0"));
        }

        Ok(())
    }
}

fn invalid(key: &str, reason: &str) -> DrawingError {
    DrawingError::InvalidConfig {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
