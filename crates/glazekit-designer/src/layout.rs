//! Scale and pane layout arithmetic shared by every drawing branch.

use serde::Serialize;

use crate::config::DrawingConfig;

/// Uniform scale from millimetres to pixels.
///
/// `min(max_draw_width / width, max_draw_height / height, cap_scale)`
pub fn compute_scale(width_mm: f64, height_mm: f64, config: &DrawingConfig) -> f64 {
    (config.max_draw_width / width_mm)
        .min(config.max_draw_height / height_mm)
        .min(config.cap_scale)
}

/// Structural section sizes in pixels for one drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub scale: f64,
    pub frame: f64,
    pub mullion: f64,
    pub border: f64,
    pub bar: f64,
}

impl Metrics {
    /// Scale the configured millimetre sections, flooring each at its pixel minimum
    pub fn new(scale: f64, config: &DrawingConfig) -> Self {
        Self {
            scale,
            frame: (config.frame_mm * scale).max(config.min_frame_px),
            mullion: (config.mullion_mm * scale).max(config.min_mullion_px),
            border: (config.border_mm * scale).max(config.min_border_px),
            bar: (config.bar_mm * scale).max(config.min_bar_px),
        }
    }

    /// Convert millimetres to pixels
    pub fn px(&self, mm: f64) -> f64 {
        mm * self.scale
    }
}

/// One pane's position along an axis, relative to the start of the span
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaneSpan {
    pub offset: f64,
    pub size: f64,
}

impl PaneSpan {
    pub fn end(&self) -> f64 {
        self.offset + self.size
    }
}

/// Split `inner` into `pane_count` equal panes separated by `pane_count - 1`
/// dividers of `mullion` thickness.
///
/// Each pane is `(inner - (n - 1) * mullion) / n` long; the dividers sit in
/// the gaps between consecutive spans. Pane size never goes below zero.
pub fn compute_pane_layout(pane_count: usize, inner: f64, mullion: f64) -> Vec<PaneSpan> {
    if pane_count == 0 {
        return Vec::new();
    }

    let n = pane_count as f64;
    let size = ((inner - (n - 1.0) * mullion) / n).max(0.0);
    (0..pane_count)
        .map(|i| PaneSpan {
            offset: i as f64 * (size + mullion),
            size,
        })
        .collect()
}

/// Positions of `count` evenly spaced lines inside a span of `length`:
/// `length / (count + 1) * i` for `i` in `1..=count`.
pub fn even_divisions(count: u32, length: f64) -> Vec<f64> {
    let step = length / (count as f64 + 1.0);
    (1..=count).map(|i| step * i as f64).collect()
}
