//! Drawing engine.
//!
//! Turns a [`WindowSpec`] into a [`SceneGraph`]. Every render runs the same
//! pipeline: resolve the type, validate the size, normalize the record, pick
//! a scale, then dispatch on the normalized layout.

mod annotations;
mod casement;
mod door;
mod panes;

use std::sync::OnceLock;

use glazekit_core::catalog::check_positive;
use glazekit_core::{TypeCatalog, WindowSpec};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::DrawingConfig;
use crate::error::DrawingResult;
use crate::layout::{compute_scale, Metrics};
use crate::normalize::{NormalizedWindow, WindowLayout};
use crate::scene::{Rect, Role, SceneGraph};

pub use casement::transom_bands;
pub use panes::hinged_panes;

use panes::PaneStyle;

/// Output of one render
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Drawing {
    /// Catalog id the drawing was made as
    pub type_id: String,
    /// Type id the record asked for
    pub requested_type: String,
    /// True when `requested_type` was unknown
    pub used_fallback: bool,
    pub metrics: Metrics,
    /// Outer edge of the frame
    pub outline: Rect,
    /// Inner edge of the frame
    pub interior: Rect,
    pub window: NormalizedWindow,
    pub scene: SceneGraph,
}

/// Renders window records against a type catalog
#[derive(Debug, Clone)]
pub struct DrawingEngine {
    config: DrawingConfig,
    catalog: TypeCatalog,
}

impl Default for DrawingEngine {
    fn default() -> Self {
        Self {
            config: DrawingConfig::default(),
            catalog: TypeCatalog::global().clone(),
        }
    }
}

impl DrawingEngine {
    /// Engine with the standard catalog
    pub fn new(config: DrawingConfig) -> DrawingResult<Self> {
        Self::with_catalog(config, TypeCatalog::global().clone())
    }

    pub fn with_catalog(config: DrawingConfig, catalog: TypeCatalog) -> DrawingResult<Self> {
        config.validate()?;
        Ok(Self { config, catalog })
    }

    pub fn config(&self) -> &DrawingConfig {
        &self.config
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    /// Draw one record. Identical input yields identical output.
    pub fn render(&self, spec: &WindowSpec) -> DrawingResult<Drawing> {
        let matched = self.catalog.resolve(&spec.window_type);
        if matched.used_fallback {
            warn!(
                "Unknown window type '{}', drawing as '{}'",
                spec.window_type, matched.entry.id
            );
        }

        check_positive(spec.width, spec.height)?;
        if !matched.used_fallback && self.config.enforce_catalog_ranges {
            matched.entry.check_dimensions(spec.width, spec.height)?;
        }

        let window = NormalizedWindow::from_spec(spec, matched.entry, &self.config)?;
        let scale = compute_scale(window.width_mm, window.height_mm, &self.config);
        let metrics = Metrics::new(scale, &self.config);

        let width = metrics.px(window.width_mm);
        let height = metrics.px(window.height_mm);
        let mut scene = SceneGraph::new(
            width + self.config.dimension_margin,
            height + self.config.dimension_margin + self.config.label_margin,
        );

        let outline = Rect::new(0.0, 0.0, width, height);
        let interior = outline.inset(metrics.frame);
        scene.rect(Role::Frame, outline);
        scene.rect(Role::FrameOpening, interior);

        let style = PaneStyle {
            glass: window.glass,
            bars: window.bars,
            border: metrics.border,
            bar: metrics.bar,
        };

        match window.layout {
            WindowLayout::Casement { panes, opening } => {
                casement::draw_casement(&mut scene, interior, panes, opening, &metrics, &style);
            }
            WindowLayout::Transom {
                panes,
                transom_mm,
                opening,
                top_opening,
            } => {
                casement::draw_transom(
                    &mut scene,
                    interior,
                    panes,
                    transom_mm,
                    (top_opening, opening),
                    &metrics,
                    &style,
                );
            }
            WindowLayout::Sliding { opening } => {
                casement::draw_sliding(&mut scene, interior, opening, &metrics, &style);
            }
            WindowLayout::Door { style: door_style } => {
                door::draw_door(
                    &mut scene,
                    interior,
                    door_style,
                    metrics.px(self.config.board_mm),
                    &metrics,
                    &style,
                );
            }
        }

        annotations::draw_annotations(&mut scene, &window, width, height, &self.config);

        debug!(
            "Rendered '{}' as {} at scale {:.4}: {} elements",
            spec.name,
            matched.entry.id,
            scale,
            scene.len()
        );

        Ok(Drawing {
            type_id: matched.entry.id.clone(),
            requested_type: spec.window_type.clone(),
            used_fallback: matched.used_fallback,
            metrics,
            outline,
            interior,
            window,
            scene,
        })
    }
}

/// Draw with the default configuration and standard catalog
pub fn render(spec: &WindowSpec) -> DrawingResult<Drawing> {
    static ENGINE: OnceLock<DrawingEngine> = OnceLock::new();
    ENGINE.get_or_init(DrawingEngine::default).render(spec)
}
