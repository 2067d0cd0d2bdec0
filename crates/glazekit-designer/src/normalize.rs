//! Record normalization.
//!
//! Every optional field of a `WindowSpec` is resolved here, once, before any
//! drawing branch runs. The result carries only the fields its layout uses.

use glazekit_core::{CasementSide, GlassType, TypeCatalogEntry, WindowSpec};
use serde::Serialize;

use crate::config::DrawingConfig;
use crate::error::{DrawingError, DrawingResult};

/// One variant per catalog type id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowKind {
    Single,
    Double,
    Triple,
    Quad,
    SingleTransom,
    DoubleTransom,
    TripleTransom,
    QuadTransom,
    Sliding,
    DoorBoarded,
    DoorGlazed,
    DoorHalfGlazed,
    DoorSixPanel,
}

impl WindowKind {
    pub const ALL: [WindowKind; 13] = [
        WindowKind::Single,
        WindowKind::Double,
        WindowKind::Triple,
        WindowKind::Quad,
        WindowKind::SingleTransom,
        WindowKind::DoubleTransom,
        WindowKind::TripleTransom,
        WindowKind::QuadTransom,
        WindowKind::Sliding,
        WindowKind::DoorBoarded,
        WindowKind::DoorGlazed,
        WindowKind::DoorHalfGlazed,
        WindowKind::DoorSixPanel,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            WindowKind::Single => "single",
            WindowKind::Double => "double",
            WindowKind::Triple => "triple",
            WindowKind::Quad => "quad",
            WindowKind::SingleTransom => "single-transom",
            WindowKind::DoubleTransom => "double-transom",
            WindowKind::TripleTransom => "triple-transom",
            WindowKind::QuadTransom => "quad-transom",
            WindowKind::Sliding => "sliding",
            WindowKind::DoorBoarded => "door-boarded",
            WindowKind::DoorGlazed => "door-glazed",
            WindowKind::DoorHalfGlazed => "door-half-glazed",
            WindowKind::DoorSixPanel => "door-six-panel",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }

    /// Panes side by side, for casement and transom kinds
    pub fn pane_count(&self) -> Option<usize> {
        match self {
            WindowKind::Single | WindowKind::SingleTransom => Some(1),
            WindowKind::Double | WindowKind::DoubleTransom | WindowKind::Sliding => Some(2),
            WindowKind::Triple | WindowKind::TripleTransom => Some(3),
            WindowKind::Quad | WindowKind::QuadTransom => Some(4),
            _ => None,
        }
    }

    pub fn has_transom(&self) -> bool {
        matches!(
            self,
            WindowKind::SingleTransom
                | WindowKind::DoubleTransom
                | WindowKind::TripleTransom
                | WindowKind::QuadTransom
        )
    }
}

/// Panel layout of a door leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoorStyle {
    Boarded,
    FullyGlazed,
    HalfGlazed,
    SixPanel,
}

/// Georgian bar counts per pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BarGrid {
    pub horizontal: u32,
    pub vertical: u32,
}

/// Tagged layout, one variant per drawing branch
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "kebab-case")]
pub enum WindowLayout {
    /// N equal panes side by side
    Casement { panes: usize, opening: CasementSide },
    /// N panes below and N panes above a transom bar
    Transom {
        panes: usize,
        /// Already clamped to `[0, height]`
        transom_mm: f64,
        opening: CasementSide,
        top_opening: CasementSide,
    },
    /// Two sliding sashes
    Sliding { opening: CasementSide },
    Door { style: DoorStyle },
}

/// Fully populated record ready for drawing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedWindow {
    pub name: String,
    pub kind: WindowKind,
    pub type_name: String,
    pub width_mm: f64,
    pub height_mm: f64,
    pub glass: GlassType,
    /// `None` when the record has no Georgian bars
    pub bars: Option<BarGrid>,
    pub layout: WindowLayout,
}

impl NormalizedWindow {
    /// Apply every default to `spec`, drawing it as the catalog `entry`
    pub fn from_spec(
        spec: &WindowSpec,
        entry: &TypeCatalogEntry,
        config: &DrawingConfig,
    ) -> DrawingResult<Self> {
        let kind = WindowKind::from_id(&entry.id)
            .ok_or_else(|| DrawingError::UnsupportedType(entry.id.clone()))?;

        let height_mm = spec.height as f64;
        let opening = parse_side(spec.openable_casements.as_deref(), CasementSide::Left);

        let layout = match kind {
            WindowKind::Sliding => WindowLayout::Sliding { opening },
            WindowKind::DoorBoarded => WindowLayout::Door { style: DoorStyle::Boarded },
            WindowKind::DoorGlazed => WindowLayout::Door { style: DoorStyle::FullyGlazed },
            WindowKind::DoorHalfGlazed => WindowLayout::Door { style: DoorStyle::HalfGlazed },
            WindowKind::DoorSixPanel => WindowLayout::Door { style: DoorStyle::SixPanel },
            _ => {
                let panes = kind.pane_count().unwrap_or(1);
                if kind.has_transom() || spec.has_transom {
                    let transom_mm = spec
                        .transom_height
                        .map(|t| t as f64)
                        .unwrap_or(config.default_transom_mm)
                        .clamp(0.0, height_mm);
                    WindowLayout::Transom {
                        panes,
                        transom_mm,
                        opening,
                        top_opening: parse_side(
                            spec.top_casements_openable.as_deref(),
                            CasementSide::None,
                        ),
                    }
                } else {
                    WindowLayout::Casement { panes, opening }
                }
            }
        };

        let bars = if spec.has_georgian_bars {
            let grid = BarGrid {
                horizontal: spec.georgian_bars_horizontal.unwrap_or(1),
                vertical: spec.georgian_bars_vertical.unwrap_or(1),
            };
            let max = config.max_bars_per_axis;
            for (axis, count) in [("horizontal", grid.horizontal), ("vertical", grid.vertical)] {
                if count > max {
                    return Err(DrawingError::TooManyBars { axis, count, max });
                }
            }
            Some(grid)
        } else {
            None
        };

        Ok(Self {
            name: spec.name.clone(),
            kind,
            type_name: entry.name.clone(),
            width_mm: spec.width as f64,
            height_mm,
            glass: spec.glass_type,
            bars,
            layout,
        })
    }

    /// Text shown beneath the drawing
    pub fn label(&self) -> String {
        if self.name.trim().is_empty() {
            self.type_name.clone()
        } else {
            format!("{} ({})", self.name, self.type_name)
        }
    }
}

/// Missing sides take `default`; unrecognized sides draw no indicator.
fn parse_side(raw: Option<&str>, default: CasementSide) -> CasementSide {
    match raw {
        None => default,
        Some(s) => CasementSide::parse(s).unwrap_or_else(|| {
            tracing::debug!("Unrecognized opening side '{}', drawing no indicator", s);
            CasementSide::None
        }),
    }
}
