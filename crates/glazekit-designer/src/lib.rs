//! # GlazeKit Designer
//!
//! Schematic drawing engine for window and door records.
//!
//! ## Architecture
//!
//! ```text
//! WindowSpec
//!   └── TypeCatalog::resolve   (fallback logged and flagged)
//!   └── NormalizedWindow       (all defaults applied, tagged layout)
//!   └── compute_scale/Metrics  (mm to px, floored sections)
//!   └── renderer               (casement, transom, sliding, door branches)
//!   └── SceneGraph             (tagged primitives, bounding box)
//!         └── svg_renderer     (optional SVG serialization)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use glazekit_core::WindowSpec;
//! use glazekit_designer::{render, to_svg, SvgStyle};
//!
//! let spec = WindowSpec::new("Kitchen", "double", 1800, 1200).with_openable("both");
//! let drawing = render(&spec)?;
//! let svg = to_svg(&drawing, &SvgStyle::default());
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod normalize;
pub mod renderer;
pub mod scene;
pub mod svg_renderer;

pub use config::DrawingConfig;
pub use error::{DrawingError, DrawingResult};
pub use layout::{compute_pane_layout, compute_scale, even_divisions, Metrics, PaneSpan};
pub use normalize::{BarGrid, DoorStyle, NormalizedWindow, WindowKind, WindowLayout};
pub use renderer::{hinged_panes, render, transom_bands, Drawing, DrawingEngine};
pub use scene::{
    Axis, Band, Element, HingeSide, Layer, PaneId, Point, Rect, Role, SceneGraph, Shape,
    SlideDirection, TextAnchor,
};
pub use svg_renderer::{to_svg, SvgStyle};
