//! Scene graph produced by the drawing engine.
//!
//! A scene is a flat list of tagged primitives with pixel coordinates.
//! The y axis points down, the window outline's top-left corner is the origin.

use glazekit_core::GlassType;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Shrink by `d` on every side. Collapses to the center line instead of
    /// going negative.
    pub fn inset(&self, d: f64) -> Rect {
        let dx = d.min(self.width / 2.0);
        let dy = d.min(self.height / 2.0);
        Rect::new(
            self.x + dx,
            self.y + dy,
            self.width - 2.0 * dx,
            self.height - 2.0 * dy,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Horizontal alignment of a text label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Drawable primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Rect(Rect),
    Line {
        from: Point,
        to: Point,
    },
    Polyline {
        points: Vec<Point>,
    },
    Text {
        position: Point,
        content: String,
        /// Clockwise rotation in degrees about `position`
        rotation: f64,
        anchor: TextAnchor,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Side a casement is hinged on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HingeSide {
    Left,
    Right,
}

/// Direction a sliding sash opens towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideDirection {
    Left,
    Right,
}

/// What a primitive depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Outer edge of the frame
    Frame,
    /// Inner edge of the frame
    FrameOpening,
    /// Vertical divider between panes
    Mullion,
    /// Horizontal divider below the upper band
    TransomBar,
    /// Overlap of two sliding sashes
    MeetingRail,
    /// Inner decorative border of a pane, painted under the glass
    Sash,
    Glass(GlassType),
    GeorgianBar(Axis),
    HingeIndicator(HingeSide),
    SlideArrow(SlideDirection),
    DoorLeaf,
    DoorBoard,
    DoorRail,
    DoorPanel,
    DimensionLine,
    DimensionText,
    Label,
}

/// Drawing layers in paint order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Frame,
    Glass,
    Structure,
    Bars,
    Indicators,
    Annotations,
}

impl Layer {
    pub const ALL: [Layer; 6] = [
        Layer::Frame,
        Layer::Glass,
        Layer::Structure,
        Layer::Bars,
        Layer::Indicators,
        Layer::Annotations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Frame => "frame",
            Layer::Glass => "glass",
            Layer::Structure => "structure",
            Layer::Bars => "bars",
            Layer::Indicators => "indicators",
            Layer::Annotations => "annotations",
        }
    }
}

impl Role {
    pub fn layer(&self) -> Layer {
        match self {
            Role::Frame | Role::FrameOpening | Role::Sash | Role::DoorLeaf => Layer::Frame,
            Role::Glass(_) => Layer::Glass,
            Role::Mullion
            | Role::TransomBar
            | Role::MeetingRail
            | Role::DoorBoard
            | Role::DoorRail
            | Role::DoorPanel => Layer::Structure,
            Role::GeorgianBar(_) => Layer::Bars,
            Role::HingeIndicator(_) | Role::SlideArrow(_) => Layer::Indicators,
            Role::DimensionLine | Role::DimensionText | Role::Label => Layer::Annotations,
        }
    }

    /// Stable kebab-case name, used as the SVG class
    pub fn name(&self) -> &'static str {
        match self {
            Role::Frame => "frame",
            Role::FrameOpening => "frame-opening",
            Role::Mullion => "mullion",
            Role::TransomBar => "transom-bar",
            Role::MeetingRail => "meeting-rail",
            Role::Sash => "sash",
            Role::Glass(_) => "glass",
            Role::GeorgianBar(_) => "georgian-bar",
            Role::HingeIndicator(_) => "hinge-indicator",
            Role::SlideArrow(_) => "slide-arrow",
            Role::DoorLeaf => "door-leaf",
            Role::DoorBoard => "door-board",
            Role::DoorRail => "door-rail",
            Role::DoorPanel => "door-panel",
            Role::DimensionLine => "dimension-line",
            Role::DimensionText => "dimension-text",
            Role::Label => "label",
        }
    }

    /// Hinge indicators are drawn dashed
    pub fn is_dashed(&self) -> bool {
        matches!(self, Role::HingeIndicator(_))
    }
}

/// Horizontal band of a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    /// The whole height of a window without transom
    Main,
    /// Above the transom bar
    Upper,
    /// Below the transom bar
    Lower,
}

/// Pane a primitive belongs to, counted left to right within its band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PaneId {
    pub band: Band,
    pub index: usize,
}

impl PaneId {
    pub fn new(band: Band, index: usize) -> Self {
        Self { band, index }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pane: Option<PaneId>,
    pub shape: Shape,
}

/// Tree of primitives with a declared bounding box
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SceneGraph {
    pub width: f64,
    pub height: f64,
    pub elements: Vec<Element>,
}

impl SceneGraph {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, role: Role, shape: Shape) {
        self.elements.push(Element {
            role,
            pane: None,
            shape,
        });
    }

    pub fn push_in_pane(&mut self, role: Role, pane: PaneId, shape: Shape) {
        self.elements.push(Element {
            role,
            pane: Some(pane),
            shape,
        });
    }

    pub fn rect(&mut self, role: Role, rect: Rect) {
        self.push(role, Shape::Rect(rect));
    }

    pub fn line(&mut self, role: Role, from: Point, to: Point) {
        self.push(role, Shape::Line { from, to });
    }

    /// Elements matching a predicate on their role
    pub fn with_role<'a>(
        &'a self,
        pred: impl Fn(&Role) -> bool + 'a,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements.iter().filter(move |e| pred(&e.role))
    }

    pub fn count(&self, pred: impl Fn(&Role) -> bool) -> usize {
        self.elements.iter().filter(|e| pred(&e.role)).count()
    }

    /// Elements belonging to one pane
    pub fn in_pane(&self, pane: PaneId) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.pane == Some(pane))
    }

    /// Elements of one layer, in insertion order
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.role.layer() == layer)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
