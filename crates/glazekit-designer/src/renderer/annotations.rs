//! Dimension lines and the name label.

use glazekit_core::units::format_length;

use crate::config::DrawingConfig;
use crate::normalize::NormalizedWindow;
use crate::scene::{Point, Role, SceneGraph, Shape, TextAnchor};

/// Tick length at each end of a dimension line
const TICK: f64 = 6.0;
/// Gap between a dimension line and its text
const TEXT_GAP: f64 = 6.0;

/// Width along the bottom, height down the right, label under both.
/// `width` and `height` are the drawn outline size in px.
pub(crate) fn draw_annotations(
    scene: &mut SceneGraph,
    window: &NormalizedWindow,
    width: f64,
    height: f64,
    config: &DrawingConfig,
) {
    let units = config.measurement_system;
    let half_tick = TICK / 2.0;

    let y = height + config.dimension_margin / 2.0;
    scene.line(Role::DimensionLine, Point::new(0.0, y), Point::new(width, y));
    for x in [0.0, width] {
        scene.line(
            Role::DimensionLine,
            Point::new(x, y - half_tick),
            Point::new(x, y + half_tick),
        );
    }
    scene.push(
        Role::DimensionText,
        Shape::Text {
            position: Point::new(width / 2.0, y - TEXT_GAP),
            content: format_length(window.width_mm, units),
            rotation: 0.0,
            anchor: TextAnchor::Middle,
        },
    );

    let x = width + config.dimension_margin / 2.0;
    scene.line(Role::DimensionLine, Point::new(x, 0.0), Point::new(x, height));
    for y in [0.0, height] {
        scene.line(
            Role::DimensionLine,
            Point::new(x - half_tick, y),
            Point::new(x + half_tick, y),
        );
    }
    scene.push(
        Role::DimensionText,
        Shape::Text {
            position: Point::new(x - TEXT_GAP, height / 2.0),
            content: format_length(window.height_mm, units),
            rotation: -90.0,
            anchor: TextAnchor::Middle,
        },
    );

    scene.push(
        Role::Label,
        Shape::Text {
            position: Point::new(
                width / 2.0,
                height + config.dimension_margin + config.label_margin / 2.0,
            ),
            content: window.label(),
            rotation: 0.0,
            anchor: TextAnchor::Middle,
        },
    );
}
