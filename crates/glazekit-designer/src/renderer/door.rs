//! Door leaf branches.

use super::panes::{draw_pane, PaneStyle};
use crate::layout::{compute_pane_layout, Metrics};
use crate::normalize::DoorStyle;
use crate::scene::{Band, PaneId, Point, Rect, Role, SceneGraph};

/// Relative heights of the three ledges on a boarded door
const LEDGE_POSITIONS: [f64; 3] = [0.12, 0.5, 0.88];

/// Draw the leaf inside the frame opening. Stiles and rails use the
/// sash border width.
pub(crate) fn draw_door(
    scene: &mut SceneGraph,
    interior: Rect,
    style: DoorStyle,
    board_px: f64,
    metrics: &Metrics,
    pane_style: &PaneStyle,
) {
    if interior.is_empty() {
        return;
    }

    scene.rect(Role::DoorLeaf, interior);
    let stile = metrics.border;

    match style {
        DoorStyle::Boarded => draw_boarded(scene, interior, board_px, stile),
        DoorStyle::FullyGlazed => {
            let opening = interior.inset(stile);
            draw_pane(scene, opening, PaneId::new(Band::Main, 0), pane_style);
        }
        DoorStyle::HalfGlazed => draw_half_glazed(scene, interior, stile, pane_style),
        DoorStyle::SixPanel => draw_six_panel(scene, interior, stile),
    }
}

fn draw_boarded(scene: &mut SceneGraph, leaf: Rect, board_px: f64, rail: f64) {
    let boards = (leaf.width / board_px).round().max(1.0) as usize;
    let board_width = leaf.width / boards as f64;
    for i in 1..boards {
        let x = leaf.x + board_width * i as f64;
        scene.line(Role::DoorBoard, Point::new(x, leaf.y), Point::new(x, leaf.bottom()));
    }

    let ledges: Vec<Rect> = LEDGE_POSITIONS
        .iter()
        .map(|p| Rect::new(leaf.x, leaf.y + leaf.height * p - rail / 2.0, leaf.width, rail))
        .collect();
    for ledge in &ledges {
        scene.rect(Role::DoorRail, *ledge);
    }

    // Braces rise from the hinge side of each lower ledge
    for pair in ledges.windows(2) {
        scene.line(
            Role::DoorRail,
            Point::new(leaf.x, pair[1].y),
            Point::new(leaf.right(), pair[0].bottom()),
        );
    }
}

fn draw_half_glazed(scene: &mut SceneGraph, leaf: Rect, stile: f64, pane_style: &PaneStyle) {
    let field = leaf.inset(stile);
    let mid_rail = Rect::new(
        leaf.x,
        leaf.y + (leaf.height - stile) / 2.0,
        leaf.width,
        stile,
    );
    scene.rect(Role::DoorRail, mid_rail);

    let glazed = Rect::new(field.x, field.y, field.width, (mid_rail.y - field.y).max(0.0));
    draw_pane(scene, glazed, PaneId::new(Band::Upper, 0), pane_style);

    let panel = Rect::new(
        field.x,
        mid_rail.bottom(),
        field.width,
        (field.bottom() - mid_rail.bottom()).max(0.0),
    );
    draw_raised_panel(scene, panel, stile);
}

fn draw_six_panel(scene: &mut SceneGraph, leaf: Rect, stile: f64) {
    let field = leaf.inset(stile);
    let columns = compute_pane_layout(2, field.width, stile);
    let rows = compute_pane_layout(3, field.height, stile);

    for row in &rows {
        for column in &columns {
            let panel = Rect::new(
                field.x + column.offset,
                field.y + row.offset,
                column.size,
                row.size,
            );
            draw_raised_panel(scene, panel, stile);
        }
    }
}

/// Panel outline plus its raised field
fn draw_raised_panel(scene: &mut SceneGraph, panel: Rect, stile: f64) {
    if panel.is_empty() {
        return;
    }
    scene.rect(Role::DoorPanel, panel);
    scene.rect(Role::DoorPanel, panel.inset(stile / 2.0));
}
