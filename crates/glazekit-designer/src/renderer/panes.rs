//! Pane-level drawing shared by every window and door branch.

use glazekit_core::{CasementSide, GlassType};

use crate::layout::{compute_pane_layout, even_divisions};
use crate::normalize::BarGrid;
use crate::scene::{Axis, Band, HingeSide, PaneId, Point, Rect, Role, SceneGraph, Shape};

/// Glazing details applied to every pane of one drawing
#[derive(Debug, Clone, Copy)]
pub(crate) struct PaneStyle {
    pub glass: GlassType,
    pub bars: Option<BarGrid>,
    /// Inner border width in px
    pub border: f64,
    /// Georgian bar width in px
    pub bar: f64,
}

/// Draw sash outline, glass and Georgian bars. Empty panes draw nothing.
pub(crate) fn draw_pane(scene: &mut SceneGraph, rect: Rect, pane: PaneId, style: &PaneStyle) {
    if rect.is_empty() {
        return;
    }

    scene.push_in_pane(Role::Sash, pane, Shape::Rect(rect));
    let glass = rect.inset(style.border);
    scene.push_in_pane(Role::Glass(style.glass), pane, Shape::Rect(glass));

    if let Some(grid) = style.bars {
        draw_bars(scene, glass, pane, grid, style.bar);
    }
}

fn draw_bars(scene: &mut SceneGraph, glass: Rect, pane: PaneId, grid: BarGrid, width: f64) {
    let half = width / 2.0;

    for y in even_divisions(grid.horizontal, glass.height) {
        let bar = Rect::new(glass.x, glass.y + y - half, glass.width, width);
        scene.push_in_pane(
            Role::GeorgianBar(Axis::Horizontal),
            pane,
            Shape::Rect(bar),
        );
    }

    for x in even_divisions(grid.vertical, glass.width) {
        let bar = Rect::new(glass.x + x - half, glass.y, width, glass.height);
        scene.push_in_pane(Role::GeorgianBar(Axis::Vertical), pane, Shape::Rect(bar));
    }
}

/// Split `band` into `panes` equal panes separated by `divider` rectangles
/// of `thickness`, draw each pane, and return the pane rectangles.
pub(crate) fn draw_band(
    scene: &mut SceneGraph,
    band_rect: Rect,
    band: Band,
    panes: usize,
    thickness: f64,
    divider: Role,
    style: &PaneStyle,
) -> Vec<Rect> {
    if band_rect.is_empty() {
        return Vec::new();
    }

    let spans = compute_pane_layout(panes, band_rect.width, thickness);
    let rects: Vec<Rect> = spans
        .iter()
        .map(|s| Rect::new(band_rect.x + s.offset, band_rect.y, s.size, band_rect.height))
        .collect();

    for pair in spans.windows(2) {
        let divider_rect = Rect::new(
            band_rect.x + pair[0].end(),
            band_rect.y,
            thickness,
            band_rect.height,
        );
        scene.rect(divider, divider_rect);
    }

    for (i, rect) in rects.iter().enumerate() {
        draw_pane(scene, *rect, PaneId::new(band, i), style);
    }

    rects
}

/// Panes that carry a hinge indicator for `side`, with the side they hinge on
pub fn hinged_panes(side: CasementSide, panes: usize) -> Vec<(usize, HingeSide)> {
    if panes == 0 {
        return Vec::new();
    }
    let last = panes - 1;

    match side {
        CasementSide::Left => vec![(0, HingeSide::Left)],
        CasementSide::Right => vec![(last, HingeSide::Right)],
        CasementSide::Both if panes == 1 => vec![(0, HingeSide::Left)],
        CasementSide::Both => vec![(0, HingeSide::Left), (last, HingeSide::Right)],
        CasementSide::CenterLeft if panes >= 3 => vec![(1, HingeSide::Left)],
        CasementSide::CenterRight if panes >= 3 => vec![(panes - 2, HingeSide::Right)],
        _ => Vec::new(),
    }
}

/// Dashed chevron from the opening edge's corners to the hinge edge's midpoint
pub(crate) fn draw_hinge(scene: &mut SceneGraph, rect: Rect, pane: PaneId, hinge: HingeSide) {
    let (open_x, hinge_x) = match hinge {
        HingeSide::Left => (rect.right(), rect.x),
        HingeSide::Right => (rect.x, rect.right()),
    };

    let points = vec![
        Point::new(open_x, rect.y),
        Point::new(hinge_x, rect.center().y),
        Point::new(open_x, rect.bottom()),
    ];
    scene.push_in_pane(Role::HingeIndicator(hinge), pane, Shape::Polyline { points });
}

/// Hinge indicators for one band of panes
pub(crate) fn draw_hinges(scene: &mut SceneGraph, rects: &[Rect], band: Band, side: CasementSide) {
    for (index, hinge) in hinged_panes(side, rects.len()) {
        if let Some(rect) = rects.get(index).filter(|r| !r.is_empty()) {
            draw_hinge(scene, *rect, PaneId::new(band, index), hinge);
        }
    }
}
