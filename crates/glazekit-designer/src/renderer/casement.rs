//! Casement, transom and sliding window branches.

use glazekit_core::CasementSide;

use super::panes::{draw_band, draw_hinges, PaneStyle};
use crate::layout::Metrics;
use crate::scene::{Band, PaneId, Point, Rect, Role, SceneGraph, Shape, SlideDirection};

/// N panes across the full interior height
pub(crate) fn draw_casement(
    scene: &mut SceneGraph,
    interior: Rect,
    panes: usize,
    opening: CasementSide,
    metrics: &Metrics,
    style: &PaneStyle,
) {
    let rects = draw_band(
        scene,
        interior,
        Band::Main,
        panes,
        metrics.mullion,
        Role::Mullion,
        style,
    );
    draw_hinges(scene, &rects, Band::Main, opening);
}

/// Upper and lower band heights for a transom split.
///
/// The upper band is `transom_mm` scaled, limited so the lower band never
/// goes negative; `upper + mullion + lower == interior_height` whenever the
/// interior is taller than the mullion.
pub fn transom_bands(interior_height: f64, transom_mm: f64, metrics: &Metrics) -> (f64, f64) {
    let available = (interior_height - metrics.mullion).max(0.0);
    let upper = metrics.px(transom_mm).clamp(0.0, available);
    (upper, available - upper)
}

/// N fixed or top-opening panes above a transom bar, N casements below it
pub(crate) fn draw_transom(
    scene: &mut SceneGraph,
    interior: Rect,
    panes: usize,
    transom_mm: f64,
    openings: (CasementSide, CasementSide),
    metrics: &Metrics,
    style: &PaneStyle,
) {
    let (top_opening, opening) = openings;
    let (upper_height, lower_height) = transom_bands(interior.height, transom_mm, metrics);

    let upper = Rect::new(interior.x, interior.y, interior.width, upper_height);
    let bar = Rect::new(interior.x, upper.bottom(), interior.width, metrics.mullion);
    let lower = Rect::new(interior.x, bar.bottom(), interior.width, lower_height);

    scene.rect(Role::TransomBar, bar);

    let rects = draw_band(
        scene,
        upper,
        Band::Upper,
        panes,
        metrics.mullion,
        Role::Mullion,
        style,
    );
    draw_hinges(scene, &rects, Band::Upper, top_opening);

    let rects = draw_band(
        scene,
        lower,
        Band::Lower,
        panes,
        metrics.mullion,
        Role::Mullion,
        style,
    );
    draw_hinges(scene, &rects, Band::Lower, opening);
}

/// Two sashes on a meeting rail, with an arrow on each sash that slides
pub(crate) fn draw_sliding(
    scene: &mut SceneGraph,
    interior: Rect,
    opening: CasementSide,
    metrics: &Metrics,
    style: &PaneStyle,
) {
    let rects = draw_band(
        scene,
        interior,
        Band::Main,
        2,
        metrics.mullion,
        Role::MeetingRail,
        style,
    );

    let sliding: &[(usize, SlideDirection)] = match opening {
        CasementSide::Left => &[(0, SlideDirection::Right)],
        CasementSide::Right => &[(1, SlideDirection::Left)],
        CasementSide::Both => &[(0, SlideDirection::Right), (1, SlideDirection::Left)],
        _ => &[],
    };

    for &(index, direction) in sliding {
        if let Some(rect) = rects.get(index).filter(|r| !r.is_empty()) {
            draw_slide_arrow(scene, *rect, PaneId::new(Band::Main, index), direction);
        }
    }
}

/// Single open polyline: tail, tip, one barb, back to the tip, other barb
fn draw_slide_arrow(scene: &mut SceneGraph, rect: Rect, pane: PaneId, direction: SlideDirection) {
    let y = rect.center().y;
    let (tail_x, tip_x) = match direction {
        SlideDirection::Left => (rect.x + rect.width * 0.75, rect.x + rect.width * 0.25),
        SlideDirection::Right => (rect.x + rect.width * 0.25, rect.x + rect.width * 0.75),
    };
    let head = rect.width.min(rect.height) * 0.1;
    let back = if tip_x > tail_x { -head } else { head };

    let tip = Point::new(tip_x, y);
    let points = vec![
        Point::new(tail_x, y),
        tip,
        Point::new(tip_x + back, y - head / 2.0),
        tip,
        Point::new(tip_x + back, y + head / 2.0),
    ];
    scene.push_in_pane(Role::SlideArrow(direction), pane, Shape::Polyline { points });
}
