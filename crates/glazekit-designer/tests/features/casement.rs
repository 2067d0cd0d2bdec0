use glazekit_core::{TypeCatalog, WindowSpec};
use glazekit_designer::*;

fn hinges(drawing: &Drawing) -> Vec<(PaneId, HingeSide)> {
    drawing
        .scene
        .elements
        .iter()
        .filter_map(|e| match (e.role, e.pane) {
            (Role::HingeIndicator(side), Some(pane)) => Some((pane, side)),
            _ => None,
        })
        .collect()
}

fn sash(drawing: &Drawing, pane: PaneId) -> Rect {
    drawing
        .scene
        .in_pane(pane)
        .find_map(|e| match (e.role, &e.shape) {
            (Role::Sash, Shape::Rect(r)) => Some(*r),
            _ => None,
        })
        .unwrap()
}

#[test]
fn test_single_left_hinged() {
    let spec = WindowSpec::new("", "single", 1100, 1100).with_openable("left");
    let drawing = render(&spec).unwrap();

    assert_eq!(drawing.scene.count(|r| *r == Role::Sash), 1);
    assert_eq!(drawing.scene.count(|r| *r == Role::Mullion), 0);
    assert_eq!(drawing.scene.count(|r| matches!(r, Role::GeorgianBar(_))), 0);
    assert_eq!(
        hinges(&drawing),
        vec![(PaneId::new(Band::Main, 0), HingeSide::Left)]
    );

    let pane = sash(&drawing, PaneId::new(Band::Main, 0));
    let indicator = drawing
        .scene
        .with_role(|r| matches!(r, Role::HingeIndicator(_)))
        .next()
        .unwrap();
    match &indicator.shape {
        Shape::Polyline { points } => {
            assert_eq!(points.len(), 3);
            assert_eq!(points[0], Point::new(pane.right(), pane.y));
            assert_eq!(points[1], Point::new(pane.x, pane.center().y));
            assert_eq!(points[2], Point::new(pane.right(), pane.bottom()));
        }
        other => panic!("unexpected indicator shape {:?}", other),
    }
}

#[test]
fn test_double_both_with_bars() {
    let spec = WindowSpec::new("", "double", 1800, 1200)
        .with_openable("both")
        .with_georgian_bars(2, 1);
    let drawing = render(&spec).unwrap();

    assert_eq!(drawing.scene.count(|r| *r == Role::Sash), 2);
    assert_eq!(drawing.scene.count(|r| *r == Role::Mullion), 1);
    assert_eq!(
        hinges(&drawing),
        vec![
            (PaneId::new(Band::Main, 0), HingeSide::Left),
            (PaneId::new(Band::Main, 1), HingeSide::Right),
        ]
    );

    for index in 0..2 {
        let pane = PaneId::new(Band::Main, index);
        let horizontal = drawing
            .scene
            .in_pane(pane)
            .filter(|e| e.role == Role::GeorgianBar(Axis::Horizontal))
            .count();
        let vertical = drawing
            .scene
            .in_pane(pane)
            .filter(|e| e.role == Role::GeorgianBar(Axis::Vertical))
            .count();
        assert_eq!((horizontal, vertical), (2, 1));
    }
}

#[test]
fn test_right_hinge_is_mirrored() {
    let spec = WindowSpec::new("", "triple", 1800, 1050).with_openable("right");
    let drawing = render(&spec).unwrap();

    assert_eq!(
        hinges(&drawing),
        vec![(PaneId::new(Band::Main, 2), HingeSide::Right)]
    );
    let pane = sash(&drawing, PaneId::new(Band::Main, 2));
    let indicator = drawing
        .scene
        .with_role(|r| matches!(r, Role::HingeIndicator(_)))
        .next()
        .unwrap();
    match &indicator.shape {
        Shape::Polyline { points } => {
            assert_eq!(points[0].x, pane.x);
            assert_eq!(points[1].x, pane.right());
        }
        other => panic!("unexpected indicator shape {:?}", other),
    }
}

#[test]
fn test_center_sides_on_three_panes() {
    let spec = WindowSpec::new("", "triple", 1800, 1050).with_openable("center-left");
    assert_eq!(
        hinges(&render(&spec).unwrap()),
        vec![(PaneId::new(Band::Main, 1), HingeSide::Left)]
    );

    let spec = WindowSpec::new("", "quad", 2400, 1050).with_openable("center-right");
    assert_eq!(
        hinges(&render(&spec).unwrap()),
        vec![(PaneId::new(Band::Main, 2), HingeSide::Right)]
    );

    let spec = WindowSpec::new("", "double", 1200, 1050).with_openable("center-left");
    assert!(hinges(&render(&spec).unwrap()).is_empty());
}

#[test]
fn test_none_draws_no_hinges_for_any_type() {
    for entry in TypeCatalog::standard().entries() {
        let spec = WindowSpec::for_type(entry, "")
            .with_openable("none")
            .with_top_openable("none");
        let drawing = render(&spec).unwrap();
        assert_eq!(
            drawing.scene.count(|r| matches!(r, Role::HingeIndicator(_))),
            0,
            "hinge drawn for {}",
            entry.id
        );
    }
}

#[test]
fn test_both_draws_two_hinges_on_two_and_four_panes() {
    for id in ["double", "quad", "double-transom", "quad-transom"] {
        let entry = TypeCatalog::standard().get(id).cloned().unwrap();
        let spec = WindowSpec::for_type(&entry, "").with_openable("both");
        let drawing = render(&spec).unwrap();
        assert_eq!(
            drawing.scene.count(|r| matches!(r, Role::HingeIndicator(_))),
            2,
            "wrong hinge count for {}",
            id
        );
    }
}

#[test]
fn test_unrecognized_side_draws_nothing() {
    let spec = WindowSpec::new("", "double", 1200, 1050).with_openable("sideways");
    let drawing = render(&spec).unwrap();
    assert!(hinges(&drawing).is_empty());
}

#[test]
fn test_missing_side_defaults_to_left() {
    let drawing = render(&WindowSpec::new("", "quad", 2400, 1050)).unwrap();
    assert_eq!(
        hinges(&drawing),
        vec![(PaneId::new(Band::Main, 0), HingeSide::Left)]
    );
}

#[test]
fn test_panes_and_mullions_tile_the_interior() {
    let drawing = render(&WindowSpec::new("", "quad", 2400, 1050)).unwrap();
    let interior = drawing.interior;
    let mullion = drawing.metrics.mullion;

    let first = sash(&drawing, PaneId::new(Band::Main, 0));
    let last = sash(&drawing, PaneId::new(Band::Main, 3));
    assert!((first.x - interior.x).abs() < 1e-9);
    assert!((last.right() - interior.right()).abs() < 1e-9);
    assert!((first.width * 4.0 + mullion * 3.0 - interior.width).abs() < 1e-9);
    assert_eq!(drawing.scene.count(|r| *r == Role::Mullion), 3);
}

#[test]
fn test_glass_inset_by_border() {
    let drawing = render(&WindowSpec::new("", "single", 600, 1050)).unwrap();
    let pane = PaneId::new(Band::Main, 0);
    let sash_rect = sash(&drawing, pane);
    let glass = drawing
        .scene
        .in_pane(pane)
        .find_map(|e| match (e.role, &e.shape) {
            (Role::Glass(_), Shape::Rect(r)) => Some(*r),
            _ => None,
        })
        .unwrap();

    assert_eq!(glass, sash_rect.inset(drawing.metrics.border));
}
