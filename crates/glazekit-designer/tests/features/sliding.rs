use glazekit_core::WindowSpec;
use glazekit_designer::*;

fn arrows(drawing: &Drawing) -> Vec<(PaneId, SlideDirection)> {
    drawing
        .scene
        .elements
        .iter()
        .filter_map(|e| match (e.role, e.pane) {
            (Role::SlideArrow(direction), Some(pane)) => Some((pane, direction)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_sliding_has_meeting_rail_and_no_hinges() {
    let spec = WindowSpec::new("", "sliding", 1500, 1200).with_openable("both");
    let drawing = render(&spec).unwrap();

    assert_eq!(drawing.scene.count(|r| *r == Role::MeetingRail), 1);
    assert_eq!(drawing.scene.count(|r| *r == Role::Mullion), 0);
    assert_eq!(drawing.scene.count(|r| *r == Role::Sash), 2);
    assert_eq!(drawing.scene.count(|r| matches!(r, Role::HingeIndicator(_))), 0);
    assert_eq!(
        arrows(&drawing),
        vec![
            (PaneId::new(Band::Main, 0), SlideDirection::Right),
            (PaneId::new(Band::Main, 1), SlideDirection::Left),
        ]
    );
}

#[test]
fn test_sliding_default_moves_left_sash() {
    let drawing = render(&WindowSpec::new("", "sliding", 1500, 1200)).unwrap();
    assert_eq!(
        arrows(&drawing),
        vec![(PaneId::new(Band::Main, 0), SlideDirection::Right)]
    );
}

#[test]
fn test_sliding_right_and_none() {
    let spec = WindowSpec::new("", "sliding", 1500, 1200).with_openable("right");
    assert_eq!(
        arrows(&render(&spec).unwrap()),
        vec![(PaneId::new(Band::Main, 1), SlideDirection::Left)]
    );

    let spec = WindowSpec::new("", "sliding", 1500, 1200).with_openable("none");
    assert!(arrows(&render(&spec).unwrap()).is_empty());
}

#[test]
fn test_arrow_points_along_slide() {
    let spec = WindowSpec::new("", "sliding", 1500, 1200).with_openable("left");
    let drawing = render(&spec).unwrap();
    let arrow = drawing
        .scene
        .with_role(|r| matches!(r, Role::SlideArrow(_)))
        .next()
        .unwrap();

    match &arrow.shape {
        Shape::Polyline { points } => {
            let (tail, tip) = (points[0], points[1]);
            assert!(tip.x > tail.x);
            assert_eq!(tip.y, tail.y);
            assert!(points[2].x < tip.x);
        }
        other => panic!("unexpected arrow shape {:?}", other),
    }
}
