use glazekit_core::WindowSpec;
use glazekit_designer::*;

fn glass_rect(drawing: &Drawing, pane: PaneId) -> Rect {
    drawing
        .scene
        .in_pane(pane)
        .find_map(|e| match (e.role, &e.shape) {
            (Role::Glass(_), Shape::Rect(r)) => Some(*r),
            _ => None,
        })
        .unwrap()
}

fn bar_rects(drawing: &Drawing, pane: PaneId, axis: Axis) -> Vec<Rect> {
    drawing
        .scene
        .in_pane(pane)
        .filter(|e| e.role == Role::GeorgianBar(axis))
        .filter_map(|e| match &e.shape {
            Shape::Rect(r) => Some(*r),
            _ => None,
        })
        .collect()
}

#[test]
fn test_bars_evenly_spaced() {
    let spec = WindowSpec::new("", "single", 900, 1500).with_georgian_bars(3, 2);
    let drawing = render(&spec).unwrap();
    let pane = PaneId::new(Band::Main, 0);
    let glass = glass_rect(&drawing, pane);

    let horizontal = bar_rects(&drawing, pane, Axis::Horizontal);
    assert_eq!(horizontal.len(), 3);
    for (i, bar) in horizontal.iter().enumerate() {
        let expected = glass.y + glass.height / 4.0 * (i + 1) as f64;
        assert!((bar.center().y - expected).abs() < 1e-9);
        assert!((bar.height - drawing.metrics.bar).abs() < 1e-9);
        assert_eq!(bar.width, glass.width);
    }

    let vertical = bar_rects(&drawing, pane, Axis::Vertical);
    assert_eq!(vertical.len(), 2);
    for (i, bar) in vertical.iter().enumerate() {
        let expected = glass.x + glass.width / 3.0 * (i + 1) as f64;
        assert!((bar.center().x - expected).abs() < 1e-9);
        assert_eq!(bar.height, glass.height);
    }
}

#[test]
fn test_zero_count_draws_no_bars_on_axis() {
    let spec = WindowSpec::new("", "double", 1200, 1050).with_georgian_bars(0, 2);
    let drawing = render(&spec).unwrap();

    assert_eq!(
        drawing.scene.count(|r| *r == Role::GeorgianBar(Axis::Horizontal)),
        0
    );
    assert_eq!(
        drawing.scene.count(|r| *r == Role::GeorgianBar(Axis::Vertical)),
        4
    );
}

#[test]
fn test_missing_counts_default_to_one() {
    let mut spec = WindowSpec::new("", "triple", 1800, 1050);
    spec.has_georgian_bars = true;
    let drawing = render(&spec).unwrap();

    assert_eq!(drawing.scene.count(|r| matches!(r, Role::GeorgianBar(_))), 6);
}

#[test]
fn test_flag_off_ignores_counts() {
    let mut spec = WindowSpec::new("", "single", 600, 1050);
    spec.georgian_bars_horizontal = Some(4);
    spec.georgian_bars_vertical = Some(4);
    let drawing = render(&spec).unwrap();

    assert_eq!(drawing.scene.count(|r| matches!(r, Role::GeorgianBar(_))), 0);
}

#[test]
fn test_bars_in_both_transom_bands() {
    let spec = WindowSpec::new("", "single-transom", 600, 1350)
        .with_transom(400)
        .with_georgian_bars(1, 0);
    let drawing = render(&spec).unwrap();

    assert_eq!(bar_rects(&drawing, PaneId::new(Band::Upper, 0), Axis::Horizontal).len(), 1);
    assert_eq!(bar_rects(&drawing, PaneId::new(Band::Lower, 0), Axis::Horizontal).len(), 1);
}

#[test]
fn test_bar_count_limit() {
    let spec = WindowSpec::new("", "single", 600, 900).with_georgian_bars(3_000_000, 0);
    assert_eq!(
        render(&spec),
        Err(DrawingError::TooManyBars {
            axis: "horizontal",
            count: 3_000_000,
            max: 12,
        })
    );

    let spec = WindowSpec::new("", "double", 1200, 1050).with_georgian_bars(1, u32::MAX);
    assert!(matches!(
        render(&spec),
        Err(DrawingError::TooManyBars {
            axis: "vertical",
            ..
        })
    ));

    let spec = WindowSpec::new("", "single", 600, 900).with_georgian_bars(12, 12);
    let drawing = render(&spec).unwrap();
    assert_eq!(
        drawing.scene.count(|r| matches!(r, Role::GeorgianBar(_))),
        24
    );
}

#[test]
fn test_bar_limit_ignored_without_bars() {
    let mut spec = WindowSpec::new("", "single", 600, 900).with_georgian_bars(50, 50);
    spec.has_georgian_bars = false;
    assert!(render(&spec).is_ok());
}
