use glazekit_core::{GlassType, TypeCatalog, WindowSpec};
use glazekit_designer::*;
use proptest::prelude::*;

const SIDES: [&str; 7] = [
    "left",
    "right",
    "both",
    "none",
    "center-left",
    "center-right",
    "sideways",
];

fn arb_spec() -> impl Strategy<Value = WindowSpec> {
    let count = TypeCatalog::standard().len();
    (
        0..count,
        0.0f64..=1.0,
        0.0f64..=1.0,
        0..SIDES.len(),
        0..SIDES.len(),
        proptest::option::of((0u32..5, 0u32..5)),
        proptest::option::of(-200i64..3000),
    )
        .prop_map(|(index, fw, fh, side, top, bars, transom)| {
            let catalog = TypeCatalog::standard();
            let entry = catalog.entries().nth(index).cloned().unwrap();
            let width = entry.min_width + ((entry.max_width - entry.min_width) as f64 * fw) as i64;
            let height =
                entry.min_height + ((entry.max_height - entry.min_height) as f64 * fh) as i64;

            let mut spec = WindowSpec::new("Prop", entry.id.clone(), width, height)
                .with_glass(GlassType::Tinted)
                .with_openable(SIDES[side])
                .with_top_openable(SIDES[top]);
            if let Some((h, v)) = bars {
                spec = spec.with_georgian_bars(h, v);
            }
            if let Some(t) = transom {
                spec = spec.with_transom(t);
            }
            spec
        })
}

proptest! {
    #[test]
    fn render_is_deterministic(spec in arb_spec()) {
        let first = render(&spec).unwrap();
        let second = DrawingEngine::default().render(&spec).unwrap();
        prop_assert_eq!(&first, &second);

        let style = SvgStyle::default();
        prop_assert_eq!(to_svg(&first, &style), to_svg(&second, &style));
    }

    #[test]
    fn drawing_fits_bounding_box(spec in arb_spec()) {
        let drawing = render(&spec).unwrap();
        prop_assert!(drawing.outline.width <= 500.0 + 1e-9);
        prop_assert!(drawing.outline.height <= 400.0 + 1e-9);

        for element in &drawing.scene.elements {
            if let Shape::Rect(r) = element.shape {
                prop_assert!(r.width >= 0.0 && r.height >= 0.0);
                prop_assert!(r.right() <= drawing.scene.width + 1e-9);
                prop_assert!(r.bottom() <= drawing.scene.height + 1e-9);
            }
        }
    }

    #[test]
    fn bar_gaps_are_equal(horizontal in 0u32..8, vertical in 0u32..8) {
        let spec =
            WindowSpec::new("", "single", 900, 1200).with_georgian_bars(horizontal, vertical);
        let drawing = render(&spec).unwrap();

        let mut centers: Vec<f64> = drawing
            .scene
            .with_role(|r| *r == Role::GeorgianBar(Axis::Horizontal))
            .filter_map(|e| match &e.shape {
                Shape::Rect(r) => Some(r.center().y),
                _ => None,
            })
            .collect();
        prop_assert_eq!(centers.len(), horizontal as usize);

        let glass = drawing
            .scene
            .with_role(|r| matches!(r, Role::Glass(_)))
            .find_map(|e| match &e.shape {
                Shape::Rect(r) => Some(*r),
                _ => None,
            })
            .unwrap();
        centers.insert(0, glass.y);
        centers.push(glass.bottom());
        let gaps: Vec<f64> = centers.windows(2).map(|w| w[1] - w[0]).collect();
        for gap in &gaps {
            prop_assert!((gap - gaps[0]).abs() < 1e-9);
        }

        let verticals = drawing.scene.count(|r| *r == Role::GeorgianBar(Axis::Vertical));
        prop_assert_eq!(verticals, vertical as usize);
    }

    #[test]
    fn none_never_draws_hinges(spec in arb_spec()) {
        let spec = spec.with_openable("none").with_top_openable("none");
        let drawing = render(&spec).unwrap();
        prop_assert_eq!(drawing.scene.count(|r| matches!(r, Role::HingeIndicator(_))), 0);
    }
}
