use glazekit_core::{GlassType, WindowSpec};
use glazekit_designer::*;
use glazekit_designer::svg_renderer::glass_fill;

fn svg_for(spec: &WindowSpec) -> String {
    to_svg(&render(spec).unwrap(), &SvgStyle::default())
}

#[test]
fn test_document_shape() {
    let svg = svg_for(&WindowSpec::new("Kitchen", "single", 1100, 1100));

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("viewBox=\"0 0 445 485\""));
    assert!(svg.contains("<title>Kitchen (Single Casement)</title>"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_layers_in_paint_order() {
    let spec = WindowSpec::new("", "double", 1200, 1050)
        .with_openable("both")
        .with_georgian_bars(1, 1);
    let svg = svg_for(&spec);

    let positions: Vec<usize> = ["frame", "glass", "structure", "bars", "indicators", "annotations"]
        .iter()
        .map(|layer| svg.find(&format!("<g id=\"layer-{}\">", layer)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_empty_layers_are_skipped() {
    let svg = svg_for(&WindowSpec::new("", "single", 600, 1050).with_openable("none"));
    assert!(!svg.contains("layer-bars"));
    assert!(!svg.contains("layer-indicators"));
}

#[test]
fn test_hinges_are_dashed() {
    let spec = WindowSpec::new("", "double", 1200, 1050).with_openable("both");
    let svg = svg_for(&spec);

    assert_eq!(svg.matches("class=\"hinge-indicator\"").count(), 2);
    assert_eq!(svg.matches("stroke-dasharray=\"6 4\"").count(), 2);
}

#[test]
fn test_obscure_glass_uses_pattern() {
    let spec = WindowSpec::new("", "single", 600, 1050).with_glass(GlassType::Obscure);
    let svg = svg_for(&spec);

    assert!(svg.contains("<pattern id=\"glass-obscure\""));
    assert!(svg.contains("fill=\"url(#glass-obscure)\""));

    let clear = svg_for(&WindowSpec::new("", "single", 600, 1050));
    assert!(!clear.contains("<defs>"));
    assert!(clear.contains(&format!("fill=\"{}\"", glass_fill(GlassType::Clear))));
}

#[test]
fn test_glass_fill_follows_type() {
    for glass in [GlassType::Tinted, GlassType::LowE] {
        let spec = WindowSpec::new("", "single", 600, 1050).with_glass(glass);
        let svg = svg_for(&spec);
        assert!(svg.contains("class=\"glass\" "));
        assert!(svg.contains(&glass_fill(glass)));
    }
}

#[test]
fn test_text_is_escaped() {
    let svg = svg_for(&WindowSpec::new("Bed <2> & Bath", "single", 600, 1050));
    assert!(svg.contains("Bed &lt;2&gt; &amp; Bath (Single Casement)"));
    assert!(!svg.contains("Bed <2>"));
}

#[test]
fn test_height_text_rotated() {
    let svg = svg_for(&WindowSpec::new("", "single", 600, 1050));
    assert!(svg.contains("transform=\"rotate(-90 "));
    assert!(svg.contains(">1050 mm</text>"));
    assert!(svg.contains(">600 mm</text>"));
}

#[test]
fn test_precision_and_background() {
    let style = SvgStyle {
        precision: 0,
        background: Some("#ffffff".to_string()),
        ..SvgStyle::default()
    };
    let drawing = render(&WindowSpec::new("", "triple", 1800, 1050)).unwrap();
    let svg = to_svg(&drawing, &style);

    assert!(svg.contains("<rect x=\"0\" y=\"0\" width=\"560\" height=\"392\" fill=\"#ffffff\"/>"));
    assert_eq!(svg, to_svg(&drawing, &style));
}
