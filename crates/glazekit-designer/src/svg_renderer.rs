//! SVG serialization of a drawing
//! Writes one `<g>` per layer in paint order. Coordinates are written with a
//! fixed number of decimals so equal drawings give equal bytes.

use std::fmt::Write as _;

use glazekit_core::GlassType;
use serde::{Deserialize, Serialize};

use crate::renderer::Drawing;
use crate::scene::{Element, Layer, Point, Role, Shape, TextAnchor};

/// Pattern id used by obscure glass
const OBSCURE_PATTERN_ID: &str = "glass-obscure";

/// Colours, fonts and precision of the SVG output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgStyle {
    pub stroke: String,
    pub stroke_width: f64,
    pub frame_fill: String,
    pub opening_fill: String,
    pub door_fill: String,
    /// Dash pattern for hinge indicators
    pub dash: String,
    pub font_family: String,
    pub font_size: f64,
    /// Painted behind everything when set
    pub background: Option<String>,
    /// Decimals written for every coordinate
    pub precision: usize,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            stroke: "#333333".to_string(),
            stroke_width: 1.0,
            frame_fill: "#f4f1ea".to_string(),
            opening_fill: "#ffffff".to_string(),
            door_fill: "#e2d3bd".to_string(),
            dash: "6 4".to_string(),
            font_family: "sans-serif".to_string(),
            font_size: 12.0,
            background: None,
            precision: 2,
        }
    }
}

/// Fill for each glass type
pub fn glass_fill(glass: GlassType) -> String {
    match glass {
        GlassType::Clear => "#d6ecf7".to_string(),
        GlassType::Obscure => format!("url(#{})", OBSCURE_PATTERN_ID),
        GlassType::Tinted => "#9fb0bd".to_string(),
        GlassType::LowE => "#dcf0da".to_string(),
    }
}

/// Serialize a drawing as a standalone SVG document
pub fn to_svg(drawing: &Drawing, style: &SvgStyle) -> String {
    let scene = &drawing.scene;
    let n = |v: f64| fmt_num(v, style.precision);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = n(scene.width),
        h = n(scene.height)
    );
    let _ = writeln!(svg, "  <title>{}</title>", escape(&drawing.window.label()));

    let uses_obscure = scene
        .elements
        .iter()
        .any(|e| e.role == Role::Glass(GlassType::Obscure));
    if uses_obscure {
        svg.push_str("  <defs>\n");
        let _ = writeln!(
            svg,
            r##"    <pattern id="{}" width="4" height="4" patternUnits="userSpaceOnUse"><rect width="4" height="4" fill="#e4eef3"/><circle cx="1" cy="1" r="0.6" fill="#8fa6b3"/><circle cx="3" cy="3" r="0.6" fill="#8fa6b3"/></pattern>"##,
            OBSCURE_PATTERN_ID
        );
        svg.push_str("  </defs>\n");
    }

    if let Some(background) = &style.background {
        let _ = writeln!(
            svg,
            r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            n(scene.width),
            n(scene.height),
            escape(background)
        );
    }

    for layer in Layer::ALL {
        let mut elements = scene.layer(layer).peekable();
        if elements.peek().is_none() {
            continue;
        }

        let _ = writeln!(svg, r#"  <g id="layer-{}">"#, layer.as_str());
        for element in elements {
            svg.push_str("    ");
            write_element(&mut svg, element, style);
            svg.push('\n');
        }
        svg.push_str("  </g>\n");
    }

    svg.push_str("</svg>\n");
    svg
}

fn write_element(svg: &mut String, element: &Element, style: &SvgStyle) {
    let n = |v: f64| fmt_num(v, style.precision);
    let role = &element.role;
    let stroke = format!(
        r#"stroke="{}" stroke-width="{}"{}"#,
        escape(&style.stroke),
        n(style.stroke_width),
        if role.is_dashed() {
            format!(r#" stroke-dasharray="{}""#, escape(&style.dash))
        } else {
            String::new()
        }
    );

    let _ = match &element.shape {
        Shape::Rect(r) => write!(
            svg,
            r#"<rect class="{}" x="{}" y="{}" width="{}" height="{}" fill="{}" {}/>"#,
            role.name(),
            n(r.x),
            n(r.y),
            n(r.width),
            n(r.height),
            fill_for(role, style),
            stroke
        ),
        Shape::Line { from, to } => write!(
            svg,
            r#"<line class="{}" x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
            role.name(),
            n(from.x),
            n(from.y),
            n(to.x),
            n(to.y),
            stroke
        ),
        Shape::Polyline { points } => write!(
            svg,
            r#"<polyline class="{}" points="{}" fill="none" {}/>"#,
            role.name(),
            points_attr(points, style.precision),
            stroke
        ),
        Shape::Text {
            position,
            content,
            rotation,
            anchor,
        } => {
            let transform = if *rotation == 0.0 {
                String::new()
            } else {
                format!(
                    r#" transform="rotate({} {} {})""#,
                    n(*rotation),
                    n(position.x),
                    n(position.y)
                )
            };
            write!(
                svg,
                r#"<text class="{}" x="{}" y="{}" text-anchor="{}" font-family="{}" font-size="{}" fill="{}"{}>{}</text>"#,
                role.name(),
                n(position.x),
                n(position.y),
                anchor_attr(*anchor),
                escape(&style.font_family),
                n(style.font_size),
                escape(&style.stroke),
                transform,
                escape(content)
            )
        }
    };
}

fn fill_for(role: &Role, style: &SvgStyle) -> String {
    match role {
        Role::Frame | Role::Mullion | Role::TransomBar | Role::MeetingRail | Role::Sash => {
            escape(&style.frame_fill)
        }
        Role::FrameOpening => escape(&style.opening_fill),
        Role::Glass(glass) => glass_fill(*glass),
        Role::GeorgianBar(_) => escape(&style.frame_fill),
        Role::DoorLeaf | Role::DoorRail | Role::DoorPanel => escape(&style.door_fill),
        _ => "none".to_string(),
    }
}

fn anchor_attr(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn points_attr(points: &[Point], precision: usize) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x, precision), fmt_num(p.y, precision)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fixed-precision number with trailing zeros removed
pub fn fmt_num(value: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, value);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    };
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
