use glazekit_core::WindowSpec;
use glazekit_designer::*;
use serde_json::{json, Value};

#[test]
fn test_drawing_json() {
    let spec = WindowSpec::new("Hall", "double", 1200, 1050).with_openable("both");
    let drawing = render(&spec).unwrap();
    let value = serde_json::to_value(&drawing).unwrap();

    assert_eq!(value["typeId"], "double");
    assert_eq!(value["requestedType"], "double");
    assert_eq!(value["usedFallback"], false);
    assert_eq!(value["window"]["kind"], "double");
    assert_eq!(value["window"]["layout"]["layout"], "casement");
    assert_eq!(value["window"]["layout"]["opening"], "both");

    let first = &value["scene"]["elements"][0];
    assert_eq!(first["role"], "frame");
    assert_eq!(first["shape"]["kind"], "rect");
    assert_eq!(first["shape"]["x"], 0.0);
    assert!(first.get("pane").is_none());
}

#[test]
fn test_tagged_roles_and_panes() {
    let spec = WindowSpec::new("", "single", 600, 1050).with_openable("right");
    let drawing = render(&spec).unwrap();
    let value = serde_json::to_value(&drawing.scene).unwrap();
    let elements = value["elements"].as_array().unwrap();

    let glass = elements
        .iter()
        .find(|e| e["role"].get("glass").is_some())
        .unwrap();
    assert_eq!(glass["role"], json!({ "glass": "clear" }));
    assert_eq!(glass["pane"], json!({ "band": "main", "index": 0 }));

    let hinge = elements
        .iter()
        .find(|e| e["role"].get("hinge-indicator").is_some())
        .unwrap();
    assert_eq!(hinge["role"], json!({ "hinge-indicator": "right" }));
    assert_eq!(hinge["shape"]["kind"], "polyline");
    assert_eq!(hinge["shape"]["points"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_door_layout_json() {
    let drawing = render(&WindowSpec::new("", "door-half-glazed", 838, 1981)).unwrap();
    let value: Value = serde_json::to_value(&drawing.window).unwrap();

    assert_eq!(value["layout"], json!({ "layout": "door", "style": "half-glazed" }));
    assert_eq!(value["glass"], "clear");
}

#[test]
fn test_spec_json_renders() {
    let json = r#"{
        "id": 7,
        "projectId": 2,
        "name": "Landing",
        "type": "triple-transom",
        "width": 1500,
        "height": 1800,
        "glassType": "low-e",
        "hasGeorgianBars": true,
        "georgianBarsHorizontal": 1,
        "openableCasements": "centre-left",
        "topCasementsOpenable": "right",
        "transomHeight": 500
    }"#;
    let spec = WindowSpec::from_json(json).unwrap();
    let drawing = render(&spec).unwrap();

    assert_eq!(drawing.type_id, "triple-transom");
    assert_eq!(
        drawing.scene.count(|r| matches!(r, Role::HingeIndicator(_))),
        2
    );
    assert_eq!(
        drawing.scene.count(|r| *r == Role::GeorgianBar(Axis::Vertical)),
        6
    );
}
