use super::*;
use serde_json::json;

#[test]
fn parses_css_rgba_function() {
    let c = Rgba::parse("rgba(128, 0, 128, 1)").unwrap();
    assert_eq!(c.to_rgba8(), [128, 0, 128, 255]);

    let c = Rgba::parse("RGB(255,255,0)").unwrap();
    assert_eq!(c.to_rgba8(), [255, 255, 0, 255]);
}

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Rgba = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Rgba::new(1.0, 0.0, 0.0, 1.0));

    let c: Rgba = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);
}

#[test]
fn parses_object_and_array() {
    let c: Rgba = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, Rgba::new(0.25, 0.5, 0.75, 1.0));

    let c: Rgba = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, Rgba::new(0.25, 0.5, 0.75, 0.9));
}

#[test]
fn rejects_garbage() {
    assert!(Rgba::parse("purple-ish").is_err());
    assert!(Rgba::parse("#12345").is_err());
    assert!(Rgba::parse("rgba(1, 2)").is_err());
}

#[test]
fn mix_endpoints_are_exact_and_midpoint_keeps_brightness() {
    let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
    let blue = Rgba::new(0.0, 0.0, 1.0, 0.0);
    assert_eq!(Rgba::mix(red, blue, 0.0), red);
    assert_eq!(Rgba::mix(red, blue, 1.0), blue);

    let mid = Rgba::mix(red, blue, 0.5);
    assert!((mid.r - 0.5f64.sqrt()).abs() < 1e-9);
    assert!((mid.b - 0.5f64.sqrt()).abs() < 1e-9);
    assert!((mid.a - 0.5).abs() < 1e-9);
}

#[test]
fn display_roundtrips_through_parse() {
    let c = Rgba::parse("rgba(10, 20, 30, 0.5)").unwrap();
    let again = Rgba::parse(&c.to_string()).unwrap();
    assert_eq!(c.to_rgba8(), again.to_rgba8());
}
