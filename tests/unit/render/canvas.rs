use super::*;

#[test]
fn scales_and_floors_by_device_pixel_ratio() {
    let b = BackingStore::new(CssSize::new(100.5, 50.0), 2.0).unwrap();
    assert_eq!((b.width, b.height), (201, 100));
    let b = BackingStore::new(CssSize::new(10.0, 10.0), 1.25).unwrap();
    assert_eq!((b.width, b.height), (12, 12));
}

#[test]
fn invalid_ratio_falls_back_to_one() {
    let b = BackingStore::new(CssSize::new(30.0, 20.0), 0.0).unwrap();
    assert_eq!(b.device_pixel_ratio, 1.0);
    assert_eq!((b.width, b.height), (30, 20));
    let b = BackingStore::new(CssSize::new(30.0, 20.0), f64::NAN).unwrap();
    assert_eq!(b.device_pixel_ratio, 1.0);
}

#[test]
fn resize_reports_only_real_changes() {
    let mut b = BackingStore::new(CssSize::new(100.0, 100.0), 1.0).unwrap();
    assert!(!b.resize_if_needed(CssSize::new(100.4, 100.0), 1.0).unwrap());
    assert_eq!(b.css, CssSize::new(100.4, 100.0));
    assert!(b.resize_if_needed(CssSize::new(100.0, 100.0), 2.0).unwrap());
    assert_eq!((b.width, b.height), (200, 200));
}

#[test]
fn empty_or_huge_canvas_is_a_surface_error() {
    let err = BackingStore::new(CssSize::new(0.0, 10.0), 1.0).unwrap_err();
    assert!(matches!(err, TrailError::Surface(_)));
    let err = BackingStore::new(CssSize::new(70_000.0, 10.0), 1.0).unwrap_err();
    assert!(matches!(err, TrailError::Surface(_)));
}
