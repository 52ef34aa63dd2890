use super::*;

#[test]
fn builtin_outline_parses() {
    let s = Silhouette::builtin().unwrap();
    assert!(s.length() > 1000.0);
    let b = s.bounds();
    assert!(b.x0 >= 99.0 && b.x1 <= 1164.0);
    assert!(b.y0 >= 95.0 && b.y1 <= 953.0);
    assert_eq!(s.data(), DEFAULT_SILHOUETTE);
}

#[test]
fn square_length_is_perimeter() {
    let s = Silhouette::parse("M0 0 L10 0 L10 10 L0 10 Z").unwrap();
    assert!((s.length() - 40.0).abs() < 1e-9);
}

#[test]
fn garbage_is_a_geometry_error() {
    let err = Silhouette::parse("M 0 0 X 10 10").unwrap_err();
    assert!(matches!(err, MaskError::Geometry(_)));
}

#[test]
fn zero_length_path_is_rejected() {
    let err = Silhouette::parse("M5 5 Z").unwrap_err();
    assert!(err.to_string().contains("non-zero length"));
}
