use super::*;

#[test]
fn viewbox_rejects_degenerate_dimensions() {
    assert!(Viewbox::new(0.0, 10.0).is_err());
    assert!(Viewbox::new(10.0, f64::NAN).is_err());
    assert!(Viewbox::new(1263.0, 1012.0).is_ok());
}

#[test]
fn viewbox_center_and_container_mapping() {
    let vb = Viewbox::new(200.0, 100.0).unwrap();
    assert_eq!(vb.center(), Point::new(100.0, 50.0));

    let p = vb.map_container(Point::new(50.0, 25.0), Size::new(100.0, 50.0));
    assert_eq!(p, Point::new(100.0, 50.0));
}

#[test]
fn contour_max_distance_requires_equal_lengths() {
    let a = Contour::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
    let b = Contour::new(vec![Point::new(0.0, 3.0), Point::new(1.0, 0.0)]);
    assert_eq!(a.max_distance(&b), Some(3.0));

    let c = Contour::new(vec![Point::ORIGIN]);
    assert_eq!(a.max_distance(&c), None);
}
