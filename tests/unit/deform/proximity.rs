use super::*;
use crate::foundation::core::{Point, Vec2};
use crate::geometry::sampler::SampledContour;
use crate::noise::phase::PhaseSource;

fn square_ring() -> PolarContour {
    let s = SampledContour::from_points(vec![
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 100.0),
        Point::new(0.0, 100.0),
    ])
    .unwrap();
    PolarContour::from_samples(&s, PhaseSource::Index)
}

fn pointer(p: Option<Point>) -> CursorSample {
    CursorSample {
        local: Point::ORIGIN,
        raw: p,
        presence: 1.0,
        engaged: true,
    }
}

#[test]
fn no_pointer_means_rest_shape() {
    let polar = square_ring();
    let rest = polar.rest_contour();
    let mut d = ProximityDeformer::new(polar, 160.0, 26.0);
    assert_eq!(d.step(0.016, &pointer(None)), &rest);
}

#[test]
fn points_inside_radius_are_pushed_away_with_quadratic_falloff() {
    let polar = square_ring();
    let rest = polar.rest_contour();
    let mut d = ProximityDeformer::new(polar, 80.0, 26.0);
    // 40 to the left of point 0, within radius of point 0 only.
    let out = d.step(0.016, &pointer(Some(Point::new(-40.0, 0.0)))).clone();
    let falloff: f64 = 1.0 - 40.0 / 80.0;
    let expected = Point::new(26.0 * falloff * falloff, 0.0);
    assert!((out.points[0] - expected).hypot() < 1e-9);
    assert_eq!(out.points[1..], rest.points[1..]);
}

#[test]
fn pointer_on_a_point_uses_centroid_direction() {
    let polar = square_ring();
    let dir0 = polar.points[0].dir;
    let mut d = ProximityDeformer::new(polar, 80.0, 26.0);
    let out = d.step(0.016, &pointer(Some(Point::new(0.0, 0.0)))).clone();
    let moved: Vec2 = out.points[0] - Point::new(0.0, 0.0);
    assert!((moved - dir0 * 26.0).hypot() < 1e-9);
}

#[test]
fn snaps_back_immediately() {
    let polar = square_ring();
    let rest = polar.rest_contour();
    let mut d = ProximityDeformer::new(polar, 80.0, 26.0);
    d.step(0.016, &pointer(Some(Point::new(-10.0, 0.0))));
    assert_ne!(d.contour(), &rest);
    assert_eq!(d.step(0.016, &pointer(None)), &rest);
    assert_eq!(d.mode(), DeformMode::ProximitySnap);
}
