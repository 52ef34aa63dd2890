use super::*;

fn stage() -> StageConfig {
    StageConfig {
        width: 1000.0,
        height: 800.0,
        scale: 1.5,
        shift_x_pct: 10.0,
        shift_y_pct: -5.0,
    }
}

#[test]
fn center_maps_to_center_plus_shift() {
    let t = MaskTransform::from_stage(&stage());
    let p = t.apply(Point::new(500.0, 400.0));
    assert!((p.x - 600.0).abs() < 1e-9);
    assert!((p.y - 360.0).abs() < 1e-9);
}

#[test]
fn forward_scales_about_center() {
    let t = MaskTransform::from_stage(&stage());
    let p = t.apply(Point::new(600.0, 400.0));
    assert!((p.x - 750.0).abs() < 1e-9);
    assert!((p.y - 360.0).abs() < 1e-9);
}

#[test]
fn inverse_round_trips_for_many_configs() {
    for scale in [0.25, 1.0, 1.1, 3.0] {
        for (sx, sy) in [(0.0, 0.0), (7.0, 10.0), (-30.0, 55.0)] {
            let s = StageConfig {
                scale,
                shift_x_pct: sx,
                shift_y_pct: sy,
                ..stage()
            };
            let t = MaskTransform::from_stage(&s);
            for p in [
                Point::new(0.0, 0.0),
                Point::new(123.4, 567.8),
                Point::new(-50.0, 2000.0),
            ] {
                let back = t.invert(t.apply(p));
                assert!((back - p).hypot() < 1e-9, "{p:?} -> {back:?}");
                let fwd = t.apply(t.invert(p));
                assert!((fwd - p).hypot() < 1e-9);
            }
        }
    }
}

#[test]
fn inverse_matches_affine_inverse() {
    let t = MaskTransform::from_stage(&stage());
    let p = Point::new(321.0, 77.0);
    let a = t.invert(p);
    let b = t.to_affine().inverse() * p;
    assert!((a - b).hypot() < 1e-9);
}

#[test]
fn svg_transform_string() {
    let t = MaskTransform::from_stage(&StageConfig {
        width: 200.0,
        height: 100.0,
        scale: 1.1,
        shift_x_pct: 10.0,
        shift_y_pct: 0.0,
    });
    assert_eq!(
        t.svg_transform(),
        "translate(120,50) scale(1.1) translate(-100,-50)"
    );
}

#[test]
fn breathing_stays_within_amplitude() {
    let b = ScaleBreather::new(ScaleBreathing::default(), "seed");
    for i in 0..200 {
        let k = b.scale_at(1.1, i as f64 * 37.0);
        assert!(k >= 1.1 * 0.97 - 1e-12 && k <= 1.1 * 1.03 + 1e-12);
    }
    assert_eq!(b.scale_at(2.0, 0.0), 2.0);
}

#[test]
fn breathing_amplitude_is_validated() {
    let bad = ScaleBreathing {
        amplitude: 1.0,
        ..ScaleBreathing::default()
    };
    assert!(bad.validate().is_err());
    ScaleBreathing::default().validate().unwrap();
}
