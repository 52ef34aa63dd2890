use super::*;

#[test]
fn zero_passes_is_identity() {
    let mut v = vec![Vec2::new(1.0, 0.0), Vec2::new(0.0, 2.0), Vec2::new(3.0, 3.0)];
    let before = v.clone();
    smooth_circular(&mut v, 0, &mut Vec::new());
    assert_eq!(v, before);
}

#[test]
fn constant_ring_is_a_fixed_point() {
    let mut v = vec![Vec2::new(4.0, -1.0); 16];
    smooth_circular(&mut v, 3, &mut Vec::new());
    for x in v {
        assert!((x - Vec2::new(4.0, -1.0)).hypot() < 1e-12);
    }
}

#[test]
fn spike_spreads_to_wrapped_neighbours() {
    let mut v = vec![Vec2::ZERO; 6];
    v[0] = Vec2::new(4.0, 0.0);
    smooth_circular(&mut v, 1, &mut Vec::new());
    assert_eq!(v[0].x, 2.0);
    assert_eq!(v[1].x, 1.0);
    assert_eq!(v[5].x, 1.0);
    assert_eq!(v[3].x, 0.0);
    let total: f64 = v.iter().map(|x| x.x).sum();
    assert!((total - 4.0).abs() < 1e-12);
}
