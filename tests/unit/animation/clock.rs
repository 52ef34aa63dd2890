use super::*;

#[test]
fn first_tick_is_zero_then_deltas() {
    let mut c = FrameClock::new(0.033);
    assert_eq!(c.tick(1000.0), 0.0);
    assert!((c.tick(1016.0) - 0.016).abs() < 1e-12);
    assert_eq!(c.now_ms(), Some(1016.0));
}

#[test]
fn stalls_and_backwards_time_are_clamped() {
    let mut c = FrameClock::new(0.033);
    c.tick(0.0);
    assert_eq!(c.tick(5000.0), 0.033);
    assert_eq!(c.tick(4000.0), 0.0);
}

#[test]
fn advance_accumulates_unclamped_time() {
    let mut c = FrameClock::new(0.033);
    let (dt, now) = c.advance(0.1);
    assert_eq!(dt, 0.033);
    assert!((now - 100.0).abs() < 1e-9);
    let (_, now) = c.advance(0.01);
    assert!((now - 110.0).abs() < 1e-9);
    c.reset();
    assert_eq!(c.now_ms(), None);
}

#[test]
fn non_finite_timestamps_are_ignored() {
    let mut c = FrameClock::new(0.033);
    assert_eq!(c.tick(f64::NAN), 0.0);
    assert_eq!(c.now_ms(), None);
    c.tick(1000.0);
    assert_eq!(c.tick(f64::NAN), 0.0);
    assert_eq!(c.tick(f64::INFINITY), 0.0);
    assert_eq!(c.now_ms(), Some(1000.0));
    assert!((c.tick(1016.0) - 0.016).abs() < 1e-12);
}

#[test]
fn non_finite_deltas_count_as_zero() {
    let mut c = FrameClock::new(0.033);
    let (_, before) = c.advance(0.01);
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let (dt, now) = c.advance(bad);
        assert_eq!(dt, 0.0);
        assert_eq!(now, before);
    }
    let (dt, now) = c.advance(f64::MAX);
    assert_eq!(dt, 0.033);
    assert!(now.is_finite());
}
