use super::*;
use crate::foundation::math::Rng64;

const FRAME_MS: f64 = 1000.0 / 60.0;
const DT: f64 = 1.0 / 60.0;

fn tracker(policy: LeavePolicy) -> (StageConfig, CursorTracker) {
    let stage = StageConfig::default();
    let mask = MaskConfig {
        leave_policy: policy,
        ..MaskConfig::default()
    };
    let t = CursorTracker::new(&stage, &mask);
    (stage, t)
}

fn container(stage: &StageConfig) -> Size {
    Size::new(stage.width, stage.height)
}

#[test]
fn starts_idle_at_center() {
    let (stage, t) = tracker(LeavePolicy::Decay);
    assert_eq!(t.state().target, stage.viewbox().center());
    assert_eq!(t.state().presence, 0.0);
    assert!(!t.is_engaged(0.0));
}

#[test]
fn move_is_inverse_transformed_into_local_space() {
    let (stage, mut t) = tracker(LeavePolicy::Decay);
    let xf = MaskTransform::from_stage(&stage);
    let local = Point::new(400.0, 300.0);
    let on_stage = xf.apply(local);
    t.handle(&PointerEvent::new(
        PointerKind::Move,
        on_stage,
        container(&stage),
        5.0,
    ));
    assert!((t.state().target - local).hypot() < 1e-9);
    let raw = t.state().raw.unwrap();
    assert!((raw - on_stage).hypot() < 1e-9);
    assert_eq!(t.state().last_active_ms, Some(5.0));
}

#[test]
fn container_coordinates_are_stretched_to_viewbox() {
    let (stage, mut t) = tracker(LeavePolicy::Decay);
    let half = Size::new(stage.width / 2.0, stage.height / 2.0);
    t.handle(&PointerEvent::new(
        PointerKind::Enter,
        Point::new(half.width / 2.0, half.height / 2.0),
        half,
        0.0,
    ));
    assert_eq!(t.state().raw, Some(stage.viewbox().center()));
}

#[test]
fn smoothed_position_converges_on_target() {
    let (stage, mut t) = tracker(LeavePolicy::Decay);
    t.handle(&PointerEvent::new(
        PointerKind::Move,
        Point::new(100.0, 100.0),
        container(&stage),
        0.0,
    ));
    let target = t.state().target;
    let first = t.step(DT, 0.0);
    let d0 = (first.local - target).hypot();
    for i in 1..400 {
        t.step(DT, i as f64 * FRAME_MS);
    }
    let d1 = (t.state().smoothed - target).hypot();
    assert!(d0 > 0.0);
    assert!(d1 < d0 * 1e-6);
}

#[test]
fn presence_stays_in_unit_interval() {
    let (stage, mut t) = tracker(LeavePolicy::Decay);
    let mut rng = Rng64::new(99);
    let mut now = 0.0;
    for _ in 0..5_000 {
        let dt = (rng.next_below(60) as f64) / 1000.0;
        now += dt * 1000.0;
        if rng.next_below(3) == 0 {
            t.handle(&PointerEvent::new(
                PointerKind::Move,
                Point::new(rng.next_below(1263) as f64, rng.next_below(1012) as f64),
                container(&stage),
                now,
            ));
        }
        let s = t.step(dt, now);
        assert!((0.0..=1.0).contains(&s.presence), "{}", s.presence);
    }
}

#[test]
fn presence_holds_through_debounce_then_decays() {
    let (stage, mut t) = tracker(LeavePolicy::Decay);
    let c = container(&stage);

    // Warm up: one second of continuous motion ending at t = 0.
    for f in (0..=60).rev() {
        let now = -(f as f64) * FRAME_MS;
        t.handle(&PointerEvent::new(
            PointerKind::Move,
            Point::new(600.0, 500.0),
            c,
            now,
        ));
        t.step(DT, now);
    }
    assert!(t.state().presence > 0.999);

    let mut frame = 1u32;
    loop {
        let now = f64::from(frame) * FRAME_MS;
        if now > 220.0 {
            break;
        }
        let s = t.step(DT, now);
        assert!(s.engaged);
        assert!(s.presence > 0.999, "frame {frame}: {}", s.presence);
        frame += 1;
    }

    let mut below_at = None;
    for extra in 0..300u32 {
        let now = f64::from(frame + extra) * FRAME_MS;
        let s = t.step(DT, now);
        assert!(!s.engaged);
        assert!(s.presence > 0.0);
        if below_at.is_none() && s.presence < 0.01 {
            below_at = Some(extra);
        }
    }
    let below_at = below_at.expect("presence never dropped below 0.01");
    assert!(below_at <= 45, "took {below_at} frames");
}

#[test]
fn decay_policy_keeps_target_on_leave() {
    let (stage, mut t) = tracker(LeavePolicy::Decay);
    let c = container(&stage);
    t.handle(&PointerEvent::new(PointerKind::Move, Point::new(50.0, 60.0), c, 0.0));
    let before = t.state().target;
    t.handle(&PointerEvent::new(PointerKind::Leave, Point::ORIGIN, c, 10.0));
    assert_eq!(t.state().target, before);
    assert_eq!(t.state().raw, None);
    assert_eq!(t.policy(), LeavePolicy::Decay);
}

#[test]
fn reset_policy_recenters_on_leave_and_cancel() {
    let (stage, mut t) = tracker(LeavePolicy::ResetToCenter);
    let c = container(&stage);
    for kind in [PointerKind::Leave, PointerKind::Cancel] {
        t.handle(&PointerEvent::new(PointerKind::Move, Point::new(50.0, 60.0), c, 0.0));
        t.handle(&PointerEvent::new(kind, Point::ORIGIN, c, 10.0));
        assert_eq!(t.state().target, stage.viewbox().center());
        assert_eq!(t.state().raw, None);
    }
    assert_eq!(t.policy(), LeavePolicy::ResetToCenter);
}

#[test]
fn policy_can_be_switched() {
    let (_, mut t) = tracker(LeavePolicy::Decay);
    t.set_policy(LeavePolicy::ResetToCenter);
    assert_eq!(t.policy(), LeavePolicy::ResetToCenter);
}
