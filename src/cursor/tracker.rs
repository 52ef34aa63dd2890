//! Smoothed cursor position and presence in silhouette-local coordinates.

use crate::config::model::{MaskConfig, StageConfig};
use crate::foundation::core::{Point, Size, Viewbox};
use crate::foundation::math::{clamp01, frame_rate_blend, lerp};
use crate::transform::mask::MaskTransform;

/// What happens to the cursor target when the pointer leaves the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeavePolicy {
    /// Keep the last target; presence decays once the debounce window passes.
    #[default]
    Decay,
    /// Snap the target back to the viewbox centre.
    ResetToCenter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    Enter,
    Move,
    Leave,
    Cancel,
}

/// Pointer input in the containing surface's coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
    /// Size of the bound container at the time of the event.
    pub container: Size,
    pub time_ms: f64,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, position: Point, container: Size, time_ms: f64) -> Self {
        Self {
            kind,
            position,
            container,
            time_ms,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorTuning {
    pub follow: f64,
    pub debounce_ms: f64,
    pub presence_rise: f64,
    pub presence_fall: f64,
}

impl CursorTuning {
    pub fn from_mask(mask: &MaskConfig) -> Self {
        Self {
            follow: mask.cursor_follow,
            debounce_ms: mask.debounce_ms,
            presence_rise: mask.presence_rise,
            presence_fall: mask.presence_fall,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CursorState {
    /// Last pointer position in viewbox space; cleared on leave/cancel.
    pub raw: Option<Point>,
    /// Target in silhouette-local space.
    pub target: Point,
    /// Exponentially smoothed `target`.
    pub smoothed: Point,
    /// Recent-activity signal in `[0, 1]`.
    pub presence: f64,
    pub last_active_ms: Option<f64>,
}

/// Cursor data consumed by a deformer for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorSample {
    /// Smoothed cursor in silhouette-local space.
    pub local: Point,
    /// Raw pointer in viewbox space, if inside the container.
    pub raw: Option<Point>,
    pub presence: f64,
    /// Whether activity falls inside the debounce window.
    pub engaged: bool,
}

impl CursorSample {
    /// A cursor with no influence, parked at `local`.
    pub fn idle(local: Point) -> Self {
        Self {
            local,
            raw: None,
            presence: 0.0,
            engaged: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CursorTracker {
    state: CursorState,
    tuning: CursorTuning,
    policy: LeavePolicy,
    viewbox: Viewbox,
    transform: MaskTransform,
}

impl CursorTracker {
    pub fn new(stage: &StageConfig, mask: &MaskConfig) -> Self {
        let viewbox = stage.viewbox();
        let center = viewbox.center();
        Self {
            state: CursorState {
                raw: None,
                target: center,
                smoothed: center,
                presence: 0.0,
                last_active_ms: None,
            },
            tuning: CursorTuning::from_mask(mask),
            policy: mask.leave_policy,
            viewbox,
            transform: MaskTransform::from_stage(stage),
        }
    }

    pub fn policy(&self) -> LeavePolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: LeavePolicy) {
        if policy != self.policy {
            tracing::debug!(?policy, "cursor leave policy changed");
        }
        self.policy = policy;
    }

    pub fn state(&self) -> &CursorState {
        &self.state
    }

    /// Transform used to map pointer input back into silhouette-local space.
    pub fn set_transform(&mut self, transform: MaskTransform) {
        self.transform = transform;
    }

    pub fn handle(&mut self, ev: &PointerEvent) {
        match ev.kind {
            PointerKind::Enter | PointerKind::Move => {
                let stage_pos = self.viewbox.map_container(ev.position, ev.container);
                self.state.raw = Some(stage_pos);
                self.state.target = self.transform.invert(stage_pos);
                self.state.last_active_ms = Some(ev.time_ms);
            }
            PointerKind::Leave | PointerKind::Cancel => {
                self.state.raw = None;
                if self.policy == LeavePolicy::ResetToCenter {
                    self.state.target = self.viewbox.center();
                }
            }
        }
    }

    pub fn is_engaged(&self, now_ms: f64) -> bool {
        self.state
            .last_active_ms
            .is_some_and(|t| now_ms - t <= self.tuning.debounce_ms)
    }

    /// Advance smoothing by `dt_s` and report the cursor for this frame.
    pub fn step(&mut self, dt_s: f64, now_ms: f64) -> CursorSample {
        let engaged = self.is_engaged(now_ms);
        let tuning = self.tuning;
        let s = &mut self.state;

        let a = frame_rate_blend(tuning.follow, dt_s);
        s.smoothed += (s.target - s.smoothed) * a;

        let goal = if engaged { 1.0 } else { 0.0 };
        let k = if goal > s.presence {
            tuning.presence_rise
        } else {
            tuning.presence_fall
        };
        s.presence = clamp01(lerp(s.presence, goal, frame_rate_blend(k, dt_s)));

        CursorSample {
            local: s.smoothed,
            raw: s.raw,
            presence: s.presence,
            engaged,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cursor/tracker.rs"]
mod tests;
