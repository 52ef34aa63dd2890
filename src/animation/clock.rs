/// Derives clamped per-frame delta-times from display-refresh timestamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt_s: f64,
}

impl FrameClock {
    pub fn new(max_dt_s: f64) -> Self {
        Self {
            last_ms: None,
            max_dt_s,
        }
    }

    /// Timestamp of the most recent frame.
    pub fn now_ms(&self) -> Option<f64> {
        self.last_ms
    }

    /// Record a frame at `now_ms`; returns the elapsed seconds (0 on the first frame).
    ///
    /// A non-finite timestamp yields 0 and leaves the clock where it was.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        if !now_ms.is_finite() {
            tracing::warn!(now_ms, "non-finite frame timestamp ignored");
            return 0.0;
        }
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).clamp(0.0, self.max_dt_s),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }

    /// Advance by a synthetic delta; returns `(dt, now_ms)` with `dt` clamped.
    ///
    /// A non-finite delta counts as 0.
    pub fn advance(&mut self, dt_s: f64) -> (f64, f64) {
        let dt_s = if dt_s.is_finite() {
            dt_s.max(0.0)
        } else {
            tracing::warn!(dt_s, "non-finite frame delta ignored");
            0.0
        };
        let last = self.last_ms.unwrap_or(0.0);
        let now = match last + dt_s * 1000.0 {
            t if t.is_finite() => t,
            _ => last,
        };
        self.last_ms = Some(now);
        (dt_s.min(self.max_dt_s), now)
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
