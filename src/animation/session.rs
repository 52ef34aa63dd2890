//! Frame scheduling for one mask instance.
//!
//! A [`MaskSession`] owns the cursor tracker, the deformer, and the clock. Callers drive it
//! either with display timestamps ([`MaskSession::tick`]) or with synthetic delta-times
//! ([`MaskSession::advance`]). [`MaskSession::start`] binds the session to a [`FrameSink`] and
//! returns a [`Running`] guard that detaches input and closes the sink when dropped.

use std::collections::VecDeque;

use crate::animation::clock::FrameClock;
use crate::config::model::{MaskConfig, SceneConfig, StageConfig};
use crate::cursor::tracker::{CursorSample, CursorTracker, PointerEvent};
use crate::deform::{Deformer, create_deformer};
use crate::foundation::core::{Contour, Viewbox};
use crate::foundation::error::{MaskError, MaskResult};
use crate::geometry::sampler::{PolarContour, sample_contour};
use crate::geometry::serialize::path_data;
use crate::geometry::silhouette::Silhouette;
use crate::transform::mask::{MaskTransform, ScaleBreather};

/// Everything needed to draw one frame of the mask.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskFrame {
    /// Rendered frame counter, starting at 0 after each mount.
    pub index: u64,
    pub time_ms: f64,
    pub contour: Contour,
    /// Serialized closed path in silhouette-local coordinates.
    pub path_data: String,
    /// SVG transform placing the contour in the viewbox.
    pub transform: String,
    pub scale: f64,
    pub presence: f64,
    pub debug: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FrameOutcome {
    /// Geometry is not ready; nothing was drawn.
    Skipped,
    Rendered(MaskFrame),
}

impl FrameOutcome {
    pub fn frame(&self) -> Option<&MaskFrame> {
        match self {
            FrameOutcome::Skipped => None,
            FrameOutcome::Rendered(f) => Some(f),
        }
    }
}

/// Configuration provided to a [`FrameSink`] when a session starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SinkConfig {
    pub viewbox: Viewbox,
    pub points: usize,
}

/// Consumer of rendered frames.
///
/// Ordering contract: `push_frame` receives frames in strictly increasing `index` order between
/// one `begin` and the matching `end`.
pub trait FrameSink {
    fn begin(&mut self, cfg: SinkConfig) -> MaskResult<()>;
    fn push_frame(&mut self, frame: &MaskFrame) -> MaskResult<()>;
    fn end(&mut self) -> MaskResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    ended: bool,
    pub frames: Vec<MaskFrame>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> MaskResult<()> {
        self.cfg = Some(cfg);
        self.ended = false;
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, frame: &MaskFrame) -> MaskResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn end(&mut self) -> MaskResult<()> {
        self.ended = true;
        Ok(())
    }
}

struct Mounted {
    polar: PolarContour,
    deformer: Box<dyn Deformer>,
    frames: u64,
}

pub struct MaskSession {
    stage: StageConfig,
    mask: MaskConfig,
    silhouette: Silhouette,
    base_transform: MaskTransform,
    breather: Option<ScaleBreather>,
    tracker: CursorTracker,
    clock: FrameClock,
    pending: VecDeque<PointerEvent>,
    mounted: Option<Mounted>,
}

impl std::fmt::Debug for MaskSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaskSession")
            .field("stage", &self.stage)
            .field("points", &self.mask.points)
            .field("mounted", &self.mounted.is_some())
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}

impl MaskSession {
    /// Validate `scene` and parse its silhouette. Geometry is built on [`MaskSession::mount`].
    pub fn new(scene: &SceneConfig) -> MaskResult<Self> {
        scene.validate()?;
        let silhouette = scene.silhouette()?;
        let base_transform = MaskTransform::from_stage(&scene.stage);
        let breather = scene
            .mask
            .scale_breathing
            .map(|b| ScaleBreather::new(b, &scene.mask.seed));
        Ok(Self {
            stage: scene.stage,
            mask: scene.mask.clone(),
            silhouette,
            base_transform,
            breather,
            tracker: CursorTracker::new(&scene.stage, &scene.mask),
            clock: FrameClock::new(scene.mask.max_dt_s),
            pending: VecDeque::new(),
            mounted: None,
        })
    }

    pub fn stage(&self) -> &StageConfig {
        &self.stage
    }

    pub fn mask(&self) -> &MaskConfig {
        &self.mask
    }

    pub fn silhouette(&self) -> &Silhouette {
        &self.silhouette
    }

    pub fn tracker(&self) -> &CursorTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut CursorTracker {
        &mut self.tracker
    }

    /// Timestamp of the last processed frame.
    pub fn now_ms(&self) -> Option<f64> {
        self.clock.now_ms()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Rest contour of the mounted geometry.
    pub fn rest_contour(&self) -> Option<Contour> {
        self.mounted.as_ref().map(|m| m.polar.rest_contour())
    }

    /// Sample the silhouette and build a fresh deformer.
    #[tracing::instrument(skip(self), fields(points = self.mask.points))]
    pub fn mount(&mut self) -> MaskResult<()> {
        let samples = sample_contour(&self.silhouette, self.mask.points)?;
        let polar = PolarContour::from_samples(&samples, self.mask.phase_source);
        let deformer = create_deformer(polar.clone(), &self.mask);
        tracing::debug!(mode = ?deformer.mode(), "mask geometry mounted");
        self.mounted = Some(Mounted {
            polar,
            deformer,
            frames: 0,
        });
        self.clock.reset();
        Ok(())
    }

    /// Drop geometry, animation history and cursor state. The leave policy is kept.
    pub fn unmount(&mut self) {
        if self.mounted.take().is_some() {
            tracing::debug!("mask geometry unmounted");
        }
        let policy = self.tracker.policy();
        self.tracker = CursorTracker::new(&self.stage, &self.mask);
        self.tracker.set_policy(policy);
        self.detach();
    }

    /// Change the point count. Mounted geometry is rebuilt immediately.
    pub fn set_point_count(&mut self, points: usize) -> MaskResult<()> {
        if points == 0 {
            return Err(MaskError::validation("mask points must be > 0"));
        }
        self.mask.points = points;
        if self.is_mounted() {
            self.mount()?;
        }
        Ok(())
    }

    /// Replace the silhouette. Mounted geometry is rebuilt immediately.
    pub fn set_silhouette(&mut self, silhouette: Silhouette) -> MaskResult<()> {
        self.silhouette = silhouette;
        if self.is_mounted() {
            self.mount()?;
        }
        Ok(())
    }

    /// Queue pointer input; it is applied at the start of the next frame.
    pub fn push_pointer(&mut self, ev: PointerEvent) {
        self.pending.push_back(ev);
    }

    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    /// Process a frame at display timestamp `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> FrameOutcome {
        let dt = self.clock.tick(now_ms);
        let now_ms = self.clock.now_ms().unwrap_or(0.0);
        self.frame(dt, now_ms)
    }

    /// Process a frame `dt_s` seconds after the previous one.
    pub fn advance(&mut self, dt_s: f64) -> FrameOutcome {
        let (dt, now_ms) = self.clock.advance(dt_s);
        self.frame(dt, now_ms)
    }

    /// Bind this session to `sink` until the returned guard is stopped or dropped.
    pub fn start<'a, S: FrameSink>(&'a mut self, sink: &'a mut S) -> MaskResult<Running<'a, S>> {
        if !self.is_mounted() {
            self.mount()?;
        }
        sink.begin(SinkConfig {
            viewbox: self.stage.viewbox(),
            points: self.mask.points,
        })?;
        tracing::debug!(points = self.mask.points, "mask session started");
        Ok(Running {
            session: self,
            sink,
            pushed: 0,
            stopped: false,
        })
    }

    fn detach(&mut self) {
        self.pending.clear();
        self.clock.reset();
    }

    fn frame(&mut self, dt_s: f64, now_ms: f64) -> FrameOutcome {
        let transform = match &self.breather {
            Some(b) => self
                .base_transform
                .with_scale(b.scale_at(self.base_transform.scale(), now_ms)),
            None => self.base_transform,
        };
        self.tracker.set_transform(transform);
        while let Some(ev) = self.pending.pop_front() {
            self.tracker.handle(&ev);
        }
        let cursor: CursorSample = self.tracker.step(dt_s, now_ms);

        let Some(m) = self.mounted.as_mut() else {
            tracing::debug!(now_ms, "mask geometry not ready; frame skipped");
            return FrameOutcome::Skipped;
        };
        let contour = m.deformer.step(dt_s, &cursor).clone();
        let path = path_data(&contour.points, self.mask.path_format, self.mask.precision);
        let index = m.frames;
        m.frames += 1;
        FrameOutcome::Rendered(MaskFrame {
            index,
            time_ms: now_ms,
            contour,
            path_data: path,
            transform: transform.svg_transform(),
            scale: transform.scale(),
            presence: cursor.presence,
            debug: self.mask.debug,
        })
    }
}

/// A session bound to a sink. Dropping the guard stops the loop.
pub struct Running<'a, S: FrameSink> {
    session: &'a mut MaskSession,
    sink: &'a mut S,
    pushed: u64,
    stopped: bool,
}

impl<S: FrameSink> Running<'_, S> {
    pub fn session(&self) -> &MaskSession {
        self.session
    }

    pub fn pointer(&mut self, ev: PointerEvent) {
        self.session.push_pointer(ev);
    }

    /// Process a frame at `now_ms`; returns whether a frame reached the sink.
    pub fn frame(&mut self, now_ms: f64) -> MaskResult<bool> {
        let outcome = self.session.tick(now_ms);
        self.deliver(outcome)
    }

    /// Process a frame `dt_s` seconds after the previous one.
    pub fn advance(&mut self, dt_s: f64) -> MaskResult<bool> {
        let outcome = self.session.advance(dt_s);
        self.deliver(outcome)
    }

    /// Detach input and close the sink; returns the number of frames delivered.
    pub fn stop(mut self) -> MaskResult<u64> {
        self.stopped = true;
        self.session.detach();
        self.sink.end()?;
        tracing::debug!(frames = self.pushed, "mask session stopped");
        Ok(self.pushed)
    }

    fn deliver(&mut self, outcome: FrameOutcome) -> MaskResult<bool> {
        match outcome {
            FrameOutcome::Skipped => Ok(false),
            FrameOutcome::Rendered(f) => {
                self.sink.push_frame(&f)?;
                self.pushed += 1;
                Ok(true)
            }
        }
    }
}

impl<S: FrameSink> Drop for Running<'_, S> {
    fn drop(&mut self) {
        if self.stopped {
            return;
        }
        self.session.detach();
        tracing::debug!(frames = self.pushed, "mask session dropped while running");
        if let Err(e) = self.sink.end() {
            tracing::warn!(error = %e, "frame sink failed to close");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/session.rs"]
mod tests;
