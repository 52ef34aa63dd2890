//! Cursor-reactive SVG contour mask.
//!
//! A silhouette path is resampled into an evenly spaced ring of points, then animated every
//! frame: seeded simplex noise makes the outline breathe, and a Gaussian cursor field pushes
//! (or pulls) nearby points with eased temporal smoothing. Each frame serializes to SVG path
//! data plus a transform that places the ring in the stage viewbox.
//!
//! The public API is session-oriented:
//!
//! - Load and validate a [`SceneConfig`]
//! - Create and mount a [`MaskSession`]
//! - Feed it [`PointerEvent`]s and drive frames by timestamp or delta-time, optionally into a
//!   [`FrameSink`] through the scoped [`Running`] guard
//! - Turn frames into SVG with [`frame_document`] and into pixels with [`rasterize_document`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod config;
pub(crate) mod cursor;
pub(crate) mod deform;
pub(crate) mod geometry;
pub(crate) mod noise;
pub(crate) mod render;
pub(crate) mod transform;

pub use crate::foundation::core::{Affine, BezPath, Contour, Point, Rect, Size, Vec2, Viewbox};
pub use crate::foundation::error::{MaskError, MaskResult};
pub use crate::foundation::math::frame_rate_blend;

pub use crate::animation::clock::FrameClock;
pub use crate::animation::session::{
    FrameOutcome, FrameSink, InMemorySink, MaskFrame, MaskSession, Running, SinkConfig,
};
pub use crate::config::model::{
    DeformMode, Influence, MAX_PRECISION, MaskConfig, SceneConfig, StageConfig,
};
pub use crate::cursor::tracker::{
    CursorSample, CursorState, CursorTracker, CursorTuning, LeavePolicy, PointerEvent,
    PointerKind,
};
pub use crate::deform::engine::{AnimationState, DeformParams, EasedDeformer, influence_weight};
pub use crate::deform::proximity::ProximityDeformer;
pub use crate::deform::{Deformer, create_deformer};
pub use crate::geometry::sampler::{PolarContour, PolarPoint, SampledContour, sample_contour};
pub use crate::geometry::serialize::{PathFormat, path_data, to_bez_path, write_bez_path};
pub use crate::geometry::silhouette::{ARCLEN_ACCURACY, DEFAULT_SILHOUETTE, Silhouette};
pub use crate::geometry::smooth::smooth_circular;
pub use crate::noise::phase::{PhaseSource, ring_noise, ring_radius};
pub use crate::noise::simplex::{FlatNoise, NoiseField, Simplex2};
pub use crate::render::raster::{RasterFrame, rasterize_document, write_png};
pub use crate::render::svg::{DocumentStyle, frame_document};
pub use crate::transform::mask::{MaskTransform, ScaleBreather, ScaleBreathing};
