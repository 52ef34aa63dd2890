use kurbo::{ParamCurve, ParamCurveArclen, PathSeg};

use crate::foundation::core::{Contour, Point, Vec2};
use crate::foundation::error::{MaskError, MaskResult};
use crate::geometry::silhouette::{ARCLEN_ACCURACY, Silhouette};
use crate::noise::phase::PhaseSource;

const MIN_DIR_LEN: f64 = 1e-6;

/// `N` points at equal arc-length spacing along a silhouette, plus their centroid.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SampledContour {
    pub points: Vec<Point>,
    pub centroid: Point,
}

impl SampledContour {
    /// Wrap an already-sampled ring; the centroid is the mean of the points.
    pub fn from_points(points: Vec<Point>) -> MaskResult<Self> {
        if points.is_empty() {
            return Err(MaskError::validation("sampled contour must not be empty"));
        }
        let sum = points
            .iter()
            .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
        let centroid = (sum / points.len() as f64).to_point();
        Ok(Self { points, centroid })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Sample `count` points at uniform arc-length intervals, starting at the path start.
///
/// Point `i` sits at `i / count` of the total length, so the last point is one step short of
/// the start and the ring closes back onto point 0.
#[tracing::instrument(skip(silhouette), fields(length = silhouette.length()))]
pub fn sample_contour(silhouette: &Silhouette, count: usize) -> MaskResult<SampledContour> {
    if count == 0 {
        return Err(MaskError::validation("sample count must be > 0"));
    }

    let segs: Vec<(PathSeg, f64)> = silhouette
        .path()
        .segments()
        .map(|seg| (seg, seg.arclen(ARCLEN_ACCURACY)))
        .filter(|(_, len)| *len > 0.0)
        .collect();
    let total: f64 = segs.iter().map(|(_, len)| len).sum();
    if segs.is_empty() || !total.is_finite() || total <= 0.0 {
        return Err(MaskError::geometry("silhouette has no measurable segments"));
    }

    let mut points = Vec::with_capacity(count);
    let mut seg_idx = 0usize;
    let mut seg_start = 0.0f64;
    for i in 0..count {
        let target = (i as f64 / count as f64) * total;
        while seg_idx + 1 < segs.len() && target >= seg_start + segs[seg_idx].1 {
            seg_start += segs[seg_idx].1;
            seg_idx += 1;
        }
        let (seg, len) = segs[seg_idx];
        let local = (target - seg_start).clamp(0.0, len);
        let t = seg.inv_arclen(local, ARCLEN_ACCURACY);
        points.push(seg.eval(t));
    }

    SampledContour::from_points(points)
}

/// Per-point polar data derived once from a sampled contour.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PolarPoint {
    /// Unit direction from the centroid.
    pub dir: Vec2,
    /// Distance from the centroid.
    pub base_radius: f64,
    /// Angle on the noise ring, in `[0, TAU)`.
    pub phase: f64,
    /// Rest position, `centroid + dir * base_radius`.
    pub base: Point,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PolarContour {
    pub centroid: Point,
    pub points: Vec<PolarPoint>,
}

impl PolarContour {
    pub fn from_samples(samples: &SampledContour, phase: PhaseSource) -> Self {
        let c = samples.centroid;
        let n = samples.len();
        let points = samples
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let d = *p - c;
                let len = d.hypot();
                let dir = d / len.max(MIN_DIR_LEN);
                PolarPoint {
                    dir,
                    base_radius: len,
                    phase: phase.phase(i, n, dir),
                    base: c + dir * len,
                }
            })
            .collect();
        Self {
            centroid: c,
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The undeformed ring.
    pub fn rest_contour(&self) -> Contour {
        Contour::new(self.points.iter().map(|p| p.base).collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/sampler.rs"]
mod tests;
