use crate::config::model::DeformMode;
use crate::cursor::tracker::CursorSample;
use crate::deform::Deformer;
use crate::foundation::core::Contour;
use crate::geometry::sampler::PolarContour;

const MIN_DISTANCE: f64 = 1e-3;

/// Immediate push-away of points near the raw pointer.
///
/// Inside `radius`, a point moves away from the pointer by `strength * (1 - d / radius)^2`.
/// Points outside stay at rest. No easing: the contour snaps every frame.
pub struct ProximityDeformer {
    polar: PolarContour,
    radius: f64,
    strength: f64,
    out: Contour,
}

impl ProximityDeformer {
    pub fn new(polar: PolarContour, radius: f64, strength: f64) -> Self {
        let out = polar.rest_contour();
        Self {
            polar,
            radius,
            strength,
            out,
        }
    }
}

impl Deformer for ProximityDeformer {
    fn mode(&self) -> DeformMode {
        DeformMode::ProximitySnap
    }

    fn step(&mut self, _dt_s: f64, cursor: &CursorSample) -> &Contour {
        for (out, pt) in self.out.points.iter_mut().zip(&self.polar.points) {
            *out = pt.base;
            let Some(pointer) = cursor.raw else {
                continue;
            };
            let away = pt.base - pointer;
            let dist = away.hypot();
            if dist >= self.radius {
                continue;
            }
            let dir = if dist > MIN_DISTANCE {
                away / dist
            } else {
                pt.dir
            };
            let falloff = 1.0 - dist / self.radius;
            *out = pt.base + dir * (self.strength * falloff * falloff);
        }
        &self.out
    }

    fn contour(&self) -> &Contour {
        &self.out
    }

    fn reset(&mut self) {
        self.out = self.polar.rest_contour();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deform/proximity.rs"]
mod tests;
