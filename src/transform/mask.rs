//! Translate-scale-translate placement of the deformed contour over the stage.

use crate::config::model::StageConfig;
use crate::foundation::core::{Affine, Point, Vec2};
use crate::foundation::error::{MaskError, MaskResult};
use crate::foundation::math::seed_from_str;
use crate::noise::simplex::{NoiseField, Simplex2};

/// `translate(c + shift) * scale(k) * translate(-c)`, where `c` is the viewbox centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskTransform {
    center: Point,
    shift: Vec2,
    scale: f64,
}

impl MaskTransform {
    pub fn from_stage(stage: &StageConfig) -> Self {
        Self {
            center: stage.viewbox().center(),
            shift: stage.shift_px(),
            scale: stage.scale,
        }
    }

    /// Same placement with a different scale (used by scale breathing).
    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn to_affine(&self) -> Affine {
        let c = self.center.to_vec2();
        Affine::translate(c + self.shift) * Affine::scale(self.scale) * Affine::translate(-c)
    }

    /// Silhouette-local -> stage.
    pub fn apply(&self, local: Point) -> Point {
        self.to_affine() * local
    }

    /// Stage -> silhouette-local: `((p - (c + shift)) / k) + c`.
    pub fn invert(&self, stage: Point) -> Point {
        let anchor = self.center + self.shift;
        self.center + (stage - anchor) / self.scale
    }

    /// SVG `transform` attribute value.
    pub fn svg_transform(&self) -> String {
        let anchor = self.center + self.shift;
        format!(
            "translate({},{}) scale({}) translate({},{})",
            anchor.x, anchor.y, self.scale, -self.center.x, -self.center.y
        )
    }
}

/// Slow noise-driven oscillation of the mask scale, independent of the contour breathing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScaleBreathing {
    /// Relative amplitude (`0.03` = ±3 %).
    pub amplitude: f64,
    /// Noise-space advance per millisecond.
    pub speed_per_ms: f64,
}

impl Default for ScaleBreathing {
    fn default() -> Self {
        Self {
            amplitude: 0.03,
            speed_per_ms: 0.0003,
        }
    }
}

impl ScaleBreathing {
    pub fn validate(&self) -> MaskResult<()> {
        if !(self.amplitude.is_finite() && (0.0..1.0).contains(&self.amplitude)) {
            return Err(MaskError::validation(
                "scale breathing amplitude must be in [0, 1)",
            ));
        }
        if !(self.speed_per_ms.is_finite() && self.speed_per_ms >= 0.0) {
            return Err(MaskError::validation(
                "scale breathing speed must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct ScaleBreather {
    cfg: ScaleBreathing,
    noise: Simplex2,
}

impl ScaleBreather {
    /// The noise is seeded from `seed` with a distinct suffix so it does not track the contour.
    pub fn new(cfg: ScaleBreathing, seed: &str) -> Self {
        Self {
            cfg,
            noise: Simplex2::new(seed_from_str(seed) ^ 0x5CA1_E0B5_EED0_0001),
        }
    }

    pub fn scale_at(&self, base: f64, time_ms: f64) -> f64 {
        let n = self.noise.sample(time_ms * self.cfg.speed_per_ms, 0.0);
        base * (1.0 + n * self.cfg.amplitude)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/mask.rs"]
mod tests;
