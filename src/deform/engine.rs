//! Noise breathing plus Gaussian cursor influence, eased toward each frame's target.
//!
//! Per point `i` with base radius `r0`, direction `d` and centroid `c`:
//!
//! 1. `r_breath = r0 + noise(phase, t) * amplitude * ramp`
//! 2. `w = exp(-|base - cursor|^2 / (2 sigma^2)) * presence`
//! 3. `r = max(r_min, r_breath + sign * strength * w)`
//! 4. `target = c + d * r`
//! 5. `out = prev + (target - prev) * blend(shape_smooth [+ return_boost * presence], dt)`
//!
//! Optional spatial smoothing runs on `target - base` between steps 4 and 5.

use crate::config::model::{DeformMode, MaskConfig};
use crate::cursor::tracker::CursorSample;
use crate::deform::Deformer;
use crate::foundation::core::{Contour, Point, Vec2};
use crate::foundation::math::frame_rate_blend;
use crate::geometry::sampler::PolarContour;
use crate::geometry::smooth::smooth_circular;
use crate::noise::phase::{ring_noise, ring_radius};
use crate::noise::simplex::NoiseField;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeformParams {
    pub amplitude: f64,
    pub ring_radius: f64,
    pub noise_speed: f64,
    pub ramp_s: f64,
    pub sigma: f64,
    pub strength: f64,
    pub sign: f64,
    pub min_radius: f64,
    pub shape_smooth: f64,
    pub return_boost: f64,
    pub spatial_passes: u32,
}

impl DeformParams {
    pub fn from_mask(mask: &MaskConfig, count: usize) -> Self {
        Self {
            amplitude: mask.noise_amplitude,
            ring_radius: ring_radius(mask.noise_frequency, count),
            noise_speed: mask.noise_speed,
            ramp_s: mask.ramp_ms / 1000.0,
            sigma: mask.sigma,
            strength: mask.strength,
            sign: mask.influence.sign(),
            min_radius: mask.min_radius,
            shape_smooth: mask.shape_smooth,
            return_boost: mask.return_boost,
            spatial_passes: mask.spatial_smooth_passes,
        }
    }
}

/// Gaussian falloff of cursor influence, scaled by presence.
pub fn influence_weight(base: Point, cursor: Point, sigma: f64, presence: f64) -> f64 {
    let d2 = (base - cursor).hypot2();
    (-d2 / (2.0 * sigma * sigma)).exp() * presence
}

/// Mutable per-mount animation history.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    /// Previous frame's output, one entry per contour point.
    pub prev: Vec<Point>,
    /// Accumulated noise time.
    pub time: f64,
    /// Amplitude ramp-in factor in `[0, 1]`.
    pub ramp: f64,
}

pub struct EasedDeformer<N: NoiseField> {
    polar: PolarContour,
    params: DeformParams,
    noise: N,
    state: AnimationState,
    offsets: Vec<Vec2>,
    scratch: Vec<Vec2>,
    out: Contour,
}

impl<N: NoiseField> EasedDeformer<N> {
    pub fn new(polar: PolarContour, params: DeformParams, noise: N) -> Self {
        let rest = polar.rest_contour();
        let n = polar.len();
        Self {
            polar,
            params,
            noise,
            state: AnimationState {
                prev: rest.points.clone(),
                time: 0.0,
                ramp: 0.0,
            },
            offsets: vec![Vec2::ZERO; n],
            scratch: Vec::with_capacity(n),
            out: rest,
        }
    }

    pub fn params(&self) -> &DeformParams {
        &self.params
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn polar(&self) -> &PolarContour {
        &self.polar
    }
}

impl<N: NoiseField> Deformer for EasedDeformer<N> {
    fn mode(&self) -> DeformMode {
        DeformMode::Eased
    }

    fn step(&mut self, dt_s: f64, cursor: &CursorSample) -> &Contour {
        let p = self.params;
        let st = &mut self.state;

        st.time += p.noise_speed * dt_s;
        st.ramp = if p.ramp_s > 0.0 {
            (st.ramp + dt_s / p.ramp_s).min(1.0)
        } else {
            1.0
        };
        let amp = p.amplitude * st.ramp;

        let c = self.polar.centroid;
        for (off, pt) in self.offsets.iter_mut().zip(&self.polar.points) {
            let n = if amp != 0.0 {
                ring_noise(&self.noise, pt.phase, p.ring_radius, st.time)
            } else {
                0.0
            };
            let r_breath = pt.base_radius + n * amp;
            let w = influence_weight(pt.base, cursor.local, p.sigma, cursor.presence);
            let r = (r_breath + p.sign * p.strength * w).max(p.min_radius);
            *off = (c + pt.dir * r) - pt.base;
        }

        smooth_circular(&mut self.offsets, p.spatial_passes, &mut self.scratch);

        // Snap back faster than we deform while the cursor is disengaging.
        let boost = if cursor.engaged {
            0.0
        } else {
            p.return_boost * cursor.presence
        };
        let a = frame_rate_blend(p.shape_smooth + boost, dt_s);

        for ((prev, out), (pt, off)) in st
            .prev
            .iter_mut()
            .zip(self.out.points.iter_mut())
            .zip(self.polar.points.iter().zip(&self.offsets))
        {
            let target = pt.base + *off;
            let next = *prev + (target - *prev) * a;
            *prev = next;
            *out = next;
        }

        &self.out
    }

    fn contour(&self) -> &Contour {
        &self.out
    }

    fn reset(&mut self) {
        let rest = self.polar.rest_contour();
        self.state.prev.clone_from(&rest.points);
        self.state.time = 0.0;
        self.state.ramp = 0.0;
        self.offsets.fill(Vec2::ZERO);
        self.out = rest;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deform/engine.rs"]
mod tests;
