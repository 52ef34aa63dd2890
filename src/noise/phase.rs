//! Mapping contour points onto a circle in noise space.
//!
//! Each point gets an angle on a ring; the ring is then translated through the noise plane as
//! time advances. Neighbouring points land close together on the ring, and the last point
//! neighbours the first, so the perturbation is smooth all the way around the contour.

use std::f64::consts::TAU;

use crate::foundation::core::Vec2;
use crate::noise::simplex::NoiseField;

/// Where a point's ring angle comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseSource {
    /// `i / N` of a full turn. Monotonic in the point index.
    #[default]
    Index,
    /// Angle of the point's direction around the centroid. Monotonic only for star-shaped
    /// silhouettes.
    Angle,
}

impl PhaseSource {
    pub fn phase(self, index: usize, count: usize, dir: Vec2) -> f64 {
        match self {
            Self::Index => index as f64 / count.max(1) as f64 * TAU,
            Self::Angle => dir.atan2().rem_euclid(TAU),
        }
    }
}

/// Ring radius that spaces `count` evenly-phased points `frequency` apart in noise space.
pub fn ring_radius(frequency: f64, count: usize) -> f64 {
    frequency * count as f64 / TAU
}

/// Sample `noise` for a point at ring angle `phase` and time `time`.
pub fn ring_noise(
    noise: &(impl NoiseField + ?Sized),
    phase: f64,
    radius: f64,
    time: f64,
) -> f64 {
    let (s, c) = phase.sin_cos();
    noise.sample(radius * c + time, radius * s - time)
}

#[cfg(test)]
#[path = "../../tests/unit/noise/phase.rs"]
mod tests;
