pub(crate) mod engine;
pub(crate) mod proximity;

use crate::config::model::{DeformMode, MaskConfig};
use crate::cursor::tracker::CursorSample;
use crate::foundation::core::Contour;
use crate::geometry::sampler::PolarContour;
use crate::noise::simplex::Simplex2;

/// Per-frame contour update driven by cursor input and elapsed time.
///
/// Point count and order never change between frames.
pub trait Deformer {
    fn mode(&self) -> DeformMode;

    /// Advance by `dt_s` seconds and return the new contour.
    fn step(&mut self, dt_s: f64, cursor: &CursorSample) -> &Contour;

    /// Most recent output (the rest shape before the first step).
    fn contour(&self) -> &Contour;

    /// Drop animation history and return to the rest shape.
    fn reset(&mut self);
}

pub fn create_deformer(polar: PolarContour, mask: &MaskConfig) -> Box<dyn Deformer> {
    match mask.mode {
        DeformMode::Eased => {
            let params = engine::DeformParams::from_mask(mask, polar.len());
            let noise = Simplex2::from_seed_str(&mask.seed);
            Box::new(engine::EasedDeformer::new(polar, params, noise))
        }
        DeformMode::ProximitySnap => Box::new(proximity::ProximityDeformer::new(
            polar,
            mask.proximity_radius,
            mask.strength,
        )),
    }
}
