use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::cursor::tracker::LeavePolicy;
use crate::foundation::core::{Vec2, Viewbox};
use crate::foundation::error::{MaskError, MaskResult};
use crate::geometry::serialize::PathFormat;
use crate::geometry::silhouette::Silhouette;
use crate::noise::phase::PhaseSource;
use crate::transform::mask::ScaleBreathing;

/// Scale/shift/dimensions shared by every consumer of the stage (mask, transform, renderers).
///
/// Constructed once and passed by reference so every consumer agrees on the same alignment.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StageConfig {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
    /// Horizontal shift in percent of `width`.
    pub shift_x_pct: f64,
    /// Vertical shift in percent of `height`.
    pub shift_y_pct: f64,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            width: 1263.0,
            height: 1012.0,
            scale: 1.1,
            shift_x_pct: 7.0,
            shift_y_pct: 10.0,
        }
    }
}

impl StageConfig {
    pub fn validate(&self) -> MaskResult<()> {
        Viewbox::new(self.width, self.height)?;
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(MaskError::validation("stage scale must be finite and > 0"));
        }
        if !self.shift_x_pct.is_finite() || !self.shift_y_pct.is_finite() {
            return Err(MaskError::validation("stage shift must be finite"));
        }
        Ok(())
    }

    pub fn viewbox(&self) -> Viewbox {
        Viewbox {
            width: self.width,
            height: self.height,
        }
    }

    /// Shift converted from percentages into viewbox units.
    pub fn shift_px(&self) -> Vec2 {
        Vec2::new(
            self.shift_x_pct / 100.0 * self.width,
            self.shift_y_pct / 100.0 * self.height,
        )
    }
}

/// Direction of the cursor influence on the contour radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Influence {
    #[default]
    Repel,
    Attract,
}

impl Influence {
    pub fn sign(self) -> f64 {
        match self {
            Self::Repel => 1.0,
            Self::Attract => -1.0,
        }
    }
}

/// Which deformation variant drives the contour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeformMode {
    /// Noise breathing plus Gaussian cursor influence, eased over time.
    #[default]
    Eased,
    /// Immediate radial push-away inside a cutoff radius around the raw pointer.
    ProximitySnap,
}

/// Per-mask tuning. Rates are per-frame constants calibrated at 60 Hz.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MaskConfig {
    pub points: usize,
    pub noise_amplitude: f64,
    /// Noise-space distance between neighbouring contour points.
    pub noise_frequency: f64,
    /// Noise time advance per second.
    pub noise_speed: f64,
    pub phase_source: PhaseSource,
    pub seed: String,
    pub ramp_ms: f64,
    pub cursor_follow: f64,
    pub debounce_ms: f64,
    pub presence_rise: f64,
    pub presence_fall: f64,
    pub return_boost: f64,
    pub shape_smooth: f64,
    pub spatial_smooth_passes: u32,
    pub sigma: f64,
    pub strength: f64,
    pub influence: Influence,
    pub min_radius: f64,
    pub max_dt_s: f64,
    pub leave_policy: LeavePolicy,
    pub mode: DeformMode,
    /// Cutoff radius for [`DeformMode::ProximitySnap`].
    pub proximity_radius: f64,
    pub scale_breathing: Option<ScaleBreathing>,
    pub path_format: PathFormat,
    /// Decimal places written per coordinate, at most [`MAX_PRECISION`].
    pub precision: usize,
    pub debug: bool,
}

/// Upper bound on [`MaskConfig::precision`].
pub const MAX_PRECISION: usize = 6;

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            points: 1000,
            noise_amplitude: 18.0,
            noise_frequency: 0.012,
            noise_speed: 0.22,
            phase_source: PhaseSource::Index,
            seed: "preloader-simplex".to_string(),
            ramp_ms: 300.0,
            cursor_follow: 0.12,
            debounce_ms: 220.0,
            presence_rise: 0.35,
            presence_fall: 0.12,
            return_boost: 0.14,
            shape_smooth: 0.38,
            spatial_smooth_passes: 0,
            sigma: 150.0,
            strength: 26.0,
            influence: Influence::Repel,
            min_radius: 2.0,
            max_dt_s: 0.033,
            leave_policy: LeavePolicy::Decay,
            mode: DeformMode::Eased,
            proximity_radius: 160.0,
            scale_breathing: None,
            path_format: PathFormat::Polyline,
            precision: 1,
            debug: false,
        }
    }
}

impl MaskConfig {
    pub fn validate(&self) -> MaskResult<()> {
        if self.points == 0 {
            return Err(MaskError::validation("mask points must be > 0"));
        }
        for (name, v) in [
            ("cursor_follow", self.cursor_follow),
            ("presence_rise", self.presence_rise),
            ("presence_fall", self.presence_fall),
            ("shape_smooth", self.shape_smooth),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(MaskError::validation(format!(
                    "mask {name} must be in [0, 1], got {v}"
                )));
            }
        }
        for (name, v) in [
            ("noise_amplitude", self.noise_amplitude),
            ("noise_frequency", self.noise_frequency),
            ("noise_speed", self.noise_speed),
            ("ramp_ms", self.ramp_ms),
            ("debounce_ms", self.debounce_ms),
            ("return_boost", self.return_boost),
            ("strength", self.strength),
            ("proximity_radius", self.proximity_radius),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(MaskError::validation(format!(
                    "mask {name} must be finite and >= 0, got {v}"
                )));
            }
        }
        if !(self.min_radius.is_finite() && self.min_radius > 0.0) {
            return Err(MaskError::validation(format!(
                "mask min_radius must be finite and > 0, got {}",
                self.min_radius
            )));
        }
        if self.precision > MAX_PRECISION {
            return Err(MaskError::validation(format!(
                "mask precision must be <= {MAX_PRECISION}, got {}",
                self.precision
            )));
        }
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(MaskError::validation("mask sigma must be finite and > 0"));
        }
        if !(self.max_dt_s.is_finite() && self.max_dt_s > 0.0) {
            return Err(MaskError::validation("mask max_dt_s must be finite and > 0"));
        }
        if self.spatial_smooth_passes > 4 {
            return Err(MaskError::validation(
                "mask spatial_smooth_passes must be <= 4",
            ));
        }
        if let Some(b) = &self.scale_breathing {
            b.validate()?;
        }
        self.path_format.validate()?;
        Ok(())
    }
}

/// Complete configuration for one mask instance.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub stage: StageConfig,
    pub mask: MaskConfig,
    /// SVG path data of the silhouette. `None` uses the built-in outline.
    pub silhouette: Option<String>,
}

impl SceneConfig {
    /// Parse a scene from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> MaskResult<Self> {
        let scene: SceneConfig = serde_json::from_reader(r)
            .map_err(|e| MaskError::config(format!("parse scene JSON: {e}")))?;
        scene.validate()?;
        Ok(scene)
    }

    /// Parse a scene from a JSON file on disk and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> MaskResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            MaskError::config(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> MaskResult<()> {
        self.stage.validate()?;
        self.mask.validate()
    }

    pub fn silhouette(&self) -> MaskResult<Silhouette> {
        match &self.silhouette {
            Some(d) => Silhouette::parse(d),
            None => Silhouette::builtin(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
