use kurbo::{ParamCurveArclen, Shape};

use crate::foundation::core::{BezPath, Rect};
use crate::foundation::error::{MaskError, MaskResult};

/// Arc-length accuracy used when measuring silhouette segments.
pub const ARCLEN_ACCURACY: f64 = 1e-3;

/// Head-and-shoulders outline in the default 1263×1012 viewbox.
pub const DEFAULT_SILHOUETTE: &str = "M631.5 96 C742 96 826 182 826 300 C826 382 786 448 730 482 \
C724 520 736 556 772 576 C900 626 1040 660 1108 760 C1150 822 1163 890 1163 952 L100 952 \
C100 890 113 822 155 760 C223 660 363 626 491 576 C527 556 539 520 533 482 \
C477 448 437 382 437 300 C437 182 521 96 631.5 96 Z";

/// Immutable outline the mask conforms to.
#[derive(Clone, Debug)]
pub struct Silhouette {
    data: String,
    path: BezPath,
    length: f64,
}

impl Silhouette {
    /// Parse SVG path data (`d` attribute syntax).
    pub fn parse(data: &str) -> MaskResult<Self> {
        let path = BezPath::from_svg(data)
            .map_err(|e| MaskError::geometry(format!("parse silhouette path data: {e}")))?;
        let length: f64 = path
            .segments()
            .map(|seg| seg.arclen(ARCLEN_ACCURACY))
            .sum();
        if !(length.is_finite() && length > 0.0) {
            return Err(MaskError::geometry(
                "silhouette path must have a finite, non-zero length",
            ));
        }
        Ok(Self {
            data: data.to_string(),
            path,
            length,
        })
    }

    pub fn builtin() -> MaskResult<Self> {
        Self::parse(DEFAULT_SILHOUETTE)
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Total perimeter length.
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn bounds(&self) -> Rect {
        self.path.bounding_box()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/silhouette.rs"]
mod tests;
