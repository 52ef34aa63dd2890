use crate::foundation::error::{MaskError, MaskResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

/// Mask viewbox in silhouette units (`0 0 width height`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewbox {
    pub width: f64,
    pub height: f64,
}

impl Viewbox {
    pub fn new(width: f64, height: f64) -> MaskResult<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(MaskError::validation("Viewbox width must be finite and > 0"));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(MaskError::validation("Viewbox height must be finite and > 0"));
        }
        Ok(Self { width, height })
    }

    pub fn center(self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Map a position inside a container of `container` size onto the viewbox, stretching
    /// both axes independently.
    pub fn map_container(self, pos: Point, container: Size) -> Point {
        let w = container.width.max(1e-6);
        let h = container.height.max(1e-6);
        Point::new(pos.x / w * self.width, pos.y / h * self.height)
    }
}

/// Ordered, closed ring of contour points.
///
/// The last point logically connects back to the first.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Contour {
    pub points: Vec<Point>,
}

impl Contour {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest point-wise distance between two rings of equal length.
    pub fn max_distance(&self, other: &Contour) -> Option<f64> {
        if self.len() != other.len() {
            return None;
        }
        Some(
            self.points
                .iter()
                .zip(&other.points)
                .map(|(a, b)| a.distance(*b))
                .fold(0.0, f64::max),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
