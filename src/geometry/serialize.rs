use std::fmt::Write as _;

use kurbo::PathEl;

use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{MaskError, MaskResult};

/// How a closed point ring is connected when emitted as path data.
#[derive(Clone, Copy, Debug, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathFormat {
    /// `M x,y L x,y ... Z`.
    #[default]
    Polyline,
    /// Closed Catmull-Rom spline converted to cubic Béziers.
    CatmullRom { tension: f64 },
}

impl PathFormat {
    pub fn validate(&self) -> MaskResult<()> {
        if let Self::CatmullRom { tension } = self
            && !(tension.is_finite() && (0.0..=2.0).contains(tension))
        {
            return Err(MaskError::validation(
                "catmull-rom tension must be in [0, 2]",
            ));
        }
        Ok(())
    }
}

/// Build a closed path through `points`.
pub fn to_bez_path(points: &[Point], format: PathFormat) -> BezPath {
    let mut path = BezPath::new();
    let n = points.len();
    if n == 0 {
        return path;
    }
    path.move_to(points[0]);
    match format {
        PathFormat::Polyline => {
            for p in &points[1..] {
                path.line_to(*p);
            }
        }
        PathFormat::CatmullRom { tension } => {
            if n < 3 {
                for p in &points[1..] {
                    path.line_to(*p);
                }
            } else {
                let k = tension / 6.0;
                for i in 0..n {
                    let p0 = points[(i + n - 1) % n];
                    let p1 = points[i];
                    let p2 = points[(i + 1) % n];
                    let p3 = points[(i + 2) % n];
                    let c1 = p1 + (p2 - p0) * k;
                    let c2 = p2 - (p3 - p1) * k;
                    path.curve_to(c1, c2, p2);
                }
            }
        }
    }
    path.close_path();
    path
}

/// Serialize a closed ring to SVG path data with `precision` decimals per coordinate.
pub fn path_data(points: &[Point], format: PathFormat, precision: usize) -> String {
    let mut out = String::with_capacity(points.len() * 16);
    write_bez_path(&to_bez_path(points, format), precision, &mut out);
    out
}

pub fn write_bez_path(path: &BezPath, precision: usize, out: &mut String) {
    let mut first = true;
    for el in path.elements() {
        if !first {
            out.push(' ');
        }
        first = false;
        match *el {
            PathEl::MoveTo(p) => {
                out.push('M');
                write_point(out, p, precision);
            }
            PathEl::LineTo(p) => {
                out.push('L');
                write_point(out, p, precision);
            }
            PathEl::QuadTo(c, p) => {
                out.push('Q');
                write_point(out, c, precision);
                out.push(' ');
                write_point(out, p, precision);
            }
            PathEl::CurveTo(c1, c2, p) => {
                out.push('C');
                write_point(out, c1, precision);
                out.push(' ');
                write_point(out, c2, precision);
                out.push(' ');
                write_point(out, p, precision);
            }
            PathEl::ClosePath => out.push('Z'),
        }
    }
}

fn write_point(out: &mut String, p: Point, precision: usize) {
    // Writing to a String cannot fail.
    let _ = write!(
        out,
        "{:.prec$},{:.prec$}",
        tidy_zero(p.x),
        tidy_zero(p.y),
        prec = precision
    );
}

fn tidy_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/serialize.rs"]
mod tests;
