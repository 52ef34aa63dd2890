use std::fmt::Write as _;

use crate::animation::session::MaskFrame;
use crate::config::model::StageConfig;

/// Presentation of a mask frame as a standalone SVG document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DocumentStyle {
    /// Overlay color; visible everywhere except inside the contour.
    pub fill: String,
    pub mask_id: String,
    /// Optional solid backdrop painted under everything.
    pub background: Option<String>,
    /// Optional image revealed through the contour.
    pub image_href: Option<String>,
    pub debug_stroke: String,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            fill: "#F6EEDD".to_string(),
            mask_id: "mask_simplex".to_string(),
            background: None,
            image_href: None,
            debug_stroke: "hotpink".to_string(),
        }
    }
}

/// Render one frame as an SVG document sized to the stage viewbox.
///
/// The mask is white everywhere and black inside the deformed contour, so the overlay rect
/// is cut out where the silhouette sits. With `frame.debug` set the contour is also stroked.
pub fn frame_document(stage: &StageConfig, frame: &MaskFrame, style: &DocumentStyle) -> String {
    let (w, h) = (stage.width, stage.height);
    let id = escape_attr(&style.mask_id);
    let d = escape_attr(&frame.path_data);
    let xf = escape_attr(&frame.transform);

    let mut s = String::with_capacity(frame.path_data.len() * 2 + 1024);
    // `write!` into a String cannot fail.
    let _ = writeln!(
        s,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 {w} {h}" width="{w}" height="{h}" preserveAspectRatio="none">"#
    );
    let _ = writeln!(s, "  <defs>");
    let _ = writeln!(
        s,
        r#"    <mask id="{id}" maskUnits="userSpaceOnUse" x="0" y="0" width="{w}" height="{h}">"#
    );
    let _ = writeln!(
        s,
        r#"      <rect x="0" y="0" width="{w}" height="{h}" fill="white"/>"#
    );
    let _ = writeln!(s, r#"      <path d="{d}" transform="{xf}" fill="black"/>"#);
    let _ = writeln!(s, "    </mask>");
    let _ = writeln!(s, "  </defs>");
    if let Some(bg) = &style.background {
        let _ = writeln!(
            s,
            r#"  <rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
            escape_attr(bg)
        );
    }
    if let Some(href) = &style.image_href {
        let _ = writeln!(
            s,
            r#"  <image href="{}" x="0" y="0" width="{w}" height="{h}" preserveAspectRatio="xMidYMid slice"/>"#,
            escape_attr(href)
        );
    }
    let _ = writeln!(
        s,
        r#"  <rect x="0" y="0" width="{w}" height="{h}" fill="{}" mask="url(#{id})"/>"#,
        escape_attr(&style.fill)
    );
    if frame.debug {
        let _ = writeln!(
            s,
            r#"  <path d="{d}" transform="{xf}" fill="none" stroke="{}" stroke-width="2" vector-effect="non-scaling-stroke"/>"#,
            escape_attr(&style.debug_stroke)
        );
    }
    s.push_str("</svg>\n");
    s
}

fn escape_attr(v: &str) -> String {
    let mut out = String::with_capacity(v.len());
    for c in v.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
