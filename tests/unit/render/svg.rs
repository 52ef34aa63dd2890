use super::*;
use crate::foundation::core::{Contour, Point};
use crate::geometry::serialize::{PathFormat, path_data};
use crate::transform::mask::MaskTransform;

fn frame(debug: bool) -> (StageConfig, MaskFrame) {
    let stage = StageConfig::default();
    let pts = vec![
        Point::new(500.0, 400.0),
        Point::new(700.0, 400.0),
        Point::new(700.0, 600.0),
        Point::new(500.0, 600.0),
    ];
    let xf = MaskTransform::from_stage(&stage);
    let f = MaskFrame {
        index: 0,
        time_ms: 0.0,
        path_data: path_data(&pts, PathFormat::Polyline, 1),
        contour: Contour::new(pts),
        transform: xf.svg_transform(),
        scale: xf.scale(),
        presence: 0.0,
        debug,
    };
    (stage, f)
}

#[test]
fn document_cuts_contour_out_of_overlay() {
    let (stage, f) = frame(false);
    let doc = frame_document(&stage, &f, &DocumentStyle::default());
    assert!(doc.starts_with("<svg "));
    assert!(doc.contains(r#"viewBox="0 0 1263 1012""#));
    assert!(doc.contains(r#"<mask id="mask_simplex""#));
    assert!(doc.contains(&format!(r#"d="{}""#, f.path_data)));
    assert!(doc.contains(&format!(r#"transform="{}" fill="black""#, f.transform)));
    assert!(doc.contains(r##"fill="#F6EEDD" mask="url(#mask_simplex)""##));
    assert!(!doc.contains("hotpink"));
    assert!(doc.trim_end().ends_with("</svg>"));
}

#[test]
fn debug_frames_stroke_the_contour() {
    let (stage, f) = frame(true);
    let doc = frame_document(&stage, &f, &DocumentStyle::default());
    assert!(doc.contains(r#"stroke="hotpink""#));
    assert_eq!(doc.matches(&f.path_data).count(), 2);
}

#[test]
fn optional_layers_and_escaping() {
    let (stage, f) = frame(false);
    let style = DocumentStyle {
        background: Some("#12141C".to_string()),
        image_href: Some("portrait.png?a=1&b=\"2\"".to_string()),
        ..DocumentStyle::default()
    };
    let doc = frame_document(&stage, &f, &style);
    assert!(doc.contains(r##"fill="#12141C""##));
    assert!(doc.contains(r#"href="portrait.png?a=1&amp;b=&quot;2&quot;""#));
    let bg = doc.find("#12141C").unwrap();
    let overlay = doc.find("#F6EEDD").unwrap();
    assert!(bg < overlay);
}

#[test]
fn style_deserializes_with_defaults() {
    let style: DocumentStyle = serde_json::from_str(r#"{"fill":"black"}"#).unwrap();
    assert_eq!(style.fill, "black");
    assert_eq!(style.mask_id, "mask_simplex");
    assert!(style.background.is_none());
}
