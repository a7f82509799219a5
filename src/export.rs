//! The exported layout description.
//!
//! The output is a fixed XML shape: an `imageTask` root holding one `image`
//! header naming the source file and one `field` record per box, with the
//! box geometry as percentages of the surface. Guides never appear in it.

use std::fmt::Write;

use egui::Rect;

use crate::geometry::{Surface, normalize};
use crate::scene::SceneStore;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Escapes the characters that would break a double-quoted XML attribute
pub fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// One `field` line for a box, without indentation or trailing newline.
///
/// `content` is trimmed and escaped here.
pub fn field_record(rect: Rect, content: &str, surface: &Surface) -> String {
    let normalized = normalize(rect, surface);
    format!(
        r#"<field x="{:.2}%" y="{:.2}%" width="{:.2}%" height="{:.2}%" solution="{}" />"#,
        normalized.x,
        normalized.y,
        normalized.width,
        normalized.height,
        escape_attribute(content.trim()),
    )
}

/// Serializes every box in store order. The result has no trailing newline.
pub fn serialize(scene: &SceneStore, surface: &Surface) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "{XML_DECLARATION}");
    let _ = writeln!(out, "<imageTask>");
    let _ = writeln!(out, r#"  <image src="{}" />"#, escape_attribute(surface.source()));
    for annotation in scene.boxes() {
        let _ = writeln!(out, "  {}", field_record(annotation.rect(), annotation.content(), surface));
    }
    out.push_str("</imageTask>");
    out
}
