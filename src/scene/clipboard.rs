use egui::{Pos2, Rect, Vec2};

use crate::element::AnnotationBox;

/// A value copy of a box taken at copy time.
///
/// Later edits to the source box do not reach a pending paste.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipboardSnapshot {
    pub content: String,
    pub position: Pos2,
    pub size: Vec2,
    pub z_order: i64,
}

impl ClipboardSnapshot {
    pub fn of(annotation: &AnnotationBox) -> Self {
        Self {
            content: annotation.content().to_owned(),
            position: annotation.position(),
            size: annotation.size(),
            z_order: annotation.z_order(),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position, self.size)
    }
}
