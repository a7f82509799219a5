use egui::{Pos2, Rect, Vec2};

use super::common::BoxId;

/// A positioned, resizable, text-bearing annotation rectangle.
///
/// Geometry is in surface-local pixels with the origin at the top-left of
/// the reference image. Only [`SceneStore`](crate::scene::SceneStore)
/// mutates a box, so the size and bounds invariants are enforced there.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationBox {
    id: BoxId,
    position: Pos2,
    size: Vec2,
    z_order: i64,
    content: String,
}

impl AnnotationBox {
    pub(crate) fn new(id: BoxId, position: Pos2, size: Vec2, z_order: i64, content: String) -> Self {
        Self {
            id,
            position,
            size,
            z_order,
            content,
        }
    }

    pub fn id(&self) -> BoxId {
        self.id
    }

    /// Top-left corner
    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn z_order(&self) -> i64 {
        self.z_order
    }

    /// The user-entered solution text, untrimmed
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position, self.size)
    }

    pub(crate) fn set_position(&mut self, position: Pos2) {
        self.position = position;
    }

    pub(crate) fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    pub(crate) fn set_z_order(&mut self, z_order: i64) {
        self.z_order = z_order;
    }

    pub(crate) fn set_content(&mut self, content: String) {
        self.content = content;
    }
}
