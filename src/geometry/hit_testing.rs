use egui::{Pos2, Rect, Vec2};

use crate::config::EditorConfig;
use crate::element::{BoxId, GuideId};
use crate::scene::SceneStore;

/// What the pointer is over, classified before any gesture is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    BoxBody(BoxId),
    ResizeHandle(BoxId),
    DeleteControl(BoxId),
    TextField(BoxId),
    GuideBody(GuideId),
    EmptySurface,
    /// Off the surface entirely
    Outside,
}

impl HitTarget {
    pub fn box_id(&self) -> Option<BoxId> {
        match self {
            HitTarget::BoxBody(id)
            | HitTarget::ResizeHandle(id)
            | HitTarget::DeleteControl(id)
            | HitTarget::TextField(id) => Some(*id),
            _ => None,
        }
    }
}

/// Where the controls sit inside a box.
///
/// The delete control is the top-right square, the resize handle the
/// bottom-right square, the text field the box inset by `text_field_margin`.
/// Whatever is left is the draggable body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxLayout {
    pub resize_handle_size: f32,
    pub delete_control_size: f32,
    pub text_field_margin: f32,
}

impl BoxLayout {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            resize_handle_size: config.resize_handle_size,
            delete_control_size: config.delete_control_size,
            text_field_margin: config.text_field_margin,
        }
    }

    pub fn delete_control_rect(&self, box_rect: Rect) -> Rect {
        Rect::from_min_size(
            Pos2::new(box_rect.max.x - self.delete_control_size, box_rect.min.y),
            Vec2::splat(self.delete_control_size),
        )
    }

    pub fn resize_handle_rect(&self, box_rect: Rect) -> Rect {
        Rect::from_min_max(box_rect.max - Vec2::splat(self.resize_handle_size), box_rect.max)
    }

    pub fn text_field_rect(&self, box_rect: Rect) -> Rect {
        box_rect.shrink(self.text_field_margin)
    }

    /// Classifies a point already known to lie inside `box_rect`
    fn classify(&self, id: BoxId, box_rect: Rect, pos: Pos2) -> HitTarget {
        if self.delete_control_rect(box_rect).contains(pos) {
            HitTarget::DeleteControl(id)
        } else if self.resize_handle_rect(box_rect).contains(pos) {
            HitTarget::ResizeHandle(id)
        } else if self.text_field_rect(box_rect).contains(pos) {
            HitTarget::TextField(id)
        } else {
            HitTarget::BoxBody(id)
        }
    }
}

impl Default for BoxLayout {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

/// Classifies `pos` against the scene.
///
/// Boxes are tested topmost first and win over guides; a guide is hit when
/// the pointer is within `guide_tolerance` of it, the nearest one winning.
pub fn hit_test(scene: &SceneStore, pos: Pos2, layout: &BoxLayout, guide_tolerance: f32) -> HitTarget {
    if let Some(annotation) = scene
        .boxes_topmost_first()
        .into_iter()
        .find(|annotation| annotation.rect().contains(pos))
    {
        return layout.classify(annotation.id(), annotation.rect(), pos);
    }

    if !scene.surface().contains(pos) {
        return HitTarget::Outside;
    }

    let mut nearest: Option<(GuideId, f32)> = None;
    for guide in scene.guides() {
        let distance = guide.distance_to(pos);
        if distance > guide_tolerance {
            continue;
        }
        match nearest {
            Some((_, best)) if best <= distance => {}
            _ => nearest = Some((guide.id(), distance)),
        }
    }
    if let Some((id, _)) = nearest {
        return HitTarget::GuideBody(id);
    }

    HitTarget::EmptySurface
}
