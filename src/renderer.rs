use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, TextureHandle, Vec2};

use crate::element::{AnnotationBox, GuideLine, Orientation};
use crate::geometry::BoxLayout;
use crate::reference_image::ReferenceImage;
use crate::scene::SceneStore;
use crate::state::Gesture;

const BOX_FILL: Color32 = Color32::from_rgba_premultiplied(20, 60, 120, 60);
const BOX_STROKE: Color32 = Color32::from_rgb(30, 120, 255);
const SELECTED_STROKE: Color32 = Color32::from_rgb(255, 170, 0);
const HANDLE_FILL: Color32 = Color32::from_rgb(30, 120, 255);
const DELETE_FILL: Color32 = Color32::from_rgb(200, 50, 50);
const GUIDE_STROKE: Color32 = Color32::from_rgb(0, 200, 120);
const ACTIVE_GUIDE_STROKE: Color32 = Color32::from_rgb(120, 255, 180);

/// Draws the reference image and the editing overlays on top of it.
///
/// Everything is painted from surface-local geometry shifted by the screen
/// position of the surface's top-left corner.
#[derive(Default)]
pub struct OverlayRenderer {
    texture: Option<TextureHandle>,
}

impl std::fmt::Debug for OverlayRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayRenderer")
            .field("texture", &self.texture.as_ref().map(|texture| texture.id()))
            .finish()
    }
}

impl OverlayRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads the reference image, replacing any previous texture
    pub fn set_reference_image(&mut self, ctx: &egui::Context, image: &ReferenceImage) {
        log::debug!("Uploading texture for {}", image.name());
        self.texture = Some(ctx.load_texture(
            format!("reference:{}", image.name()),
            image.to_color_image(),
            egui::TextureOptions::LINEAR,
        ));
    }

    pub fn has_texture(&self) -> bool {
        self.texture.is_some()
    }

    /// Renders one frame of the surface at `origin` (screen space)
    pub fn render(&self, painter: &Painter, origin: Pos2, scene: &SceneStore, layout: &BoxLayout, gesture: &Gesture) {
        let offset = origin.to_vec2();
        let surface_rect = scene.surface().bounds().translate(offset);

        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                surface_rect,
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
        }

        // Guides sit underneath the boxes, matching hit-test priority
        for guide in scene.guides() {
            let active = gesture.active_guide() == Some(guide.id());
            Self::draw_guide(painter, guide, scene.surface().bounds(), offset, active);
        }

        let mut boxes = scene.boxes_topmost_first();
        boxes.reverse();
        for annotation in boxes {
            let selected = scene.selected() == Some(annotation.id());
            Self::draw_box(painter, annotation, offset, layout, selected);
        }
    }

    fn draw_guide(painter: &Painter, guide: &GuideLine, bounds: Rect, offset: Vec2, active: bool) {
        let color = if active { ACTIVE_GUIDE_STROKE } else { GUIDE_STROKE };
        let [start, end] = guide.endpoints(bounds);
        painter.line_segment([start + offset, end + offset], Stroke::new(1.0, color));

        // small grip at the leading edge so the line reads as draggable
        let grip = match guide.orientation() {
            Orientation::Horizontal => Rect::from_center_size(start + offset, Vec2::new(8.0, 4.0)),
            Orientation::Vertical => Rect::from_center_size(start + offset, Vec2::new(4.0, 8.0)),
        };
        painter.rect_filled(grip, 1.0, color);
    }

    fn draw_box(painter: &Painter, annotation: &AnnotationBox, offset: Vec2, layout: &BoxLayout, selected: bool) {
        let rect = annotation.rect().translate(offset);
        let outline = if selected {
            Stroke::new(2.0, SELECTED_STROKE)
        } else {
            Stroke::new(1.0, BOX_STROKE)
        };
        painter.rect_filled(rect, 2.0, BOX_FILL);
        painter.rect_stroke(rect, 2.0, outline);

        let handle = layout.resize_handle_rect(rect);
        painter.rect_filled(handle, 1.0, HANDLE_FILL);
        painter.rect_stroke(handle, 1.0, Stroke::new(1.0, Color32::WHITE));

        let delete = layout.delete_control_rect(rect);
        painter.rect_filled(delete, 2.0, DELETE_FILL);
        painter.text(
            delete.center(),
            Align2::CENTER_CENTER,
            "×",
            FontId::proportional(layout.delete_control_size),
            Color32::WHITE,
        );
    }
}
