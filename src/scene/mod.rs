//! The authoritative collection of boxes and guides.
//!
//! The store owns every [`AnnotationBox`] and [`GuideLine`], the current
//! selection (a non-owning id), and the clipboard slot. It is the only place
//! that enforces the geometric invariants:
//!
//! - every box is at least `min_box_width` × `min_box_height`
//! - every box lies within the surface after any placement or move; a paste
//!   keeps the exact clipboard offset and may overhang the far edges
//! - every guide offset lies within `[0, extent]` along its axis
//!
//! Mutators take ids rather than references. An id that no longer resolves
//! yields a [`SceneError`] and leaves the store untouched.

mod clipboard;

use egui::{Pos2, Rect, Vec2};
use log::{debug, info};

use crate::config::EditorConfig;
use crate::element::{AnnotationBox, BoxId, GuideId, GuideLine, Orientation};
use crate::error::{SceneError, SceneResult};
use crate::geometry::{Surface, clamp_point, clamp_rect};

pub use clipboard::ClipboardSnapshot;

#[derive(Debug, Clone)]
pub struct SceneStore {
    surface: Surface,
    config: EditorConfig,
    boxes: Vec<AnnotationBox>,
    guides: Vec<GuideLine>,
    selected: Option<BoxId>,
    clipboard: Option<ClipboardSnapshot>,
}

impl SceneStore {
    pub fn new(surface: Surface, config: EditorConfig) -> Self {
        Self {
            surface,
            config,
            boxes: Vec::new(),
            guides: Vec::new(),
            selected: None,
            clipboard: None,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Boxes in store order. This is neither z-order nor a promise of
    /// creation order.
    pub fn boxes(&self) -> &[AnnotationBox] {
        &self.boxes
    }

    /// Boxes ordered for hit testing: highest z first, later insertion
    /// winning ties.
    pub fn boxes_topmost_first(&self) -> Vec<&AnnotationBox> {
        let mut ordered: Vec<(usize, &AnnotationBox)> = self.boxes.iter().enumerate().collect();
        ordered.sort_by(|(ia, a), (ib, b)| b.z_order().cmp(&a.z_order()).then(ib.cmp(ia)));
        ordered.into_iter().map(|(_, annotation)| annotation).collect()
    }

    pub fn get_box(&self, id: BoxId) -> Option<&AnnotationBox> {
        self.boxes.iter().find(|annotation| annotation.id() == id)
    }

    pub fn guides(&self) -> &[GuideLine] {
        &self.guides
    }

    pub fn get_guide(&self, id: GuideId) -> Option<&GuideLine> {
        self.guides.iter().find(|guide| guide.id() == id)
    }

    pub fn selected(&self) -> Option<BoxId> {
        self.selected
    }

    pub fn selected_box(&self) -> Option<&AnnotationBox> {
        self.selected.and_then(|id| self.get_box(id))
    }

    pub fn clipboard(&self) -> Option<&ClipboardSnapshot> {
        self.clipboard.as_ref()
    }

    /// Highest z-order in the store, 0 when empty
    pub fn max_z(&self) -> i64 {
        self.boxes.iter().map(AnnotationBox::z_order).max().unwrap_or(0)
    }

    fn box_mut(&mut self, id: BoxId) -> SceneResult<&mut AnnotationBox> {
        self.boxes
            .iter_mut()
            .find(|annotation| annotation.id() == id)
            .ok_or(SceneError::UnknownBox(id))
    }

    fn guide_mut(&mut self, id: GuideId) -> SceneResult<&mut GuideLine> {
        self.guides
            .iter_mut()
            .find(|guide| guide.id() == id)
            .ok_or(SceneError::UnknownGuide(id))
    }

    fn enforce_min_size(&self, size: Vec2) -> Vec2 {
        size.max(self.config.min_box_size())
    }

    fn insert_box(&mut self, position: Pos2, size: Vec2, z_order: i64, content: String) -> BoxId {
        let id = BoxId::new();
        self.boxes.push(AnnotationBox::new(id, position, size, z_order, content));
        id
    }

    /// Places a new box on top of all others.
    ///
    /// `position` must be on the surface. The box is pulled back inside the
    /// surface if it would overhang the right or bottom edge.
    pub fn add_box(&mut self, position: Pos2, size: Vec2, content: impl Into<String>) -> SceneResult<BoxId> {
        if !self.surface.contains(position) {
            return Err(SceneError::OutsideSurface {
                x: position.x,
                y: position.y,
            });
        }
        let size = self.enforce_min_size(size);
        let placed = clamp_rect(Rect::from_min_size(position, size), self.surface.bounds());
        let z_order = self.max_z() + 1;
        let id = self.insert_box(placed.min, size, z_order, content.into());
        info!("Added {} at ({}, {}) with z {}", id, position.x, position.y, z_order);
        Ok(id)
    }

    /// Removes a box, clearing the selection if it pointed at it
    pub fn remove_box(&mut self, id: BoxId) -> SceneResult<AnnotationBox> {
        let index = self
            .boxes
            .iter()
            .position(|annotation| annotation.id() == id)
            .ok_or(SceneError::UnknownBox(id))?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        info!("Removed {}", id);
        Ok(self.boxes.remove(index))
    }

    pub fn select(&mut self, id: BoxId) -> SceneResult<()> {
        if self.get_box(id).is_none() {
            return Err(SceneError::UnknownBox(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Moves a box's top-left corner, clamped so the box stays on the surface.
    /// Returns the position actually applied.
    pub fn move_box(&mut self, id: BoxId, position: Pos2) -> SceneResult<Pos2> {
        let bounds = self.surface.bounds();
        let annotation = self.box_mut(id)?;
        let rect = clamp_rect(Rect::from_min_size(position, annotation.size()), bounds);
        annotation.set_position(rect.min);
        Ok(rect.min)
    }

    /// Resizes a box from its top-left anchor. Returns the size actually applied.
    ///
    /// The minimum size always holds. With `clamp_resize_to_surface` the box
    /// is additionally kept from growing past the right and bottom edges.
    pub fn resize_box(&mut self, id: BoxId, size: Vec2) -> SceneResult<Vec2> {
        let min = self.config.min_box_size();
        let clamp_to_surface = self.config.clamp_resize_to_surface;
        let bounds = self.surface.bounds();
        let annotation = self.box_mut(id)?;

        let mut size = size;
        if clamp_to_surface {
            size = size.min(bounds.max - annotation.position());
        }
        let size = size.max(min);
        annotation.set_size(size);
        Ok(size)
    }

    /// Puts a box above every other one. Returns its new z-order.
    pub fn raise_to_front(&mut self, id: BoxId) -> SceneResult<i64> {
        let z_order = self.max_z() + 1;
        self.box_mut(id)?.set_z_order(z_order);
        debug!("Raised {} to z {}", id, z_order);
        Ok(z_order)
    }

    pub fn set_content(&mut self, id: BoxId, content: impl Into<String>) -> SceneResult<()> {
        self.box_mut(id)?.set_content(content.into());
        Ok(())
    }

    /// Snapshots the selected box into the clipboard. `None` when nothing is
    /// selected, in which case the clipboard is left as it was.
    pub fn copy_selected(&mut self) -> Option<ClipboardSnapshot> {
        let snapshot = ClipboardSnapshot::of(self.selected_box()?);
        info!("Copied {} to clipboard", self.selected.map(|id| id.to_string()).unwrap_or_default());
        self.clipboard = Some(snapshot.clone());
        Some(snapshot)
    }

    /// Creates a box from the clipboard, offset by `paste_offset` and placed
    /// one above the snapshot's z-order. `None` when the clipboard is empty.
    ///
    /// The offset is applied exactly, even when the copy overhangs the
    /// surface edge. Only the minimum size is enforced.
    pub fn paste_clipboard(&mut self) -> Option<BoxId> {
        let snapshot = self.clipboard.clone()?;
        let position = snapshot.position + self.config.paste_offset();
        let size = self.enforce_min_size(snapshot.size);
        let id = self.insert_box(position, size, snapshot.z_order + 1, snapshot.content);
        info!("Pasted {} with z {}", id, snapshot.z_order + 1);
        Some(id)
    }

    fn clamp_offset(&self, orientation: Orientation, offset: f32) -> f32 {
        orientation.axis_of(clamp_point(Pos2::new(offset, offset), self.surface.bounds()))
    }

    pub fn add_guide(&mut self, orientation: Orientation, offset: f32) -> GuideId {
        let offset = self.clamp_offset(orientation, offset);
        let id = GuideId::new();
        self.guides.push(GuideLine::new(id, orientation, offset));
        info!("Added {} guide {} at {}", orientation.as_str(), id, offset);
        id
    }

    pub fn remove_guide(&mut self, id: GuideId) -> SceneResult<GuideLine> {
        let index = self
            .guides
            .iter()
            .position(|guide| guide.id() == id)
            .ok_or(SceneError::UnknownGuide(id))?;
        info!("Removed guide {}", id);
        Ok(self.guides.remove(index))
    }

    /// Moves a guide, clamped to the surface extent. Returns the applied offset.
    pub fn move_guide(&mut self, id: GuideId, offset: f32) -> SceneResult<f32> {
        let orientation = self
            .get_guide(id)
            .map(GuideLine::orientation)
            .ok_or(SceneError::UnknownGuide(id))?;
        let offset = self.clamp_offset(orientation, offset);
        self.guide_mut(id)?.set_offset(offset);
        Ok(offset)
    }
}
