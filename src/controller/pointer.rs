use egui::{PointerButton, Pos2};
use log::debug;

use super::{InteractionController, ignore_stale};
use crate::element::{BoxId, GuideId};
use crate::event::EditorEvent;
use crate::geometry::HitTarget;
use crate::snapping;
use crate::state::Gesture;

impl InteractionController {
    pub(super) fn on_pointer_down(&mut self, position: Pos2, button: PointerButton) {
        if button != PointerButton::Primary {
            return;
        }

        let target = self.hit_test(position);

        // The delete control works even mid-gesture; any gesture still holding
        // the id turns into a no-op
        if let HitTarget::DeleteControl(id) = target {
            self.delete_box(id);
            return;
        }

        if !self.state.gesture().is_idle() {
            debug!("Press during {} ignored", self.state.gesture().name());
            return;
        }

        match target {
            HitTarget::ResizeHandle(id) => {
                self.select_box(id);
                self.raise(id);
                self.transition(Gesture::ResizingBox { box_id: id });
            }
            HitTarget::TextField(id) => self.select_box(id),
            HitTarget::BoxBody(id) => self.start_box_drag(id, position),
            HitTarget::GuideBody(id) => self.start_guide_drag(id, position),
            HitTarget::EmptySurface => self.press_empty_surface(position),
            HitTarget::DeleteControl(_) | HitTarget::Outside => {}
        }
    }

    pub(super) fn on_pointer_move(&mut self, position: Pos2) {
        match *self.state.gesture() {
            Gesture::DraggingBox { box_id, grab_offset } => {
                let candidate = snapping::snap(
                    position - grab_offset,
                    self.scene.guides(),
                    self.config.snap_threshold,
                    self.config.snap_priority,
                );
                if let Some(applied) = ignore_stale(self.scene.move_box(box_id, candidate)) {
                    self.event_bus.emit(EditorEvent::BoxMoved { id: box_id, position: applied });
                }
            }
            Gesture::ResizingBox { box_id } => {
                let Some(anchor) = self.scene.get_box(box_id).map(|annotation| annotation.position()) else {
                    return;
                };
                if let Some(size) = ignore_stale(self.scene.resize_box(box_id, position - anchor)) {
                    self.event_bus.emit(EditorEvent::BoxResized { id: box_id, size });
                }
            }
            Gesture::DraggingGuide { guide_id, grab_offset } => {
                let Some(orientation) = self.scene.get_guide(guide_id).map(|guide| guide.orientation()) else {
                    return;
                };
                let offset = orientation.axis_of(position) - grab_offset;
                if let Some(applied) = ignore_stale(self.scene.move_guide(guide_id, offset)) {
                    self.event_bus.emit(EditorEvent::GuideMoved { id: guide_id, offset: applied });
                }
            }
            Gesture::Idle | Gesture::PlacingGuide { .. } => {}
        }
    }

    pub(super) fn on_pointer_up(&mut self, _position: Pos2, button: PointerButton) {
        if button == PointerButton::Primary {
            self.end_gesture();
        }
    }

    /// A double click on a guide removes it
    pub(super) fn on_double_click(&mut self, position: Pos2, button: PointerButton) {
        if button != PointerButton::Primary {
            return;
        }
        if let HitTarget::GuideBody(id) = self.hit_test(position) {
            if ignore_stale(self.scene.remove_guide(id)).is_some() {
                self.event_bus.emit(EditorEvent::GuideRemoved(id));
            }
        }
    }

    fn start_box_drag(&mut self, id: BoxId, position: Pos2) {
        let Some(origin) = self.scene.get_box(id).map(|annotation| annotation.position()) else {
            return;
        };
        self.select_box(id);
        self.raise(id);
        self.transition(Gesture::DraggingBox {
            box_id: id,
            grab_offset: position - origin,
        });
    }

    fn start_guide_drag(&mut self, id: GuideId, position: Pos2) {
        let Some(guide) = self.scene.get_guide(id) else {
            return;
        };
        let grab_offset = guide.orientation().axis_of(position) - guide.offset();
        self.transition(Gesture::DraggingGuide { guide_id: id, grab_offset });
    }

    /// Empty surface: drop the selection, then place a guide when a guide
    /// mode is armed or a default-size box otherwise. The new box is not
    /// selected.
    fn press_empty_surface(&mut self, position: Pos2) {
        self.clear_selection();

        if let Some(orientation) = self.state.guide_mode().orientation() {
            let offset = orientation.axis_of(position);
            if self.transition(Gesture::PlacingGuide { orientation, offset }) {
                let id = self.scene.add_guide(orientation, offset);
                let applied = self.scene.get_guide(id).map_or(offset, |guide| guide.offset());
                self.event_bus.emit(EditorEvent::GuideAdded {
                    id,
                    orientation,
                    offset: applied,
                });
                self.end_gesture();
            }
            return;
        }

        let size = self.config.default_box_size();
        if let Some(id) = ignore_stale(self.scene.add_box(position, size, "")) {
            self.event_bus.emit(EditorEvent::BoxCreated(id));
        }
    }
}
