//! The pointer/keyboard state machine driving the scene.
//!
//! The controller is the only writer of the [`SceneStore`]. Each input
//! callback runs to completion synchronously. The hit-test step classifies
//! every press exactly once, so one physical click yields at most one
//! transition: a press on a box never also reaches the empty-surface
//! placement path.

mod keyboard;
mod pointer;

use log::debug;

use crate::config::EditorConfig;
use crate::element::BoxId;
use crate::error::SceneResult;
use crate::event::{EditorEvent, EventBus};
use crate::export;
use crate::geometry::{BoxLayout, HitTarget, Surface, hit_test};
use crate::input::InputEvent;
use crate::scene::SceneStore;
use crate::state::{EditorState, Gesture, GuideMode};

#[derive(Debug)]
pub struct InteractionController {
    scene: SceneStore,
    state: EditorState,
    config: EditorConfig,
    layout: BoxLayout,
    event_bus: EventBus,
}

impl InteractionController {
    pub fn new(surface: Surface, config: EditorConfig) -> Self {
        Self {
            scene: SceneStore::new(surface, config.clone()),
            state: EditorState::new(),
            layout: BoxLayout::from_config(&config),
            config,
            event_bus: EventBus::new(),
        }
    }

    /// Read-only view of the scene; all writes go through the controller
    pub fn scene(&self) -> &SceneStore {
        &self.scene
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn gesture(&self) -> &Gesture {
        self.state.gesture()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn layout(&self) -> &BoxLayout {
        &self.layout
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Starts a fresh session on a new reference image. Boxes, guides,
    /// selection and clipboard are dropped; the armed guide mode is kept.
    pub fn load_surface(&mut self, surface: Surface) {
        debug!("Loading surface {} ({}x{})", surface.source(), surface.width(), surface.height());
        self.end_gesture();
        self.state.release_paste();
        self.scene = SceneStore::new(surface, self.config.clone());
    }

    pub fn guide_mode(&self) -> GuideMode {
        self.state.guide_mode()
    }

    pub fn set_guide_mode(&mut self, mode: GuideMode) {
        if self.state.guide_mode() != mode {
            self.state.set_guide_mode(mode);
            self.event_bus.emit(EditorEvent::GuideModeChanged(mode));
        }
    }

    pub fn hit_test(&self, position: egui::Pos2) -> HitTarget {
        hit_test(&self.scene, position, &self.layout, self.config.guide_hit_tolerance)
    }

    /// Dispatches one input event
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown { position, button } => self.on_pointer_down(*position, *button),
            InputEvent::PointerMove { position } => self.on_pointer_move(*position),
            InputEvent::PointerUp { position, button } => self.on_pointer_up(*position, *button),
            InputEvent::DoubleClick { position, button } => self.on_double_click(*position, *button),
            InputEvent::KeyDown { key, modifiers, repeat } => self.on_key_down(*key, *modifiers, *repeat),
            InputEvent::KeyUp { key, .. } => self.on_key_up(*key),
        }
    }

    /// Removes a box. Independent of the gesture machine: a gesture still
    /// pointing at the box simply becomes a no-op until release.
    pub fn delete_box(&mut self, id: BoxId) {
        let was_selected = self.scene.selected() == Some(id);
        if ignore_stale(self.scene.remove_box(id)).is_some() {
            self.event_bus.emit(EditorEvent::BoxRemoved(id));
            if was_selected {
                self.event_bus.emit(EditorEvent::SelectionChanged(None));
            }
        }
    }

    /// Replaces a box's text as typed into its field
    pub fn set_box_content(&mut self, id: BoxId, content: impl Into<String>) {
        let content = content.into();
        if self.scene.get_box(id).is_some_and(|annotation| annotation.content() == content) {
            return;
        }
        if ignore_stale(self.scene.set_content(id, content)).is_some() {
            self.event_bus.emit(EditorEvent::ContentChanged(id));
        }
    }

    /// Serializes the current scene to the exported layout text
    pub fn export(&self) -> String {
        export::serialize(&self.scene, self.scene.surface())
    }

    fn transition(&mut self, next: Gesture) -> bool {
        match self.state.transition_to(next) {
            Ok(old) => {
                debug!("Gesture {} -> {}", old.name(), next.name());
                self.event_bus.emit(EditorEvent::GestureChanged { old, new: next });
                true
            }
            Err(err) => {
                debug!("Ignoring input: {}", err);
                false
            }
        }
    }

    fn end_gesture(&mut self) {
        if self.state.gesture().is_idle() {
            return;
        }
        let old = self.state.return_to_idle();
        debug!("Gesture {} -> Idle", old.name());
        self.event_bus.emit(EditorEvent::GestureChanged { old, new: Gesture::Idle });
    }

    fn select_box(&mut self, id: BoxId) {
        if self.scene.selected() == Some(id) {
            return;
        }
        if ignore_stale(self.scene.select(id)).is_some() {
            self.event_bus.emit(EditorEvent::SelectionChanged(Some(id)));
        }
    }

    fn clear_selection(&mut self) {
        if self.scene.selected().is_some() {
            self.scene.clear_selection();
            self.event_bus.emit(EditorEvent::SelectionChanged(None));
        }
    }

    fn raise(&mut self, id: BoxId) {
        if let Some(z_order) = ignore_stale(self.scene.raise_to_front(id)) {
            self.event_bus.emit(EditorEvent::BoxRaised { id, z_order });
        }
    }
}

/// Swallows a stale-reference error after logging it
fn ignore_stale<T>(result: SceneResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            debug!("Ignoring stale reference: {}", err);
            None
        }
    }
}
