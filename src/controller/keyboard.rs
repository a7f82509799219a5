use egui::{Key, Modifiers};
use log::debug;

use super::InteractionController;
use crate::element::BoxId;
use crate::event::EditorEvent;
use crate::input::is_command;

impl InteractionController {
    pub(super) fn on_key_down(&mut self, key: Key, modifiers: Modifiers, repeat: bool) {
        if !is_command(&modifiers) {
            return;
        }
        match key {
            Key::C if !repeat => {
                self.copy_selected();
            }
            Key::V => {
                self.paste();
            }
            _ => {}
        }
    }

    pub(super) fn on_key_up(&mut self, key: Key) {
        if key == Key::V {
            self.state.release_paste();
        }
    }

    /// Copies the selected box into the clipboard. Does nothing when no box
    /// is selected.
    pub fn copy_selected(&mut self) -> Option<BoxId> {
        let id = self.scene.selected()?;
        self.scene.copy_selected()?;
        self.event_bus.emit(EditorEvent::Copied(id));
        Some(id)
    }

    /// Pastes the clipboard once per paste-key press.
    ///
    /// Auto-repeat and duplicate deliveries while the key is held are
    /// swallowed until the key is released.
    pub fn paste(&mut self) -> Option<BoxId> {
        self.scene.clipboard()?;
        if !self.state.arm_paste() {
            debug!("Paste already in flight");
            return None;
        }
        let id = self.scene.paste_clipboard()?;
        self.event_bus.emit(EditorEvent::Pasted(id));
        Some(id)
    }
}
