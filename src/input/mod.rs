use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

/// Pointer and keyboard input in surface-local coordinates.
///
/// The origin is the top-left corner of the reference image. Pointer
/// positions may fall outside the surface while a gesture is in progress.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        position: Pos2,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove {
        position: Pos2,
    },
    /// Mouse button was released
    PointerUp {
        position: Pos2,
        button: PointerButton,
    },
    /// Second press of a double click, delivered after its `PointerDown`
    DoubleClick {
        position: Pos2,
        button: PointerButton,
    },
    KeyDown {
        key: Key,
        modifiers: Modifiers,
        /// Set for auto-repeat ticks while the key is held
        repeat: bool,
    },
    KeyUp {
        key: Key,
        modifiers: Modifiers,
    },
}

/// Handles converting raw egui input into surface-local [`InputEvent`]s
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Screen rect the surface is drawn into; `None` until the first frame
    surface_rect: Option<Rect>,
    /// Visible part of the surface, for filtering presses
    visible_rect: Option<Rect>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update where the surface is drawn this frame
    pub fn set_surface_rect(&mut self, surface_rect: Rect, visible_rect: Rect) {
        self.surface_rect = Some(surface_rect);
        self.visible_rect = Some(visible_rect);
    }

    fn to_local(&self, screen: Pos2) -> Option<Pos2> {
        self.surface_rect.map(|rect| Pos2::ZERO + (screen - rect.min))
    }

    fn accepts_press(&self, screen: Pos2) -> bool {
        self.visible_rect.is_some_and(|rect| rect.contains(screen))
    }

    /// Process raw egui input and generate our InputEvents.
    ///
    /// Presses are only reported over the visible surface; moves, releases
    /// and keys are always reported so a gesture can end off-surface.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if self.surface_rect.is_none() {
            return events;
        }

        ctx.input(|input| {
            for event in &input.events {
                match event {
                    egui::Event::PointerMoved(pos) => {
                        if let Some(position) = self.to_local(*pos) {
                            events.push(InputEvent::PointerMove { position });
                        }
                    }
                    egui::Event::PointerButton { pos, button, pressed, .. } => {
                        let Some(position) = self.to_local(*pos) else {
                            continue;
                        };
                        if *pressed {
                            if self.accepts_press(*pos) {
                                events.push(InputEvent::PointerDown { position, button: *button });
                            }
                        } else {
                            events.push(InputEvent::PointerUp { position, button: *button });
                        }
                    }
                    egui::Event::Key { key, pressed, repeat, modifiers, .. } => {
                        if *pressed {
                            events.push(InputEvent::KeyDown {
                                key: *key,
                                modifiers: *modifiers,
                                repeat: *repeat,
                            });
                        } else {
                            events.push(InputEvent::KeyUp { key: *key, modifiers: *modifiers });
                        }
                    }
                    // The windowing layer turns cmd+C / cmd+V into clipboard
                    // events instead of key presses
                    egui::Event::Copy => events.push(InputEvent::KeyDown {
                        key: Key::C,
                        modifiers: Modifiers::COMMAND,
                        repeat: false,
                    }),
                    egui::Event::Paste(_) => events.push(InputEvent::KeyDown {
                        key: Key::V,
                        modifiers: Modifiers::COMMAND,
                        repeat: false,
                    }),
                    _ => {}
                }
            }

            if input.pointer.button_double_clicked(PointerButton::Primary) {
                if let Some(pos) = input.pointer.interact_pos() {
                    if let (true, Some(position)) = (self.accepts_press(pos), self.to_local(pos)) {
                        events.push(InputEvent::DoubleClick {
                            position,
                            button: PointerButton::Primary,
                        });
                    }
                }
            }
        });

        events
    }
}

/// True when the platform's command modifier is held (ctrl, or cmd on mac)
pub fn is_command(modifiers: &Modifiers) -> bool {
    modifiers.command || modifiers.ctrl || modifiers.mac_cmd
}
