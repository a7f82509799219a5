mod bus;
mod events;

pub use bus::EventBus;
pub use events::EditorEvent;

/// Receives every event the controller emits. Used for diagnostics and by
/// the shell to react to scene changes.
pub trait EventHandler {
    fn handle_event(&mut self, event: &EditorEvent);
}

/// Forwards every event to the `log` facade at debug level
#[derive(Debug, Default)]
pub struct LoggingHandler;

impl EventHandler for LoggingHandler {
    fn handle_event(&mut self, event: &EditorEvent) {
        log::debug!("editor event: {:?}", event);
    }
}
