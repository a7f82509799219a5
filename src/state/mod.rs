mod editor_state;

pub use editor_state::{EditorState, Gesture, GuideMode};
