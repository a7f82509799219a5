#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod controller;
pub mod element;
pub mod error;
pub mod event;
pub mod export;
pub mod file_handler;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod reference_image;
pub mod renderer;
pub mod scene;
pub mod snapping;
pub mod state;

pub use app::AnnotatorApp;
pub use config::{EditorConfig, SnapPriority};
pub use controller::InteractionController;
pub use element::{AnnotationBox, BoxId, GuideId, GuideLine, Orientation};
pub use error::{ConfigError, ImageLoadError, SceneError, TransitionError};
pub use event::{EditorEvent, EventBus, EventHandler};
pub use export::serialize;
pub use geometry::{HitTarget, NormalizedRect, Surface, normalize};
pub use input::{InputEvent, InputHandler};
pub use reference_image::ReferenceImage;
pub use renderer::OverlayRenderer;
pub use scene::{ClipboardSnapshot, SceneStore};
pub use state::{EditorState, Gesture, GuideMode};
