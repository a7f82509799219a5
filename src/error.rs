use thiserror::Error;

use crate::element::{BoxId, GuideId};

/// Errors raised by the scene store when an operation cannot apply.
///
/// None of these are fatal. The interaction controller logs them and treats
/// the operation as a no-op, because gesture state and scene state are
/// updated by separate callbacks that can interleave with a deletion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("no box with id {0}")]
    UnknownBox(BoxId),

    #[error("no guide with id {0}")]
    UnknownGuide(GuideId),

    #[error("position ({x}, {y}) lies outside the surface")]
    OutsideSurface { x: f32, y: f32 },
}

/// Result type for scene store mutations
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors that can occur during gesture state transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// Attempted to transition between incompatible gestures
    #[error("cannot transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}

/// Errors that can occur while loading or validating an [`EditorConfig`](crate::config::EditorConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Errors that can occur while loading the reference image
#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("image has zero width or height")]
    Empty,
}
