use std::fmt;

use uuid::Uuid;

// Defaults shared by the element types and the editor config
pub const MIN_BOX_WIDTH: f32 = 30.0;
pub const MIN_BOX_HEIGHT: f32 = 20.0;
pub const DEFAULT_BOX_WIDTH: f32 = 60.0;
pub const DEFAULT_BOX_HEIGHT: f32 = 30.0;

/// Stable identifier of an [`AnnotationBox`](super::AnnotationBox)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxId(Uuid);

impl BoxId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BoxId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "box-{}", self.0.simple())
    }
}

/// Stable identifier of a [`GuideLine`](super::GuideLine)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GuideId(Uuid);

impl GuideId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GuideId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GuideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "guide-{}", self.0.simple())
    }
}
