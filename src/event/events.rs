use egui::{Pos2, Vec2};

use crate::element::{BoxId, GuideId, Orientation};
use crate::state::{Gesture, GuideMode};

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    GestureChanged {
        old: Gesture,
        new: Gesture,
    },
    GuideModeChanged(GuideMode),
    BoxCreated(BoxId),
    BoxRemoved(BoxId),
    BoxMoved {
        id: BoxId,
        position: Pos2,
    },
    BoxResized {
        id: BoxId,
        size: Vec2,
    },
    BoxRaised {
        id: BoxId,
        z_order: i64,
    },
    ContentChanged(BoxId),
    SelectionChanged(Option<BoxId>),
    GuideAdded {
        id: GuideId,
        orientation: Orientation,
        offset: f32,
    },
    GuideMoved {
        id: GuideId,
        offset: f32,
    },
    GuideRemoved(GuideId),
    Copied(BoxId),
    Pasted(BoxId),
}
