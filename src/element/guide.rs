use egui::{Pos2, Rect};

use super::common::GuideId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Offset is a y-coordinate; the line spans the full surface width
    Horizontal,
    /// Offset is an x-coordinate; the line spans the full surface height
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    /// Picks the coordinate of `pos` this orientation measures its offset along
    pub fn axis_of(&self, pos: Pos2) -> f32 {
        match self {
            Orientation::Horizontal => pos.y,
            Orientation::Vertical => pos.x,
        }
    }

    /// Length of the surface along the offset axis
    pub fn extent_of(&self, bounds: Rect) -> f32 {
        match self {
            Orientation::Horizontal => bounds.height(),
            Orientation::Vertical => bounds.width(),
        }
    }
}

/// An alignment guide used only while editing. Never exported.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideLine {
    id: GuideId,
    orientation: Orientation,
    offset: f32,
}

impl GuideLine {
    pub(crate) fn new(id: GuideId, orientation: Orientation, offset: f32) -> Self {
        Self {
            id,
            orientation,
            offset,
        }
    }

    pub fn id(&self) -> GuideId {
        self.id
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Distance from `pos` to the line, measured across it
    pub fn distance_to(&self, pos: Pos2) -> f32 {
        (self.orientation.axis_of(pos) - self.offset).abs()
    }

    /// The two endpoints of the line drawn across `bounds`
    pub fn endpoints(&self, bounds: Rect) -> [Pos2; 2] {
        match self.orientation {
            Orientation::Horizontal => [
                Pos2::new(bounds.min.x, bounds.min.y + self.offset),
                Pos2::new(bounds.max.x, bounds.min.y + self.offset),
            ],
            Orientation::Vertical => [
                Pos2::new(bounds.min.x + self.offset, bounds.min.y),
                Pos2::new(bounds.min.x + self.offset, bounds.max.y),
            ],
        }
    }

    pub(crate) fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }
}
