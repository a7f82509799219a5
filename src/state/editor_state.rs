//! The gesture state machine for the annotation editor.
//!
//! Exactly one gesture runs at a time. Every gesture starts from `Idle` and
//! returns to `Idle` on pointer release, except `PlacingGuide`, which ends
//! as soon as the guide is added:
//!
//! ```text
//!              ┌──────────────┐
//!        ┌─────► PlacingGuide ├─────┐
//!        │     └──────────────┘     │
//!        │     ┌──────────────┐     │
//!        ├─────► DraggingBox  ├─────┤
//! ┌──────┴───┐ └──────────────┘     │ ┌──────────┐
//! │   Idle   │ ┌──────────────┐     ├─►   Idle   │
//! └──────┬───┘ │ ResizingBox  ├─────┤ └──────────┘
//!        ├─────►              │     │
//!        │     └──────────────┘     │
//!        │     ┌──────────────┐     │
//!        └─────► DraggingGuide├─────┘
//!              └──────────────┘
//! ```
//!
//! Alongside the gesture the state carries the armed guide mode and the
//! paste latch that debounces key repeat.
use egui::Vec2;

use crate::element::{BoxId, GuideId, Orientation};
use crate::error::TransitionError;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// No pointer gesture in progress
    #[default]
    Idle,
    /// A guide is being placed; lasts for one pointer press
    PlacingGuide { orientation: Orientation, offset: f32 },
    /// A box follows the pointer, keeping the grab point under it
    DraggingBox { box_id: BoxId, grab_offset: Vec2 },
    /// A box's bottom-right corner follows the pointer
    ResizingBox { box_id: BoxId },
    /// A guide follows the pointer along its axis
    DraggingGuide { guide_id: GuideId, grab_offset: f32 },
}

impl Gesture {
    pub fn name(&self) -> &'static str {
        match self {
            Gesture::Idle => "Idle",
            Gesture::PlacingGuide { .. } => "PlacingGuide",
            Gesture::DraggingBox { .. } => "DraggingBox",
            Gesture::ResizingBox { .. } => "ResizingBox",
            Gesture::DraggingGuide { .. } => "DraggingGuide",
        }
    }

    /// Validates whether a transition to the new gesture is allowed
    pub fn can_transition_to(&self, next: &Gesture) -> bool {
        match (self, next) {
            // From Idle, we can start any gesture
            (Gesture::Idle, _) => true,
            // Every gesture ends by going back to Idle
            (_, Gesture::Idle) => true,
            // No chaining one gesture into another
            _ => false,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    /// The box this gesture operates on, if any
    pub fn active_box(&self) -> Option<BoxId> {
        match self {
            Gesture::DraggingBox { box_id, .. } | Gesture::ResizingBox { box_id } => Some(*box_id),
            _ => None,
        }
    }

    /// The guide this gesture operates on, if any
    pub fn active_guide(&self) -> Option<GuideId> {
        match self {
            Gesture::DraggingGuide { guide_id, .. } => Some(*guide_id),
            _ => None,
        }
    }
}

/// Which guide orientation a placement press creates.
///
/// The modes are mutually exclusive; arming one disarms the other. The
/// orientation stays fixed until the mode is changed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuideMode {
    #[default]
    Off,
    Horizontal,
    Vertical,
}

impl GuideMode {
    pub fn orientation(&self) -> Option<Orientation> {
        match self {
            GuideMode::Off => None,
            GuideMode::Horizontal => Some(Orientation::Horizontal),
            GuideMode::Vertical => Some(Orientation::Vertical),
        }
    }
}

/// Editor state owned by the interaction controller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorState {
    gesture: Gesture,
    guide_mode: GuideMode,
    paste_in_flight: bool,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Attempts to move to `next`, returning the gesture it replaced.
    pub fn transition_to(&mut self, next: Gesture) -> Result<Gesture, TransitionError> {
        if !self.gesture.can_transition_to(&next) {
            return Err(TransitionError::InvalidTransition {
                from: self.gesture.name(),
                to: next.name(),
            });
        }
        Ok(std::mem::replace(&mut self.gesture, next))
    }

    /// Ends whatever gesture is running. Always allowed.
    pub fn return_to_idle(&mut self) -> Gesture {
        std::mem::replace(&mut self.gesture, Gesture::Idle)
    }

    pub fn guide_mode(&self) -> GuideMode {
        self.guide_mode
    }

    pub fn set_guide_mode(&mut self, mode: GuideMode) {
        self.guide_mode = mode;
    }

    pub fn paste_in_flight(&self) -> bool {
        self.paste_in_flight
    }

    /// Arms the paste latch. Returns `false` if it was already armed, meaning
    /// this press is a key repeat and must not paste again.
    pub fn arm_paste(&mut self) -> bool {
        !std::mem::replace(&mut self.paste_in_flight, true)
    }

    pub fn release_paste(&mut self) {
        self.paste_in_flight = false;
    }
}
