//! Pure geometry for the editor: the surface the boxes live on, clamping,
//! and the percentage normalization used by the exporter.

pub mod hit_testing;
mod normalize;

use egui::{Pos2, Rect, Vec2};

pub use hit_testing::{BoxLayout, HitTarget, hit_test};
pub use normalize::{NormalizedRect, denormalize, normalize, round_half_up};

/// The displayed reference image: its pixel extent and source file name.
///
/// The extent is fixed for an editing session; every percentage in the
/// export is relative to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    source: String,
    size: Vec2,
}

impl Surface {
    /// Negative extents are treated as empty.
    pub fn new(source: impl Into<String>, size: Vec2) -> Self {
        Self {
            source: source.into(),
            size: size.max(Vec2::ZERO),
        }
    }

    /// The file name written into the export header
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Surface-local bounds, anchored at the origin
    pub fn bounds(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.size)
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        self.bounds().contains(pos)
    }
}

/// Moves `rect` so it lies inside `bounds` without changing its size.
///
/// A rectangle larger than `bounds` along an axis is pinned to the minimum
/// edge on that axis.
pub fn clamp_rect(rect: Rect, bounds: Rect) -> Rect {
    let size = rect.size();
    let max_x = (bounds.max.x - size.x).max(bounds.min.x);
    let max_y = (bounds.max.y - size.y).max(bounds.min.y);
    let min = Pos2::new(
        rect.min.x.clamp(bounds.min.x, max_x),
        rect.min.y.clamp(bounds.min.y, max_y),
    );
    Rect::from_min_size(min, size)
}

/// Pulls `pos` onto the nearest point of `bounds`
pub fn clamp_point(pos: Pos2, bounds: Rect) -> Pos2 {
    pos.clamp(bounds.min, bounds.max)
}
