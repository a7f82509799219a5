use egui::Pos2;

use crate::config::SnapPriority;
use crate::element::{GuideLine, Orientation};

/// Snaps a single coordinate to the best candidate offset.
///
/// An offset qualifies when it is strictly closer than `threshold`.
/// Candidates are considered in the order given.
pub fn snap_axis(value: f32, offsets: impl IntoIterator<Item = f32>, threshold: f32, priority: SnapPriority) -> f32 {
    let mut chosen: Option<(f32, f32)> = None;
    for offset in offsets {
        let distance = (value - offset).abs();
        if distance >= threshold {
            continue;
        }
        let replace = match (priority, chosen) {
            (_, None) => true,
            (SnapPriority::Nearest, Some((_, best))) => distance < best,
            (SnapPriority::First, Some(_)) => false,
            (SnapPriority::Last, Some(_)) => true,
        };
        if replace {
            chosen = Some((offset, distance));
        }
    }
    chosen.map_or(value, |(offset, _)| offset)
}

/// Snaps a dragged box's top-left anchor onto nearby guides.
///
/// Horizontal guides pull `y`, vertical guides pull `x`; the two axes are
/// independent. Only used while dragging, never while resizing.
pub fn snap(candidate: Pos2, guides: &[GuideLine], threshold: f32, priority: SnapPriority) -> Pos2 {
    let offsets = |orientation: Orientation| {
        guides
            .iter()
            .filter(move |guide| guide.orientation() == orientation)
            .map(GuideLine::offset)
    };
    Pos2::new(
        snap_axis(candidate.x, offsets(Orientation::Vertical), threshold, priority),
        snap_axis(candidate.y, offsets(Orientation::Horizontal), threshold, priority),
    )
}
