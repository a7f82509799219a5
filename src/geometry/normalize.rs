use egui::{Pos2, Rect, Vec2};

use super::Surface;

// Absorbs binary representation error so 12.345 rounds like the decimal literal
const ROUNDING_EPSILON: f64 = 1e-7;

/// A rectangle expressed as percentages of the surface extent, each rounded
/// to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Rounds to two decimal places, halves going up.
pub fn round_half_up(value: f64) -> f64 {
    (value * 100.0 + 0.5 + ROUNDING_EPSILON).floor() / 100.0
}

fn percent_of(pixels: f32, extent: f32) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    round_half_up(f64::from(pixels) / f64::from(extent) * 100.0)
}

/// Converts pixel geometry to percentage-of-surface.
///
/// Lossy: scaling the result back to pixels reproduces `rect` only to within
/// one rounding unit.
pub fn normalize(rect: Rect, surface: &Surface) -> NormalizedRect {
    NormalizedRect {
        x: percent_of(rect.min.x, surface.width()),
        y: percent_of(rect.min.y, surface.height()),
        width: percent_of(rect.width(), surface.width()),
        height: percent_of(rect.height(), surface.height()),
    }
}

/// Scales a normalized rectangle back to surface pixels.
pub fn denormalize(normalized: NormalizedRect, surface: &Surface) -> Rect {
    let to_pixels = |percent: f64, extent: f32| (percent / 100.0 * f64::from(extent)) as f32;
    Rect::from_min_size(
        Pos2::new(
            to_pixels(normalized.x, surface.width()),
            to_pixels(normalized.y, surface.height()),
        ),
        Vec2::new(
            to_pixels(normalized.width, surface.width()),
            to_pixels(normalized.height, surface.height()),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn rounds_halves_up() {
        assert_eq!(round_half_up(12.345), 12.35);
        assert_eq!(round_half_up(12.344), 12.34);
        assert_eq!(round_half_up(0.005), 0.01);
        assert_eq!(round_half_up(7.5), 7.5);
    }

    #[test]
    fn normalizes_reference_layout() {
        let surface = Surface::new("task.png", vec2(800.0, 400.0));
        let rect = Rect::from_min_size(pos2(100.0, 100.0), vec2(60.0, 30.0));
        let normalized = normalize(rect, &surface);
        assert_eq!(normalized.x, 12.5);
        assert_eq!(normalized.y, 25.0);
        assert_eq!(normalized.width, 7.5);
        assert_eq!(normalized.height, 7.5);
    }

    #[test]
    fn empty_surface_normalizes_to_zero() {
        let surface = Surface::new("empty.png", vec2(0.0, 0.0));
        let rect = Rect::from_min_size(pos2(10.0, 10.0), vec2(30.0, 20.0));
        let normalized = normalize(rect, &surface);
        assert_eq!(normalized.x, 0.0);
        assert_eq!(normalized.height, 0.0);
    }

    #[test]
    fn renormalizing_denormalized_rect_is_stable() {
        let surfaces = [vec2(800.0, 400.0), vec2(1333.0, 777.0), vec2(97.0, 61.0)];
        for extent in surfaces {
            let surface = Surface::new("s.png", extent);
            let mut x = 0.0;
            while x + 30.0 <= extent.x {
                let mut y = 0.0;
                while y + 20.0 <= extent.y {
                    let rect = Rect::from_min_size(pos2(x, y), vec2(30.0 + x / 7.0, 20.0 + y / 11.0));
                    let first = normalize(rect, &surface);
                    let second = normalize(denormalize(first, &surface), &surface);
                    assert!((first.x - second.x).abs() <= 0.01 + 1e-9, "{first:?} vs {second:?}");
                    assert!((first.y - second.y).abs() <= 0.01 + 1e-9, "{first:?} vs {second:?}");
                    assert!((first.width - second.width).abs() <= 0.01 + 1e-9);
                    assert!((first.height - second.height).abs() <= 0.01 + 1e-9);
                    y += 13.7;
                }
                x += 17.3;
            }
        }
    }

    #[test]
    fn denormalize_is_within_one_rounding_unit() {
        let surface = Surface::new("s.png", vec2(1333.0, 777.0));
        let rect = Rect::from_min_size(pos2(123.4, 56.7), vec2(61.0, 33.0));
        let back = denormalize(normalize(rect, &surface), &surface);
        // one unit of 0.01% of the extent
        assert!((back.min.x - rect.min.x).abs() <= 1333.0 * 0.0001);
        assert!((back.min.y - rect.min.y).abs() <= 777.0 * 0.0001);
    }
}
