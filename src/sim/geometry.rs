//! Platform segment geometry
//!
//! A platform segment is a horizontal run of fixed-size tiles described by the
//! center of its first tile. All queries here are pure functions of the
//! segment data; the level builder and the level authoring helpers both lean
//! on them.

use serde::{Deserialize, Serialize};

use crate::consts::{HALF_TILE_HEIGHT, TILE_WIDTH};

/// A horizontal run of platform tiles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSegment {
    /// Center X of the first tile
    pub x: f32,
    /// Vertical center of the tile row
    pub y: f32,
    /// Number of tiles (≥ 1)
    pub tiles: u32,
}

/// Horizontal extent of a platform segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub left: f32,
    pub right: f32,
    pub width: f32,
}

impl PlatformSegment {
    pub fn new(x: f32, y: f32, tiles: u32) -> Self {
        Self { x, y, tiles }
    }

    /// Full horizontal extent of the segment
    pub fn span(&self) -> Span {
        let left = self.x - TILE_WIDTH / 2.0;
        let right = self.x + (self.tiles as f32 - 0.5) * TILE_WIDTH;
        Span {
            left,
            right,
            width: right - left,
        }
    }

    /// Walkable surface height
    #[inline]
    pub fn top(&self) -> f32 {
        self.y - HALF_TILE_HEIGHT
    }

    /// Horizontal center of the span
    pub fn midpoint_x(&self) -> f32 {
        let span = self.span();
        span.left + span.width / 2.0
    }
}

/// Horizontal midpoint of the intersection of two segment spans.
///
/// Falls back to `a.midpoint_x()` when the spans do not intersect. Callers are
/// expected to only pair overlapping segments (ladder authoring does); the
/// fallback keeps the result well-defined rather than erroring.
pub fn overlap_center_x(a: &PlatformSegment, b: &PlatformSegment) -> f32 {
    let span_a = a.span();
    let span_b = b.span();
    let left = span_a.left.max(span_b.left);
    let right = span_a.right.min(span_b.right);

    if right <= left {
        return a.midpoint_x();
    }

    left + (right - left) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_span_extents() {
        // First tile centered at 576, three tiles of 128
        let segment = PlatformSegment::new(576.0, 500.0, 3);
        let span = segment.span();
        assert_eq!(span.left, 512.0);
        assert_eq!(span.right, 576.0 + 2.5 * 128.0);
        assert_eq!(span.width, 3.0 * 128.0);
    }

    #[test]
    fn test_top_is_half_tile_above_center() {
        let segment = PlatformSegment::new(576.0, 500.0, 3);
        assert_eq!(segment.top(), 500.0 - HALF_TILE_HEIGHT);
    }

    #[test]
    fn test_midpoint_x() {
        let segment = PlatformSegment::new(576.0, 500.0, 3);
        let span = segment.span();
        assert_eq!(segment.midpoint_x(), (span.left + span.right) / 2.0);
    }

    #[test]
    fn test_overlap_center_of_intersecting_spans() {
        // [512, 896] and [704, 1088] intersect on [704, 896]
        let a = PlatformSegment::new(576.0, 500.0, 3);
        let b = PlatformSegment::new(768.0, 380.0, 3);
        assert_eq!(overlap_center_x(&a, &b), 800.0);
    }

    #[test]
    fn test_overlap_center_falls_back_to_first_midpoint() {
        let a = PlatformSegment::new(576.0, 500.0, 3);
        let b = PlatformSegment::new(3000.0, 380.0, 3);
        assert_eq!(overlap_center_x(&a, &b), a.midpoint_x());
    }

    proptest! {
        #[test]
        fn prop_span_width_is_tile_count_times_width(
            x in -10_000.0f32..10_000.0,
            y in -1_000.0f32..1_000.0,
            tiles in 1u32..64,
        ) {
            let segment = PlatformSegment::new(x, y, tiles);
            let span = segment.span();
            prop_assert!((span.width - tiles as f32 * TILE_WIDTH).abs() < 1e-3);
        }
    }
}
