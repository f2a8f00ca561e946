//! Overlap queries and tile collision resolution
//!
//! Terrain is axis-aligned tile rectangles; moving bodies are AABBs (player)
//! or circles (barrels). Resolution pushes a body out of a tile along the
//! axis of least penetration and reports the contact normal so the caller can
//! settle velocity and blocked flags.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build from a center point and full extents
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

/// Do two rectangles overlap?
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

/// Does a circle overlap a rectangle?
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = center.clamp(rect.min, rect.max);
    (center - closest).length_squared() <= radius * radius
}

/// Result of pushing a body out of a tile
#[derive(Debug, Clone, Copy)]
pub struct Resolution {
    /// Translation to apply to the body position
    pub push: Vec2,
    /// Contact normal pointing away from the tile, axis-aligned
    pub normal: Vec2,
}

/// Resolve an AABB against a static tile along the axis of least penetration.
///
/// Returns `None` when the rectangles do not overlap.
pub fn resolve_rect_tile(body: &Rect, tile: &Rect) -> Option<Resolution> {
    if !rects_overlap(body, tile) {
        return None;
    }

    let overlap_x = (body.max.x - tile.min.x).min(tile.max.x - body.min.x);
    let overlap_y = (body.max.y - tile.min.y).min(tile.max.y - body.min.y);

    if overlap_x < overlap_y {
        if body.center().x < tile.center().x {
            Some(Resolution {
                push: Vec2::new(-overlap_x, 0.0),
                normal: Vec2::NEG_X,
            })
        } else {
            Some(Resolution {
                push: Vec2::new(overlap_x, 0.0),
                normal: Vec2::X,
            })
        }
    } else if body.center().y < tile.center().y {
        Some(Resolution {
            push: Vec2::new(0.0, -overlap_y),
            normal: Vec2::NEG_Y,
        })
    } else {
        Some(Resolution {
            push: Vec2::new(0.0, overlap_y),
            normal: Vec2::Y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rects_overlap() {
        let a = Rect::from_center(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::from_center(Vec2::new(8.0, 0.0), Vec2::new(10.0, 10.0));
        let c = Rect::from_center(Vec2::new(20.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(rects_overlap(&a, &b));
        assert!(!rects_overlap(&a, &c));
    }

    #[test]
    fn test_circle_rect_overlap() {
        let rect = Rect::from_center(Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0));
        assert!(circle_rect_overlap(Vec2::new(14.0, 0.0), 5.0, &rect));
        assert!(!circle_rect_overlap(Vec2::new(20.0, 0.0), 5.0, &rect));
        // Corner case: diagonal distance matters, not per-axis distance
        assert!(!circle_rect_overlap(Vec2::new(14.0, 14.0), 5.0, &rect));
    }

    #[test]
    fn test_resolve_lands_on_top() {
        let tile = Rect::from_center(Vec2::new(0.0, 100.0), Vec2::new(128.0, 64.0));
        // Body sunk 4px into the tile top
        let body = Rect::from_center(Vec2::new(0.0, 100.0 - 32.0 - 20.0 + 4.0), Vec2::new(40.0, 40.0));

        let res = resolve_rect_tile(&body, &tile).expect("should collide");
        assert_eq!(res.normal, Vec2::NEG_Y);
        assert!((res.push.y - (-4.0)).abs() < 1e-3);
        assert_eq!(res.push.x, 0.0);
    }

    #[test]
    fn test_resolve_side_contact() {
        let tile = Rect::from_center(Vec2::new(0.0, 0.0), Vec2::new(128.0, 64.0));
        // Body overlapping the tile's left face by 6px, vertically centered
        let body = Rect::from_center(Vec2::new(-64.0 - 20.0 + 6.0, 0.0), Vec2::new(40.0, 40.0));

        let res = resolve_rect_tile(&body, &tile).expect("should collide");
        assert_eq!(res.normal, Vec2::NEG_X);
        assert!((res.push.x - (-6.0)).abs() < 1e-3);
    }

    #[test]
    fn test_resolve_miss() {
        let tile = Rect::from_center(Vec2::new(0.0, 0.0), Vec2::new(128.0, 64.0));
        let body = Rect::from_center(Vec2::new(500.0, 0.0), Vec2::new(40.0, 40.0));
        assert!(resolve_rect_tile(&body, &tile).is_none());
    }
}
