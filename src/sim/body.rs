//! Arcade-style physics body
//!
//! The simulation assumes a small set of 2D physics primitives: acceleration
//! and drag integration, gravity, per-axis max-velocity clamps, world-bounds
//! clamping and tile collision with blocked flags. `Body` provides exactly
//! those, in screen coordinates (+y down). Controllers own the policy; the
//! body only integrates and resolves.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, resolve_rect_tile};

/// A dynamic axis-aligned body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    pub accel: Vec2,
    /// Full extents of the collision box
    pub size: Vec2,
    /// Horizontal deceleration applied when no horizontal acceleration is set
    pub drag_x: f32,
    /// Per-axis speed limit
    pub max_vel: Vec2,
    pub allow_gravity: bool,
    /// Horizontal restitution against tiles
    pub bounce_x: f32,
    pub collide_world_bounds: bool,
    /// Standing on a tile or the world floor as of the last resolution pass
    pub on_floor: bool,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
            size,
            drag_x: 0.0,
            max_vel: Vec2::new(f32::MAX, f32::MAX),
            allow_gravity: true,
            bounce_x: 0.0,
            collide_world_bounds: false,
            on_floor: false,
        }
    }

    /// Collision rectangle at the current position
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Advance velocity and position by one step. Clears `on_floor`; the
    /// collision passes that follow set it again.
    pub fn integrate(&mut self, dt_s: f32, gravity_y: f32) {
        self.on_floor = false;

        if self.accel.x != 0.0 {
            self.vel.x += self.accel.x * dt_s;
        } else if self.drag_x > 0.0 && self.vel.x != 0.0 {
            let drop = self.drag_x * dt_s;
            if self.vel.x.abs() <= drop {
                self.vel.x = 0.0;
            } else {
                self.vel.x -= drop * self.vel.x.signum();
            }
        }

        if self.allow_gravity {
            self.vel.y += gravity_y * dt_s;
        }
        self.vel.y += self.accel.y * dt_s;

        self.vel.x = self.vel.x.clamp(-self.max_vel.x, self.max_vel.x);
        self.vel.y = self.vel.y.clamp(-self.max_vel.y, self.max_vel.y);

        self.pos += self.vel * dt_s;
    }

    /// Push the body out of any overlapping tiles, settling velocity along
    /// each contact normal.
    pub fn collide_tiles<'a>(&mut self, tiles: impl IntoIterator<Item = &'a Rect>) {
        for tile in tiles {
            let Some(res) = resolve_rect_tile(&self.rect(), tile) else {
                continue;
            };

            self.pos += res.push;

            if res.normal.y < 0.0 {
                // Landed on top of the tile
                if self.vel.y > 0.0 {
                    self.vel.y = 0.0;
                }
                self.on_floor = true;
            } else if res.normal.y > 0.0 {
                if self.vel.y < 0.0 {
                    self.vel.y = 0.0;
                }
            } else if res.normal.x != 0.0 && self.vel.x * res.normal.x < 0.0 {
                self.vel.x = -self.vel.x * self.bounce_x;
            }
        }
    }

    /// Clamp the body inside the world rectangle, zeroing velocity into each
    /// touched edge. The bottom edge counts as a floor.
    pub fn clamp_to_world(&mut self, bounds: &Rect) {
        if !self.collide_world_bounds {
            return;
        }

        let half = self.size / 2.0;

        if self.pos.x - half.x < bounds.min.x {
            self.pos.x = bounds.min.x + half.x;
            if self.vel.x < 0.0 {
                self.vel.x = 0.0;
            }
        } else if self.pos.x + half.x > bounds.max.x {
            self.pos.x = bounds.max.x - half.x;
            if self.vel.x > 0.0 {
                self.vel.x = 0.0;
            }
        }

        if self.pos.y - half.y < bounds.min.y {
            self.pos.y = bounds.min.y + half.y;
            if self.vel.y < 0.0 {
                self.vel.y = 0.0;
            }
        } else if self.pos.y + half.y > bounds.max.y {
            self.pos.y = bounds.max.y - half.y;
            if self.vel.y > 0.0 {
                self.vel.y = 0.0;
            }
            self.on_floor = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_decelerates_to_zero() {
        let mut body = Body::new(Vec2::ZERO, Vec2::new(40.0, 72.0));
        body.allow_gravity = false;
        body.drag_x = 1800.0;
        body.vel.x = 100.0;

        body.integrate(0.05, 0.0);
        assert!((body.vel.x - 10.0).abs() < 1e-3);

        body.integrate(0.05, 0.0);
        assert_eq!(body.vel.x, 0.0);
    }

    #[test]
    fn test_acceleration_respects_max_velocity() {
        let mut body = Body::new(Vec2::ZERO, Vec2::new(40.0, 72.0));
        body.allow_gravity = false;
        body.max_vel = Vec2::new(360.0, 1200.0);
        body.accel.x = 1400.0;

        for _ in 0..120 {
            body.integrate(1.0 / 60.0, 0.0);
        }
        assert!((body.vel.x - 360.0).abs() < 1e-3);
    }

    #[test]
    fn test_gravity_and_tile_landing() {
        let tile = Rect::from_center(Vec2::new(0.0, 688.0), Vec2::new(128.0, 64.0));
        let mut body = Body::new(Vec2::new(0.0, 500.0), Vec2::new(40.0, 72.0));

        for _ in 0..120 {
            body.integrate(1.0 / 60.0, 1500.0);
            body.collide_tiles([&tile]);
        }

        assert!(body.on_floor);
        assert_eq!(body.vel.y, 0.0);
        // Resting with feet on the tile top (y = 656)
        assert!((body.pos.y + 36.0 - 656.0).abs() < 1e-3);
    }

    #[test]
    fn test_world_bounds_clamp() {
        let bounds = Rect::new(Vec2::ZERO, Vec2::new(6400.0, 720.0));
        let mut body = Body::new(Vec2::new(5.0, 100.0), Vec2::new(40.0, 72.0));
        body.collide_world_bounds = true;
        body.vel.x = -200.0;

        body.clamp_to_world(&bounds);
        assert_eq!(body.pos.x, 20.0);
        assert_eq!(body.vel.x, 0.0);
    }
}
