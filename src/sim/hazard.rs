//! Rolling barrel hazards
//!
//! A barrel rolls leftward at a fixed baseline speed for its whole lifetime.
//! Terrain bounces may nudge its velocity briefly, but anything outside a
//! small tolerance gets snapped back to the baseline. Barrels are never
//! destroyed: falling out of the world or rolling past the left edge
//! teleports them back to their spawn point.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::level::HazardSpawn;
use crate::consts::{
    BARREL_MAX_VELOCITY_Y, BARREL_RADIUS, WORLD_MAX_Y, WORLD_MIN_X,
};
use crate::tuning::HazardTuning;
use crate::within;

/// A rolling barrel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Barrel {
    pub body: Body,
    spawn_point: Vec2,
    /// Baseline horizontal velocity, always negative (leftward), fixed for life
    base_speed: f32,
    /// Visual roll angle in radians, advanced with horizontal speed
    pub rotation: f32,
    tuning: HazardTuning,
}

impl Barrel {
    pub fn new(spawn: &HazardSpawn) -> Self {
        Self::with_tuning(spawn, &HazardTuning::default())
    }

    pub fn with_tuning(spawn: &HazardSpawn, tuning: &HazardTuning) -> Self {
        // A configured speed of 0 means the default baseline; any sign
        // supplied is coerced to leftward travel.
        let intended = if spawn.speed == 0.0 {
            -tuning.base_speed
        } else {
            spawn.speed
        };
        let base_speed = if intended > 0.0 { -intended } else { intended };

        let mut body = Body::new(
            Vec2::new(spawn.x, spawn.y),
            Vec2::splat(BARREL_RADIUS * 2.0),
        );
        body.bounce_x = 0.1;
        body.vel.x = base_speed;
        // Headroom above baseline allows bounce transients without runaway speed
        body.max_vel = Vec2::new(
            base_speed.abs().max(tuning.base_speed) * 1.1,
            BARREL_MAX_VELOCITY_Y,
        );

        Self {
            body,
            spawn_point: Vec2::new(spawn.x, spawn.y),
            base_speed,
            rotation: 0.0,
            tuning: *tuning,
        }
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    pub fn spawn_point(&self) -> Vec2 {
        self.spawn_point
    }

    /// Per-tick hazard logic; motion integration happens in the tick loop
    pub fn update(&mut self, delta_ms: f32) {
        if !within(self.body.vel.x, self.base_speed, self.tuning.speed_tolerance) {
            self.body.vel.x = self.base_speed;
        }

        let margin = self.tuning.reset_margin;
        if self.body.pos.y > WORLD_MAX_Y + margin || self.body.pos.x < WORLD_MIN_X - margin {
            self.reset_position();
        }

        self.rotation += (-self.body.vel.x / 220.0) * (delta_ms / 16.67);
    }

    fn reset_position(&mut self) {
        self.body.pos = self.spawn_point;
        self.body.vel = Vec2::new(self.base_speed, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn(x: f32, y: f32, speed: f32) -> HazardSpawn {
        HazardSpawn { x, y, speed }
    }

    #[test]
    fn test_speed_is_coerced_leftward() {
        let barrel = Barrel::new(&spawn(500.0, 300.0, 190.0));
        assert_eq!(barrel.base_speed(), -190.0);

        let barrel = Barrel::new(&spawn(500.0, 300.0, -220.0));
        assert_eq!(barrel.base_speed(), -220.0);
    }

    #[test]
    fn test_zero_speed_uses_default_baseline() {
        let barrel = Barrel::new(&spawn(500.0, 300.0, 0.0));
        assert_eq!(barrel.base_speed(), -160.0);
        assert_eq!(barrel.body.vel.x, -160.0);
    }

    #[test]
    fn test_velocity_snapped_back_to_baseline() {
        let mut barrel = Barrel::new(&spawn(500.0, 300.0, 200.0));

        // Bounce transient within tolerance is left alone
        barrel.body.vel.x = -190.0;
        barrel.update(16.67);
        assert_eq!(barrel.body.vel.x, -190.0);

        // Outside tolerance it snaps back
        barrel.body.vel.x = -120.0;
        barrel.update(16.67);
        assert_eq!(barrel.body.vel.x, -200.0);
    }

    #[test]
    fn test_reset_past_left_bound() {
        let mut barrel = Barrel::new(&spawn(500.0, 300.0, 200.0));
        barrel.body.pos = Vec2::new(WORLD_MIN_X - 201.0, 300.0);
        barrel.body.vel = Vec2::new(-200.0, 350.0);

        barrel.update(16.67);

        assert_eq!(barrel.body.pos, Vec2::new(500.0, 300.0));
        assert_eq!(barrel.body.vel, Vec2::new(-200.0, 0.0));
    }

    #[test]
    fn test_reset_below_world() {
        let mut barrel = Barrel::new(&spawn(500.0, 300.0, 0.0));
        barrel.body.pos = Vec2::new(800.0, WORLD_MAX_Y + 250.0);

        barrel.update(16.67);

        assert_eq!(barrel.body.pos, barrel.spawn_point());
    }

    #[test]
    fn test_no_reset_within_margin() {
        let mut barrel = Barrel::new(&spawn(500.0, 300.0, 0.0));
        barrel.body.pos = Vec2::new(WORLD_MIN_X - 150.0, 300.0);

        barrel.update(16.67);

        assert_eq!(barrel.body.pos.x, WORLD_MIN_X - 150.0);
    }

    #[test]
    fn test_rotation_tracks_horizontal_speed() {
        let mut barrel = Barrel::new(&spawn(500.0, 300.0, 220.0));
        barrel.update(16.67);
        // Leftward travel advances the roll angle
        assert!(barrel.rotation > 0.0);
    }
}
