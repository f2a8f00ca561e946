//! Player movement and combat state machine
//!
//! The player mixes several independent conditions - grounded, climbing,
//! hurt, invulnerable, dead - rather than one exclusive state. Movement logic
//! reads the conditions it cares about; presentation goes through
//! `select_animation`, which imposes the one true priority order:
//! Hurt > Climbing > Airborne > (Running | Idle).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::state::GameEvent;
use crate::consts::{HURT_TINT, PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::tuning::PlayerTuning;

/// Snapshot of the directional/action keys for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
    pub alt_jump: bool,
}

/// Per-tick context the simulation loop computes for the player
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateContext {
    /// Standing inside a ladder zone this frame
    pub on_ladder: bool,
}

/// Named animations, selected by priority each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Animation {
    Idle,
    Run,
    Jump,
    Climb,
    Hurt,
    Dead,
    Celebrate,
}

/// The player avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    can_double_jump: bool,
    coyote_timer: f32,
    invulnerable_timer: f32,
    hurt_anim_timer: f32,
    pickup_count: u32,
    hearts: u8,
    climbing: bool,
    dead: bool,
    jump_was_down: bool,
    alt_jump_was_down: bool,
    tuning: PlayerTuning,

    // Presentation outputs, no feedback into physics
    pub animation: Animation,
    pub flip_x: bool,
    pub alpha: f32,
    pub tint: Option<u32>,
}

impl Player {
    /// Create the player with feet at `spawn` (the convention level spawn
    /// points use), full hearts and zero pickups.
    pub fn new(spawn: Vec2, tuning: &PlayerTuning) -> Self {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        let mut body = Body::new(Vec2::new(spawn.x, spawn.y - size.y / 2.0), size);
        body.drag_x = tuning.run_deceleration;
        body.max_vel = Vec2::new(tuning.max_velocity_x, tuning.max_velocity_y);
        body.collide_world_bounds = true;

        Self {
            body,
            can_double_jump: false,
            coyote_timer: 0.0,
            invulnerable_timer: 0.0,
            hurt_anim_timer: 0.0,
            pickup_count: 0,
            hearts: tuning.max_hearts,
            climbing: false,
            dead: false,
            jump_was_down: false,
            alt_jump_was_down: false,
            tuning: *tuning,
            animation: Animation::Idle,
            flip_x: false,
            alpha: 1.0,
            tint: None,
        }
    }

    /// Advance the controller by one tick. A missing key snapshot makes the
    /// whole update a no-op for the frame (input devices can drop out).
    pub fn update(&mut self, keys: Option<&KeyState>, delta_ms: f32, ctx: &UpdateContext) {
        let Some(keys) = keys else {
            return;
        };

        let jump_pressed = (keys.jump && !self.jump_was_down)
            || (keys.alt_jump && !self.alt_jump_was_down);
        self.jump_was_down = keys.jump;
        self.alt_jump_was_down = keys.alt_jump;

        // Suppress micro-bounce jitter from repeated tiny floor corrections
        if self.body.on_floor && self.body.vel.y.abs() < 10.0 {
            self.body.vel.y = 0.0;
        }

        self.handle_climbing(keys, ctx.on_ladder);

        let mut on_ground = self.body.on_floor;

        if self.climbing {
            // Climbing counts as grounded for jump eligibility
            on_ground = true;
            self.can_double_jump = true;
            self.coyote_timer = 0.0;
        } else if on_ground {
            self.can_double_jump = true;
            self.coyote_timer = self.tuning.coyote_time_ms;
        } else if self.coyote_timer > 0.0 {
            self.coyote_timer -= delta_ms;
        }

        if self.climbing {
            self.body.accel.x = 0.0;
            self.body.vel.x = 0.0;
        } else {
            self.handle_horizontal_movement(keys);
        }

        self.handle_jumping(jump_pressed, on_ground);
        self.animation = self.select_animation(on_ground);
        self.update_invulnerability(delta_ms);
    }

    /// Apply damage unless the invulnerability window is open. Returns true
    /// when damage actually landed so the caller can react (knockback, shake).
    pub fn take_damage(&mut self, amount: u8, events: &mut Vec<GameEvent>) -> bool {
        if self.invulnerable_timer > 0.0 {
            return false;
        }

        self.hearts = self.hearts.saturating_sub(amount);
        self.invulnerable_timer = self.tuning.invulnerability_ms;
        self.hurt_anim_timer = self.tuning.hurt_anim_ms;
        self.tint = Some(HURT_TINT);
        self.animation = Animation::Hurt;
        events.push(GameEvent::HeartsChanged {
            hearts: self.hearts,
        });

        if self.hearts == 0 && !self.dead {
            self.dead = true;
            events.push(GameEvent::PlayerDied);
        }

        true
    }

    /// Restore hearts up to the maximum. Never revives: death is terminal.
    pub fn heal(&mut self, amount: u8, events: &mut Vec<GameEvent>) {
        self.hearts = self.hearts.saturating_add(amount).min(self.tuning.max_hearts);
        events.push(GameEvent::HeartsChanged {
            hearts: self.hearts,
        });
    }

    pub fn collect_pickup(&mut self, amount: u32, events: &mut Vec<GameEvent>) {
        self.pickup_count += amount;
        events.push(GameEvent::PickupCollected {
            total: self.pickup_count,
        });
    }

    /// Shove the player, e.g. away from a hazard. Forces a climb exit.
    pub fn apply_knockback(&mut self, vx: f32, vy: f32) {
        self.stop_climbing();
        self.body.vel = Vec2::new(vx, vy);
    }

    pub fn hearts(&self) -> u8 {
        self.hearts
    }

    pub fn max_hearts(&self) -> u8 {
        self.tuning.max_hearts
    }

    pub fn pickup_count(&self) -> u32 {
        self.pickup_count
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_timer > 0.0
    }

    pub fn is_climbing(&self) -> bool {
        self.climbing
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    fn handle_horizontal_movement(&mut self, keys: &KeyState) {
        if keys.left == keys.right {
            self.body.accel.x = 0.0;
            // Drag handles deceleration; hard-zero only the last residual
            // creep while standing on the floor
            if self.body.on_floor && self.body.vel.x.abs() < self.tuning.min_move_speed {
                self.body.vel.x = 0.0;
            }
            return;
        }

        let direction = if keys.left { -1.0 } else { 1.0 };
        self.body.accel.x = direction * self.tuning.run_acceleration;

        // Only flip once actually moving, to avoid flicker at very low speed
        if self.body.vel.x.abs() > self.tuning.min_move_speed {
            self.flip_x = direction < 0.0;
        }
    }

    fn handle_jumping(&mut self, jump_pressed: bool, on_ground: bool) {
        if !jump_pressed {
            return;
        }

        if self.climbing {
            self.stop_climbing();
            self.body.vel.y = self.tuning.jump_velocity * self.tuning.climb_jump_factor;
            return;
        }

        if on_ground || self.coyote_timer > 0.0 {
            self.body.vel.y = self.tuning.jump_velocity;
            self.can_double_jump = true;
            self.coyote_timer = 0.0;
        } else if self.can_double_jump {
            self.body.vel.y = self.tuning.double_jump_velocity;
            self.can_double_jump = false;
        }
    }

    fn handle_climbing(&mut self, keys: &KeyState, on_ladder: bool) {
        let horizontal = keys.left || keys.right;

        if !self.climbing {
            if on_ladder && (keys.up || keys.down) {
                self.start_climbing();
            } else {
                return;
            }
        }

        if !on_ladder {
            self.stop_climbing();
            return;
        }

        if horizontal {
            self.stop_climbing();
            return;
        }

        let mut velocity_y = 0.0;
        if keys.up {
            velocity_y -= self.tuning.climb_speed;
        }
        if keys.down {
            velocity_y += self.tuning.climb_speed;
        }
        self.body.vel.y = velocity_y;
    }

    fn start_climbing(&mut self) {
        if self.climbing {
            return;
        }
        self.climbing = true;
        self.body.allow_gravity = false;
        self.body.vel = Vec2::ZERO;
        self.body.accel = Vec2::ZERO;
        self.animation = Animation::Climb;
    }

    fn stop_climbing(&mut self) {
        if !self.climbing {
            return;
        }
        self.climbing = false;
        self.body.allow_gravity = true;
    }

    /// Resolve the animation for this tick. Priority order:
    /// Hurt > Climbing > Airborne > Running > Idle.
    fn select_animation(&self, on_ground: bool) -> Animation {
        if self.hurt_anim_timer > 0.0 {
            return Animation::Hurt;
        }
        if self.climbing {
            return Animation::Climb;
        }
        // Rising velocity covers the jump frame itself, where the floor flag
        // has not been cleared yet
        if !on_ground || self.body.vel.y < 0.0 {
            return Animation::Jump;
        }
        if self.body.vel.x.abs() > self.tuning.min_move_speed {
            Animation::Run
        } else {
            Animation::Idle
        }
    }

    fn update_invulnerability(&mut self, delta_ms: f32) {
        if self.hurt_anim_timer > 0.0 {
            self.hurt_anim_timer = (self.hurt_anim_timer - delta_ms).max(0.0);
        }

        if self.invulnerable_timer > 0.0 {
            self.invulnerable_timer -= delta_ms;
            let flicker = (self.invulnerable_timer / 100.0).floor() as i64 % 2 == 0;
            self.alpha = if flicker { 0.6 } else { 1.0 };

            if self.invulnerable_timer <= 0.0 {
                self.invulnerable_timer = 0.0;
            }
        }

        if self.invulnerable_timer <= 0.0 {
            self.alpha = 1.0;
            if self.hurt_anim_timer <= 0.0 {
                self.tint = None;
            }
        }
    }
}
