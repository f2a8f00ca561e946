//! Jungle Dash - a side-scrolling jungle platformer simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, hazards, level geometry, tick loop)
//! - `tuning`: Data-driven game balance

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (~60 Hz)
    pub const SIM_DT_MS: f32 = 1000.0 / 60.0;

    /// View dimensions
    pub const GAME_WIDTH: f32 = 1280.0;
    pub const GAME_HEIGHT: f32 = 720.0;

    /// World bounds - levels scroll five screens wide
    pub const WORLD_MIN_X: f32 = 0.0;
    pub const WORLD_MIN_Y: f32 = 0.0;
    pub const WORLD_MAX_X: f32 = GAME_WIDTH * 5.0;
    pub const WORLD_MAX_Y: f32 = GAME_HEIGHT;

    /// Downward gravity (pixels/s²)
    pub const GRAVITY_Y: f32 = 1500.0;

    /// Terrain tiles
    pub const TILE_WIDTH: f32 = 128.0;
    pub const TILE_HEIGHT: f32 = 64.0;
    pub const HALF_TILE_HEIGHT: f32 = TILE_HEIGHT / 2.0;

    /// Ground row center and walkable surface, identical across levels
    pub const GROUND_Y: f32 = GAME_HEIGHT - 32.0;
    pub const GROUND_SURFACE_Y: f32 = GROUND_Y - HALF_TILE_HEIGHT;

    /// Ladder zones
    pub const LADDER_WIDTH: f32 = 64.0;
    /// Connectors at or below this height are not climbable and get dropped
    pub const MIN_LADDER_HEIGHT: f32 = 24.0;

    /// Player movement
    pub const RUN_ACCELERATION: f32 = 1400.0;
    pub const RUN_DECELERATION: f32 = 1800.0;
    pub const MIN_MOVE_SPEED: f32 = 40.0;
    pub const CLIMB_SPEED: f32 = 220.0;
    pub const PLAYER_MAX_VELOCITY_X: f32 = 360.0;
    pub const PLAYER_MAX_VELOCITY_Y: f32 = 1200.0;
    pub const PLAYER_JUMP_VELOCITY: f32 = -650.0;
    pub const PLAYER_DOUBLE_JUMP_VELOCITY: f32 = -560.0;
    /// Jumping off a ladder gets a reduced impulse
    pub const CLIMB_JUMP_FACTOR: f32 = 0.85;
    /// Grace window after walking off a ledge (ms)
    pub const COYOTE_TIME_MS: f32 = 120.0;

    /// Player collision body
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 72.0;

    /// Player health
    pub const MAX_HEARTS: u8 = 3;
    pub const INVULNERABILITY_MS: f32 = 1200.0;
    pub const HURT_ANIM_MS: f32 = 320.0;
    /// Tint applied while the hurt animation plays
    pub const HURT_TINT: u32 = 0xff8a8a;

    /// Knockback applied on hazard contact
    pub const KNOCKBACK_VELOCITY_X: f32 = 280.0;
    pub const KNOCKBACK_VELOCITY_Y: f32 = -520.0;

    /// Barrel hazards
    pub const BARREL_RADIUS: f32 = 28.0;
    pub const BARREL_BASE_SPEED: f32 = 160.0;
    pub const BARREL_MAX_VELOCITY_Y: f32 = 900.0;
    /// How far a barrel may drift from its baseline speed before being snapped back
    pub const BARREL_SPEED_TOLERANCE: f32 = 12.0;
    /// Distance past the world edge before a barrel respawns
    pub const BARREL_RESET_MARGIN: f32 = 200.0;
}

/// True if `value` is within `tolerance` of `target`
#[inline]
pub fn within(value: f32, target: f32, tolerance: f32) -> bool {
    (value - target).abs() <= tolerance
}
