//! Data-driven game balance
//!
//! Every gameplay tunable has a default equal to the shipped constants; a JSON
//! file can override any subset of them for balance passes without a rebuild.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Player movement and health tunables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub run_acceleration: f32,
    pub run_deceleration: f32,
    /// Below this speed the player is treated as stopped (hard-zero, no flip)
    pub min_move_speed: f32,
    pub climb_speed: f32,
    pub max_velocity_x: f32,
    pub max_velocity_y: f32,
    pub jump_velocity: f32,
    pub double_jump_velocity: f32,
    pub climb_jump_factor: f32,
    pub coyote_time_ms: f32,
    pub max_hearts: u8,
    pub invulnerability_ms: f32,
    pub hurt_anim_ms: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            run_acceleration: RUN_ACCELERATION,
            run_deceleration: RUN_DECELERATION,
            min_move_speed: MIN_MOVE_SPEED,
            climb_speed: CLIMB_SPEED,
            max_velocity_x: PLAYER_MAX_VELOCITY_X,
            max_velocity_y: PLAYER_MAX_VELOCITY_Y,
            jump_velocity: PLAYER_JUMP_VELOCITY,
            double_jump_velocity: PLAYER_DOUBLE_JUMP_VELOCITY,
            climb_jump_factor: CLIMB_JUMP_FACTOR,
            coyote_time_ms: COYOTE_TIME_MS,
            max_hearts: MAX_HEARTS,
            invulnerability_ms: INVULNERABILITY_MS,
            hurt_anim_ms: HURT_ANIM_MS,
        }
    }
}

/// Barrel hazard tunables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HazardTuning {
    /// Baseline speed magnitude used when a spawn configures 0
    pub base_speed: f32,
    pub speed_tolerance: f32,
    pub reset_margin: f32,
}

impl Default for HazardTuning {
    fn default() -> Self {
        Self {
            base_speed: BARREL_BASE_SPEED,
            speed_tolerance: BARREL_SPEED_TOLERANCE,
            reset_margin: BARREL_RESET_MARGIN,
        }
    }
}

/// Complete balance table
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub hazard: HazardTuning,
}

impl Tuning {
    /// Parse a tuning table from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a tuning file, falling back to defaults if it is missing or bad
    pub fn load_from_path(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {path}");
                    tuning
                }
                Err(err) => {
                    log::warn!("Bad tuning file {path}: {err}; using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No tuning file at {path}, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let tuning = Tuning::default();
        assert_eq!(tuning.player.max_velocity_x, 360.0);
        assert_eq!(tuning.player.jump_velocity, -650.0);
        assert_eq!(tuning.player.max_hearts, 3);
        assert_eq!(tuning.hazard.base_speed, 160.0);
    }

    #[test]
    fn test_partial_json_overrides() {
        let tuning = Tuning::from_json(r#"{"player": {"jump_velocity": -700.0}}"#).unwrap();
        assert_eq!(tuning.player.jump_velocity, -700.0);
        // Everything else keeps defaults
        assert_eq!(tuning.player.run_acceleration, 1400.0);
        assert_eq!(tuning.hazard.reset_margin, 200.0);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Tuning::from_json("not json").is_err());
    }
}
