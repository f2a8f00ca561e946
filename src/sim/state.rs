//! World entities and the top-level simulation state
//!
//! `GameState` is the complete, serializable world: given equal states and
//! equal inputs, the tick function produces equal successor states. Entity
//! vectors keep their build order for the whole level so iteration order is
//! stable across runs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::builder::{self, LevelError};
use super::collision::Rect;
use super::hazard::Barrel;
use super::player::Player;
use crate::consts::{LADDER_WIDTH, TILE_HEIGHT, TILE_WIDTH};
use crate::tuning::Tuning;

const PICKUP_SIZE: f32 = 36.0;
const PICKUP_FLOAT_SPEED: f32 = 0.0035;
const PICKUP_FLOAT_RANGE: f32 = 10.0;

const GOAL_WIDTH: f32 = 128.0;
const GOAL_HEIGHT: f32 = 192.0;
const GOAL_BODY_WIDTH_RATIO: f32 = 0.6;
const GOAL_BODY_HEIGHT_RATIO: f32 = 0.8;

/// Things that happened during a tick that an outer layer (UI, audio,
/// scene flow) would react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PickupCollected { total: u32 },
    HeartsChanged { hearts: u8 },
    PlayerDied,
    LevelComplete,
}

/// One static terrain tile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    /// Center position
    pub pos: Vec2,
    pub rect: Rect,
}

impl Tile {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            rect: Rect::from_center(pos, Vec2::new(TILE_WIDTH, TILE_HEIGHT)),
        }
    }
}

/// Climbable region between two surfaces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderZone {
    pub x: f32,
    pub center_y: f32,
    pub height: f32,
    pub rect: Rect,
}

impl LadderZone {
    /// `top` is the upper surface Y; the zone extends `height` downward
    pub fn new(x: f32, top: f32, height: f32) -> Self {
        let center_y = top + height / 2.0;
        Self {
            x,
            center_y,
            height,
            rect: Rect::from_center(Vec2::new(x, center_y), Vec2::new(LADDER_WIDTH, height)),
        }
    }
}

/// A collectible that bobs in place until collected
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    base_y: f32,
    pub pos: Vec2,
    elapsed_ms: f32,
    pub active: bool,
}

impl Pickup {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            base_y: y,
            pos: Vec2::new(x, y),
            elapsed_ms: 0.0,
            active: true,
        }
    }

    /// Advance the bobbing motion. Inactive pickups freeze in place.
    pub fn update(&mut self, delta_ms: f32) {
        if !self.active {
            return;
        }
        self.elapsed_ms += delta_ms;
        self.pos.y =
            self.base_y + (self.elapsed_ms * PICKUP_FLOAT_SPEED).sin() * PICKUP_FLOAT_RANGE;
    }

    /// Collision rectangle at the current (bobbed) position
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(PICKUP_SIZE))
    }
}

/// End-of-level goal marker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Bottom-center anchor
    pub pos: Vec2,
    pub rect: Rect,
    pub active: bool,
}

impl Goal {
    pub fn new(pos: Vec2) -> Self {
        // The trigger region is a fraction of the full sprite footprint,
        // anchored at the bottom center
        let width = GOAL_WIDTH * GOAL_BODY_WIDTH_RATIO;
        let height = GOAL_HEIGHT * GOAL_BODY_HEIGHT_RATIO;
        Self {
            pos,
            rect: Rect::new(
                Vec2::new(pos.x - width / 2.0, pos.y - height),
                Vec2::new(pos.x + width / 2.0, pos.y),
            ),
            active: true,
        }
    }
}

/// The whole simulated world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub level_index: usize,
    pub level_name: String,
    pub spawn_point: Vec2,
    pub time_ticks: u64,
    /// Camera shake intensity, decays toward zero each tick
    pub screen_shake: f32,
    pub game_over: bool,
    pub level_complete: bool,

    pub player: Player,
    pub tiles: Vec<Tile>,
    pub ladders: Vec<LadderZone>,
    pub pickups: Vec<Pickup>,
    pub barrels: Vec<Barrel>,
    pub goal: Goal,

    /// Events raised by ticks since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build a fresh world for the given level with default tuning
    pub fn new(level_index: usize) -> Result<Self, LevelError> {
        Self::with_tuning(level_index, &Tuning::default())
    }

    pub fn with_tuning(level_index: usize, tuning: &Tuning) -> Result<Self, LevelError> {
        let objects = builder::build_with_tuning(level_index, tuning)?;
        let player = Player::new(objects.spawn_point, &tuning.player);

        Ok(Self {
            level_index: objects.level_index,
            level_name: objects.level_name,
            spawn_point: objects.spawn_point,
            time_ticks: 0,
            screen_shake: 0.0,
            game_over: false,
            level_complete: false,
            player,
            tiles: objects.tiles,
            ladders: objects.ladders,
            pickups: objects.pickups,
            barrels: objects.barrels,
            goal: objects.goal,
            events: Vec::new(),
        })
    }

    /// Take all pending events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pickup_bobs_around_base() {
        let mut pickup = Pickup::new(400.0, 300.0);
        let mut min_y = f32::MAX;
        let mut max_y = f32::MIN;

        for _ in 0..240 {
            pickup.update(1000.0 / 60.0);
            min_y = min_y.min(pickup.pos.y);
            max_y = max_y.max(pickup.pos.y);
        }

        assert!(min_y >= 300.0 - PICKUP_FLOAT_RANGE - 1e-3);
        assert!(max_y <= 300.0 + PICKUP_FLOAT_RANGE + 1e-3);
        assert!(max_y - min_y > PICKUP_FLOAT_RANGE);
        assert_eq!(pickup.pos.x, 400.0);
    }

    #[test]
    fn test_inactive_pickup_freezes() {
        let mut pickup = Pickup::new(400.0, 300.0);
        pickup.update(500.0);
        pickup.active = false;
        let frozen = pickup.pos;
        pickup.update(500.0);
        assert_eq!(pickup.pos, frozen);
    }

    #[test]
    fn test_goal_trigger_region() {
        let goal = Goal::new(Vec2::new(1000.0, 656.0));
        assert!((goal.rect.width() - 76.8).abs() < 1e-3);
        assert!((goal.rect.height() - 153.6).abs() < 1e-3);
        // Anchored at the bottom
        assert_eq!(goal.rect.max.y, 656.0);
        assert!(goal.rect.contains_point(Vec2::new(1000.0, 600.0)));
    }

    #[test]
    fn test_ladder_zone_extends_downward_from_top() {
        let zone = LadderZone::new(320.0, 400.0, 256.0);
        assert_eq!(zone.rect.min.y, 400.0);
        assert_eq!(zone.rect.max.y, 656.0);
        assert_eq!(zone.rect.width(), 64.0);
    }

    #[test]
    fn test_state_round_trips_through_serde() {
        let state = GameState::new(0).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.level_name, state.level_name);
        assert_eq!(restored.tiles.len(), state.tiles.len());
        assert_eq!(restored.player.body.pos, state.player.body.pos);
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(0).unwrap();
        state.events.push(GameEvent::HeartsChanged { hearts: 2 });
        let drained = state.drain_events();
        assert_eq!(drained.len(), 1);
        assert!(state.events.is_empty());
    }
}
