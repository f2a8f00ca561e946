//! Fixed-timestep simulation step
//!
//! One call advances the whole world by one frame: physics integration and
//! terrain resolution, hazard upkeep, the player controller, pickup motion,
//! and overlap handling. Everything is ordered deterministically so equal
//! states under equal inputs stay equal.

use glam::Vec2;

use super::collision::{Rect, circle_rect_overlap, rects_overlap};
use super::player::{Animation, KeyState, UpdateContext};
use super::state::{GameEvent, GameState};
use crate::consts::{
    BARREL_RADIUS, GRAVITY_Y, KNOCKBACK_VELOCITY_X, KNOCKBACK_VELOCITY_Y, WORLD_MAX_X,
    WORLD_MAX_Y, WORLD_MIN_X, WORLD_MIN_Y,
};

const SHAKE_ON_HIT: f32 = 0.35;
const SHAKE_DECAY: f32 = 0.9;

/// Input snapshot for one tick. `keys: None` models a frame with no input
/// device attached; the player freezes but the world keeps moving.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub keys: Option<KeyState>,
}

/// Advance the world by `delta_ms`.
pub fn tick(state: &mut GameState, input: &TickInput, delta_ms: f32) {
    state.screen_shake *= SHAKE_DECAY;
    if state.screen_shake < 0.01 {
        state.screen_shake = 0.0;
    }

    if state.game_over || state.level_complete {
        return;
    }

    state.time_ticks += 1;
    let dt_s = delta_ms / 1000.0;

    let tile_rects: Vec<Rect> = state.tiles.iter().map(|t| t.rect).collect();
    let world = Rect::new(
        Vec2::new(WORLD_MIN_X, WORLD_MIN_Y),
        Vec2::new(WORLD_MAX_X, WORLD_MAX_Y),
    );

    state.player.body.integrate(dt_s, GRAVITY_Y);
    state.player.body.collide_tiles(tile_rects.iter());
    state.player.body.clamp_to_world(&world);

    for barrel in &mut state.barrels {
        barrel.body.integrate(dt_s, GRAVITY_Y);
        barrel.body.collide_tiles(tile_rects.iter());
        barrel.update(delta_ms);
    }

    let player_probe = state.player.body.rect();
    let on_ladder = state
        .ladders
        .iter()
        .any(|ladder| rects_overlap(&player_probe, &ladder.rect));

    state
        .player
        .update(input.keys.as_ref(), delta_ms, &UpdateContext { on_ladder });

    for pickup in &mut state.pickups {
        pickup.update(delta_ms);
    }

    let player_rect = state.player.body.rect();

    for pickup in &mut state.pickups {
        if pickup.active && rects_overlap(&pickup.rect(), &player_rect) {
            pickup.active = false;
            state.player.collect_pickup(1, &mut state.events);
        }
    }

    for barrel in &state.barrels {
        if !circle_rect_overlap(barrel.body.pos, BARREL_RADIUS, &player_rect) {
            continue;
        }
        if state.player.take_damage(1, &mut state.events) {
            // Shove away from the hazard; a dead-center hit pushes right
            let direction = if state.player.body.pos.x >= barrel.body.pos.x {
                1.0
            } else {
                -1.0
            };
            state
                .player
                .apply_knockback(KNOCKBACK_VELOCITY_X * direction, KNOCKBACK_VELOCITY_Y);
            state.screen_shake = SHAKE_ON_HIT;
        }
    }

    if state.goal.active && rects_overlap(&player_rect, &state.goal.rect) {
        state.goal.active = false;
        state.level_complete = true;
        state.player.animation = Animation::Celebrate;
        state.events.push(GameEvent::LevelComplete);
        log::info!(
            "Level '{}' complete after {} ticks with {} pickups",
            state.level_name,
            state.time_ticks,
            state.player.pickup_count()
        );
    }

    if state.player.is_dead() && !state.game_over {
        state.game_over = true;
        state.player.animation = Animation::Dead;
        log::info!("Game over after {} ticks", state.time_ticks);
    }
}
