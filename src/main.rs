//! Jungle Dash entry point
//!
//! Runs a headless scripted playthrough of a level: the simulation is pure
//! and renderer-free, so the binary just drives ticks and reports events.
//! Pass a level index as the first argument; tuning overrides are read from
//! `tuning.json` next to the binary when present.

use jungle_dash::Tuning;
use jungle_dash::consts::SIM_DT_MS;
use jungle_dash::sim::{GameEvent, GameState, KeyState, TickInput, level_count, tick};

/// Scripted input: run right, hop periodically, double-jump on the offbeat
fn scripted_keys(tick_index: u64) -> KeyState {
    KeyState {
        right: true,
        jump: tick_index % 50 == 0 || tick_index % 50 == 20,
        ..Default::default()
    }
}

fn main() {
    env_logger::init();

    let level_index = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0);
    log::info!(
        "Jungle Dash (headless) starting level {level_index} of {}",
        level_count()
    );

    let tuning = Tuning::load_from_path("tuning.json");
    let mut state = match GameState::with_tuning(level_index, &tuning) {
        Ok(state) => state,
        Err(err) => {
            log::error!("Failed to build level {level_index}: {err}");
            std::process::exit(1);
        }
    };

    // Two minutes of simulated time, or until the run resolves
    let max_ticks = 2 * 60 * 60;
    for tick_index in 0..max_ticks {
        let input = TickInput {
            keys: Some(scripted_keys(tick_index)),
        };
        tick(&mut state, &input, SIM_DT_MS);

        for event in state.drain_events() {
            match event {
                GameEvent::PickupCollected { total } => {
                    log::info!("Pickup collected ({total} total)")
                }
                GameEvent::HeartsChanged { hearts } => log::info!("Hearts: {hearts}"),
                GameEvent::PlayerDied => log::warn!("Player died"),
                GameEvent::LevelComplete => log::info!("Level complete!"),
            }
        }

        if state.game_over || state.level_complete {
            break;
        }
    }

    let outcome = if state.level_complete {
        "complete"
    } else if state.game_over {
        "game over"
    } else {
        "timed out"
    };
    println!(
        "Level '{}': {} after {:.1}s, {} pickups, {} hearts left, x = {:.0}",
        state.level_name,
        outcome,
        state.time_ticks as f32 * SIM_DT_MS / 1000.0,
        state.player.pickup_count(),
        state.player.hearts(),
        state.player.body.pos.x,
    );
}
