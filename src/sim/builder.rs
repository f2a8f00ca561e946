//! Turns a level definition into live world objects
//!
//! The builder lays the continuous ground row, expands platform segments into
//! tiles, resolves ladder connectors against the surfaces they join, and cuts
//! pass-through gaps in a platform wherever a ladder arrives at it from below.

use std::collections::HashMap;

use glam::Vec2;
use thiserror::Error;

use super::hazard::Barrel;
use super::level::{self, LadderEndpoint, LevelDefinition};
use super::state::{Goal, LadderZone, Pickup, Tile};
use crate::consts::{
    GROUND_SURFACE_Y, GROUND_Y, MIN_LADDER_HEIGHT, TILE_WIDTH, WORLD_MAX_X,
};
use crate::tuning::Tuning;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("ladder references invalid platform index {0}")]
    InvalidPlatformIndex(usize),
}

/// The live objects for one level, ready to drop into a game state
#[derive(Debug, Clone)]
pub struct LevelObjects {
    pub level_index: usize,
    pub level_name: String,
    pub spawn_point: Vec2,
    pub tiles: Vec<Tile>,
    pub ladders: Vec<LadderZone>,
    pub pickups: Vec<Pickup>,
    pub barrels: Vec<Barrel>,
    pub goal: Goal,
}

/// Number of levels in the table
pub fn level_count() -> usize {
    level::levels().len()
}

/// Build a level with default tuning
pub fn build(level_index: usize) -> Result<LevelObjects, LevelError> {
    build_with_tuning(level_index, &Tuning::default())
}

/// Build a level by index. Out-of-range indices fall back to level 0.
pub fn build_with_tuning(level_index: usize, tuning: &Tuning) -> Result<LevelObjects, LevelError> {
    let defs = level::levels();
    let index = if level_index < defs.len() {
        level_index
    } else {
        log::warn!("Level index {level_index} out of range, falling back to 0");
        0
    };

    let mut objects = build_objects(&defs[index], tuning)?;
    objects.level_index = index;

    log::info!(
        "Built level {index} '{}': {} tiles, {} ladders, {} pickups, {} barrels",
        objects.level_name,
        objects.tiles.len(),
        objects.ladders.len(),
        objects.pickups.len(),
        objects.barrels.len(),
    );

    Ok(objects)
}

fn build_objects(def: &LevelDefinition, tuning: &Tuning) -> Result<LevelObjects, LevelError> {
    let surface_y = |endpoint: LadderEndpoint| -> Result<f32, LevelError> {
        match endpoint {
            LadderEndpoint::Ground => Ok(GROUND_SURFACE_Y),
            LadderEndpoint::Platform(i) => def
                .platforms
                .get(i)
                .map(|p| p.top())
                .ok_or(LevelError::InvalidPlatformIndex(i)),
        }
    };

    // Every connector endpoint that touches a platform carves a gap there,
    // whether or not the connector survives the minimum-height check below.
    let mut gaps: HashMap<usize, Vec<f32>> = HashMap::new();
    for connector in &def.ladders {
        for endpoint in [connector.lower, connector.upper] {
            if let LadderEndpoint::Platform(i) = endpoint {
                gaps.entry(i).or_default().push(connector.x);
            }
        }
    }

    let mut ladders = Vec::new();
    for connector in &def.ladders {
        let lower_y = surface_y(connector.lower)?;
        let upper_y = surface_y(connector.upper)?;

        let bottom = lower_y.max(upper_y);
        let top = lower_y.min(upper_y);
        let height = bottom - top;
        if height <= MIN_LADDER_HEIGHT {
            log::warn!(
                "Dropping ladder at x={}: height {height} below minimum",
                connector.x
            );
            continue;
        }

        ladders.push(LadderZone::new(connector.x, top, height));
    }

    let mut tiles = Vec::new();

    // Continuous ground row across the whole world
    let ground_tiles = (WORLD_MAX_X / TILE_WIDTH).ceil() as u32;
    for i in 0..ground_tiles {
        let x = i as f32 * TILE_WIDTH + TILE_WIDTH / 2.0;
        tiles.push(Tile::new(Vec2::new(x, GROUND_Y)));
    }

    // Platform tiles, skipping any tile a ladder passes through
    let tolerance = TILE_WIDTH * 0.1;
    for (index, segment) in def.platforms.iter().enumerate() {
        let platform_gaps = gaps.get(&index).map(Vec::as_slice).unwrap_or(&[]);

        for i in 0..segment.tiles {
            let center_x = segment.x + i as f32 * TILE_WIDTH;
            let left = center_x - TILE_WIDTH / 2.0 - tolerance;
            let right = center_x + TILE_WIDTH / 2.0 + tolerance;
            if platform_gaps.iter().any(|&gap| gap >= left && gap <= right) {
                continue;
            }
            tiles.push(Tile::new(Vec2::new(center_x, segment.y)));
        }
    }

    let pickups = def
        .pickups
        .iter()
        .map(|p| Pickup::new(p.x, p.y))
        .collect();

    let barrels = def
        .barrels
        .iter()
        .map(|spawn| Barrel::with_tuning(spawn, &tuning.hazard))
        .collect();

    Ok(LevelObjects {
        level_index: 0,
        level_name: def.name.clone(),
        spawn_point: def.spawn,
        tiles,
        ladders,
        pickups,
        barrels,
        goal: Goal::new(def.goal),
    })
}
