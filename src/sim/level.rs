//! Declarative level definitions
//!
//! Levels are fixed, hand-authored data: platform segments, ladder connectors,
//! pickup placements, hazard spawns and spawn/goal points. The tables are
//! built once and shared; the builder consumes them by index.

use std::sync::OnceLock;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{PlatformSegment, overlap_center_x};
use crate::consts::{GAME_HEIGHT, GROUND_SURFACE_Y, TILE_WIDTH};

/// One end of a ladder: the global ground surface or a platform's surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LadderEndpoint {
    Ground,
    Platform(usize),
}

/// A climbable connector between two surfaces
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LadderConnector {
    pub x: f32,
    pub lower: LadderEndpoint,
    pub upper: LadderEndpoint,
}

/// A single collectible
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickupPlacement {
    pub x: f32,
    pub y: f32,
}

/// A rolling barrel spawn. A speed of 0 means the default baseline speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardSpawn {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

/// Everything needed to build one playable level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub name: String,
    pub spawn: Vec2,
    pub goal: Vec2,
    pub platforms: Vec<PlatformSegment>,
    pub ladders: Vec<LadderConnector>,
    pub pickups: Vec<PickupPlacement>,
    pub barrels: Vec<HazardSpawn>,
}

/// Platform whose first tile starts at `left`
fn platform(left: f32, y: f32, tiles: u32) -> PlatformSegment {
    PlatformSegment::new(left + TILE_WIDTH / 2.0, y, tiles)
}

/// Ladder connecting two platforms, placed at the center of their horizontal
/// overlap, with lower/upper ordered by surface height
fn ladder_between(platforms: &[PlatformSegment], a: usize, b: usize) -> LadderConnector {
    let a_top = platforms[a].top();
    let b_top = platforms[b].top();

    // Larger Y is the lower surface (screen coordinates)
    let (lower, upper) = if a_top > b_top { (a, b) } else { (b, a) };

    LadderConnector {
        x: overlap_center_x(&platforms[a], &platforms[b]),
        lower: LadderEndpoint::Platform(lower),
        upper: LadderEndpoint::Platform(upper),
    }
}

/// Ladder from the ground up to a platform, at the platform's midpoint
fn ladder_from_ground(platforms: &[PlatformSegment], index: usize) -> LadderConnector {
    LadderConnector {
        x: platforms[index].midpoint_x(),
        lower: LadderEndpoint::Ground,
        upper: LadderEndpoint::Platform(index),
    }
}

/// Pickup floating above a platform at a fractional position along its span
fn pickup_on(platform: &PlatformSegment, ratio: f32, v_offset: f32) -> PickupPlacement {
    let span = platform.span();
    let t = ratio.clamp(0.0, 1.0);
    PickupPlacement {
        x: span.left + span.width * t,
        y: platform.top() + v_offset,
    }
}

/// A row of pickups above one platform
fn pickup_row(platform: &PlatformSegment, ratios: &[f32], v_offset: f32) -> Vec<PickupPlacement> {
    ratios.iter().map(|&r| pickup_on(platform, r, v_offset)).collect()
}

fn barrel_on_ground(x: f32, speed: f32) -> HazardSpawn {
    HazardSpawn {
        x,
        y: GROUND_SURFACE_Y - 28.0,
        speed,
    }
}

fn barrel_on_platform(platform: &PlatformSegment, ratio: f32, speed: f32) -> HazardSpawn {
    let span = platform.span();
    let t = ratio.clamp(0.0, 1.0);
    HazardSpawn {
        x: span.left + span.width * t,
        y: platform.top() - 28.0,
        speed,
    }
}

fn level_one() -> LevelDefinition {
    let h = GAME_HEIGHT;
    let platforms = vec![
        platform(512.0, h - 220.0, 3),
        platform(832.0, h - 340.0, 3),
        platform(1168.0, h - 260.0, 4),
        platform(1648.0, h - 420.0, 3),
        platform(2000.0, h - 320.0, 4),
        platform(2448.0, h - 240.0, 5),
        platform(3008.0, h - 360.0, 4),
        platform(3472.0, h - 280.0, 4),
        platform(3920.0, h - 440.0, 3),
        platform(4240.0, h - 300.0, 4),
        platform(4704.0, h - 220.0, 5),
        platform(5280.0, h - 320.0, 4),
        platform(5760.0, h - 220.0, 4),
    ];

    let mut ladders = vec![ladder_from_ground(&platforms, 0)];
    for i in 0..platforms.len() - 1 {
        ladders.push(ladder_between(&platforms, i, i + 1));
    }

    let mut pickups = Vec::new();
    pickups.extend(pickup_row(&platforms[0], &[0.25, 0.6], -48.0));
    pickups.extend(pickup_row(&platforms[1], &[0.45], -52.0));
    pickups.extend(pickup_row(&platforms[2], &[0.2, 0.5, 0.8], -48.0));
    pickups.extend(pickup_row(&platforms[3], &[0.5], -56.0));
    pickups.extend(pickup_row(&platforms[4], &[0.2, 0.85], -48.0));
    pickups.extend(pickup_row(&platforms[5], &[0.25, 0.5, 0.75], -48.0));
    pickups.extend(pickup_row(&platforms[6], &[0.6], -48.0));
    pickups.extend(pickup_row(&platforms[7], &[0.35, 0.8], -48.0));
    pickups.extend(pickup_row(&platforms[8], &[0.5], -52.0));
    pickups.extend(pickup_row(&platforms[9], &[0.3, 0.7], -48.0));
    pickups.extend(pickup_row(&platforms[10], &[0.15, 0.45, 0.75], -48.0));
    pickups.extend(pickup_row(&platforms[11], &[0.35, 0.9], -50.0));
    pickups.extend(pickup_row(&platforms[12], &[0.55], -48.0));
    pickups.push(PickupPlacement {
        x: 420.0,
        y: GROUND_SURFACE_Y - 36.0,
    });
    pickups.push(PickupPlacement {
        x: 980.0,
        y: GROUND_SURFACE_Y - 32.0,
    });

    let barrels = vec![
        barrel_on_ground(1150.0, 160.0),
        barrel_on_platform(&platforms[4], 0.7, 190.0),
        barrel_on_platform(&platforms[7], 0.4, 210.0),
        barrel_on_ground(3600.0, 200.0),
        barrel_on_platform(&platforms[10], 0.6, 220.0),
    ];

    let last = platforms[platforms.len() - 1];
    LevelDefinition {
        name: "Jungle Approach".to_string(),
        spawn: Vec2::new(180.0, h - 200.0),
        goal: Vec2::new(last.midpoint_x(), last.y),
        platforms,
        ladders,
        pickups,
        barrels,
    }
}

fn level_two() -> LevelDefinition {
    let h = GAME_HEIGHT;
    let platforms = vec![
        platform(480.0, h - 260.0, 4),
        platform(928.0, h - 380.0, 3),
        platform(1248.0, h - 320.0, 4),
        platform(1696.0, h - 460.0, 3),
        platform(2016.0, h - 300.0, 4),
        platform(2464.0, h - 220.0, 4),
        platform(2912.0, h - 380.0, 4),
        platform(3360.0, h - 240.0, 5),
        platform(3936.0, h - 360.0, 4),
        platform(4384.0, h - 220.0, 5),
        platform(4960.0, h - 340.0, 4),
        platform(5408.0, h - 420.0, 4),
        platform(5856.0, h - 300.0, 4),
    ];

    let mut ladders = vec![ladder_from_ground(&platforms, 0)];
    for i in 0..5 {
        ladders.push(ladder_between(&platforms, i, i + 1));
    }
    ladders.push(ladder_from_ground(&platforms, 5));
    for i in 5..9 {
        ladders.push(ladder_between(&platforms, i, i + 1));
    }
    ladders.push(ladder_from_ground(&platforms, 9));
    for i in 9..12 {
        ladders.push(ladder_between(&platforms, i, i + 1));
    }

    let mut pickups = Vec::new();
    pickups.extend(pickup_row(&platforms[0], &[0.3, 0.7], -48.0));
    pickups.extend(pickup_row(&platforms[1], &[0.5], -54.0));
    pickups.extend(pickup_row(&platforms[2], &[0.2, 0.8], -48.0));
    pickups.extend(pickup_row(&platforms[3], &[0.5], -58.0));
    pickups.extend(pickup_row(&platforms[4], &[0.25, 0.5, 0.75], -48.0));
    pickups.extend(pickup_row(&platforms[5], &[0.35, 0.65], -46.0));
    pickups.extend(pickup_row(&platforms[6], &[0.4, 0.9], -52.0));
    pickups.extend(pickup_row(&platforms[7], &[0.2, 0.5, 0.8], -48.0));
    pickups.extend(pickup_row(&platforms[8], &[0.45], -56.0));
    pickups.extend(pickup_row(&platforms[9], &[0.25, 0.5, 0.75], -48.0));
    pickups.extend(pickup_row(&platforms[10], &[0.35, 0.85], -48.0));
    pickups.extend(pickup_row(&platforms[11], &[0.4, 0.6], -58.0));
    pickups.extend(pickup_row(&platforms[12], &[0.55], -48.0));
    for x in [760.0, 3200.0, 5200.0] {
        pickups.push(PickupPlacement {
            x,
            y: GROUND_SURFACE_Y - 36.0,
        });
    }

    let barrels = vec![
        barrel_on_ground(900.0, 180.0),
        barrel_on_platform(&platforms[2], 0.6, 220.0),
        barrel_on_platform(&platforms[4], 0.3, 240.0),
        barrel_on_ground(2800.0, 210.0),
        barrel_on_platform(&platforms[7], 0.7, 260.0),
        barrel_on_ground(3600.0, 230.0),
        barrel_on_platform(&platforms[9], 0.5, 280.0),
        barrel_on_platform(&platforms[11], 0.4, 300.0),
    ];

    let last = platforms[platforms.len() - 1];
    LevelDefinition {
        name: "Treetop Gauntlet".to_string(),
        spawn: Vec2::new(180.0, h - 200.0),
        goal: Vec2::new(last.midpoint_x(), last.y),
        platforms,
        ladders,
        pickups,
        barrels,
    }
}

/// The full level table, built once
pub fn levels() -> &'static [LevelDefinition] {
    static LEVELS: OnceLock<Vec<LevelDefinition>> = OnceLock::new();
    LEVELS.get_or_init(|| vec![level_one(), level_two()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_levels_defined() {
        assert_eq!(levels().len(), 2);
        assert_eq!(levels()[0].name, "Jungle Approach");
        assert_eq!(levels()[1].name, "Treetop Gauntlet");
    }

    #[test]
    fn test_ladder_between_orders_endpoints_by_surface() {
        let defs = levels();
        for level in defs {
            for ladder in &level.ladders {
                let surface = |endpoint: &LadderEndpoint| match endpoint {
                    LadderEndpoint::Ground => GROUND_SURFACE_Y,
                    LadderEndpoint::Platform(i) => level.platforms[*i].top(),
                };
                // Lower endpoint is numerically deeper (larger Y)
                assert!(surface(&ladder.lower) >= surface(&ladder.upper));
            }
        }
    }

    #[test]
    fn test_goal_sits_on_last_platform_midpoint() {
        let level = &levels()[0];
        let last = level.platforms.last().unwrap();
        assert_eq!(level.goal.x, last.midpoint_x());
        assert_eq!(level.goal.y, last.y);
    }

    #[test]
    fn test_ladder_platform_indices_are_valid() {
        for level in levels() {
            for ladder in &level.ladders {
                for endpoint in [&ladder.lower, &ladder.upper] {
                    if let LadderEndpoint::Platform(i) = endpoint {
                        assert!(*i < level.platforms.len());
                    }
                }
            }
        }
    }
}
