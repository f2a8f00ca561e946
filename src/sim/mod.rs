//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (entity vectors in build order)
//! - No rendering or platform dependencies

pub mod body;
pub mod builder;
pub mod collision;
pub mod geometry;
pub mod hazard;
pub mod level;
pub mod player;
pub mod state;
pub mod tick;

pub use body::Body;
pub use builder::{LevelError, LevelObjects, build, level_count};
pub use collision::{Rect, circle_rect_overlap, rects_overlap};
pub use geometry::{PlatformSegment, Span};
pub use hazard::Barrel;
pub use level::{HazardSpawn, LadderConnector, LadderEndpoint, LevelDefinition, PickupPlacement};
pub use player::{Animation, KeyState, Player, UpdateContext};
pub use state::{GameEvent, GameState, Goal, LadderZone, Pickup, Tile};
pub use tick::{TickInput, tick};
