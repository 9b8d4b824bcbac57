//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Wall-clock timestamps come in through the dispatcher, never read here
//! - Seeded RNG only, passed through every randomized call
//! - No rendering or platform dependencies

pub mod collision;
pub mod events;
pub mod grid;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use events::{Button, Event, EventQueue, GameOverKind};
pub use grid::{Direction, TileIndex, tile_at};
pub use level::{INITIAL_MAP, Level, Tile};
pub use state::{Body, Cat, GameState, Npc, Walking};
pub use tick::dispatch;
