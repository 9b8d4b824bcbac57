//! Tile-grid geometry
//!
//! The level is a fixed grid of 32x32 tiles addressed as (row, column).
//! Characters live in continuous pixel space; these helpers convert between
//! the two and classify walk vectors back into the four grid directions.

use glam::Vec2;
use rand::Rng;

use crate::consts::{LEVEL_HEIGHT, LEVEL_WIDTH, TILE_HEIGHT, TILE_WIDTH};

/// Walking and looking directions of the actors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, in the order neighbor scans iterate them
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Uniformly random direction (used for initial facings)
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.random_range(0..4) {
            0 => Direction::North,
            1 => Direction::East,
            2 => Direction::South,
            _ => Direction::West,
        }
    }

    /// Classify the dominant axis of a walk vector.
    ///
    /// A mostly-vertical delta picks North/South, otherwise East/West; the
    /// sign of the delta picks the side. An axis tie goes to East/West.
    pub fn of_walk(origin: Vec2, target: Vec2) -> Self {
        let delta = target - origin;
        if delta.x.abs() < delta.y.abs() {
            if delta.y > 0.0 {
                Direction::South
            } else {
                Direction::North
            }
        } else if delta.x > 0.0 {
            Direction::East
        } else {
            Direction::West
        }
    }
}

/// A (row, column) tile address.
///
/// Signed so that neighbors of edge tiles are representable before the
/// bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileIndex {
    pub row: i32,
    pub col: i32,
}

impl TileIndex {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Top-left pixel corner of this tile
    pub fn origin(self) -> Vec2 {
        Vec2::new(self.col as f32 * TILE_WIDTH, self.row as f32 * TILE_HEIGHT)
    }

    /// The adjacent tile one step in `direction`
    pub fn neighbor(self, direction: Direction) -> Self {
        match direction {
            Direction::North => Self::new(self.row - 1, self.col),
            Direction::East => Self::new(self.row, self.col + 1),
            Direction::South => Self::new(self.row + 1, self.col),
            Direction::West => Self::new(self.row, self.col - 1),
        }
    }

    /// All four adjacent tiles, in `Direction::ALL` order
    pub fn neighbors(self) -> impl Iterator<Item = TileIndex> {
        Direction::ALL.into_iter().map(move |d| self.neighbor(d))
    }

    /// Whether this address lies on the level grid
    pub fn in_bounds(self) -> bool {
        (0..LEVEL_HEIGHT).contains(&self.row) && (0..LEVEL_WIDTH).contains(&self.col)
    }
}

/// Tile containing a pixel position
pub fn tile_at(pos: Vec2) -> TileIndex {
    TileIndex::new(
        (pos.y / TILE_HEIGHT).floor() as i32,
        (pos.x / TILE_WIDTH).floor() as i32,
    )
}
