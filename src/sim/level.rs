//! Level tiles and the initial map literal
//!
//! The level is built once from an ASCII map and never mutated afterwards.
//! Spawn cells ('c', 'm', 'd') are ordinary floor tiles; the characters that
//! start on them live in the game state, not in the level.

use glam::Vec2;

use super::grid::TileIndex;
use crate::consts::{LEVEL_HEIGHT, LEVEL_WIDTH};

/// A single level tile, carrying its pixel-space top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tile {
    /// Impassable wall
    Block(Vec2),
    /// Walkable ground
    Floor(Vec2),
}

impl Tile {
    /// Top-left pixel corner
    pub fn origin(&self) -> Vec2 {
        match *self {
            Tile::Block(origin) | Tile::Floor(origin) => origin,
        }
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Tile::Block(_))
    }
}

/// The fixed rectangular tile grid
#[derive(Debug, Clone)]
pub struct Level {
    tiles: Vec<Tile>,
}

/// Spawn cells collected while parsing a map
#[derive(Debug, Clone)]
pub struct Spawns {
    pub cat: TileIndex,
    pub mice: Vec<TileIndex>,
    pub dogs: Vec<TileIndex>,
}

/// The single level of the game: '#' blocks, '.' floor, 'c' the cat start
/// (exactly one), 'm' mouse starts, 'd' dog starts.
pub const INITIAL_MAP: [&str; LEVEL_HEIGHT as usize] = [
    "##..#########...####",
    "#......m...........#",
    "#....##...##...#..##",
    "#...#########.......",
    "#....##.m......#...#",
    "#..d........#..#...#",
    "#...####...###......",
    "#...###.......#.#..#",
    "#.......#.....m....#",
    "....m...##..........",
    ".......###....###..#",
    "#.....##...##.......",
    "#........c.........#",
    "###.####...###.#####",
];

impl Level {
    /// Parse a map literal into tiles and spawn cells.
    ///
    /// Panics on a malformed map (wrong shape, an unknown cell, or a cat
    /// count other than one). The map is validated once at startup, never
    /// per tick.
    pub fn parse(map: &[&str]) -> (Level, Spawns) {
        assert_eq!(map.len(), LEVEL_HEIGHT as usize, "wrong number of map rows");

        let mut tiles = Vec::with_capacity((LEVEL_WIDTH * LEVEL_HEIGHT) as usize);
        let mut cat = None;
        let mut mice = Vec::new();
        let mut dogs = Vec::new();

        for (row, line) in map.iter().enumerate() {
            assert_eq!(
                line.len(),
                LEVEL_WIDTH as usize,
                "wrong length of map row {row}"
            );

            for (col, cell) in line.chars().enumerate() {
                let index = TileIndex::new(row as i32, col as i32);
                let origin = index.origin();

                match cell {
                    '#' => tiles.push(Tile::Block(origin)),
                    '.' => tiles.push(Tile::Floor(origin)),
                    'c' => {
                        assert!(cat.is_none(), "exactly one cat expected in the map");
                        cat = Some(index);
                        tiles.push(Tile::Floor(origin));
                    }
                    'm' => {
                        mice.push(index);
                        tiles.push(Tile::Floor(origin));
                    }
                    'd' => {
                        dogs.push(index);
                        tiles.push(Tile::Floor(origin));
                    }
                    other => panic!("unknown cell in the map: {other:?}"),
                }
            }
        }

        let cat = cat.expect("exactly one cat expected in the map");
        (Level { tiles }, Spawns { cat, mice, dogs })
    }

    /// Tile at the given address, or None outside the grid
    pub fn get(&self, index: TileIndex) -> Option<&Tile> {
        if !index.in_bounds() {
            return None;
        }
        self.tiles.get((index.row * LEVEL_WIDTH + index.col) as usize)
    }

    /// Row-major iteration over (address, tile)
    pub fn iter(&self) -> impl Iterator<Item = (TileIndex, &Tile)> {
        self.tiles.iter().enumerate().map(|(i, tile)| {
            let i = i as i32;
            (TileIndex::new(i / LEVEL_WIDTH, i % LEVEL_WIDTH), tile)
        })
    }
}
