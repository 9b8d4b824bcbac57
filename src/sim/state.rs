//! Authoritative game state
//!
//! Everything the transition engine mutates lives here. Construction and
//! restart run the same initialization against a caller-provided clock and
//! RNG, so tests can pin exact trajectories with a fixed seed.

use glam::Vec2;
use rand::Rng;

use super::events::GameOverKind;
use super::grid::{Direction, TileIndex, tile_at};
use super::level::{INITIAL_MAP, Level, Spawns};

/// An in-progress interpolated move between two tile-aligned positions.
///
/// While a walk is present, the actor's logical tile is the target tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Walking {
    /// Start time, in seconds
    pub start: f64,
    /// Estimated time of arrival, in seconds
    pub eta: f64,
    /// Origin position, in pixels
    pub origin: Vec2,
    /// Target position, in pixels
    pub target: Vec2,
}

impl Walking {
    /// Fraction of the walk completed at `now`, clamped to [0, 1]
    pub fn fraction_at(&self, now: f64) -> f32 {
        debug_assert!(self.start <= self.eta);
        if now <= self.start {
            0.0
        } else if now >= self.eta {
            1.0
        } else {
            ((now - self.start) / (self.eta - self.start)) as f32
        }
    }

    /// Interpolated position at `now`
    pub fn position_at(&self, now: f64) -> Vec2 {
        self.origin + (self.target - self.origin) * self.fraction_at(now)
    }
}

/// The actor substrate shared by the cat and the NPCs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Top-left corner in pixel space
    pub pos: Vec2,
    /// Ongoing walk, if any
    pub walking: Option<Walking>,
    /// Facing direction while standing
    pub facing: Direction,
}

impl Body {
    fn at(index: TileIndex, facing: Direction) -> Self {
        Self {
            pos: index.origin(),
            walking: None,
            facing,
        }
    }

    /// The tile this body effectively occupies: the walk target while
    /// walking (the reservation), its current tile otherwise.
    pub fn effective_tile(&self) -> TileIndex {
        match &self.walking {
            Some(walking) => tile_at(walking.target),
            None => tile_at(self.pos),
        }
    }
}

/// The player-controlled cat
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cat {
    pub body: Body,
    /// Move intent set by input, consumed by the next tick
    pub direction_to_walk: Option<Direction>,
}

/// A wandering non-player character (mouse or dog)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Npc {
    pub body: Body,
    /// When to attempt the next randomized walk, in seconds
    pub next_walk: f64,
}

/// The global state of the game
#[derive(Debug, Clone)]
pub struct GameState {
    /// Set once the quit signal arrived
    pub received_quit: bool,
    /// When the current game started, in seconds
    pub game_start: f64,
    /// Current game clock, in seconds
    pub now: f64,
    /// Set when the game finishes
    pub game_over: Option<GameOverKind>,
    /// When the game finished, in seconds
    pub game_end: Option<f64>,
    pub level: Level,
    pub cat: Cat,
    /// Shrinks as mice are eaten
    pub mice: Vec<Npc>,
    /// Fixed after initialization
    pub dogs: Vec<Npc>,
}

impl GameState {
    /// Build the start state from the initial map.
    ///
    /// The cat gets a random facing; every NPC gets a random facing and a
    /// first walk scheduled within three seconds of the start.
    pub fn new<R: Rng + ?Sized>(game_start: f64, rng: &mut R) -> Self {
        let (level, spawns) = Level::parse(&INITIAL_MAP);
        Self::from_spawns(level, &spawns, game_start, rng)
    }

    fn from_spawns<R: Rng + ?Sized>(
        level: Level,
        spawns: &Spawns,
        game_start: f64,
        rng: &mut R,
    ) -> Self {
        let cat = Cat {
            body: Body::at(spawns.cat, Direction::random(rng)),
            direction_to_walk: None,
        };

        let spawn_npc = |index: TileIndex, rng: &mut R| Npc {
            body: Body::at(index, Direction::random(rng)),
            next_walk: game_start + rng.random_range(0.0..3.0),
        };

        let mice = spawns
            .mice
            .iter()
            .map(|&index| spawn_npc(index, rng))
            .collect();
        let dogs = spawns
            .dogs
            .iter()
            .map(|&index| spawn_npc(index, rng))
            .collect();

        Self {
            received_quit: false,
            game_start,
            now: game_start,
            game_over: None,
            game_end: None,
            level,
            cat,
            mice,
            dogs,
        }
    }

    /// Restart: re-run initialization against a fresh clock, discarding all
    /// prior actor and collection state.
    pub fn reset<R: Rng + ?Sized>(&mut self, game_start: f64, rng: &mut R) {
        *self = Self::new(game_start, rng);
    }

    /// Cat-then-dogs-then-mice iteration over the actor bodies
    pub fn bodies_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        std::iter::once(&mut self.cat.body)
            .chain(self.dogs.iter_mut().map(|npc| &mut npc.body))
            .chain(self.mice.iter_mut().map(|npc| &mut npc.body))
    }
}
