//! Render-facing view model
//!
//! Pure functions from the game state to what the (external) renderer draws:
//! which scene mode, which sprite frame per actor, and the HUD text. Pixel
//! blitting, fonts and sprite sheets stay outside the crate; tiles are read
//! straight off `GameState::level`, shifted down by [`PLAYFIELD_OFFSET_Y`]
//! to make room for the clock bar.

use glam::Vec2;

use crate::consts::TILE_HEIGHT;
use crate::sim::{Body, Direction, GameOverKind, GameState};

/// Frames per walking direction in the sprite sheets
pub const SPRITE_FRAMES: u32 = 3;

/// Vertical offset of the playfield below the clock bar, in pixels
pub const PLAYFIELD_OFFSET_Y: f32 = TILE_HEIGHT / 2.0;

/// Keyboard hint shown on every screen
pub const KEY_HINT: &str = "Press \"q\" to quit and \"r\" to restart";

/// Which actor variant a sprite belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorKind {
    Cat,
    Mouse,
    Dog,
}

/// One drawable actor sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorSprite {
    pub kind: ActorKind,
    /// Facing used to pick the sprite row
    pub facing: Direction,
    /// Frame index within the facing row, below [`SPRITE_FRAMES`]
    pub frame: u32,
    /// Top-left corner in playfield pixels
    pub pos: Vec2,
}

/// What to draw this frame
#[derive(Debug, Clone, PartialEq)]
pub enum Scene {
    /// The quit screen
    Quitting,
    /// The game-over screen
    GameOver { headline: String },
    /// The in-game screen, cat drawn first
    Playing {
        clock: String,
        actors: Vec<ActorSprite>,
    },
}

/// Compose the scene for the current state.
///
/// Quitting takes precedence over a recorded game over.
pub fn compose(state: &GameState) -> Scene {
    if state.received_quit {
        return Scene::Quitting;
    }

    if let Some(kind) = state.game_over {
        let headline = match kind {
            GameOverKind::MiceEaten => {
                // game_end is recorded together with game_over.
                let end = state.game_end.unwrap_or(state.now);
                format!("Bravo! Your time: {}", format_clock(end - state.game_start))
            }
            GameOverKind::Dog => "Game Over :'(".to_string(),
        };
        return Scene::GameOver { headline };
    }

    let mut actors = vec![sprite(ActorKind::Cat, &state.cat.body, state.now)];
    actors.extend(
        state
            .dogs
            .iter()
            .map(|npc| sprite(ActorKind::Dog, &npc.body, state.now)),
    );
    actors.extend(
        state
            .mice
            .iter()
            .map(|npc| sprite(ActorKind::Mouse, &npc.body, state.now)),
    );

    Scene::Playing {
        clock: format!("Time: {}", format_clock(state.now - state.game_start)),
        actors,
    }
}

/// Pick the sprite for one actor body.
///
/// Standing actors show frame 0 in their facing; walking actors face along
/// the walk and animate through the frames as the walk progresses.
fn sprite(kind: ActorKind, body: &Body, now: f64) -> ActorSprite {
    match body.walking {
        None => ActorSprite {
            kind,
            facing: body.facing,
            frame: 0,
            pos: body.pos,
        },
        Some(walking) => {
            let frame = ((walking.fraction_at(now) * SPRITE_FRAMES as f32) as u32)
                .min(SPRITE_FRAMES - 1);
            ActorSprite {
                kind,
                facing: Direction::of_walk(walking.origin, walking.target),
                frame,
                pos: body.pos,
            }
        }
    }
}

/// Format an elapsed duration as MM:SS.
pub fn format_clock(elapsed: f64) -> String {
    let total = elapsed.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Placement of a scaled scene inside a surface, in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

/// Fit a scene into a surface at constant aspect ratio, centered on the
/// leftover axis. Aspect ratios compare by integer cross-multiplication, so
/// choosing the axis involves no rounding.
pub fn fit_to_surface(scene_w: u32, scene_h: u32, surface_w: u32, surface_h: u32) -> Placement {
    let scene_side = scene_w as u64 * surface_h as u64;
    let surface_side = surface_w as u64 * scene_h as u64;

    if scene_side < surface_side {
        // The surface is wider than the scene: pin the height, margin left
        // and right.
        let width = (scene_w as u64 * surface_h as u64 / scene_h as u64) as u32;
        Placement {
            width,
            height: surface_h,
            x: (surface_w - width) / 2,
            y: 0,
        }
    } else if scene_side == surface_side {
        Placement {
            width: surface_w,
            height: surface_h,
            x: 0,
            y: 0,
        }
    } else {
        // The surface is taller than the scene: pin the width, margin top
        // and bottom.
        let height = (scene_h as u64 * surface_w as u64 / scene_w as u64) as u32;
        Placement {
            width: surface_w,
            height,
            x: 0,
            y: (surface_h - height) / 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TileIndex, Walking};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn state() -> GameState {
        let mut rng = Pcg32::seed_from_u64(3);
        GameState::new(0.0, &mut rng)
    }

    #[test]
    fn test_quitting_takes_precedence() {
        let mut state = state();
        state.received_quit = true;
        state.game_over = Some(GameOverKind::Dog);
        assert_eq!(compose(&state), Scene::Quitting);
    }

    #[test]
    fn test_victory_headline_shows_the_time() {
        let mut state = state();
        state.game_over = Some(GameOverKind::MiceEaten);
        state.game_end = Some(65.0);

        match compose(&state) {
            Scene::GameOver { headline } => {
                assert_eq!(headline, "Bravo! Your time: 01:05");
            }
            other => panic!("expected the game-over scene, got {other:?}"),
        }
    }

    #[test]
    fn test_defeat_headline() {
        let mut state = state();
        state.game_over = Some(GameOverKind::Dog);
        state.game_end = Some(10.0);

        match compose(&state) {
            Scene::GameOver { headline } => assert_eq!(headline, "Game Over :'("),
            other => panic!("expected the game-over scene, got {other:?}"),
        }
    }

    #[test]
    fn test_playing_scene_lists_every_actor_cat_first() {
        let state = state();

        match compose(&state) {
            Scene::Playing { clock, actors } => {
                assert_eq!(clock, "Time: 00:00");
                assert_eq!(actors.len(), 1 + 1 + 4);
                assert_eq!(actors[0].kind, ActorKind::Cat);
                assert_eq!(actors[0].frame, 0);
                assert_eq!(actors[0].pos, state.cat.body.pos);
            }
            other => panic!("expected the playing scene, got {other:?}"),
        }
    }

    #[test]
    fn test_walking_sprite_animates_through_the_frames() {
        let mut state = state();
        let origin = state.cat.body.pos;
        let target = TileIndex::new(12, 10).origin();
        state.cat.body.walking = Some(Walking {
            start: 0.0,
            eta: 0.25,
            origin,
            target,
        });

        let mut last_frame = 0;
        for (now, expected) in [(0.0, 0), (0.1, 1), (0.2, 2), (0.25, 2)] {
            state.now = now;
            match compose(&state) {
                Scene::Playing { actors, .. } => {
                    let cat = actors[0];
                    assert_eq!(cat.frame, expected, "frame at now={now}");
                    assert_eq!(cat.facing, Direction::East);
                    assert!(cat.frame >= last_frame);
                    last_frame = cat.frame;
                }
                other => panic!("expected the playing scene, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(9.9), "00:09");
        assert_eq!(format_clock(65.0), "01:05");
        assert_eq!(format_clock(600.0), "10:00");
        assert_eq!(format_clock(-3.0), "00:00");
    }

    #[test]
    fn test_fit_into_a_wider_surface() {
        // 640x480 scene on a 1920x1080 surface: height-bound, centered
        // horizontally.
        let placement = fit_to_surface(640, 480, 1920, 1080);
        assert_eq!(placement.height, 1080);
        assert_eq!(placement.width, 1440);
        assert_eq!(placement.x, 240);
        assert_eq!(placement.y, 0);
    }

    #[test]
    fn test_fit_into_a_taller_surface() {
        // 640x480 scene on a 600x900 surface: width-bound, centered
        // vertically.
        let placement = fit_to_surface(640, 480, 600, 900);
        assert_eq!(placement.width, 600);
        assert_eq!(placement.height, 450);
        assert_eq!(placement.x, 0);
        assert_eq!(placement.y, 225);
    }

    #[test]
    fn test_fit_with_matching_aspect_fills_the_surface() {
        let placement = fit_to_surface(640, 480, 1280, 960);
        assert_eq!(
            placement,
            Placement {
                width: 1280,
                height: 960,
                x: 0,
                y: 0
            }
        );
    }
}
