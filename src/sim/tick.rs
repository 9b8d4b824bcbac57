//! Event dispatch and the per-tick transition engine
//!
//! [`dispatch`] pops exactly one event per call; the frame driver loops until
//! the queue is empty. Tick handling runs a fixed sequence: clock advance,
//! win and loss checks, eating, occupancy rebuild, NPC walks, cat intent,
//! walk animation.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::audio::{AudioSink, SoundEffect};
use crate::consts::WALK_DURATION;

use super::collision::Aabb;
use super::events::{Button, Event, EventQueue, GameOverKind};
use super::grid::{Direction, TileIndex, tile_at};
use super::level::Tile;
use super::state::{GameState, Walking};

/// Consume the first event in the queue, if any.
///
/// Quit and restart are ordinary queued events resolved in order; `GameOver`
/// only takes effect while no earlier game over has been recorded.
pub fn dispatch<R: Rng + ?Sized, A: AudioSink>(
    state: &mut GameState,
    queue: &mut EventQueue,
    now: f64,
    rng: &mut R,
    audio: &mut A,
) {
    let Some(event) = queue.pop() else { return };

    match event {
        Event::ReceivedQuit => {
            log::info!("Received the quit signal");
            state.received_quit = true;
        }
        Event::ReceivedRestart => {
            log::info!("Restarting the game");
            audio.stop_all();
            state.reset(now, rng);
        }
        Event::GameOver(kind) => {
            // The first game over wins; later ones are dropped.
            if state.game_over.is_none() {
                log::info!("Game over: {kind:?}");
                state.game_over = Some(kind);
                state.game_end = Some(now);
                match kind {
                    GameOverKind::MiceEaten => audio.play(SoundEffect::Victory),
                    GameOverKind::Dog => audio.play(SoundEffect::Defeat),
                }
            }
        }
        Event::Tick => handle_tick(state, queue, now, rng, audio),
        Event::ButtonDown(button) => handle_button(state, button),
    }
}

/// A button press sets the cat's one-tick move intent.
///
/// Presses while the cat is mid-walk are dropped, as are the corner action
/// buttons that map to no direction.
fn handle_button(state: &mut GameState, button: Button) {
    if state.cat.body.walking.is_some() {
        return;
    }
    if let Some(direction) = button.direction() {
        state.cat.direction_to_walk = Some(direction);
    }
}

fn handle_tick<R: Rng + ?Sized, A: AudioSink>(
    state: &mut GameState,
    queue: &mut EventQueue,
    now: f64,
    rng: &mut R,
    audio: &mut A,
) {
    state.now = now;

    // All mice eaten: the game is won. Does not cut the tick short.
    if state.mice.is_empty() {
        queue.push(Event::GameOver(GameOverKind::MiceEaten));
    }

    // A dog reaching the cat ends the tick immediately.
    let cat_box = Aabb::character(state.cat.body.pos);
    for dog in &state.dogs {
        if Aabb::character(dog.body.pos).intersects(&cat_box) {
            queue.push(Event::GameOver(GameOverKind::Dog));
            return;
        }
    }

    // Eat every mouse overlapping the cat; survivors keep their order.
    state.mice.retain(|mouse| {
        if Aabb::character(mouse.body.pos).intersects(&cat_box) {
            audio.play(SoundEffect::MouseEaten);
            false
        } else {
            true
        }
    });

    let mut occupied = occupied_tiles(state);

    // Walk the NPCs that are due, dogs before mice.
    for npc in state.dogs.iter_mut().chain(state.mice.iter_mut()) {
        if npc.body.walking.is_some() || now <= npc.next_walk {
            continue;
        }

        let current = tile_at(npc.body.pos);
        let candidates: Vec<TileIndex> = current
            .neighbors()
            .filter(|next| next.in_bounds() && !occupied.contains(next))
            .collect();

        if let Some(&target) = candidates.choose(rng) {
            npc.body.walking = Some(Walking {
                start: now,
                eta: now + WALK_DURATION,
                origin: npc.body.pos,
                target: target.origin(),
            });

            // Swap the reservation so later NPCs this tick see it.
            occupied.remove(&current);
            occupied.insert(target);
        }

        // Once due, the cadence is rescheduled whether or not a walk started.
        npc.next_walk = now + 3.0 + rng.random_range(0.0..5.0);
    }

    // Resolve the cat's buffered move intent.
    if let Some(direction) = state.cat.direction_to_walk.take() {
        assert!(
            state.cat.body.walking.is_none(),
            "cat cannot be walking and instructed to walk"
        );

        let target = tile_at(state.cat.body.pos).neighbor(direction);
        match state.level.get(target) {
            None | Some(Tile::Block(_)) => {
                // No walking into a block or off the map, but the cat turns.
                state.cat.body.facing = direction;
            }
            Some(Tile::Floor(_)) => {
                // The cat does not consult character occupancy: player input
                // always succeeds onto open floor.
                state.cat.body.walking = Some(Walking {
                    start: now,
                    eta: now + WALK_DURATION,
                    origin: state.cat.body.pos,
                    target: target.origin(),
                });
            }
        }
    }

    // Advance every in-flight walk. A walk scheduled in the future leaves
    // the body untouched.
    for body in state.bodies_mut() {
        let Some(walking) = body.walking else { continue };

        if now >= walking.eta {
            body.pos = walking.target;
            body.facing = Direction::of_walk(walking.origin, walking.target);
            body.walking = None;
        } else if now >= walking.start {
            body.pos = walking.position_at(now);
        }
    }
}

/// Tiles blocked for NPC pathing this tick: every block tile plus every
/// character's effective tile (the walk target while walking).
fn occupied_tiles(state: &GameState) -> HashSet<TileIndex> {
    let mut occupied: HashSet<TileIndex> = state
        .level
        .iter()
        .filter(|(_, tile)| tile.is_block())
        .map(|(index, _)| index)
        .collect();

    occupied.insert(state.cat.body.effective_tile());
    for npc in state.dogs.iter().chain(state.mice.iter()) {
        occupied.insert(npc.body.effective_tile());
    }

    occupied
}
