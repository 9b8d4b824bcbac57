//! Per-frame orchestration
//!
//! One frame: enqueue the translated input events, append a single tick,
//! then drain the queue completely before the caller renders and blocks to
//! the 30 Hz cadence. The app owns the seeded RNG, so a whole session
//! replays from its seed.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::AudioSink;
use crate::sim::{Event, EventQueue, GameState, dispatch};

pub struct App<A> {
    pub state: GameState,
    queue: EventQueue,
    rng: Pcg32,
    audio: A,
}

impl<A: AudioSink> App<A> {
    /// Start a game at `game_start` seconds with the given seed.
    pub fn new(seed: u64, game_start: f64, audio: A) -> Self {
        log::info!("Starting a game with seed {seed}");
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(game_start, &mut rng);
        Self {
            state,
            queue: EventQueue::new(),
            rng,
            audio,
        }
    }

    /// Run one frame at `now` seconds: queue `inputs`, append one tick, and
    /// drain the queue one event at a time.
    pub fn frame<I>(&mut self, inputs: I, now: f64)
    where
        I: IntoIterator<Item = Event>,
    {
        for event in inputs {
            self.queue.push(event);
        }
        self.queue.push(Event::Tick);

        while !self.queue.is_empty() {
            dispatch(
                &mut self.state,
                &mut self.queue,
                now,
                &mut self.rng,
                &mut self.audio,
            );
        }
    }

    /// True once the quit event has been handled
    pub fn should_quit(&self) -> bool {
        self.state.received_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullAudio;
    use crate::sim::{Button, GameOverKind};

    #[test]
    fn test_frame_advances_the_clock() {
        let mut app = App::new(1, 0.0, NullAudio);
        app.frame([], 0.5);
        assert_eq!(app.state.now, 0.5);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_quit_input_is_drained_in_order() {
        let mut app = App::new(1, 0.0, NullAudio);
        app.frame([Event::ReceivedQuit], 0.1);
        assert!(app.should_quit());
        // The tick behind the quit event still ran.
        assert_eq!(app.state.now, 0.1);
    }

    #[test]
    fn test_win_is_dispatched_within_the_frame() {
        let mut app = App::new(1, 0.0, NullAudio);
        app.state.mice.clear();

        app.frame([], 2.0);

        assert_eq!(app.state.game_over, Some(GameOverKind::MiceEaten));
        assert_eq!(app.state.game_end, Some(2.0));
    }

    #[test]
    fn test_restart_starts_a_fresh_game() {
        let mut app = App::new(1, 0.0, NullAudio);
        app.state.mice.clear();
        app.frame([], 2.0);
        assert!(app.state.game_over.is_some());

        app.frame([Event::ReceivedRestart], 3.0);

        assert_eq!(app.state.game_over, None);
        assert_eq!(app.state.game_start, 3.0);
        assert_eq!(app.state.mice.len(), 4);
    }

    #[test]
    fn test_sessions_replay_from_the_seed() {
        let mut one = App::new(777, 0.0, NullAudio);
        let mut two = App::new(777, 0.0, NullAudio);

        for frame in 0..90 {
            let now = frame as f64 / 30.0;
            let inputs = if frame % 10 == 0 {
                vec![Event::ButtonDown(Button::Right)]
            } else {
                Vec::new()
            };
            one.frame(inputs.clone(), now);
            two.frame(inputs, now);
        }

        assert_eq!(one.state.cat, two.state.cat);
        assert_eq!(one.state.mice, two.state.mice);
        assert_eq!(one.state.dogs, two.state.dogs);
    }
}
