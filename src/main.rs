//! Paw Chase entry point
//!
//! The windowed front end (display, joystick, mixer) plugs in from outside
//! this crate; the binary wires settings and a seeded app together and runs
//! a short headless smoke scenario.

use std::path::Path;

use rand::Rng;

use paw_chase::audio::NullAudio;
use paw_chase::consts::FRAME_RATE;
use paw_chase::input::{Key, map_key};
use paw_chase::scene::{Scene, compose};
use paw_chase::sim::{Button, Event};
use paw_chase::{App, Settings};

fn main() {
    env_logger::init();

    let settings = Settings::load_or_default(Path::new("paw-chase.json"));
    let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("Paw Chase starting (seed {seed})");

    let mut app = App::new(seed, 0.0, NullAudio);
    let frame_dt = 1.0 / FRAME_RATE as f64;
    let mut now = 0.0;

    // Two seconds of play, nudging the cat east every quarter second.
    for frame in 0..(FRAME_RATE * 2) {
        let inputs = if frame % 8 == 0 {
            vec![Event::ButtonDown(Button::Right)]
        } else {
            Vec::new()
        };
        app.frame(inputs, now);
        now += frame_dt;
    }
    log::info!(
        "After two seconds: cat at {:?}, {} mice left",
        app.state.cat.body.pos,
        app.state.mice.len()
    );

    // Restart, then quit, through the same key table the front end uses.
    app.frame(map_key(Key::R, settings.allow_arrow_keys), now);
    now += frame_dt;
    app.frame(map_key(Key::Q, settings.allow_arrow_keys), now);
    assert!(app.should_quit());

    match compose(&app.state) {
        Scene::Quitting => log::info!("Smoke scenario finished cleanly"),
        other => log::warn!("Unexpected final scene: {other:?}"),
    }
}
