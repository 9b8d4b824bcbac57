//! Translation tables from raw devices to game events
//!
//! Device enumeration and polling live outside the crate; the platform layer
//! reports raw joystick button indices and the handful of keys the game
//! reacts to, and these tables turn them into queue events.

use crate::sim::{Button, Event};

/// Map a raw joystick button index to an abstract button.
///
/// The indices follow the dance mat this was developed against; unknown
/// indices are ignored so other controllers degrade gracefully.
pub fn map_joystick_button(raw: u32) -> Option<Button> {
    match raw {
        0 => Some(Button::Left),
        1 => Some(Button::Down),
        2 => Some(Button::Up),
        3 => Some(Button::Right),
        4 => Some(Button::Triangle),
        5 => Some(Button::Square),
        6 => Some(Button::Cross),
        7 => Some(Button::Circle),
        _ => None,
    }
}

/// The keys the game reacts to, as reported by the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Q,
    R,
    Up,
    Down,
    Left,
    Right,
}

/// Map a key press to a queue event.
///
/// The arrow keys mirror the mat's direction buttons but are gated behind a
/// setting; with them disabled only quit and restart remain.
pub fn map_key(key: Key, allow_arrow_keys: bool) -> Option<Event> {
    match key {
        Key::Q => Some(Event::ReceivedQuit),
        Key::R => Some(Event::ReceivedRestart),
        Key::Up | Key::Down | Key::Left | Key::Right if !allow_arrow_keys => None,
        Key::Up => Some(Event::ButtonDown(Button::Up)),
        Key::Down => Some(Event::ButtonDown(Button::Down)),
        Key::Left => Some(Event::ButtonDown(Button::Left)),
        Key::Right => Some(Event::ButtonDown(Button::Right)),
    }
}
