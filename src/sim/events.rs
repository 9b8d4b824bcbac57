//! Game events and the FIFO queue that carries them
//!
//! The closed event set connects the input layer, the dispatcher, and the
//! transition engine; the engine itself enqueues `GameOver` events. One event
//! is fully handled before the next is popped.

use std::collections::VecDeque;

use super::grid::Direction;

/// Abstract dance-mat buttons, not tied to a concrete joystick.
///
/// Enumerated clockwise around the mat, upper-left first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Cross,
    Up,
    Circle,
    Right,
    Square,
    Down,
    Triangle,
    Left,
}

impl Button {
    /// The walking direction a button maps to; the corner action buttons
    /// map to nothing.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Button::Up => Some(Direction::North),
            Button::Down => Some(Direction::South),
            Button::Left => Some(Direction::West),
            Button::Right => Some(Direction::East),
            Button::Cross | Button::Circle | Button::Square | Button::Triangle => None,
        }
    }
}

/// The two ways a game can end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverKind {
    /// Every mouse was eaten - the player wins
    MiceEaten,
    /// A dog caught the cat - the player loses
    Dog,
}

/// Events consumed by the dispatcher, strictly in queue order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// One game-logic update step
    Tick,
    /// A mapped joystick (or arrow-key) press
    ButtonDown(Button),
    /// The player asked to quit
    ReceivedQuit,
    /// The player asked to restart
    ReceivedRestart,
    /// The transition engine detected an ending
    GameOver(GameOverKind),
}

/// FIFO event queue.
///
/// New events append at the tail; the dispatcher pops exactly one event per
/// call from the front.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = EventQueue::new();
        queue.push(Event::ReceivedQuit);
        queue.push(Event::Tick);
        queue.push(Event::ButtonDown(Button::Up));

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some(Event::ReceivedQuit));
        assert_eq!(queue.pop(), Some(Event::Tick));
        assert_eq!(queue.pop(), Some(Event::ButtonDown(Button::Up)));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_button_directions() {
        assert_eq!(Button::Up.direction(), Some(Direction::North));
        assert_eq!(Button::Down.direction(), Some(Direction::South));
        assert_eq!(Button::Left.direction(), Some(Direction::West));
        assert_eq!(Button::Right.direction(), Some(Direction::East));

        for button in [Button::Cross, Button::Circle, Button::Square, Button::Triangle] {
            assert_eq!(button.direction(), None);
        }
    }
}
