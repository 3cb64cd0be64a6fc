use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the unit vector `(dx, dy)` for this direction; `y` grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Maps a key to a movement direction.
///
/// WASD is the classic layout; arrow keys are accepted as well. Every other key
/// yields `None` and is ignored by the engine.
#[must_use]
pub fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Char('w' | 'W') | KeyCode::Up => Some(Direction::Up),
        KeyCode::Char('s' | 'S') | KeyCode::Down => Some(Direction::Down),
        KeyCode::Char('a' | 'A') | KeyCode::Left => Some(Direction::Left),
        KeyCode::Char('d' | 'D') | KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Returns true for Ctrl-C, which quits from every screen.
#[must_use]
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c'))
}

/// Polls crossterm for key presses.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for the next key press.
    ///
    /// Key release/repeat events and non-key events are swallowed.
    pub fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}
