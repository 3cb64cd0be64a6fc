use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Signed so that a step off the board is representable before the bounds check.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width())
            && self.y < i32::from(bounds.height())
    }

    /// Returns the neighbouring position one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns the cell nearest the middle of the board, rounding down.
    #[must_use]
    pub fn center_of(bounds: GridSize) -> Self {
        Self {
            x: i32::from(bounds.width() / 2),
            y: i32::from(bounds.height() / 2),
        }
    }
}

/// Ordered snake body, head first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Falls back to a one-cell snake at `fallback` when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, fallback: Position) -> Self {
        if segments.is_empty() {
            return Self::new(fallback);
        }

        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Shifts every segment into the slot of the one ahead of it, with the head
    /// entering `next`.
    ///
    /// On a growth step the previous tail is kept and `None` is returned;
    /// otherwise the vacated tail position is returned.
    pub fn advance(&mut self, next: Position, grow: bool) -> Option<Position> {
        self.body.push_front(next);
        if grow { None } else { self.body.pop_back() }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
