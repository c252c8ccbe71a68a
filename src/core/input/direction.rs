//=========================================================================
// Direction
//=========================================================================
//
// Heading of the snake, derived from raw key codes.
//
// Mapping:
//   37 → Left, 38 → Up, 39 → Right, 40 → Down, anything else → None
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::key_code::{ARROW_DOWN, ARROW_LEFT, ARROW_RIGHT, ARROW_UP};

//=== Direction ===========================================================

/// One of the four board headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All headings, in key-code order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Maps a raw key code to a heading.
    ///
    /// Returns `None` for any code other than the four arrows; callers keep
    /// their previous heading in that case.
    pub fn from_key_code(code: i32) -> Option<Self> {
        match code {
            ARROW_LEFT => Some(Direction::Left),
            ARROW_UP => Some(Direction::Up),
            ARROW_RIGHT => Some(Direction::Right),
            ARROW_DOWN => Some(Direction::Down),
            _ => None,
        }
    }

    /// The arrow key code that selects this heading.
    pub fn key_code(self) -> i32 {
        match self {
            Direction::Left => ARROW_LEFT,
            Direction::Up => ARROW_UP,
            Direction::Right => ARROW_RIGHT,
            Direction::Down => ARROW_DOWN,
        }
    }

    /// The heading pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns `true` if `other` points exactly the other way.
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Unit step as `(dx, dy)` with y growing downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
