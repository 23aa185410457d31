//! Board positions, movement directions and the agent action set.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::MoveError;
use crate::BOARD_SIZE;

/// A cell on the board. `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    /// Column, `0..BOARD_SIZE`.
    pub x: i32,
    /// Row, `0..BOARD_SIZE`.
    pub y: i32,
}

impl Position {
    /// Create a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether the position lies on the board.
    #[inline]
    pub fn is_on_board(self) -> bool {
        let n = BOARD_SIZE as i32;
        self.x >= 0 && self.x < n && self.y >= 0 && self.y < n
    }

    /// The neighbouring position in `dir`. May be off the board.
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Row-major index, `x + y * BOARD_SIZE`.
    #[inline]
    pub fn index(self) -> usize {
        self.x as usize + self.y as usize * BOARD_SIZE
    }

    /// Manhattan distance to `other`.
    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.x + self.y * BOARD_SIZE as i32).hash(state);
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction of travel. `Idle` is the null direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// No movement.
    #[default]
    Idle = 0,
    /// One row up (`y - 1`).
    Up = 1,
    /// One row down (`y + 1`).
    Down = 2,
    /// One column left (`x - 1`).
    Left = 3,
    /// One column right (`x + 1`).
    Right = 4,
}

impl Direction {
    /// The four cardinal directions, in blast-walk order.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(dx, dy)` offset for this direction.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Idle => (0, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// An atomic action of one agent for one tick.
///
/// The transition engine needs exactly one `Move` per agent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Move {
    /// Stay put.
    #[default]
    Idle = 0,
    /// Move up.
    Up = 1,
    /// Move down.
    Down = 2,
    /// Move left.
    Left = 3,
    /// Move right.
    Right = 4,
    /// Plant a bomb on the current cell.
    Bomb = 5,
}

impl Move {
    /// All six moves in encoding order.
    pub const ALL: [Move; 6] = [
        Move::Idle,
        Move::Up,
        Move::Down,
        Move::Left,
        Move::Right,
        Move::Bomb,
    ];

    /// The direction this move travels in. `Idle` and `Bomb` do not travel.
    #[inline]
    pub fn direction(self) -> Direction {
        match self {
            Move::Up => Direction::Up,
            Move::Down => Direction::Down,
            Move::Left => Direction::Left,
            Move::Right => Direction::Right,
            Move::Idle | Move::Bomb => Direction::Idle,
        }
    }
}

impl TryFrom<u8> for Move {
    type Error = MoveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Move::ALL
            .get(value as usize)
            .copied()
            .ok_or(MoveError::UnknownMove { value })
    }
}

impl From<Move> for u8 {
    fn from(m: Move) -> u8 {
        m as u8
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Idle => "idle",
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
            Move::Bomb => "bomb",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn step_follows_screen_axes() {
        let p = Position::new(5, 5);
        assert_eq!(p.step(Direction::Up), Position::new(5, 4));
        assert_eq!(p.step(Direction::Down), Position::new(5, 6));
        assert_eq!(p.step(Direction::Left), Position::new(4, 5));
        assert_eq!(p.step(Direction::Right), Position::new(6, 5));
        assert_eq!(p.step(Direction::Idle), p);
    }

    #[test]
    fn board_bounds() {
        assert!(Position::new(0, 0).is_on_board());
        assert!(Position::new(10, 10).is_on_board());
        assert!(!Position::new(-1, 0).is_on_board());
        assert!(!Position::new(0, 11).is_on_board());
    }

    #[test]
    fn hash_matches_equality() {
        let set: HashSet<Position> = [Position::new(1, 2), Position::new(1, 2), Position::new(2, 1)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn move_decoding() {
        for m in Move::ALL {
            assert_eq!(Move::try_from(u8::from(m)), Ok(m));
        }
        assert_eq!(Move::try_from(6), Err(MoveError::UnknownMove { value: 6 }));
    }

    #[test]
    fn bomb_and_idle_do_not_travel() {
        assert_eq!(Move::Bomb.direction(), Direction::Idle);
        assert_eq!(Move::Idle.direction(), Direction::Idle);
        assert_eq!(Move::Left.direction(), Direction::Left);
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(3, 7).to_string(), "(3, 7)");
        assert_eq!(Move::Bomb.to_string(), "bomb");
    }
}
