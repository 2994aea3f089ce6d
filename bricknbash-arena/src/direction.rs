//! Moves of the ball and their keys.
use bricknbash_core::Act;
use serde::{Deserialize, Serialize};

/// One of the four moves of the ball.
///
/// The discriminant is the column of the action in a Q-table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left = 0,
    Right = 1,
    Up = 2,
    Down = 3,
}

impl Direction {
    /// All directions, ordered by index.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(ix: usize) -> Option<Self> {
        Self::ALL.get(ix).copied()
    }

    /// Translation of one step of `speed` units.
    pub fn delta(self, speed: i32) -> (i32, i32) {
        match self {
            Direction::Left => (-speed, 0),
            Direction::Right => (speed, 0),
            Direction::Up => (0, -speed),
            Direction::Down => (0, speed),
        }
    }

    /// Maps a key of manual play to a direction.
    ///
    /// Both `wasd` and vi-style `hjkl` are accepted.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'a' | 'h' => Some(Direction::Left),
            'd' | 'l' => Some(Direction::Right),
            'w' | 'k' => Some(Direction::Up),
            's' | 'j' => Some(Direction::Down),
            _ => None,
        }
    }
}

impl Act for Direction {}

/// Indices wrap around, so every index names a direction.
impl From<usize> for Direction {
    fn from(ix: usize) -> Self {
        Self::ALL[ix % Self::ALL.len()]
    }
}

impl From<Direction> for usize {
    fn from(d: Direction) -> Self {
        d.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
            assert_eq!(Direction::from_index(i), Some(*d));
            assert_eq!(Direction::from(i), *d);
        }
        assert_eq!(Direction::from_index(4), None);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Direction::from_key('a'), Some(Direction::Left));
        assert_eq!(Direction::from_key('L'), Some(Direction::Right));
        assert_eq!(Direction::from_key('k'), Some(Direction::Up));
        assert_eq!(Direction::from_key('s'), Some(Direction::Down));
        assert_eq!(Direction::from_key('x'), None);
    }
}
