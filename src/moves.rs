use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize, Deserializer, Serializer};
use crate::puzzle::PuzzleError;
use crate::tile::SIDE;

/// Which line a rotation acts on and which way it turns.
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Ord, PartialOrd)]
#[repr(u8)]
pub enum Direction {
    RowLeft,
    RowRight,
    ColUp,
    ColDown,
}

impl Direction {
    pub fn to_char(&self) -> char {
        match self {
            Direction::RowLeft => 'L',
            Direction::RowRight => 'R',
            Direction::ColUp => 'U',
            Direction::ColDown => 'D',
        }
    }

    pub fn from_char(char: char) -> Option<Self> {
        match char {
            'L' => Some(Direction::RowLeft),
            'R' => Some(Direction::RowRight),
            'U' => Some(Direction::ColUp),
            'D' => Some(Direction::ColDown),
            _ => None,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::RowLeft => Direction::RowRight,
            Direction::RowRight => Direction::RowLeft,
            Direction::ColUp => Direction::ColDown,
            Direction::ColDown => Direction::ColUp,
        }
    }

    pub fn is_row(&self) -> bool {
        matches!(self, Direction::RowLeft | Direction::RowRight)
    }
}

/// One rotation: a direction plus the 0-based row or column it applies to.
///
/// The canonical code is the direction letter followed by the 1-based line
/// number, e.g. `R1` or `U3`.
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Ord, PartialOrd)]
pub struct Move {
    pub direction: Direction,
    pub index: u8,
}

const fn mv(direction: Direction, index: u8) -> Move {
    Move { direction, index }
}

impl Move {
    /// Every rotation, rows first (left then right per row), then columns
    /// (up then down per column). Successors are generated in this order.
    pub const ALL: [Move; 16] = [
        mv(Direction::RowLeft, 0), mv(Direction::RowRight, 0),
        mv(Direction::RowLeft, 1), mv(Direction::RowRight, 1),
        mv(Direction::RowLeft, 2), mv(Direction::RowRight, 2),
        mv(Direction::RowLeft, 3), mv(Direction::RowRight, 3),
        mv(Direction::ColUp, 0), mv(Direction::ColDown, 0),
        mv(Direction::ColUp, 1), mv(Direction::ColDown, 1),
        mv(Direction::ColUp, 2), mv(Direction::ColDown, 2),
        mv(Direction::ColUp, 3), mv(Direction::ColDown, 3),
    ];

    pub fn new(direction: Direction, index: usize) -> Result<Self, PuzzleError> {
        if index >= SIDE {
            return Err(PuzzleError::MalformedInput(format!("line index {} out of range", index)));
        }
        Ok(mv(direction, index as u8))
    }

    // Shorthands for callers that already hold a valid line index.
    pub fn row_left(row: usize) -> Self { Self::line(Direction::RowLeft, row) }
    pub fn row_right(row: usize) -> Self { Self::line(Direction::RowRight, row) }
    pub fn col_up(col: usize) -> Self { Self::line(Direction::ColUp, col) }
    pub fn col_down(col: usize) -> Self { Self::line(Direction::ColDown, col) }

    fn line(direction: Direction, index: usize) -> Self {
        debug_assert!(index < SIDE, "line index {} out of range", index);
        mv(direction, index as u8)
    }

    /// The rotation that undoes this one.
    pub fn inverse(&self) -> Self {
        mv(self.direction.opposite(), self.index)
    }

    pub fn code(&self) -> String {
        format!("{}{}", self.direction.to_char(), self.index + 1)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.direction.to_char(), self.index + 1)
    }
}

impl FromStr for Move {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(PuzzleError::MalformedInput(format!("invalid move code {:?}", s)));
        };

        let direction = Direction::from_char(letter)
            .ok_or_else(|| PuzzleError::MalformedInput(format!("unknown direction in {:?}", s)))?;

        match digit.to_digit(10) {
            Some(n @ 1..=4) => Ok(mv(direction, n as u8 - 1)),
            _ => Err(PuzzleError::MalformedInput(format!("invalid line number in {:?}", s))),
        }
    }
}

impl Serialize for Move {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

pub fn moves_str(moves: &[Move]) -> String {
    moves.iter().map(Move::code).collect::<Vec<_>>().join(" ")
}
