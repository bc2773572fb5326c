//! Cardinal directions and their connectivity flags
//!
//! Fixed bijection between the four unit step vectors and the open-side
//! flags. Up is +y.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::{Connectivity, Coord};
use crate::error::GenerationError;

/// One of the four legal walk directions
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    /// All directions in neighbor-query order: right, left, up, down
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit step vector
    pub const fn step(self) -> Coord {
        match self {
            Direction::Right => Coord::new(1, 0),
            Direction::Left => Coord::new(-1, 0),
            Direction::Up => Coord::new(0, 1),
            Direction::Down => Coord::new(0, -1),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Open-side flag for this direction
    pub const fn flag(self) -> Connectivity {
        match self {
            Direction::Right => Connectivity::RIGHT,
            Direction::Left => Connectivity::LEFT,
            Direction::Up => Connectivity::UP,
            Direction::Down => Connectivity::DOWN,
        }
    }

    /// Direction of a unit step vector
    pub fn from_step(step: Coord) -> Result<Direction, GenerationError> {
        match (step.x, step.y) {
            (1, 0) => Ok(Direction::Right),
            (-1, 0) => Ok(Direction::Left),
            (0, 1) => Ok(Direction::Up),
            (0, -1) => Ok(Direction::Down),
            _ => Err(GenerationError::InvalidDirection(step)),
        }
    }

    /// Direction of a single flag, `None` for empty or combined sets
    pub fn from_flag(flag: Connectivity) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.flag() == flag)
    }
}

/// Connectivity flag for a step vector
pub fn flag_for(step: Coord) -> Result<Connectivity, GenerationError> {
    Direction::from_step(step).map(Direction::flag)
}
