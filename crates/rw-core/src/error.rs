//! Error types for grid access and level generation

use thiserror::Error;

use crate::layout::Coord;

/// A grid coordinate fell outside `[0, width) x [0, height)`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("position {position} is outside a {}x{} grid", .size.x, .size.y)]
pub struct BoundsError {
    pub position: Coord,
    pub size: Coord,
}

/// Reasons a generation run can fail
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The cursor has no unoccupied cardinal neighbor left
    #[error("walk is stuck at {cursor} after placing {placed} room(s): no unoccupied neighbors")]
    NoCandidates { cursor: Coord, placed: usize },

    /// A recorded step is not one of the four unit vectors
    #[error("step {0} is not a unit cardinal direction")]
    InvalidDirection(Coord),

    /// A grid access during generation left the grid
    #[error(transparent)]
    OutOfBounds(#[from] BoundsError),

    /// A position on the walk path holds no room
    #[error("no room at walk position {0}")]
    EmptyCell(Coord),

    /// The generator config cannot describe a usable grid
    #[error("invalid generator config: {0}")]
    InvalidConfig(String),
}

impl GenerationError {
    /// True when a fresh run on a new grid might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GenerationError::NoCandidates { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_error_message() {
        let err = BoundsError {
            position: Coord::new(10, 3),
            size: Coord::new(10, 10),
        };
        assert_eq!(err.to_string(), "position (10, 3) is outside a 10x10 grid");
    }

    #[test]
    fn test_bounds_error_converts() {
        let err: GenerationError = BoundsError {
            position: Coord::new(-1, 0),
            size: Coord::new(1, 1),
        }
        .into();
        assert!(matches!(err, GenerationError::OutOfBounds(_)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_no_candidates_is_retryable() {
        let err = GenerationError::NoCandidates {
            cursor: Coord::new(0, 0),
            placed: 0,
        };
        assert!(err.is_retryable());
        assert!(err.to_string().contains("stuck"));
    }
}
