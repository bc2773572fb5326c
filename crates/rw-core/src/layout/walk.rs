//! Cursor and step history of a walk
//!
//! Owned by the caller and passed into each generation phase.

use serde::{Deserialize, Serialize};

use super::Coord;

/// Cursor position plus the absolute and relative step histories
///
/// `relative_steps[i] == steps[i + 1] - steps[i]` holds whenever the
/// history was seeded with [`WalkState::seed`] before the first move.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkState {
    cursor: Coord,
    steps: Vec<Coord>,
    relative_steps: Vec<Coord>,
}

impl WalkState {
    /// Cursor at the origin, empty histories
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Absolute positions visited, seed first
    pub fn steps(&self) -> &[Coord] {
        &self.steps
    }

    /// One delta per cursor move
    pub fn relative_steps(&self) -> &[Coord] {
        &self.relative_steps
    }

    /// Number of moves recorded
    pub fn move_count(&self) -> usize {
        self.relative_steps.len()
    }

    /// Place the cursor and record it as the first history entry, without a relative step
    pub fn seed(&mut self, pos: Coord) {
        self.cursor = pos;
        self.steps.push(pos);
    }

    /// Move the cursor, recording the move. Returns false for a no-op move.
    pub fn advance(&mut self, pos: Coord) -> bool {
        if pos == self.cursor {
            return false;
        }
        self.relative_steps.push(pos - self.cursor);
        self.steps.push(pos);
        self.cursor = pos;
        true
    }

    /// Position at an offset from the cursor
    pub fn offset(&self, delta: Coord) -> Coord {
        self.cursor + delta
    }
}
