//! World placement of generated rooms
//!
//! The export phase pairs every room on the walk path with a world
//! position centered on the grid. Turning flags into assets is the
//! host's job.

use serde::{Deserialize, Serialize};

use super::{Connectivity, Coord, Grid, Room, WalkState};
use crate::error::GenerationError;

/// Position in world units; grid y maps to world y
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPosition {
    pub x: f32,
    pub y: f32,
}

impl WorldPosition {
    /// `(grid_position - floor(grid_size / 2)) * cell_size_units`
    pub fn from_grid(grid_position: Coord, grid_size: Coord, cell_size_units: f32) -> Self {
        let rel = grid_position - grid_size.half();
        Self {
            x: rel.x as f32 * cell_size_units,
            y: rel.y as f32 * cell_size_units,
        }
    }
}

/// A room ready to be handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub room: Room,
    pub world_position: WorldPosition,
}

impl Placement {
    pub fn grid_position(&self) -> Coord {
        self.room.grid_position()
    }

    pub fn connectivity(&self) -> Connectivity {
        self.room.connectivity
    }
}

/// Resolve every position of the step history to its room, in walk order
pub fn export_placements(
    grid: &Grid<Room>,
    walk: &WalkState,
    cell_size_units: f32,
) -> Result<Vec<Placement>, GenerationError> {
    walk.steps()
        .iter()
        .map(|&pos| -> Result<Placement, GenerationError> {
            let room = grid.get(pos)?.ok_or(GenerationError::EmptyCell(pos))?;
            Ok(Placement {
                room: room.clone(),
                world_position: WorldPosition::from_grid(pos, grid.size(), cell_size_units),
            })
        })
        .collect()
}
