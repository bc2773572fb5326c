//! Layout system
//!
//! Contains the grid container, walk state, rooms, directions, and the
//! three-phase level generator.

mod coord;
mod direction;
mod generation;
mod grid;
mod placement;
mod room;
mod walk;

pub use coord::Coord;
pub use direction::{Direction, flag_for};
pub use generation::{
    GenerationStats, GeneratorConfig, Level, LevelGenerator, connect_rooms, seed_and_walk,
};
pub use grid::Grid;
pub use placement::{Placement, WorldPosition, export_placements};
pub use room::{Connectivity, Room};
pub use walk::WalkState;
