//! rw-core: Room layout generation by self-avoiding random walk
//!
//! Walks a fixed-size grid from its center, claiming one unoccupied
//! neighbor per step, then replays the recorded steps to open matching
//! sides on every pair of consecutive rooms. The result is plain data;
//! rendering it is left to the host.

pub mod error;
pub mod layout;

mod consts;
mod rng;

pub use consts::*;
pub use error::{BoundsError, GenerationError};
pub use layout::{
    Connectivity, Coord, Direction, GenerationStats, GeneratorConfig, Grid, Level,
    LevelGenerator, Placement, Room, WalkState, WorldPosition, connect_rooms,
    export_placements, flag_for, seed_and_walk,
};
pub use rng::LevelRng;
