//! Level generation
//!
//! Three ordered phases per run:
//! 1. Seed the center cell and walk, claiming one unoccupied neighbor per step
//! 2. Replay the relative steps to open matching sides on consecutive rooms
//! 3. Export rooms in walk order with their world positions
//!
//! The walk never revisits a cell, so the rooms always form a simple path.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::placement::export_placements;
use super::{Coord, Grid, Placement, Room, WalkState, flag_for};
use crate::error::GenerationError;
use crate::rng::LevelRng;
use crate::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_MAX_ROOMS, MAX_GRID_CELLS};

/// Input configuration for a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Grid width and height
    pub grid_size: Coord,
    /// Rooms added after the starting room
    pub max_rooms: usize,
    /// Fixed seed; a fresh one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: Coord::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT),
            max_rooms: DEFAULT_MAX_ROOMS,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new(grid_size: Coord, max_rooms: usize) -> Self {
        Self {
            grid_size,
            max_rooms,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.grid_size.x < 1 || self.grid_size.y < 1 {
            return Err(GenerationError::InvalidConfig(format!(
                "grid size must be at least 1x1, got {}x{}",
                self.grid_size.x, self.grid_size.y
            )));
        }
        let cells = (self.grid_size.x as usize).checked_mul(self.grid_size.y as usize);
        if !cells.is_some_and(|cells| cells <= MAX_GRID_CELLS) {
            return Err(GenerationError::InvalidConfig(format!(
                "grid size {}x{} exceeds {} cells",
                self.grid_size.x, self.grid_size.y, MAX_GRID_CELLS
            )));
        }
        Ok(())
    }
}

/// Summary of a finished level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub room_count: usize,
    pub steps: usize,
    /// Lower-left corner of the walk's bounding box
    pub min: Coord,
    /// Upper-right corner of the walk's bounding box
    pub max: Coord,
}

/// A finished layout: the room grid plus the walk that built it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub grid: Grid<Room>,
    pub walk: WalkState,
    /// Position of the first room placed
    pub starting_room: Coord,
    pub seed: u64,
}

impl Level {
    /// The first room placed
    pub fn starting_room(&self) -> Option<&Room> {
        self.grid.get(self.starting_room).ok().flatten()
    }

    /// Rooms along the walk path, starting room first
    pub fn rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.walk
            .steps()
            .iter()
            .filter_map(|&pos| self.grid.get(pos).ok().flatten())
    }

    pub fn room_count(&self) -> usize {
        self.walk.steps().len()
    }

    /// Rooms paired with world positions, in walk order
    pub fn placements(&self, cell_size_units: f32) -> Result<Vec<Placement>, GenerationError> {
        export_placements(&self.grid, &self.walk, cell_size_units)
    }

    /// Debug dump with each room shown by its open sides
    pub fn visualize(&self) -> String {
        self.grid.visualize(|room| room.connectivity.abbrev())
    }

    pub fn stats(&self) -> GenerationStats {
        let steps = self.walk.steps();
        let first = steps.first().copied().unwrap_or_default();
        let (min, max) = steps.iter().fold((first, first), |(lo, hi), p| {
            (
                Coord::new(lo.x.min(p.x), lo.y.min(p.y)),
                Coord::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        GenerationStats {
            room_count: steps.len(),
            steps: self.walk.move_count(),
            min,
            max,
        }
    }
}

/// Phase 1: seed the center room, then claim `max_rooms` cells by random walk
///
/// Returns the starting room's position. Fails with
/// [`GenerationError::NoCandidates`] as soon as the cursor has no free neighbor.
pub fn seed_and_walk(
    grid: &mut Grid<Room>,
    walk: &mut WalkState,
    max_rooms: usize,
    rng: &mut LevelRng,
) -> Result<Coord, GenerationError> {
    let start = grid.center_cursor(walk)?;
    grid.set_cursor_cell(walk, Room::new(start))?;
    debug!("seeded starting room at {}", start);

    for placed in 0..max_rooms {
        let cursor = walk.cursor();
        let candidates = grid.unoccupied_neighbor_cells(cursor)?;
        let Some(&next) = rng.choose(&candidates) else {
            warn!("walk stuck at {} after {} of {} rooms", cursor, placed, max_rooms);
            return Err(GenerationError::NoCandidates { cursor, placed });
        };

        grid.set(next, Room::new(next))?;
        grid.move_cursor(walk, next)?;
        debug!(
            "step {}: {} -> {} ({} candidate(s))",
            placed + 1,
            cursor,
            next,
            candidates.len()
        );
    }

    Ok(start)
}

/// Phase 2: open the shared side of every consecutive pair of rooms
///
/// Replays the relative steps from `start`, which must be the position the
/// history was seeded with.
pub fn connect_rooms(
    grid: &mut Grid<Room>,
    walk: &WalkState,
    start: Coord,
) -> Result<(), GenerationError> {
    let mut current = start;
    for &step in walk.relative_steps() {
        let forward = flag_for(step)?;
        let backward = flag_for(-step)?;
        let next = current + step;

        // Check both ends before touching either room
        if !grid.is_occupied(current)? {
            return Err(GenerationError::EmptyCell(current));
        }
        if !grid.is_occupied(next)? {
            return Err(GenerationError::EmptyCell(next));
        }

        if let Some(room) = grid.get_mut(current)? {
            room.open(forward);
        }
        if let Some(room) = grid.get_mut(next)? {
            room.open(backward);
        }
        debug!("connected {} -> {} ({:?} / {:?})", current, next, forward, backward);
        current = next;
    }
    Ok(())
}

/// Drives the walk and connection phases over a fresh grid per run
#[derive(Debug, Clone)]
pub struct LevelGenerator {
    config: GeneratorConfig,
    rng: LevelRng,
}

impl LevelGenerator {
    /// Seeded from `config.seed`, or from entropy when it is unset
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => LevelRng::new(seed),
            None => LevelRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn with_rng(config: GeneratorConfig, rng: LevelRng) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Run phases 1 and 2 on a new grid
    ///
    /// Each call continues the same random stream, so repeated calls give
    /// different layouts. A failed run leaves nothing behind to reuse.
    pub fn generate(&mut self) -> Result<Level, GenerationError> {
        self.config.validate()?;

        let mut grid = Grid::new(self.config.grid_size);
        let mut walk = WalkState::new();

        let starting_room =
            seed_and_walk(&mut grid, &mut walk, self.config.max_rooms, &mut self.rng)?;
        connect_rooms(&mut grid, &walk, starting_room)?;

        let level = Level {
            grid,
            walk,
            starting_room,
            seed: self.rng.seed(),
        };

        let stats = level.stats();
        info!(
            "generated {} room(s) in {} step(s) on a {}x{} grid",
            stats.room_count, stats.steps, self.config.grid_size.x, self.config.grid_size.y
        );
        debug!("layout:\n{}", level.visualize());

        Ok(level)
    }
}
