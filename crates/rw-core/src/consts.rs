//! Default generation parameters

/// Default grid width
pub const DEFAULT_GRID_WIDTH: i32 = 10;

/// Default grid height
pub const DEFAULT_GRID_HEIGHT: i32 = 10;

/// Default number of rooms added after the starting room
pub const DEFAULT_MAX_ROOMS: usize = 5;

/// Default edge length of one grid cell in world units
pub const DEFAULT_CELL_SIZE_UNITS: f32 = 10.0;

/// Placeholder printed by the debug dump for unoccupied cells
pub const EMPTY_CELL_GLYPH: &str = "0";

/// Largest grid area a generator config may request
pub const MAX_GRID_CELLS: usize = 1 << 20;
