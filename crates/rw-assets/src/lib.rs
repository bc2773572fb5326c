//! rw-assets: Tile asset mapping for generated room layouts.

pub mod mapping;
pub mod registry;

pub use mapping::*;
pub use registry::*;
