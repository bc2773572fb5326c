//! rw-cli: host side of the room walk generator
//!
//! Owns everything the core leaves to its caller: retry policy, asset
//! resolution, and text/JSON output.

pub mod config;
pub mod report;
pub mod session;

pub use config::{DEFAULT_MAPPING_PATH, load_generator_config, load_tile_registry};
pub use report::{ExportRecord, build_export, render_glyph_map, render_table};
pub use session::Session;
