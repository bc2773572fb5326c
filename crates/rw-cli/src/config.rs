//! Generator configuration and tile mapping files

use std::path::Path;

use anyhow::{Context, Result};
use log::warn;
use rw_assets::TileRegistry;
use rw_core::GeneratorConfig;

/// Mapping loaded when no mapping file is named
pub const DEFAULT_MAPPING_PATH: &str = "assets/tiles.json";

/// Read a JSON generator config. Missing fields take their defaults.
pub fn load_generator_config<P: AsRef<Path>>(path: P) -> Result<GeneratorConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading generator config {}", path.display()))?;
    let config: GeneratorConfig = serde_json::from_str(&content)
        .with_context(|| format!("parsing generator config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Load the named tile mapping, or the bundled one at `fallback`
///
/// A named file must load. A missing or broken fallback gives an empty
/// registry, so every room still exports with no asset.
pub fn load_tile_registry(path: Option<&str>, fallback: &str) -> Result<TileRegistry> {
    match path {
        Some(path) => TileRegistry::load_from_file(path)
            .with_context(|| format!("loading tile mapping {}", path)),
        None => Ok(TileRegistry::load_from_file(fallback).unwrap_or_else(|err| {
            warn!("no tile mapping at {}: {}", fallback, err);
            TileRegistry::default()
        })),
    }
}
