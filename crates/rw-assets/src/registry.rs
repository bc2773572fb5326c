use std::collections::HashMap;
use std::path::Path;

use log::{debug, warn};
use rw_core::{Connectivity, Placement};
use thiserror::Error;

use crate::mapping::{TileAsset, TileMapping};

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("No tile asset mapped for sides {}", .0.abbrev())]
    NotFound(Connectivity),
    #[error("Tile size must be positive, got {0}")]
    InvalidSizeUnits(f32),
}

/// A placement paired with its asset, if one is mapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTile<'a> {
    pub placement: &'a Placement,
    pub asset: Option<&'a TileAsset>,
}

/// Lookup from open-side combinations to tile assets.
#[derive(Debug)]
pub struct TileRegistry {
    size_units: f32,
    tiles: HashMap<Connectivity, TileAsset>,
}

impl TileRegistry {
    /// Build the lookup table. The first entry for a combination wins;
    /// later duplicates are dropped with a warning.
    pub fn new(mapping: TileMapping) -> Self {
        let mut tiles = HashMap::with_capacity(mapping.tiles.len());
        for entry in mapping.tiles {
            if tiles.contains_key(&entry.sides) {
                warn!(
                    "Duplicate tile mapping for sides {}. Only the first occurrence will be used.",
                    entry.sides.abbrev()
                );
                continue;
            }
            tiles.insert(entry.sides, entry.asset);
        }
        Self {
            size_units: mapping.size_units,
            tiles,
        }
    }

    /// Load the registry from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let registry = Self::from_json(&content)?;
        debug!(
            "loaded {} tile mapping(s) from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    pub fn from_json(content: &str) -> Result<Self, RegistryError> {
        let mapping: TileMapping = serde_json::from_str(content)?;
        if !(mapping.size_units > 0.0) {
            return Err(RegistryError::InvalidSizeUnits(mapping.size_units));
        }
        Ok(Self::new(mapping))
    }

    /// Edge length of one grid cell in world units.
    pub fn size_units(&self) -> f32 {
        self.size_units
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, sides: Connectivity) -> Result<&TileAsset, RegistryError> {
        self.tiles.get(&sides).ok_or(RegistryError::NotFound(sides))
    }

    /// Non-empty side combinations without a mapping, in bit order.
    pub fn unmapped(&self) -> Vec<Connectivity> {
        (1..=Connectivity::all().bits())
            .map(Connectivity::from_bits_truncate)
            .filter(|sides| !self.tiles.contains_key(sides))
            .collect()
    }

    /// Pair every placement with its asset. Misses are logged, never fatal.
    pub fn resolve<'a>(&'a self, placements: &'a [Placement]) -> Vec<ResolvedTile<'a>> {
        placements
            .iter()
            .map(|placement| {
                let asset = match self.get(placement.connectivity()) {
                    Ok(asset) => Some(asset),
                    Err(err) => {
                        warn!("{} at {}", err, placement.grid_position());
                        None
                    }
                };
                ResolvedTile { placement, asset }
            })
            .collect()
    }
}

impl Default for TileRegistry {
    fn default() -> Self {
        Self::new(TileMapping::default())
    }
}
