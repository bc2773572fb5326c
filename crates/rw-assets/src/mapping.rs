use serde::{Deserialize, Deserializer, Serialize, Serializer};

use rw_core::{Connectivity, DEFAULT_CELL_SIZE_UNITS};

/// How a room tile is shown by a frontend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TileAsset {
    /// Prefab or model path used by a 3D frontend.
    pub prefab: String,
    /// Character used by text frontends.
    #[serde(default)]
    pub glyph: Option<char>,
}

/// Links one open-side combination to its asset.
///
/// `sides` is written as a label such as `"DR"` or `"UDLR"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TileAssetEntry {
    #[serde(serialize_with = "sides_to_label", deserialize_with = "sides_from_label")]
    pub sides: Connectivity,
    pub asset: TileAsset,
}

/// The root structure for the tile mapping file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TileMapping {
    /// Edge length of one grid cell in world units.
    #[serde(default = "default_size_units")]
    pub size_units: f32,
    #[serde(default)]
    pub tiles: Vec<TileAssetEntry>,
}

impl Default for TileMapping {
    fn default() -> Self {
        Self {
            size_units: DEFAULT_CELL_SIZE_UNITS,
            tiles: Vec::new(),
        }
    }
}

fn default_size_units() -> f32 {
    DEFAULT_CELL_SIZE_UNITS
}

fn sides_to_label<S>(sides: &Connectivity, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&sides.abbrev())
}

fn sides_from_label<'de, D>(deserializer: D) -> Result<Connectivity, D::Error>
where
    D: Deserializer<'de>,
{
    let label = String::deserialize(deserializer)?;
    Connectivity::from_abbrev(&label)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid sides label: {label:?}")))
}
