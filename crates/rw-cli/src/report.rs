//! Text and JSON views of a finished level

use rw_assets::{ResolvedTile, TileRegistry};
use rw_core::{Coord, Level, WorldPosition};
use serde::Serialize;

/// Glyph for rooms whose sides have no mapped asset
pub const UNMAPPED_GLYPH: char = '?';

/// Glyph for unoccupied cells
pub const EMPTY_GLYPH: char = '.';

/// One exported room, in walk order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRecord {
    pub index: usize,
    pub grid_position: Coord,
    pub world_position: WorldPosition,
    pub sides: String,
    pub prefab: Option<String>,
}

pub fn build_export(resolved: &[ResolvedTile<'_>]) -> Vec<ExportRecord> {
    resolved
        .iter()
        .enumerate()
        .map(|(index, tile)| ExportRecord {
            index,
            grid_position: tile.placement.grid_position(),
            world_position: tile.placement.world_position,
            sides: tile.placement.connectivity().abbrev(),
            prefab: tile.asset.map(|asset| asset.prefab.clone()),
        })
        .collect()
}

/// Fixed-width table of exported rooms
pub fn render_table(records: &[ExportRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>3}  {:>8}  {:>16}  {:<5} prefab\n",
        "#", "grid", "world", "sides"
    ));
    for rec in records {
        let world = format!("({}, {})", rec.world_position.x, rec.world_position.y);
        out.push_str(&format!(
            "{:>3}  {:>8}  {:>16}  {:<5} {}\n",
            rec.index,
            rec.grid_position.to_string(),
            world,
            rec.sides,
            rec.prefab.as_deref().unwrap_or("<unmapped>")
        ));
    }
    out
}

/// One character per cell, top row first, using each tile's glyph
pub fn render_glyph_map(level: &Level, registry: &TileRegistry) -> String {
    let size = level.grid.size();
    let mut out = String::new();
    for y in (0..size.y).rev() {
        for x in 0..size.x {
            let glyph = match level.grid.get(Coord::new(x, y)) {
                Ok(Some(room)) => registry
                    .get(room.connectivity)
                    .ok()
                    .and_then(|asset| asset.glyph)
                    .unwrap_or(UNMAPPED_GLYPH),
                _ => EMPTY_GLYPH,
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
