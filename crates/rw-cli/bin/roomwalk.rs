//! Room walk generator
//!
//! Generates a layout, resolves tile assets, and prints the result.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use log::{error, info};

use rw_assets::TileRegistry;
use rw_cli::{
    DEFAULT_MAPPING_PATH, Session, build_export, load_generator_config, load_tile_registry,
    render_glyph_map, render_table,
};
use rw_core::{GeneratorConfig, Level};

/// Generate a connected room layout by self-avoiding random walk
#[derive(Parser, Debug)]
#[command(name = "roomwalk")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid width
    #[arg(short = 'x', long = "width")]
    width: Option<i32>,

    /// Grid height
    #[arg(short = 'y', long = "height")]
    height: Option<i32>,

    /// Rooms to add after the starting room
    #[arg(short = 'n', long = "max-rooms")]
    max_rooms: Option<usize>,

    /// Seed for a reproducible layout
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Generator config file (JSON); flags override its values
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Tile mapping file (JSON), defaults to the bundled assets/tiles.json
    #[arg(short = 'm', long = "mapping")]
    mapping: Option<String>,

    /// Cell size in world units, overrides the mapping's value
    #[arg(long = "cell-size")]
    cell_size: Option<f32>,

    /// Extra attempts on a fresh grid when the walk gets stuck
    #[arg(short = 'r', long = "retries", default_value_t = 0)]
    retries: u32,

    /// Print the export as JSON instead of text
    #[arg(long = "json")]
    json: bool,

    /// Regenerate on every input line until `q` or end of input
    #[arg(short = 'i', long = "interactive")]
    interactive: bool,

    /// Debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    fn generator_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => load_generator_config(path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(width) = self.width {
            config.grid_size.x = width;
        }
        if let Some(height) = self.height {
            config.grid_size.y = height;
        }
        if let Some(max_rooms) = self.max_rooms {
            config.max_rooms = max_rooms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }

    fn registry(&self) -> Result<TileRegistry> {
        load_tile_registry(self.mapping.as_deref(), DEFAULT_MAPPING_PATH)
    }
}

fn print_level(level: &Level, registry: &TileRegistry, cell_size: f32, json: bool) -> Result<()> {
    let placements = level.placements(cell_size)?;
    let records = build_export(&registry.resolve(&placements));

    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &records)?;
        writeln!(stdout)?;
    } else {
        let stats = level.stats();
        writeln!(
            stdout,
            "seed {}  rooms {}  steps {}  bounds {}..{}",
            level.seed, stats.room_count, stats.steps, stats.min, stats.max
        )?;
        writeln!(stdout)?;
        write!(stdout, "{}", render_glyph_map(level, registry))?;
        writeln!(stdout)?;
        write!(stdout, "{}", level.visualize())?;
        writeln!(stdout)?;
        write!(stdout, "{}", render_table(&records))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = args.generator_config()?;
    let registry = args.registry()?;
    let cell_size = args.cell_size.unwrap_or(registry.size_units());
    if !(cell_size > 0.0) {
        anyhow::bail!("cell size must be positive, got {}", cell_size);
    }

    let mut session = Session::new(config, args.retries);
    info!(
        "generating {} room(s) on a {}x{} grid with seed {}",
        config.max_rooms,
        config.grid_size.x,
        config.grid_size.y,
        session.seed()
    );

    let level = session.next_level()?;
    print_level(&level, &registry, cell_size, args.json)?;

    if !args.interactive {
        return Ok(());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }
        match session.next_level() {
            Ok(level) => print_level(&level, &registry, cell_size, args.json)?,
            Err(err) => error!("regeneration failed: {}", err),
        }
    }
    Ok(())
}
