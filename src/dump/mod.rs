//! Text dump of a map, for inspecting generated terrain and save files.

pub mod config;

use std::io::{self, Write};

use anyhow::Result;

pub use config::DumpConfig;

use crate::world_core::builder::NoiseMapBuilder;
use crate::world_core::config::MapConfig;
use crate::world_core::map::Map;
use crate::world_core::save;

pub fn dump_map<W: Write>(map: &Map, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "map is {}x{}x{}",
        map.length(),
        map.width(),
        map.height()
    )?;
    for (i, layer) in map.layers().enumerate() {
        writeln!(out, "layer {i}")?;
        for y in 0..layer.width() {
            for cell in layer.row(y) {
                write!(out, "{cell} ")?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Loads the map named by `--save-file`, or generates one from the map
/// configuration.
pub fn obtain_map(options: &DumpConfig) -> Result<Map> {
    if let Some(path) = &options.save_file {
        return save::load_map(path);
    }

    let config = match &options.config_path {
        Some(path) => MapConfig::load_from(path),
        None => MapConfig::load(),
    };
    let world = &config.world;
    let seed = options.seed.unwrap_or(world.seed);
    let builder = NoiseMapBuilder::with_config(
        world.length,
        world.width,
        world.height,
        seed,
        &config.terrain,
    );
    Ok(Map::build(builder)?)
}

pub fn run<W: Write>(options: &DumpConfig, out: &mut W) -> Result<()> {
    let map = obtain_map(options)?;
    dump_map(&map, out)?;
    if let Some(path) = &options.output {
        save::save_map(&map, path)?;
    }
    Ok(())
}
