use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::Context;

use crate::world_core::map::Map;

pub fn save_map(map: &Map, path: &Path) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    map.write_to(BufWriter::new(file))
        .with_context(|| format!("failed to write map to {}", path.display()))?;
    log::info!(
        "saved {}x{}x{} map to {}",
        map.length(),
        map.width(),
        map.height(),
        path.display()
    );
    Ok(())
}

pub fn load_map(path: &Path) -> anyhow::Result<Map> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let map = Map::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to load map from {}", path.display()))?;
    log::info!("loaded map from {}", path.display());
    Ok(map)
}
