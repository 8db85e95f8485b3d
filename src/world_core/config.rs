use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::world_core::map_layer::{CellIndex, CELL_SOLID};

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub world: WorldConfig,
    pub terrain: TerrainConfig,
}

impl MapConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::info!("no {} found, using defaults", path.display());
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(config) => {
                    log::info!("loaded {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("failed to parse {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("failed to read {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str(contents)
    }
}

/// Extents and seed of the procedurally generated map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub seed: u32,
    pub length: u32,
    pub width: u32,
    pub height: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            length: 24,
            width: 24,
            height: 10,
        }
    }
}

/// Fractal gradient-noise parameters for terrain generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub frequency: f64,
    pub octaves: usize,
    pub lacunarity: f64,
    pub persistence: f64,
    /// Cell index written below the surface.
    pub solid_cell: CellIndex,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            frequency: 0.01,
            octaves: 3,
            lacunarity: 2.0,
            persistence: 0.5,
            solid_cell: CELL_SOLID,
        }
    }
}
