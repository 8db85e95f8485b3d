use noise::{Fbm, NoiseFn, Perlin};
#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use crate::world_core::config::TerrainConfig;
use crate::world_core::error::MapError;
use crate::world_core::heightmap::Heightmap;
use crate::world_core::map::MapBuilder;
use crate::world_core::map_layer::{CellIndex, MapLayer};

/// Largest map, counted in cells across all layers, that will be generated.
pub const MAX_GENERATED_CELLS: u64 = 1 << 28;

/// Generates height-field terrain: each `(x, y)` column is solid from layer 0
/// up to a surface height drawn from seeded noise, and empty above it.
pub struct NoiseMapBuilder<N = Fbm<Perlin>> {
    length: u32,
    width: u32,
    height: u32,
    heightmap: Heightmap<N>,
    solid_cell: CellIndex,
}

impl NoiseMapBuilder {
    pub fn new(length: u32, width: u32, height: u32, seed: u32) -> Self {
        Self::with_config(length, width, height, seed, &TerrainConfig::default())
    }

    pub fn with_config(
        length: u32,
        width: u32,
        height: u32,
        seed: u32,
        config: &TerrainConfig,
    ) -> Self {
        log::debug!("noise map builder {length}x{width}x{height}, seed {seed}");
        Self {
            length,
            width,
            height,
            heightmap: Heightmap::new(seed, config),
            solid_cell: config.solid_cell,
        }
    }
}

impl<N: NoiseFn<f64, 2> + Sync> NoiseMapBuilder<N> {
    /// Uses an arbitrary noise source for the surface.
    pub fn from_heightmap(length: u32, width: u32, height: u32, heightmap: Heightmap<N>) -> Self {
        Self {
            length,
            width,
            height,
            heightmap,
            solid_cell: TerrainConfig::default().solid_cell,
        }
    }

    /// Number of solid layers in the column at `(x, y)`, at most `height`.
    pub fn column_height(&self, x: u32, y: u32) -> u32 {
        let base_height = self.height as f32 / 2.0;
        let surface_variance = self.height as f32 / 4.0;
        let column = base_height + surface_variance * self.heightmap.sample(x, y) + 1.0;
        (column as u32).min(self.height)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn column_heights(&self) -> Vec<u32> {
        let length = self.length as usize;
        let total = length * self.width as usize;
        (0..total)
            .into_par_iter()
            .map(|idx| self.column_height((idx % length) as u32, (idx / length) as u32))
            .collect()
    }

    #[cfg(target_arch = "wasm32")]
    fn column_heights(&self) -> Vec<u32> {
        let length = self.length as usize;
        let total = length * self.width as usize;
        (0..total)
            .map(|idx| self.column_height((idx % length) as u32, (idx / length) as u32))
            .collect()
    }
}

impl<N: NoiseFn<f64, 2> + Sync> MapBuilder for NoiseMapBuilder<N> {
    fn map_length(&self) -> u32 {
        self.length
    }

    fn map_width(&self) -> u32 {
        self.width
    }

    fn map_height(&self) -> u32 {
        self.height
    }

    fn layers(self) -> Result<Vec<MapLayer>, MapError> {
        let empty = MapLayer::new(self.length, self.width)?;
        let total = self.length as u64 * self.width as u64 * self.height as u64;
        if total > MAX_GENERATED_CELLS {
            return Err(MapError::MapTooLarge {
                length: self.length,
                width: self.width,
                height: self.height,
            });
        }

        let heights = self.column_heights();
        let mut layers = vec![empty; self.height as usize];

        let length = self.length as usize;
        for (idx, column) in heights.into_iter().enumerate() {
            let x = (idx % length) as u32;
            let y = (idx / length) as u32;
            for layer in &mut layers[..column as usize] {
                layer.set_cell_index_at(x, y, self.solid_cell)?;
            }
        }

        log::debug!("generated {} terrain layers", layers.len());
        Ok(layers)
    }
}
