use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::world_core::config::TerrainConfig;

/// A seeded 2D coherent-noise field sampled at integer map coordinates.
pub struct Heightmap<N = Fbm<Perlin>> {
    source: N,
    frequency: f64,
}

impl Heightmap {
    pub fn new(seed: u32, config: &TerrainConfig) -> Self {
        let source = Fbm::<Perlin>::new(seed)
            .set_octaves(config.octaves)
            .set_lacunarity(config.lacunarity)
            .set_persistence(config.persistence);
        Self::from_source(source, config.frequency)
    }
}

impl<N: NoiseFn<f64, 2>> Heightmap<N> {
    pub fn from_source(source: N, frequency: f64) -> Self {
        Self { source, frequency }
    }

    /// Noise value at `(x, y)`, clamped into `[-1, 1]`.
    pub fn sample(&self, x: u32, y: u32) -> f32 {
        let x = x as f64 * self.frequency;
        let y = y as f64 * self.frequency;
        (self.source.get([x, y]) as f32).clamp(-1.0, 1.0)
    }
}
