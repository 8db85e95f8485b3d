pub mod builder;
pub mod config;
pub mod error;
pub mod heightmap;
pub mod map;
pub mod map_layer;
#[cfg(not(target_arch = "wasm32"))]
pub mod save;
pub mod token;

pub use builder::{NoiseMapBuilder, StaticMapBuilder, StreamMapBuilder};
pub use error::MapError;
pub use map::{Map, MapBuilder};
pub use map_layer::{CellIndex, MapLayer, CELL_EMPTY, CELL_SOLID};
