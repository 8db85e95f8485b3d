//! The ways a [`Map`](crate::world_core::map::Map) can be obtained: generated
//! from noise, an empty fixed-size map, or read back from a save.

pub mod fixed;
pub mod terrain;
pub mod stream;

pub use fixed::StaticMapBuilder;
pub use terrain::NoiseMapBuilder;
pub use stream::StreamMapBuilder;
