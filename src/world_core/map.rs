use std::fmt;
use std::io::{self, BufRead, Write};

use crate::world_core::builder::stream::StreamMapBuilder;
use crate::world_core::error::MapError;
use crate::world_core::map_layer::MapLayer;

/// Format tag written on the first line of every saved map.
pub const FORMAT_VERSION: &str = "20161108";

/// A one-shot source of map dimensions and layer data.
///
/// [`Map::build`] reads the extents first, then consumes the builder for its
/// layers. Implementations are trusted to return exactly `map_height()`
/// layers of `map_length()` x `map_width()` cells.
pub trait MapBuilder {
    fn map_length(&self) -> u32;
    fn map_width(&self) -> u32;
    fn map_height(&self) -> u32;
    fn layers(self) -> Result<Vec<MapLayer>, MapError>;
}

/// The local (playable) part of the world: a stack of equally sized layers,
/// index 0 at the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    length: u32,
    width: u32,
    height: u32,
    layers: Vec<MapLayer>,
}

impl Map {
    pub fn build<B: MapBuilder>(builder: B) -> Result<Self, MapError> {
        let length = builder.map_length();
        let width = builder.map_width();
        let height = builder.map_height();
        let layers = builder.layers()?;
        debug_assert_eq!(layers.len(), height as usize);

        log::debug!("built {length}x{width}x{height} map");
        Ok(Self {
            length,
            width,
            height,
            layers,
        })
    }

    /// Reads a map in the saved text format.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, MapError> {
        Self::build(StreamMapBuilder::new(reader)?)
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layer(&self, index: u32) -> Result<&MapLayer, MapError> {
        let height = self.height;
        self.layers
            .get(index as usize)
            .filter(|_| index < height)
            .ok_or(MapError::LayerOutOfRange { index, height })
    }

    pub fn layer_mut(&mut self, index: u32) -> Result<&mut MapLayer, MapError> {
        let height = self.height;
        self.layers
            .get_mut(index as usize)
            .filter(|_| index < height)
            .ok_or(MapError::LayerOutOfRange { index, height })
    }

    /// Layers from the bottom up.
    pub fn layers(&self) -> impl Iterator<Item = &MapLayer> + '_ {
        self.layers.iter()
    }

    /// Writes the map in the saved text format.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", self)?;
        writer.flush()
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "version {FORMAT_VERSION}")?;
        writeln!(f, "lwh {} {} {}", self.length, self.width, self.height)?;
        for (i, layer) in self.layers.iter().enumerate() {
            writeln!(f, "layer {i}")?;
            write!(f, "{layer}")?;
        }
        Ok(())
    }
}
