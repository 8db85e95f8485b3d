use crate::world_core::error::MapError;
use crate::world_core::map::MapBuilder;
use crate::world_core::map_layer::MapLayer;

pub const STATIC_MAP_LENGTH: u32 = 40;
pub const STATIC_MAP_WIDTH: u32 = 40;
pub const STATIC_MAP_HEIGHT: u32 = 10;

/// Builds an empty map of fixed size.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMapBuilder;

impl MapBuilder for StaticMapBuilder {
    fn map_length(&self) -> u32 {
        STATIC_MAP_LENGTH
    }

    fn map_width(&self) -> u32 {
        STATIC_MAP_WIDTH
    }

    fn map_height(&self) -> u32 {
        STATIC_MAP_HEIGHT
    }

    fn layers(self) -> Result<Vec<MapLayer>, MapError> {
        let empty = MapLayer::new(self.map_length(), self.map_width())?;
        Ok(vec![empty; self.map_height() as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::StaticMapBuilder;
    use crate::world_core::map::{Map, MapBuilder};
    use crate::world_core::map_layer::MapLayer;

    #[test]
    fn every_layer_is_empty() {
        let layers = StaticMapBuilder.layers().unwrap();
        assert_eq!(layers.len(), 10);
        let empty = MapLayer::new(40, 40).unwrap();
        assert!(layers.iter().all(|layer| *layer == empty));
    }

    #[test]
    fn repeated_builds_are_identical() {
        let a = Map::build(StaticMapBuilder).unwrap();
        let b = Map::build(StaticMapBuilder).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn static_map_round_trips_through_text() {
        let map = Map::build(StaticMapBuilder).unwrap();
        let loaded = Map::from_reader(map.to_string().as_bytes()).unwrap();
        assert_eq!(map, loaded);
    }
}
