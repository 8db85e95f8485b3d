use std::io::BufRead;

use crate::world_core::error::MapError;
use crate::world_core::map::MapBuilder;
use crate::world_core::map_layer::{CellIndex, MapLayer};
use crate::world_core::token::TokenReader;

/// Reads a map back from its saved text form.
///
/// The header is parsed on construction, the layer bodies when the builder
/// is consumed by [`MapBuilder::layers`].
pub struct StreamMapBuilder<R> {
    reader: TokenReader<R>,
    version: String,
    length: u32,
    width: u32,
    height: u32,
}

impl<R: BufRead> StreamMapBuilder<R> {
    pub fn new(input: R) -> Result<Self, MapError> {
        let mut reader = TokenReader::new(input);

        reader.expect_literal("version")?;
        let version = reader.next_token("format version")?;
        reader.expect_literal("lwh")?;
        let length = reader.next_integer("map length")?;
        let width = reader.next_integer("map width")?;
        let height = reader.next_integer("map height")?;

        log::debug!("reading {length}x{width}x{height} map, format {version}");
        Ok(Self {
            reader,
            version,
            length,
            width,
            height,
        })
    }

    /// The free-form tag that followed `version` in the header.
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl<R: BufRead> MapBuilder for StreamMapBuilder<R> {
    fn map_length(&self) -> u32 {
        self.length
    }

    fn map_width(&self) -> u32 {
        self.width
    }

    fn map_height(&self) -> u32 {
        self.height
    }

    fn layers(mut self) -> Result<Vec<MapLayer>, MapError> {
        // A layer is allocated only after its header has been read.
        let mut layers = Vec::new();

        for i in 0..self.height {
            self.reader.expect_literal("layer")?;
            // The ordinal is not checked against the position.
            let ordinal: i64 = self.reader.next_integer("layer number")?;
            if ordinal != i64::from(i) {
                log::warn!("layer {i} is labelled {ordinal}");
            }

            let mut layer = MapLayer::new(self.length, self.width)?;
            for y in 0..self.width {
                for x in 0..self.length {
                    let cell: CellIndex = self.reader.next_integer("cell index")?;
                    layer.set_cell_index_at(x, y, cell)?;
                }
            }
            layers.push(layer);
        }

        Ok(layers)
    }
}

#[cfg(test)]
mod tests {
    use super::StreamMapBuilder;
    use crate::world_core::error::MapError;
    use crate::world_core::map::{Map, MapBuilder};

    fn build(text: &str) -> Result<Map, MapError> {
        Map::build(StreamMapBuilder::new(text.as_bytes())?)
    }

    #[test]
    fn empty_stream_is_rejected() {
        let err = StreamMapBuilder::new("".as_bytes()).err().unwrap();
        assert!(err.is_format_error());
        assert!(matches!(err, MapError::UnexpectedEof { .. }));
    }

    #[test]
    fn header_is_parsed_on_construction() {
        let builder = StreamMapBuilder::new("version abc\nlwh 3 2 1\n".as_bytes()).unwrap();
        assert_eq!(builder.version(), "abc");
        assert_eq!(builder.map_length(), 3);
        assert_eq!(builder.map_width(), 2);
        assert_eq!(builder.map_height(), 1);
    }

    #[test]
    fn missing_version_literal_is_rejected() {
        let err = StreamMapBuilder::new("lwh 1 1 1\n".as_bytes()).err().unwrap();
        assert!(matches!(
            err,
            MapError::UnexpectedToken { ref found, .. } if found == "lwh"
        ));
    }

    #[test]
    fn missing_lwh_literal_is_rejected() {
        let err = StreamMapBuilder::new("version 1\nwlh 1 1 1\n".as_bytes())
            .err()
            .unwrap();
        assert!(matches!(
            err,
            MapError::UnexpectedToken { ref found, .. } if found == "wlh"
        ));
    }

    #[test]
    fn bad_dimensions_are_rejected() {
        for text in [
            "version 1\nlwh 2 x 1\n",
            "version 1\nlwh 2 -2 1\n",
            "version 1\nlwh 2 2.5 1\n",
        ] {
            let err = StreamMapBuilder::new(text.as_bytes()).err().unwrap();
            assert!(
                matches!(err, MapError::InvalidInteger { .. }),
                "{text:?} gave {err:?}"
            );
        }
        let err = StreamMapBuilder::new("version 1\nlwh 2 2".as_bytes())
            .err()
            .unwrap();
        assert!(matches!(err, MapError::UnexpectedEof { .. }));
    }

    #[test]
    fn reads_cells_in_row_major_order() {
        let map = build("version 20161108\nlwh 2 2 1\nlayer 0\n   1   2\n   3   4\n").unwrap();
        let layer = map.layer(0).unwrap();
        assert_eq!(layer.cell_index_at(0, 0).unwrap(), 1);
        assert_eq!(layer.cell_index_at(1, 0).unwrap(), 2);
        assert_eq!(layer.cell_index_at(0, 1).unwrap(), 3);
        assert_eq!(layer.cell_index_at(1, 1).unwrap(), 4);
    }

    #[test]
    fn line_breaks_inside_a_layer_are_cosmetic() {
        let tidy = build("version 1\nlwh 3 1 2\nlayer 0\n1 2 3\nlayer 1\n4 5 6\n").unwrap();
        let messy = build("version 1 lwh 3 1 2 layer 0 1\n2\n\n3 layer\n1 4 5 6").unwrap();
        assert_eq!(tidy, messy);
    }

    #[test]
    fn layer_labels_are_not_validated() {
        let map = build("version 1\nlwh 1 1 2\nlayer 7\n5\nlayer -1\n6\n").unwrap();
        assert_eq!(map.layer(0).unwrap().cell_index_at(0, 0).unwrap(), 5);
        assert_eq!(map.layer(1).unwrap().cell_index_at(0, 0).unwrap(), 6);
    }

    #[test]
    fn truncated_body_is_rejected() {
        let err = build("version 1\nlwh 2 2 2\nlayer 0\n1 2\n3 4\nlayer 1\n5 6\n").unwrap_err();
        assert!(matches!(err, MapError::UnexpectedEof { .. }));

        let err = build("version 1\nlwh 2 2 2\nlayer 0\n1 2\n3 4\n").unwrap_err();
        assert!(matches!(
            err,
            MapError::UnexpectedEof { ref expected } if expected == "'layer'"
        ));
    }

    #[test]
    fn non_integer_cell_is_rejected() {
        let err = build("version 1\nlwh 2 1 1\nlayer 0\n1 air\n").unwrap_err();
        assert!(matches!(
            err,
            MapError::InvalidInteger { ref token, .. } if token == "air"
        ));
    }

    #[test]
    fn missing_layer_literal_is_rejected() {
        let err = build("version 1\nlwh 1 1 1\nlevel 0\n1\n").unwrap_err();
        assert!(matches!(err, MapError::UnexpectedToken { .. }));
    }

    #[test]
    fn huge_extents_with_truncated_body_fail_cleanly() {
        let err = build("version 1\nlwh 4294967295 4294967295 1\nlayer 0\n").unwrap_err();
        assert!(err.is_too_large(), "{err:?}");

        let err = build("version 1\nlwh 100000 100000 100\nlayer 0\n").unwrap_err();
        assert!(matches!(err, MapError::LayerTooLarge { .. }));

        let err = build("version 1\nlwh 4294967295 4294967295 4294967295\n").unwrap_err();
        assert!(matches!(
            err,
            MapError::UnexpectedEof { ref expected } if expected == "'layer'"
        ));
    }

    #[test]
    fn huge_height_with_missing_layers_is_a_format_error() {
        let err = build("version 1\nlwh 2 2 4294967295\nlayer 0\n1 2\n3 4\n").unwrap_err();
        assert!(err.is_format_error());
    }

    #[test]
    fn zero_height_map_has_no_layers() {
        let map = build("version 1\nlwh 5 5 0\n").unwrap();
        assert_eq!(map.height(), 0);
        assert!(map.layer(0).unwrap_err().is_out_of_range());
    }
}
