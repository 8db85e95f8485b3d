use thiserror::Error;

/// Errors raised while building, reading or indexing a map.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("cell index ({x}, {y}) out of range for {length}x{width} layer")]
    CellOutOfRange {
        x: u32,
        y: u32,
        length: u32,
        width: u32,
    },

    #[error("layer index {index} out of range for map of height {height}")]
    LayerOutOfRange { index: u32, height: u32 },

    #[error("{length}x{width} layer is too large")]
    LayerTooLarge { length: u32, width: u32 },

    #[error("{length}x{width}x{height} map is too large")]
    MapTooLarge { length: u32, width: u32, height: u32 },

    #[error("expected {expected}, found '{found}'")]
    UnexpectedToken { expected: String, found: String },

    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: String },

    #[error("'{token}' is not a valid {expected}")]
    InvalidInteger { token: String, expected: String },

    #[error("stream is in a failed state")]
    StreamFailed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MapError {
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::CellOutOfRange { .. } | Self::LayerOutOfRange { .. }
        )
    }

    pub fn is_too_large(&self) -> bool {
        matches!(self, Self::LayerTooLarge { .. } | Self::MapTooLarge { .. })
    }

    /// True for any failure to parse the text map format.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedToken { .. }
                | Self::UnexpectedEof { .. }
                | Self::InvalidInteger { .. }
                | Self::StreamFailed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::MapError;

    #[test]
    fn classifies_bounds_and_format_errors() {
        let bounds = MapError::LayerOutOfRange {
            index: 13,
            height: 10,
        };
        assert!(bounds.is_out_of_range());
        assert!(!bounds.is_format_error());

        let format = MapError::UnexpectedEof {
            expected: "'version'".to_string(),
        };
        assert!(format.is_format_error());
        assert!(!format.is_out_of_range());
    }

    #[test]
    fn messages_name_the_offending_values() {
        let err = MapError::CellOutOfRange {
            x: 12,
            y: 0,
            length: 12,
            width: 4,
        };
        assert_eq!(
            err.to_string(),
            "cell index (12, 0) out of range for 12x4 layer"
        );
    }
}
