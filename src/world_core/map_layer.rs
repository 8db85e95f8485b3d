use std::fmt;

use crate::world_core::error::MapError;

/// Identifies the kind of terrain occupying a cell.
pub type CellIndex = i32;

pub const CELL_EMPTY: CellIndex = 0;
pub const CELL_SOLID: CellIndex = 1;

/// One horizontal slice of the map: a dense `length` x `width` grid of cell
/// indices stored row-major, `y` rows of `length` cells each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLayer {
    length: u32,
    width: u32,
    cells: Vec<CellIndex>,
}

/// Largest number of cells a single layer may hold.
pub const MAX_LAYER_CELLS: usize = 1 << 24;

impl MapLayer {
    /// Allocates an empty layer. Fails with [`MapError::LayerTooLarge`] when
    /// `length * width` exceeds [`MAX_LAYER_CELLS`] or cannot be allocated.
    pub fn new(length: u32, width: u32) -> Result<Self, MapError> {
        let too_large = || MapError::LayerTooLarge { length, width };
        let count = (length as usize)
            .checked_mul(width as usize)
            .filter(|&count| count <= MAX_LAYER_CELLS)
            .ok_or_else(too_large)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(count).map_err(|_| too_large())?;
        cells.resize(count, CELL_EMPTY);
        Ok(Self {
            length,
            width,
            cells,
        })
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn cell_index_at(&self, x: u32, y: u32) -> Result<CellIndex, MapError> {
        let offset = self.cell_offset_of(x, y)?;
        Ok(self.cells[offset])
    }

    pub fn set_cell_index_at(&mut self, x: u32, y: u32, index: CellIndex) -> Result<(), MapError> {
        let offset = self.cell_offset_of(x, y)?;
        self.cells[offset] = index;
        Ok(())
    }

    /// Iterates one row (fixed `y`) from `x = 0` eastwards.
    pub fn row(&self, y: u32) -> impl Iterator<Item = CellIndex> + '_ {
        let length = self.length as usize;
        let start = (y as usize * length).min(self.cells.len());
        let end = (start + length).min(self.cells.len());
        self.cells[start..end].iter().copied()
    }

    fn cell_offset_of(&self, x: u32, y: u32) -> Result<usize, MapError> {
        if x >= self.length || y >= self.width {
            return Err(MapError::CellOutOfRange {
                x,
                y,
                length: self.length,
                width: self.width,
            });
        }
        Ok(y as usize * self.length as usize + x as usize)
    }
}

impl fmt::Display for MapLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.width {
            for cell in self.row(y) {
                write!(f, " {cell:>3}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
