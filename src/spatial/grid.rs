//! Row-major layout of tile-sized grid cells over a source image
//!
//! Cells cover the source from its top-left corner. Any strip narrower or
//! shorter than one tile at the right or bottom edge is left out, so the
//! canvas is always an exact multiple of the scaled tile size.

use crate::io::configuration::{MAX_CANVAS_DIMENSION, MosaicConfig};
use crate::io::error::{Result, invalid_image, invalid_parameter};

/// One tile-sized region of the source image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Zero-based column index
    pub column: u32,
    /// Zero-based row index
    pub row: u32,
}

/// Grid dimensions and pixel geometry for one composition run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicGrid {
    columns: u32,
    rows: u32,
    tile_size: u32,
    scaled_tile_size: u32,
}

impl MosaicGrid {
    /// Lay a grid over a `width` x `height` source image
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source has a zero dimension (invalid image)
    /// - The source is smaller than one tile along either axis
    /// - The resulting canvas would exceed [`MAX_CANVAS_DIMENSION`]
    pub fn new(width: u32, height: u32, config: &MosaicConfig) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_image(&format!(
                "source image is {width}x{height}"
            )));
        }

        let tile_size = config.tile_size();
        let columns = width / tile_size;
        let rows = height / tile_size;
        if columns == 0 || rows == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &format!("source image {width}x{height} is smaller than one tile"),
            ));
        }

        let scaled_tile_size = config.scaled_tile_size();
        for (parameter, count) in [("columns", columns), ("rows", rows)] {
            let fits = count
                .checked_mul(scaled_tile_size)
                .is_some_and(|edge| edge <= MAX_CANVAS_DIMENSION);
            if !fits {
                return Err(invalid_parameter(
                    parameter,
                    &count,
                    &format!("output canvas edge would exceed {MAX_CANVAS_DIMENSION} pixels"),
                ));
            }
        }

        Ok(Self {
            columns,
            rows,
            tile_size,
            scaled_tile_size,
        })
    }

    /// Number of whole tiles across the source
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of whole tiles down the source
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }

    /// Output canvas size (width, height)
    pub const fn canvas_dimensions(&self) -> (u32, u32) {
        (
            self.columns * self.scaled_tile_size,
            self.rows * self.scaled_tile_size,
        )
    }

    /// Top-left pixel of a cell in the source image
    pub const fn source_origin(&self, cell: GridCell) -> (u32, u32) {
        (cell.column * self.tile_size, cell.row * self.tile_size)
    }

    /// Top-left pixel of a cell in the output canvas
    pub const fn canvas_origin(&self, cell: GridCell) -> (u32, u32) {
        (
            cell.column * self.scaled_tile_size,
            cell.row * self.scaled_tile_size,
        )
    }

    /// Edge length of a cell in the source image
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Edge length of a placed tile in the output canvas
    pub const fn scaled_tile_size(&self) -> u32 {
        self.scaled_tile_size
    }

    /// Cells of a single row, left to right
    pub fn row_cells(&self, row: u32) -> impl Iterator<Item = GridCell> + use<> {
        (0..self.columns).map(move |column| GridCell { column, row })
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + use<> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |column| GridCell { column, row }))
    }
}
