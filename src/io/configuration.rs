//! Composition parameters and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};

/// Directory scanned for tile images when none is given
pub const DEFAULT_TILE_DIRECTORY: &str = "CollageImages";

/// Magnification applied when no scale is given
pub const DEFAULT_SCALE: u32 = 1;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed edge length of a scaled tile or the output canvas
pub const MAX_CANVAS_DIMENSION: u32 = 65_536;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Tile size and magnification for one composition run
///
/// Both values are validated once at construction and stay fixed for the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MosaicConfig {
    tile_size: u32,
    scale: u32,
}

impl MosaicConfig {
    /// Validate and build a configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if:
    /// - `tile_size` or `scale` is zero
    /// - `tile_size * scale` overflows or exceeds [`MAX_CANVAS_DIMENSION`]
    pub fn new(tile_size: u32, scale: u32) -> Result<Self> {
        if tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &"must be a positive integer",
            ));
        }
        if scale == 0 {
            return Err(invalid_parameter(
                "scale",
                &scale,
                &"must be a positive integer",
            ));
        }

        tile_size
            .checked_mul(scale)
            .filter(|&side| side <= MAX_CANVAS_DIMENSION)
            .ok_or_else(|| {
                invalid_parameter(
                    "scale",
                    &scale,
                    &format!(
                        "tile_size * scale must not exceed {MAX_CANVAS_DIMENSION} (tile_size = {tile_size})"
                    ),
                )
            })?;

        Ok(Self { tile_size, scale })
    }

    /// Pixels per tile edge in the source image
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Magnification applied to every tile and to the canvas
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Pixels per tile edge in the output canvas
    pub const fn scaled_tile_size(&self) -> u32 {
        // Bounded by MAX_CANVAS_DIMENSION at construction
        self.tile_size * self.scale
    }
}
