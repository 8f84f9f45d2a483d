//! Photomosaic generation from a library of tile images
//!
//! Tile sources are square-cropped, reduced to one average color and scaled
//! once. The source image is then walked in tile-sized cells, and every cell
//! is replaced by the tile whose average color lies nearest in RGB space.

#![forbid(unsafe_code)]

/// Tile matching and canvas composition
pub mod algorithm;
/// Average-color reduction and color distance
pub mod color;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tile preparation and the tile library
pub mod library;
/// Square cropping and grid layout
pub mod spatial;

pub use algorithm::{MosaicComposer, NearestTileMatcher, compose_mosaic};
pub use io::configuration::MosaicConfig;
pub use io::error::{MosaicError, Result};
pub use library::{Tile, TileLibrary, TileLibraryBuilder};
