//! Tile preparation and the in-memory tile library

/// Library construction from decoded source images
pub mod builder;
/// Pre-scaled tile with its average color
pub mod tile;

pub use builder::{TileLibrary, TileLibraryBuilder};
pub use tile::Tile;
