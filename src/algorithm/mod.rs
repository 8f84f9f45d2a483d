/// Grid walk and canvas reconstruction
pub mod composer;
/// Nearest average-color tile search
pub mod matcher;

pub use composer::{MosaicComposer, compose_mosaic};
pub use matcher::{NearestTileMatcher, select_nearest};
