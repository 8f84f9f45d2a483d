//! Tile library construction from an ordered set of source images

use crate::io::configuration::MosaicConfig;
use crate::io::error::{MosaicError, Result, invalid_image};
use crate::library::tile::Tile;
use image::{GenericImageView, Rgb};

/// Ordered, non-empty collection of tiles available for matching
///
/// Contents never change after construction; matchers keep their own
/// iteration order instead of reordering the library.
#[derive(Debug, Clone)]
pub struct TileLibrary {
    tiles: Vec<Tile>,
}

impl TileLibrary {
    /// Build a library from prepared tiles
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `tiles` is empty
    /// - The tiles do not all share the side of the first one
    pub fn from_tiles(tiles: Vec<Tile>) -> Result<Self> {
        let side = tiles.first().ok_or(MosaicError::EmptyLibrary)?.side();
        if let Some((index, tile)) = tiles
            .iter()
            .enumerate()
            .find(|(_, candidate)| candidate.side() != side)
        {
            return Err(invalid_image(&format!(
                "tile {index} is {0}x{0} but the library uses {side}x{side}",
                tile.side()
            )));
        }
        Ok(Self { tiles })
    }

    /// Prepare every source image in order and collect the resulting tiles
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any source image has a zero dimension
    /// - No source images were supplied
    pub fn from_images<'a, I, P>(images: I, config: &MosaicConfig) -> Result<Self>
    where
        I: IntoIterator<Item = &'a P>,
        P: GenericImageView<Pixel = Rgb<u8>> + 'a,
    {
        let mut builder = TileLibraryBuilder::new(*config);
        for image in images {
            builder.push_image(image)?;
        }
        builder.build()
    }

    /// Number of tiles, always at least one
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a constructed library
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at a library position
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// All tiles in library order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Edge length shared by every tile
    pub fn tile_side(&self) -> u32 {
        self.tiles.first().map_or(0, Tile::side)
    }
}

/// Incrementally prepares tiles so callers can decode and report per file
#[derive(Debug)]
pub struct TileLibraryBuilder {
    config: MosaicConfig,
    tiles: Vec<Tile>,
}

impl TileLibraryBuilder {
    /// Start an empty library for the given configuration
    pub const fn new(config: MosaicConfig) -> Self {
        Self {
            config,
            tiles: Vec::new(),
        }
    }

    /// Square-crop, average and resize one source image, then append it
    ///
    /// Returns the average color of the prepared tile.
    ///
    /// # Errors
    ///
    /// Returns an invalid image error if the source has a zero dimension
    pub fn push_image<I>(&mut self, image: &I) -> Result<Rgb<u8>>
    where
        I: GenericImageView<Pixel = Rgb<u8>>,
    {
        let tile = Tile::from_image(image, self.config.scaled_tile_size())?;
        let average = tile.average();
        log::debug!(
            "Prepared tile {} with average color {:?}",
            self.tiles.len(),
            average.0
        );
        self.tiles.push(tile);
        Ok(average)
    }

    /// Number of tiles prepared so far
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no tiles have been prepared yet
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Finish the library
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyLibrary`] if no images were pushed
    pub fn build(self) -> Result<TileLibrary> {
        TileLibrary::from_tiles(self.tiles)
    }
}
