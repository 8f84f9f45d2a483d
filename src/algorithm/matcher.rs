//! Nearest-color tile search with randomized tie-breaking

use crate::color::squared_distance;
use crate::io::error::{MosaicError, Result};
use crate::library::{Tile, TileLibrary};
use image::Rgb;
use rand::Rng;
use rand::seq::SliceRandom;

/// Scan tiles in the given order and return the index of the closest match
///
/// The first candidate seeds the minimum and only strictly smaller distances
/// replace it, so among equal non-zero distances the earliest in `order`
/// wins. The scan stops at the first exact color match. Indices outside
/// `tiles` are ignored.
///
/// # Errors
///
/// Returns [`MosaicError::EmptyLibrary`] if `order` names no tile
pub fn select_nearest(tiles: &[Tile], order: &[usize], target: Rgb<u8>) -> Result<usize> {
    let mut best: Option<(usize, u32)> = None;

    for &index in order {
        let Some(tile) = tiles.get(index) else {
            continue;
        };

        let distance = squared_distance(tile.average(), target);
        if distance == 0 {
            return Ok(index);
        }
        if best.is_none_or(|(_, current)| distance < current) {
            best = Some((index, distance));
        }
    }

    best.map(|(index, _)| index).ok_or(MosaicError::EmptyLibrary)
}

/// Finds the best tile for a color, reshuffling its private scan order per call
///
/// The library itself is shared read-only; each matcher owns the order it
/// scans in, so one matcher per worker avoids any shared mutation.
#[derive(Debug, Clone)]
pub struct NearestTileMatcher<'a> {
    library: &'a TileLibrary,
    order: Vec<usize>,
}

impl<'a> NearestTileMatcher<'a> {
    /// Create a matcher over a library
    pub fn new(library: &'a TileLibrary) -> Self {
        Self {
            library,
            order: (0..library.len()).collect(),
        }
    }

    /// Shuffle the scan order, then return the tile nearest to `target`
    ///
    /// Exact matches win immediately, which picks uniformly among several
    /// exact matches; non-zero ties go to whichever tile the shuffle placed first.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyLibrary`] if the library holds no tiles
    pub fn find<R>(&mut self, target: Rgb<u8>, rng: &mut R) -> Result<&'a Tile>
    where
        R: Rng + ?Sized,
    {
        self.order.shuffle(rng);
        let index = select_nearest(self.library.tiles(), &self.order, target)?;
        self.library.get(index).ok_or(MosaicError::EmptyLibrary)
    }

    /// Current scan order, as left by the last search
    pub fn order(&self) -> &[usize] {
        &self.order
    }
}
