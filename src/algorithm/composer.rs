//! Grid walk that replaces every source cell with its best-matching tile

use crate::algorithm::matcher::NearestTileMatcher;
use crate::color::average_color;
use crate::io::configuration::MosaicConfig;
use crate::io::error::{Result, invalid_parameter};
use crate::library::TileLibrary;
use crate::spatial::{GridCell, MosaicGrid};
use image::{GenericImageView, RgbImage, imageops};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::iter::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};

/// Builds the output canvas from a source image and a tile library
#[derive(Debug, Clone, Copy)]
pub struct MosaicComposer<'a> {
    library: &'a TileLibrary,
    config: MosaicConfig,
}

impl<'a> MosaicComposer<'a> {
    /// Pair a library with the configuration it was built for
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the library tiles are not
    /// `tile_size * scale` pixels wide
    pub fn new(library: &'a TileLibrary, config: MosaicConfig) -> Result<Self> {
        let expected = config.scaled_tile_size();
        let actual = library.tile_side();
        if actual != expected {
            return Err(invalid_parameter(
                "scale",
                &config.scale(),
                &format!("library tiles are {actual}px but the canvas expects {expected}px"),
            ));
        }
        Ok(Self { library, config })
    }

    /// Grid the composer would lay over `source`
    ///
    /// # Errors
    ///
    /// Returns an error if the source has a zero dimension or is smaller than one tile
    pub fn grid(&self, source: &RgbImage) -> Result<MosaicGrid> {
        MosaicGrid::new(source.width(), source.height(), &self.config)
    }

    /// Compose the mosaic on the current thread
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be gridded
    pub fn compose<R>(&self, source: &RgbImage, rng: &mut R) -> Result<RgbImage>
    where
        R: Rng + ?Sized,
    {
        self.compose_with_progress(source, rng, |_| {})
    }

    /// Compose the mosaic on the current thread, reporting each finished row
    ///
    /// Cells are visited row-major; the shared random source drives every
    /// tie-break, so a fixed seed yields a bit-identical canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be gridded
    pub fn compose_with_progress<R, F>(
        &self,
        source: &RgbImage,
        rng: &mut R,
        mut on_row: F,
    ) -> Result<RgbImage>
    where
        R: Rng + ?Sized,
        F: FnMut(u32),
    {
        let grid = self.grid(source)?;
        let (width, height) = grid.canvas_dimensions();
        log::info!(
            "Composing {}x{} cells into a {width}x{height} canvas",
            grid.columns(),
            grid.rows()
        );

        let mut canvas = RgbImage::new(width, height);
        let mut matcher = NearestTileMatcher::new(self.library);

        for row in 0..grid.rows() {
            let (_, top) = grid.canvas_origin(GridCell { column: 0, row });
            self.render_row(source, &grid, row, &mut matcher, rng, &mut canvas, top)?;
            on_row(row);
        }

        Ok(canvas)
    }

    /// Compose the mosaic with rows spread across the rayon thread pool
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be gridded
    pub fn compose_parallel(&self, source: &RgbImage, seed: u64) -> Result<RgbImage> {
        self.compose_parallel_with_progress(source, seed, |_| {})
    }

    /// Compose rows in parallel, reporting each finished row
    ///
    /// Every row gets its own matcher and a random source seeded from `seed`,
    /// so output depends only on the seed, never on thread scheduling. Rows
    /// are rendered into separate strips and pasted as disjoint rectangles.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be gridded
    pub fn compose_parallel_with_progress<F>(
        &self,
        source: &RgbImage,
        seed: u64,
        on_row: F,
    ) -> Result<RgbImage>
    where
        F: Fn(u32) + Sync,
    {
        let grid = self.grid(source)?;
        let (width, height) = grid.canvas_dimensions();
        log::info!(
            "Composing {}x{} cells into a {width}x{height} canvas in parallel",
            grid.columns(),
            grid.rows()
        );

        let mut seeder = StdRng::seed_from_u64(seed);
        let row_seeds: Vec<u64> = (0..grid.rows()).map(|_| seeder.random()).collect();

        let strips = row_seeds
            .into_par_iter()
            .enumerate()
            .map(|(row, row_seed)| -> Result<RgbImage> {
                let row = row as u32;
                let mut rng = StdRng::seed_from_u64(row_seed);
                let mut matcher = NearestTileMatcher::new(self.library);
                let mut strip = RgbImage::new(width, grid.scaled_tile_size());
                self.render_row(source, &grid, row, &mut matcher, &mut rng, &mut strip, 0)?;
                on_row(row);
                Ok(strip)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut canvas = RgbImage::new(width, height);
        for (row, strip) in (0..grid.rows()).zip(&strips) {
            let (_, top) = grid.canvas_origin(GridCell { column: 0, row });
            imageops::replace(&mut canvas, strip, 0, i64::from(top));
        }

        Ok(canvas)
    }

    // Matches every cell of one grid row and pastes the tiles at vertical offset `top`
    fn render_row<R>(
        &self,
        source: &RgbImage,
        grid: &MosaicGrid,
        row: u32,
        matcher: &mut NearestTileMatcher<'a>,
        rng: &mut R,
        target: &mut RgbImage,
        top: u32,
    ) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        let tile_size = grid.tile_size();
        for cell in grid.row_cells(row) {
            let (x, y) = grid.source_origin(cell);
            let color = average_color(&*source.view(x, y, tile_size, tile_size))?;
            let tile = matcher.find(color, rng)?;
            let (left, _) = grid.canvas_origin(cell);
            imageops::replace(target, tile.pixels(), i64::from(left), i64::from(top));
        }
        Ok(())
    }
}

/// Build a tile library from `tile_sources` and compose `source` with it
///
/// Configuration problems with the source are reported before any tile
/// is prepared.
///
/// # Errors
///
/// Returns an error if:
/// - The source or any tile source has a zero dimension
/// - The source is smaller than one tile
/// - `tile_sources` is empty
pub fn compose_mosaic<R>(
    source: &RgbImage,
    tile_sources: &[RgbImage],
    config: &MosaicConfig,
    rng: &mut R,
) -> Result<RgbImage>
where
    R: Rng + ?Sized,
{
    MosaicGrid::new(source.width(), source.height(), config)?;
    let library = TileLibrary::from_images(tile_sources, config)?;
    MosaicComposer::new(&library, *config)?.compose(source, rng)
}
