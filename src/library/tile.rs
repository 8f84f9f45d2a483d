//! Pre-scaled square tiles tagged with their average color

use crate::color::average_color;
use crate::io::error::{Result, invalid_image};
use crate::spatial::square_crop;
use image::{GenericImageView, Rgb, RgbImage, imageops};

/// Immutable square image fragment used as a stand-in for matching regions
#[derive(Debug, Clone)]
pub struct Tile {
    pixels: RgbImage,
    average: Rgb<u8>,
}

impl Tile {
    /// Wrap already prepared pixels and their average color
    ///
    /// # Errors
    ///
    /// Returns an invalid image error if `pixels` is not a non-empty square
    pub fn new(pixels: RgbImage, average: Rgb<u8>) -> Result<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || width != height {
            return Err(invalid_image(&format!(
                "tile pixels must be a non-empty square, got {width}x{height}"
            )));
        }
        Ok(Self { pixels, average })
    }

    /// Prepare a tile from an arbitrary source image
    ///
    /// The centered square of the source is averaged first, then resized to
    /// `side` x `side` with nearest-neighbour sampling so tile content stays
    /// crisp when magnified.
    ///
    /// # Errors
    ///
    /// Returns an invalid image error if the source or `side` is zero-sized
    pub fn from_image<I>(image: &I, side: u32) -> Result<Self>
    where
        I: GenericImageView<Pixel = Rgb<u8>>,
    {
        if side == 0 {
            return Err(invalid_image(&"tile side must be positive"));
        }

        let square = square_crop(image)?;
        let average = average_color(&*square)?;
        let pixels = imageops::resize(&*square, side, side, imageops::FilterType::Nearest);

        Ok(Self { pixels, average })
    }

    /// Scaled tile pixels
    pub const fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    /// Average color of the source square before resizing
    pub const fn average(&self) -> Rgb<u8> {
        self.average
    }

    /// Edge length of the scaled tile
    pub fn side(&self) -> u32 {
        self.pixels.width()
    }
}
