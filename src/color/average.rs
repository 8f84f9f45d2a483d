//! Box-filter reduction of a raster to a single representative color

use crate::io::error::{Result, invalid_image};
use image::{GenericImageView, Rgb};

/// Reduce an image to its area-averaged RGB color
///
/// Equivalent to downsampling the whole view to one pixel with a box filter:
/// every pixel carries equal weight and each channel mean is rounded to the
/// nearest integer. Works on sub-image views, so grid cells are averaged in
/// place without materializing a crop.
///
/// # Errors
///
/// Returns an invalid image error if the view has a zero dimension
pub fn average_color<I>(image: &I) -> Result<Rgb<u8>>
where
    I: GenericImageView<Pixel = Rgb<u8>>,
{
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(invalid_image(&format!(
            "cannot average a {width}x{height} image"
        )));
    }

    let mut sums = [0u64; 3];
    for (_, _, Rgb(channels)) in image.pixels() {
        for (sum, &value) in sums.iter_mut().zip(channels.iter()) {
            *sum += u64::from(value);
        }
    }

    let count = u64::from(width) * u64::from(height);
    Ok(Rgb(sums.map(|sum| ((sum + count / 2) / count) as u8)))
}
