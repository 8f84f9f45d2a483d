//! Centered square cropping of arbitrary-aspect-ratio images

use crate::io::error::{Result, invalid_image};
use image::{GenericImageView, SubImage, imageops};

/// Placement of a square crop inside its source image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareBounds {
    /// Left edge of the square
    pub x: u32,
    /// Top edge of the square
    pub y: u32,
    /// Edge length, always `min(width, height)`
    pub side: u32,
}

/// Compute the centered square inside a `width` x `height` image
///
/// The square spans the shorter axis completely. Along the longer axis it is
/// offset by `longer / 2 - shorter / 2`, both halves rounded down.
///
/// # Errors
///
/// Returns an invalid image error if either dimension is zero
pub fn square_bounds(width: u32, height: u32) -> Result<SquareBounds> {
    if width == 0 || height == 0 {
        return Err(invalid_image(&format!(
            "cannot square-crop a {width}x{height} image"
        )));
    }

    let bounds = if width > height {
        SquareBounds {
            x: width / 2 - height / 2,
            y: 0,
            side: height,
        }
    } else if height > width {
        SquareBounds {
            x: 0,
            y: height / 2 - width / 2,
            side: width,
        }
    } else {
        SquareBounds {
            x: 0,
            y: 0,
            side: width,
        }
    };

    Ok(bounds)
}

/// Borrow the centered square of an image as a view
///
/// The source is never modified; square inputs yield a view of the whole image.
///
/// # Errors
///
/// Returns an invalid image error if either dimension is zero
pub fn square_crop<I>(image: &I) -> Result<SubImage<&I>>
where
    I: GenericImageView,
{
    let (width, height) = image.dimensions();
    let SquareBounds { x, y, side } = square_bounds(width, height)?;
    Ok(imageops::crop_imm(image, x, y, side, side))
}
