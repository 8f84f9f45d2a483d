//! Decoding of source and tile images and export of the finished mosaic

use crate::io::error::{MosaicError, Result, WithPath, invalid_image};
use image::RgbImage;
use std::path::Path;

/// Decode an image file into an RGB raster
///
/// Alpha and higher bit depths are discarded by the conversion.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or is not a supported image format
/// - The decoded image has a zero dimension
pub fn load_rgb_image(path: &Path) -> Result<RgbImage> {
    let image = image::open(path).with_path(path)?.to_rgb8();
    if image.width() == 0 || image.height() == 0 {
        return Err(invalid_image(&format!(
            "'{}' decodes to a {}x{} image",
            path.display(),
            image.width(),
            image.height()
        )));
    }
    Ok(image)
}

/// Check that a file looks like a decodable image without decoding pixels
pub fn is_readable_image(path: &Path) -> bool {
    path.is_file() && image::image_dimensions(path).is_ok()
}

/// Save the mosaic, creating missing parent directories
///
/// The format is chosen from the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_mosaic(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save(output_path)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    log::info!(
        "Saved {}x{} mosaic to {}",
        image.width(),
        image.height(),
        output_path.display()
    );
    Ok(())
}
