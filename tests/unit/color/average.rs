//! Tests for box-filter color averaging of images and sub-image views

#[cfg(test)]
mod tests {
    use image::{GenericImageView, Rgb, RgbImage};
    use photomosaic::MosaicError;
    use photomosaic::color::average_color;

    // Tests a uniform image averages to its own color
    // Verified by dividing by the wrong pixel count
    #[test]
    fn test_uniform_image_average() {
        let image = RgbImage::from_pixel(7, 3, Rgb([12, 200, 99]));

        assert_eq!(average_color(&image).unwrap(), Rgb([12, 200, 99]));
    }

    // Tests channel means are rounded to nearest rather than truncated
    // Verified by removing the rounding term
    #[test]
    fn test_average_rounds_to_nearest() {
        let mut image = RgbImage::new(2, 1);
        image.put_pixel(0, 0, Rgb([0, 0, 10]));
        image.put_pixel(1, 0, Rgb([255, 1, 11]));

        assert_eq!(average_color(&image).unwrap(), Rgb([128, 1, 11]));
    }

    // Tests every pixel carries equal weight
    // Verified by sampling only the center pixel
    #[test]
    fn test_average_weights_pixels_equally() {
        let mut image = RgbImage::from_pixel(4, 1, Rgb([0, 0, 0]));
        image.put_pixel(3, 0, Rgb([200, 100, 40]));

        assert_eq!(average_color(&image).unwrap(), Rgb([50, 25, 10]));
    }

    // Tests averaging a view only considers the viewed region
    // Verified by averaging the parent image instead of the view
    #[test]
    fn test_average_of_sub_image_view() {
        let mut image = RgbImage::from_pixel(4, 4, Rgb([255, 0, 0]));
        for y in 0..4 {
            for x in 2..4 {
                image.put_pixel(x, y, Rgb([0, 0, 255]));
            }
        }

        let right = image.view(2, 0, 2, 4);
        let left = image.view(0, 0, 2, 2);

        assert_eq!(average_color(&*right).unwrap(), Rgb([0, 0, 255]));
        assert_eq!(average_color(&*left).unwrap(), Rgb([255, 0, 0]));
    }

    // Tests degenerate images are rejected
    // Verified by removing the zero dimension check
    #[test]
    fn test_zero_sized_image_is_invalid() {
        let image = RgbImage::new(0, 5);

        let result = average_color(&image);
        assert!(matches!(result, Err(MosaicError::InvalidImage { .. })));
    }
}
