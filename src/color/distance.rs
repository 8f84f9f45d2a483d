//! Flat RGB color distance

use image::Rgb;

/// Squared Euclidean distance between two colors
///
/// Orders colors identically to [`color_distance`] while staying exact,
/// so zero means an identical color.
pub fn squared_distance(a: Rgb<u8>, b: Rgb<u8>) -> u32 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(&x, &y)| {
            let delta = u32::from(x.abs_diff(y));
            delta * delta
        })
        .sum()
}

/// Euclidean distance between two colors treated as points in RGB space
pub fn color_distance(a: Rgb<u8>, b: Rgb<u8>) -> f64 {
    f64::from(squared_distance(a, b)).sqrt()
}
