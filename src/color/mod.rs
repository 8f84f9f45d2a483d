//! Color reduction and comparison primitives

/// Area-average reduction of an image or region to one color
pub mod average;
/// Euclidean distance between colors in RGB space
pub mod distance;

pub use average::average_color;
pub use distance::{color_distance, squared_distance};
