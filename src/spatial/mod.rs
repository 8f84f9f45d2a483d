//! Spatial normalization of images and the composition grid
//!
//! This module contains spatial-related functionality including:
//! - Centered square cropping of tile sources
//! - Grid cell layout and canvas sizing

/// Centered square crop
pub mod crop;
/// Grid cell layout over the source image
pub mod grid;

pub use crop::{SquareBounds, square_bounds, square_crop};
pub use grid::{GridCell, MosaicGrid};
