//! Enumeration of tile source files in a stable, explicit order

use crate::io::error::{MosaicError, Result};
use image::ImageFormat;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Sort key applied to tile source files before the library is built
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SourceOrdering {
    /// File name, falling back to the full path for equal names
    #[default]
    FileName,
    /// Full path
    Path,
}

impl SourceOrdering {
    /// Compare two paths under this ordering
    pub fn compare(self, a: &Path, b: &Path) -> Ordering {
        match self {
            Self::FileName => a.file_name().cmp(&b.file_name()).then_with(|| a.cmp(b)),
            Self::Path => a.cmp(b),
        }
    }

    /// Sort paths in place under this ordering
    pub fn sort(self, paths: &mut [PathBuf]) {
        paths.sort_by(|a, b| self.compare(a, b));
    }
}

/// Whether a path carries an extension of a known image format
pub fn has_image_extension(path: &Path) -> bool {
    ImageFormat::from_path(path).is_ok()
}

/// List image files directly inside `directory` in the requested order
///
/// Subdirectories and files without an image extension are ignored.
///
/// # Errors
///
/// Returns a file system error if the directory cannot be read
pub fn collect_tile_sources(directory: &Path, ordering: SourceOrdering) -> Result<Vec<PathBuf>> {
    let read_error = |source| MosaicError::FileSystem {
        path: directory.to_path_buf(),
        operation: "read directory",
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && has_image_extension(&path) {
            files.push(path);
        }
    }

    ordering.sort(&mut files);
    log::debug!(
        "Found {} tile sources in {}",
        files.len(),
        directory.display()
    );
    Ok(files)
}
