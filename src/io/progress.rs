//! Progress display for the tile preparation and composition phases

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;

/// Drives one progress bar per phase
///
/// A hidden reporter keeps every call cheap so callers never branch on `--quiet`.
pub struct ProgressReporter {
    bar: ProgressBar,
    visible: bool,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ProgressReporter {
    /// Create a reporter drawing to stderr, or a hidden one
    pub fn new(visible: bool) -> Self {
        Self {
            bar: ProgressBar::hidden(),
            visible,
        }
    }

    /// Begin the tile preparation phase
    pub fn start_library(&mut self, file_count: usize) {
        self.start_phase("Tiles", file_count as u64);
    }

    /// Report a prepared tile source
    pub fn tile_processed(&self, path: &Path) {
        self.bar
            .set_message(path.file_name().unwrap_or_default().to_string_lossy().to_string());
        self.bar.inc(1);
    }

    /// Begin the composition phase
    pub fn start_composition(&mut self, rows: u32) {
        self.start_phase("Mosaic", u64::from(rows));
    }

    /// Report a finished row of the canvas
    pub fn row_completed(&self) {
        self.bar.inc(1);
    }

    /// Position within the current phase
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Length of the current phase
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Close the current phase
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Shared handle for reporting from worker threads
    pub fn handle(&self) -> ProgressBar {
        self.bar.clone()
    }

    fn start_phase(&mut self, prefix: &'static str, length: u64) {
        self.bar.finish_and_clear();

        let bar = ProgressBar::with_draw_target(Some(length), self.draw_target());
        bar.set_style(Self::style());
        bar.set_prefix(prefix);
        self.bar = bar;
    }

    fn draw_target(&self) -> ProgressDrawTarget {
        if self.visible {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        }
    }

    fn style() -> ProgressStyle {
        let template = format!(
            "{{prefix:>6}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        );
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ")
    }
}
