//! Command-line interface tying file I/O, progress and the composition core together

use crate::algorithm::MosaicComposer;
use crate::io::configuration::{DEFAULT_SCALE, DEFAULT_TILE_DIRECTORY, MosaicConfig, OUTPUT_SUFFIX};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{is_readable_image, load_rgb_image, save_mosaic};
use crate::io::progress::ProgressReporter;
use crate::io::prompt::{PromptedSettings, Prompter};
use crate::io::sources::{SourceOrdering, collect_tile_sources};
use crate::library::{TileLibrary, TileLibraryBuilder};
use crate::spatial::MosaicGrid;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "photomosaic")]
#[command(
    author,
    version,
    about = "Rebuild an image from a library of tiles matched by average color"
)]
/// Command-line arguments for the mosaic tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Source image; prompts interactively when omitted
    #[arg(value_name = "SOURCE")]
    pub source: Option<PathBuf>,

    /// Directory holding the tile images
    #[arg(short, long, default_value = DEFAULT_TILE_DIRECTORY)]
    pub tiles: PathBuf,

    /// Pixels per tile edge in the source image
    #[arg(short = 's', long)]
    pub tile_size: Option<u32>,

    /// Whole-number magnification of the output
    #[arg(short = 'x', long, default_value_t = DEFAULT_SCALE)]
    pub scale: u32,

    /// Output image path (defaults to <source>_mosaic.<ext>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Random seed for reproducible tie-breaking
    #[arg(long)]
    pub seed: Option<u64>,

    /// Order in which tile files enter the library
    #[arg(long, value_enum, default_value_t = SourceOrdering::FileName)]
    pub order: SourceOrdering,

    /// Skip tile files that fail to decode instead of aborting
    #[arg(long)]
    pub skip_invalid: bool,

    /// Compose rows on all available cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Ask for every setting interactively
    #[arg(short, long)]
    pub interactive: bool,

    /// Overwrite the output even if it exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log every prepared tile
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Whether settings must be gathered by prompting
    pub const fn needs_prompt(&self) -> bool {
        self.interactive || self.source.is_none()
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Source image path
    pub source: PathBuf,
    /// Output image path
    pub output: PathBuf,
    /// Validated tile size and scale
    pub config: MosaicConfig,
    /// Replace the output if it already exists
    pub overwrite: bool,
}

impl RunSettings {
    /// Resolve settings from command-line arguments alone
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the source or tile size is missing,
    /// or if tile size and scale are invalid
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let source = cli.source.clone().ok_or_else(|| {
            invalid_parameter("source", &"<none>", &"a source image is required")
        })?;
        let tile_size = cli.tile_size.ok_or_else(|| {
            invalid_parameter("tile_size", &"<none>", &"--tile-size is required")
        })?;
        let config = MosaicConfig::new(tile_size, cli.scale)?;
        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| MosaicRunner::get_output_path(&source));
        Ok(Self {
            source,
            output,
            config,
            overwrite: !cli.skip_existing(),
        })
    }

    /// Resolve settings from an interactive session
    ///
    /// A confirmed output name is always written, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the entered values overflow the canvas limit
    pub fn from_prompt(settings: PromptedSettings) -> Result<Self> {
        Ok(Self {
            config: MosaicConfig::new(settings.tile_size, settings.scale)?,
            source: settings.source,
            output: settings.output,
            overwrite: true,
        })
    }
}

/// Orchestrates one mosaic run with progress tracking
pub struct MosaicRunner {
    cli: Cli,
    progress: ProgressReporter,
}

impl MosaicRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = ProgressReporter::new(cli.should_show_progress());
        Self { cli, progress }
    }

    /// Resolve settings and build the mosaic, prompting on stdin when needed
    ///
    /// # Errors
    ///
    /// Returns an error if settings, decoding, composition or saving fail
    pub fn process(&mut self) -> Result<()> {
        let settings = if self.cli.needs_prompt() {
            let stdin = std::io::stdin();
            self.prompt_settings(stdin.lock(), std::io::stdout())?
        } else {
            RunSettings::from_cli(&self.cli)?
        };
        self.run(&settings)
    }

    /// Gather settings through a prompt session on the given streams
    ///
    /// # Errors
    ///
    /// Returns an error if input ends early or the values are invalid
    pub fn prompt_settings<R: BufRead, W: Write>(
        &self,
        input: R,
        output: W,
    ) -> Result<RunSettings> {
        let mut prompter = Prompter::new(input, output);
        let prompted = prompter.collect_settings(is_readable_image)?;
        RunSettings::from_prompt(prompted)
    }

    /// Build the library, compose and save for resolved settings
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source or a tile cannot be decoded (tiles may be skipped with `--skip-invalid`)
    /// - The tile directory holds no usable images
    /// - The source is smaller than one tile
    /// - The output cannot be written
    pub fn run(&mut self, settings: &RunSettings) -> Result<()> {
        if !settings.overwrite && settings.output.exists() {
            log::warn!(
                "Skipping: {} (output exists, use --no-skip to overwrite)",
                settings.output.display()
            );
            return Ok(());
        }

        let start_time = Instant::now();
        let source = load_rgb_image(&settings.source)?;

        // Fail on an undersized source before spending time on the library
        MosaicGrid::new(source.width(), source.height(), &settings.config)?;

        let library = self.build_library(&settings.config)?;
        let composer = MosaicComposer::new(&library, settings.config)?;
        let grid = composer.grid(&source)?;

        self.progress.start_composition(grid.rows());
        let canvas = if self.cli.parallel {
            let seed = self.cli.seed.unwrap_or_else(rand::random);
            let bar = self.progress.handle();
            composer.compose_parallel_with_progress(&source, seed, |_| bar.inc(1))?
        } else {
            let mut rng = self
                .cli
                .seed
                .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
            let progress = &self.progress;
            composer.compose_with_progress(&source, &mut rng, |_| progress.row_completed())?
        };
        self.progress.finish();

        save_mosaic(&canvas, &settings.output)?;
        log::info!(
            "Finished {} in {:.2?}",
            settings.output.display(),
            start_time.elapsed()
        );
        Ok(())
    }

    fn build_library(&mut self, config: &MosaicConfig) -> Result<TileLibrary> {
        let files = collect_tile_sources(&self.cli.tiles, self.cli.order)?;
        log::info!(
            "Processing {} tile images from {}",
            files.len(),
            self.cli.tiles.display()
        );

        self.progress.start_library(files.len());
        let mut builder = TileLibraryBuilder::new(*config);
        for file in &files {
            match load_rgb_image(file) {
                Ok(image) => {
                    builder.push_image(&image)?;
                    log::debug!("Processed {}", file.display());
                }
                Err(err) if self.cli.skip_invalid => {
                    log::warn!("Skipping tile {}: {err}", file.display());
                }
                Err(err) => return Err(err),
            }
            self.progress.tile_processed(file);
        }
        self.progress.finish();

        builder.build()
    }

    /// Default output path next to the source: `<stem>_mosaic.<ext>`
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path
            .extension()
            .filter(|ext| !ext.is_empty())
            .map_or_else(|| "png".into(), |ext| ext.to_string_lossy());
        let output_name = format!("{}{}.{}", stem.to_string_lossy(), OUTPUT_SUFFIX, extension);

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
