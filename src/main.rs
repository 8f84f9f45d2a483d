//! CLI entry point for the photomosaic generator

use clap::Parser;
use photomosaic::io::cli::{Cli, MosaicRunner};
use photomosaic::io::logging::{init_logging, level_for};

fn main() -> photomosaic::Result<()> {
    let cli = Cli::parse();
    init_logging(level_for(cli.quiet, cli.verbose));
    let mut runner = MosaicRunner::new(cli);
    runner.process()
}
