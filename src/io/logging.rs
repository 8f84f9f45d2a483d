//! Terminal logger setup for the command-line tool

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Log level for the given verbosity flags; `quiet` wins over `verbose`
pub const fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the terminal logger
///
/// Returns false if a logger was already installed, which leaves the
/// existing one in place.
pub fn init_logging(level: LevelFilter) -> bool {
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_ok()
}
