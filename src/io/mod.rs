//! Input/output adapters around the composition core

/// Command-line parsing and run orchestration
pub mod cli;
/// Configuration constants and validated run parameters
pub mod configuration;
/// Error types shared by the whole crate
pub mod error;
/// Image decoding and mosaic export
pub mod image;
/// Terminal logger setup
pub mod logging;
/// Progress bars for long-running phases
pub mod progress;
/// Interactive settings prompt
pub mod prompt;
/// Tile source enumeration and ordering
pub mod sources;
