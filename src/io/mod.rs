/// Command-line interface and report formatting
pub mod cli;
/// Puzzle constants and runtime defaults
pub mod configuration;
/// Error types and line context
pub mod error;
/// PNG export of rendered layouts
pub mod image;
/// Console logger setup
pub mod logging;
/// Progress display for running searches
pub mod progress;
/// Puzzle text format and bundled puzzle
pub mod puzzle;
/// Text rendering of arrangements
pub mod render;
