//! Puzzle constants and runtime configuration defaults

use log::LevelFilter;

// Layout alphabet
/// Place labels in slot order
pub const PLACE_LABELS: &str = "ABCDEF";
/// Maximum number of tiles a layout can hold
pub const MAX_PLACES: usize = 6;

// Pixel symbols
/// Border symbol that never clashes
pub const WILDCARD_PIXEL: char = ' ';
/// Symbol drawn inside tile blocks when rendering
pub const INTERIOR_FILLER: char = 'O';

// Search progress reporting
/// Candidates scored between progress events
pub const PROGRESS_REPORT_INTERVAL: u64 = 1024;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Image export settings
/// Default side length in pixels of one rendered character cell
pub const DEFAULT_CELL_SIZE: u32 = 8;
/// Largest accepted cell size
pub const MAX_CELL_SIZE: u32 = 64;
/// Colour of marked border pixels
pub const MARK_COLOR: [u8; 4] = [32, 32, 32, 255];
/// Colour of blank border pixels
pub const BLANK_COLOR: [u8; 4] = [236, 236, 236, 255];
/// Colour of tile interiors
pub const FILLER_COLOR: [u8; 4] = [160, 160, 160, 255];

// Logging
/// Log level used when none is requested
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;
/// Pattern for console log lines
pub const LOG_PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l})} {t} - {m}{n}";
