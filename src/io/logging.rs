//! Console logging through log4rs

use crate::io::configuration::LOG_PATTERN;
use crate::io::error::{Result, TileFitError};
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

const APPENDER_NAME: &str = "stderr";

/// Logger configuration writing records at `level` and above to stderr
///
/// # Errors
///
/// Returns `Logging` if log4rs rejects the configuration.
pub fn build_config(level: LevelFilter) -> Result<Config> {
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build(APPENDER_NAME, Box::new(console)))
        .build(Root::builder().appender(APPENDER_NAME).build(level))
        .map_err(|errors| TileFitError::Logging {
            reason: errors.to_string(),
        })
}

/// Install the console logger for the whole process
///
/// # Errors
///
/// Returns `Logging` if the configuration is rejected or a logger is already
/// installed.
pub fn init_logging(level: LevelFilter) -> Result<()> {
    let config = build_config(level)?;
    log4rs::init_config(config)
        .map(|_handle| ())
        .map_err(|error| TileFitError::Logging {
            reason: error.to_string(),
        })
}
