//! Error types and context management for puzzle loading and solving

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum TileFitError {
    /// Puzzle text or a rule token could not be understood
    MalformedInput {
        /// 1-based input line, when known
        line: Option<usize>,
        /// Offending token or line content
        token: String,
        /// Explanation of what was expected
        reason: String,
    },

    /// Tiles or edges of different sizes were combined
    DimensionMismatch {
        /// What was being compared
        context: &'static str,
        /// Size established first
        expected: usize,
        /// Conflicting size
        found: usize,
    },

    /// Search or rendering parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered layout image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Logger could not be installed
    Logging {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for TileFitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput {
                line: Some(line),
                token,
                reason,
            } => {
                write!(f, "Malformed input at line {line} near '{token}': {reason}")
            }
            Self::MalformedInput {
                line: None,
                token,
                reason,
            } => {
                write!(f, "Malformed input near '{token}': {reason}")
            }
            Self::DimensionMismatch {
                context,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Dimension mismatch in {context}: expected {expected}, found {found}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Logging { reason } => {
                write!(f, "Failed to initialise logging: {reason}")
            }
        }
    }
}

impl std::error::Error for TileFitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, TileFitError>;

/// Attaches input line numbers to errors raised below the parser
pub trait WithLine<T> {
    /// Record `line` on a malformed-input error that has none yet
    ///
    /// # Errors
    ///
    /// Propagates the error with the line applied
    fn at_line(self, line: usize) -> Result<T>;
}

impl<T> WithLine<T> for Result<T> {
    fn at_line(self, line: usize) -> Result<T> {
        self.map_err(|mut error| {
            if let TileFitError::MalformedInput {
                line: slot @ None, ..
            } = &mut error
            {
                *slot = Some(line);
            }
            error
        })
    }
}

impl From<std::io::Error> for TileFitError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a malformed-input error without a line number
pub fn malformed(token: &str, reason: impl Into<String>) -> TileFitError {
    TileFitError::MalformedInput {
        line: None,
        token: token.to_string(),
        reason: reason.into(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TileFitError {
    TileFitError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
