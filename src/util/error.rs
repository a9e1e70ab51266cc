// logslice - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors keep the causal chain
// for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all logslice operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogSliceError {
    /// Target date validation failed.
    Date(DateError),

    /// Locating the date run in the log file failed.
    Locate(LocateError),

    /// Writing the extracted lines failed.
    Extract(ExtractError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for LogSliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(e) => write!(f, "{e}"),
            Self::Locate(e) => write!(f, "Locate error: {e}"),
            Self::Extract(e) => write!(f, "Extract error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LogSliceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Date(e) => Some(e),
            Self::Locate(e) => Some(e),
            Self::Extract(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Date errors
// ---------------------------------------------------------------------------

/// Errors raised while validating the target date string.
/// All variants are raised before any file access occurs.
#[derive(Debug)]
pub enum DateError {
    /// The string does not have the `YYYY-MM-DD` shape.
    InvalidFormat { input: String },

    /// The string has the right shape but is not a calendar-valid date.
    NotACalendarDate {
        input: String,
        source: chrono::ParseError,
    },
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { input } => {
                write!(f, "Incorrect date format '{input}': expected YYYY-MM-DD")
            }
            Self::NotACalendarDate { input, source } => {
                write!(
                    f,
                    "Incorrect date format '{input}': not a calendar date ({source})"
                )
            }
        }
    }
}

impl std::error::Error for DateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotACalendarDate { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<DateError> for LogSliceError {
    fn from(e: DateError) -> Self {
        Self::Date(e)
    }
}

// ---------------------------------------------------------------------------
// Locate errors
// ---------------------------------------------------------------------------

/// Errors raised while locating the first line of a date run.
#[derive(Debug)]
pub enum LocateError {
    /// A line near the given offset exceeds the configured line-length
    /// bound, so its boundary could not be established.
    LineTooLong { offset: usize, max_line_len: usize },
}

impl fmt::Display for LocateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LineTooLong {
                offset,
                max_line_len,
            } => write!(
                f,
                "Line near byte offset {offset} exceeds the configured maximum \
                 line length of {max_line_len} bytes. \
                 Raise --max-line-len (or [extraction] max_line_len in config.toml)."
            ),
        }
    }
}

impl std::error::Error for LocateError {}

impl From<LocateError> for LogSliceError {
    fn from(e: LocateError) -> Self {
        Self::Locate(e)
    }
}

// ---------------------------------------------------------------------------
// Extract errors
// ---------------------------------------------------------------------------

/// Errors raised while writing extracted lines to the output file.
#[derive(Debug)]
pub enum ExtractError {
    /// I/O error writing the output file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Output I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ExtractError> for LogSliceError {
    fn from(e: ExtractError) -> Self {
        Self::Extract(e)
    }
}

/// Convenience type alias for logslice results.
pub type Result<T> = std::result::Result<T, LogSliceError>;
