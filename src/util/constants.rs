// logslice - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "logslice";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "logslice";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Date key
// =============================================================================

/// Length in bytes of the `YYYY-MM-DD` date prefix at the start of each line.
pub const DATE_KEY_LEN: usize = 10;

/// chrono format string used to validate target dates.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Alignment limits
// =============================================================================

/// Default upper bound on the length of a single log line in bytes.
///
/// This doubles as the alignment margin: when converting an arbitrary byte
/// offset into a line boundary, at most this many bytes are scanned backward
/// for a terminator. Lines longer than the bound are reported, not silently
/// misaligned, so the value must exceed the longest line in the input.
pub const DEFAULT_MAX_LINE_LEN: usize = 4 * 1024; // 4 KB

/// Minimum user-configurable line-length bound. Must leave room for the
/// date prefix plus a terminator.
pub const MIN_MAX_LINE_LEN: usize = DATE_KEY_LEN + 2;

/// Hard upper bound on the line-length bound (prevents configuration
/// mistakes from turning every probe into a near-full-file scan).
pub const ABSOLUTE_MAX_LINE_LEN: usize = 16 * 1024 * 1024; // 16 MB

// =============================================================================
// Extraction defaults
// =============================================================================

/// Default log file searched when `--log-file` is not given.
pub const DEFAULT_LOG_FILE: &str = "test_logs.log";

/// Default directory for extracted output files.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Output file name prefix; the full name is `output_<date>.txt`.
pub const OUTPUT_FILE_PREFIX: &str = "output_";

/// Output file name extension.
pub const OUTPUT_FILE_EXT: &str = "txt";

/// Maximum number of per-line decode warnings logged during the emission
/// phase. Further undecodable lines are still counted and skipped, but not
/// individually logged, so a corrupt region cannot flood the log output.
pub const MAX_DECODE_WARNINGS: u64 = 100;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
