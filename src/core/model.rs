// logslice - core/model.rs
//
// Core data types: the validated date key and the extraction summary.
// Core layer: pure logic, no I/O dependencies.

use crate::util::constants::{DATE_KEY_FORMAT, DATE_KEY_LEN};
use crate::util::error::DateError;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// A validated 10-character `YYYY-MM-DD` date string.
///
/// Date keys are totally ordered by byte comparison, which coincides with
/// chronological order for this format. The log file is assumed to be
/// globally sorted by this key; that assumption is what makes binary search
/// over byte offsets valid, and it is not independently verified.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateKey(String);

impl DateKey {
    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key as raw bytes, for comparison against line prefixes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl FromStr for DateKey {
    type Err = DateError;

    /// Validate a target date string.
    ///
    /// Accepts exactly the canonical zero-padded form: the input must be 10
    /// bytes long, parse as a real calendar date, and round-trip to the
    /// identical string. Unpadded inputs like `2023-1-2` are rejected even
    /// though chrono would parse them, because they can never match a
    /// 10-character line prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != DATE_KEY_LEN {
            return Err(DateError::InvalidFormat {
                input: s.to_string(),
            });
        }
        let date = NaiveDate::parse_from_str(s, DATE_KEY_FORMAT).map_err(|e| {
            DateError::NotACalendarDate {
                input: s.to_string(),
                source: e,
            }
        })?;
        if date.format(DATE_KEY_FORMAT).to_string() != s {
            return Err(DateError::InvalidFormat {
                input: s.to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the 10-byte date prefix from a line, if it has one.
///
/// Returns `None` for lines too short to carry a prefix (including empty
/// lines) and for prefixes containing non-ASCII bytes. Callers treat `None`
/// as "no date", never as a fatal parse error.
pub fn date_prefix(line: &[u8]) -> Option<&[u8]> {
    let prefix = line.get(..DATE_KEY_LEN)?;
    if !prefix.is_ascii() {
        return None;
    }
    Some(prefix)
}

/// Counters produced by the forward emission phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Matching lines written to the output.
    pub lines_written: u64,

    /// Bytes written, including the terminating newline per line.
    pub bytes_written: u64,

    /// Blank (whitespace-only) lines skipped within the run.
    pub skipped_blank: u64,

    /// Lines with a matching prefix that failed UTF-8 validation and were
    /// skipped rather than aborting the extraction.
    pub skipped_undecodable: u64,
}
