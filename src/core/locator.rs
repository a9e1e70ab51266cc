// logslice - core/locator.rs
//
// Binary search for the first line of a date run in a sorted log.
// Core layer: pure logic over `&[u8]`, no I/O dependencies.
//
// The search operates on byte offsets because line lengths vary, so line
// positions cannot be computed arithmetically. Each probe is aligned to the
// line containing it before its date prefix is compared. Correctness depends
// on the file being globally sorted by date prefix; unsorted input produces
// a wrong or empty answer, never a panic.

use crate::core::aligner::LineAligner;
use crate::core::model::{date_prefix, DateKey};
use crate::util::error::LocateError;
use std::cmp::Ordering;

/// Locates the first byte offset of the first line carrying a target date.
#[derive(Debug)]
pub struct DateRangeLocator<'a> {
    data: &'a [u8],
    aligner: LineAligner,
}

impl<'a> DateRangeLocator<'a> {
    pub fn new(data: &'a [u8], max_line_len: usize) -> Self {
        Self {
            data,
            aligner: LineAligner::new(max_line_len),
        }
    }

    /// Byte offset of the first line whose date prefix equals `target`, or
    /// `Ok(None)` when no line carries the target date.
    ///
    /// Binary search over the half-open byte interval `[left, right)`, which
    /// narrows monotonically. A probe that cannot be parsed -- an empty or
    /// too-short line, a non-text prefix, or a line exceeding the alignment
    /// window -- biases the search toward earlier offsets, matching the
    /// behaviour of treating malformed regions as "past the data of
    /// interest". On a prefix match the probe switches to a backward linear
    /// scan to find the start of the run, O(run length) in the worst case.
    pub fn find_first_offset(&self, target: &DateKey) -> Result<Option<usize>, LocateError> {
        let mut left = 0usize;
        let mut right = self.data.len();

        while left < right {
            let mid = left + (right - left) / 2;

            let Some(start) = self.aligner.line_start(self.data, mid) else {
                // Overlong line at the probe: bias toward earlier offsets.
                tracing::debug!(mid, "Probe alignment failed; biasing toward earlier offsets");
                right = mid;
                continue;
            };

            let line = self.aligner.line_at(self.data, start);
            let Some(prefix) = date_prefix(line) else {
                // Empty or dateless line: bias toward earlier offsets.
                right = mid;
                continue;
            };

            match prefix.cmp(target.as_bytes()) {
                Ordering::Equal => {
                    tracing::debug!(mid, line_start = start, "Probe hit target date");
                    return self.run_start(start, target).map(Some);
                }
                Ordering::Less => left = mid + 1,
                Ordering::Greater => right = mid,
            }
        }

        Ok(None)
    }

    /// Walk backward line-by-line from a known matching line to the first
    /// line of the run.
    ///
    /// The backward scan stops at the first preceding line whose prefix
    /// differs from the target (a blank line has no prefix and also stops
    /// the scan) or at the start of the data. Whatever interior offset the
    /// binary search landed on, the scan converges to the run's first byte.
    fn run_start(&self, matched: usize, target: &DateKey) -> Result<usize, LocateError> {
        let mut cur = matched;

        while let Some(prev) = self.aligner.prev_line_start(self.data, cur)? {
            let line = self.aligner.line_at(self.data, prev);
            match date_prefix(line) {
                Some(prefix) if prefix == target.as_bytes() => cur = prev,
                _ => break,
            }
        }

        tracing::debug!(matched, run_start = cur, "Backward scan converged");
        Ok(cur)
    }
}
