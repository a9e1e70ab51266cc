// logslice - core/aligner.rs
//
// Line boundary alignment over a raw byte view of a log file.
// Core layer: pure logic over `&[u8]`, no I/O dependencies.
//
// Offsets produced by binary search land anywhere inside a line, so they
// cannot be used directly: the aligner converts an arbitrary offset into the
// start of the line containing it by scanning backward for the preceding
// terminator. The scan window is bounded by a configurable maximum line
// length; a line longer than the bound is reported to the caller instead of
// being silently misaligned.

use crate::util::error::LocateError;

/// Converts arbitrary byte offsets into line boundaries.
///
/// `max_line_len` is the alignment margin: the upper bound on how far a
/// backward scan may travel before giving up. It must exceed the longest
/// line in the input for alignment to succeed everywhere.
#[derive(Debug, Clone, Copy)]
pub struct LineAligner {
    max_line_len: usize,
}

impl LineAligner {
    pub fn new(max_line_len: usize) -> Self {
        Self { max_line_len }
    }

    /// Start offset of the line containing `offset`.
    ///
    /// A terminator byte belongs to the line it ends, so an offset landing
    /// exactly on `\n` aligns to the start of that terminated line. Offset 0
    /// is always a line start. Returns `None` when no terminator is found
    /// within `max_line_len` bytes before `offset` and the scan did not reach
    /// the start of the data (an overlong line; callers treat this as an
    /// unparsable probe).
    pub fn line_start(&self, data: &[u8], offset: usize) -> Option<usize> {
        debug_assert!(offset < data.len());
        let window_start = offset.saturating_sub(self.max_line_len);
        match data[window_start..offset]
            .iter()
            .rposition(|&b| b == b'\n')
        {
            Some(i) => Some(window_start + i + 1),
            None if window_start == 0 => Some(0),
            None => None,
        }
    }

    /// The line beginning at `start`, excluding its terminator.
    ///
    /// Runs to the next `\n` or to end of data for a final unterminated
    /// line. An empty slice (offset on a terminator, or at end of data)
    /// means "no date", not a parse error.
    pub fn line_at<'a>(&self, data: &'a [u8], start: usize) -> &'a [u8] {
        let rest = &data[start..];
        match rest.iter().position(|&b| b == b'\n') {
            Some(end) => &rest[..end],
            None => rest,
        }
    }

    /// Start offset of the line immediately preceding the line at `start`.
    ///
    /// `start` must itself be a line start. Returns `Ok(None)` when `start`
    /// is the beginning of the data (no preceding line), and
    /// `Err(LineTooLong)` when the preceding line exceeds `max_line_len`,
    /// since walking past it would require crossing an unbounded gap.
    pub fn prev_line_start(
        &self,
        data: &[u8],
        start: usize,
    ) -> Result<Option<usize>, LocateError> {
        if start == 0 {
            return Ok(None);
        }
        // The byte before a line start is the previous line's terminator.
        debug_assert_eq!(data[start - 1], b'\n');
        match self.line_start(data, start - 1) {
            Some(prev) => Ok(Some(prev)),
            None => Err(LocateError::LineTooLong {
                offset: start - 1,
                max_line_len: self.max_line_len,
            }),
        }
    }
}
