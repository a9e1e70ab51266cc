// logslice - core/extract.rs
//
// Forward emission of a located date run.
// Core layer: writes to any Write trait object; the app layer owns the
// output file and the mapped input.

use crate::core::model::{date_prefix, DateKey, ExtractSummary};
use crate::util::constants::MAX_DECODE_WARNINGS;
use crate::util::error::ExtractError;
use std::io::Write;
use std::path::Path;

/// Emit every line of the run starting at `start` whose date prefix equals
/// `target`, newline-terminated and otherwise verbatim, in original order.
///
/// `start` must be the line-start offset returned by the locator. Emission
/// walks forward sequentially and stops at the first line whose prefix
/// differs from the target, or at end of data. Blank (whitespace-only)
/// lines inside the run are skipped, not treated as a stop condition.
/// Matching lines that fail UTF-8 validation are skipped with a rate-capped
/// warning rather than aborting the extraction.
///
/// `output_path` is used only for error context.
pub fn emit_run<W: Write>(
    data: &[u8],
    start: usize,
    target: &DateKey,
    mut writer: W,
    output_path: &Path,
) -> Result<ExtractSummary, ExtractError> {
    let mut summary = ExtractSummary::default();
    let mut pos = start;

    while pos < data.len() {
        let rest = &data[pos..];
        let line = match rest.iter().position(|&b| b == b'\n') {
            Some(end) => &rest[..end],
            None => rest,
        };
        pos += line.len() + 1;

        if line.iter().all(u8::is_ascii_whitespace) {
            summary.skipped_blank += 1;
            continue;
        }

        match date_prefix(line) {
            Some(prefix) if prefix == target.as_bytes() => {}
            // A differing or absent date prefix ends the run.
            _ => break,
        }

        if std::str::from_utf8(line).is_err() {
            summary.skipped_undecodable += 1;
            if summary.skipped_undecodable <= MAX_DECODE_WARNINGS {
                tracing::warn!(
                    offset = pos - line.len() - 1,
                    "Skipping line with invalid UTF-8 in matched run"
                );
            }
            continue;
        }

        writer
            .write_all(line)
            .and_then(|_| writer.write_all(b"\n"))
            .map_err(|e| ExtractError::Io {
                path: output_path.to_path_buf(),
                source: e,
            })?;
        summary.lines_written += 1;
        summary.bytes_written += line.len() as u64 + 1;
    }

    tracing::debug!(
        start,
        lines = summary.lines_written,
        bytes = summary.bytes_written,
        skipped_blank = summary.skipped_blank,
        skipped_undecodable = summary.skipped_undecodable,
        "Emission complete"
    );

    Ok(summary)
}
