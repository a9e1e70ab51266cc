// logslice - app/runner.rs
//
// I/O orchestration for one extraction: open and map the log file, locate
// the date run, and copy it to the output file. All file handles and the
// mapping are scoped to the call and released on every exit path, including
// the not-found early return.

use crate::core::extract::emit_run;
use crate::core::locator::DateRangeLocator;
use crate::core::model::{DateKey, ExtractSummary};
use crate::util::constants;
use crate::util::error::{LogSliceError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Outcome of a completed extraction.
///
/// "Not found" is a normal result with a diagnostic message, not an error:
/// no output file is created for it.
#[derive(Debug)]
pub enum ExtractOutcome {
    /// Matching lines were written to the file at `path`.
    Written {
        path: PathBuf,
        summary: ExtractSummary,
    },

    /// No line in the log carries the target date.
    NotFound,
}

/// Deterministic output path for a target date: `<dir>/output_<date>.txt`.
pub fn output_path(output_dir: &Path, target: &DateKey) -> PathBuf {
    output_dir.join(format!(
        "{}{}.{}",
        constants::OUTPUT_FILE_PREFIX,
        target,
        constants::OUTPUT_FILE_EXT
    ))
}

/// Run a single extraction of `target` from `log_path` into `output_dir`.
///
/// The log file is opened read-only and memory-mapped for the duration of
/// the call. On a hit, the output directory is created if absent and the
/// output file is created fresh (truncating any previous run, which keeps
/// repeated extractions byte-identical).
pub fn run_extraction(
    log_path: &Path,
    output_dir: &Path,
    target: &DateKey,
    max_line_len: usize,
) -> Result<ExtractOutcome> {
    let file = File::open(log_path).map_err(|e| LogSliceError::Io {
        path: log_path.to_path_buf(),
        operation: "open log file",
        source: e,
    })?;

    let len = file
        .metadata()
        .map_err(|e| LogSliceError::Io {
            path: log_path.to_path_buf(),
            operation: "stat log file",
            source: e,
        })?
        .len();

    tracing::info!(
        file = %log_path.display(),
        size = len,
        date = %target,
        "Extraction started"
    );

    // Mapping a zero-length file is an error on some platforms; an empty
    // log trivially has no matching lines.
    if len == 0 {
        return Ok(ExtractOutcome::NotFound);
    }

    // SAFETY: the file is opened read-only and the map is never mutated.
    // We accept the documented risk that external modification of the file
    // during the map's lifetime could produce undefined behaviour, which is
    // acceptable for a tool reading already-written, rotated log files.
    let mmap = unsafe { memmap2::Mmap::map(&file) }.map_err(|e| LogSliceError::Io {
        path: log_path.to_path_buf(),
        operation: "memory-map log file",
        source: e,
    })?;

    let locator = DateRangeLocator::new(&mmap, max_line_len);
    let Some(offset) = locator.find_first_offset(target)? else {
        tracing::info!(date = %target, "No matching lines");
        return Ok(ExtractOutcome::NotFound);
    };

    tracing::debug!(offset, "Run located; writing output");

    std::fs::create_dir_all(output_dir).map_err(|e| LogSliceError::Io {
        path: output_dir.to_path_buf(),
        operation: "create output directory",
        source: e,
    })?;

    let out_path = output_path(output_dir, target);
    let out_file = File::create(&out_path).map_err(|e| LogSliceError::Io {
        path: out_path.clone(),
        operation: "create output file",
        source: e,
    })?;
    let mut writer = BufWriter::new(out_file);

    let summary = emit_run(&mmap, offset, target, &mut writer, &out_path)?;

    writer.flush().map_err(|e| LogSliceError::Io {
        path: out_path.clone(),
        operation: "flush output file",
        source: e,
    })?;

    tracing::info!(
        output = %out_path.display(),
        lines = summary.lines_written,
        bytes = summary.bytes_written,
        "Extraction complete"
    );

    Ok(ExtractOutcome::Written {
        path: out_path,
        summary,
    })
}
