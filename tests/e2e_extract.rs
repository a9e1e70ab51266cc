// logslice - tests/e2e_extract.rs
//
// End-to-end tests for the extraction pipeline.
//
// These tests exercise the real filesystem, real memory mapping, and real
// output-file creation -- no mocks, no stubs. This covers the full path
// from a raw log file on disk to the extracted per-date output file.

use logslice::app::runner::{output_path, run_extraction, ExtractOutcome};
use logslice::core::model::DateKey;
use logslice::util::constants::DEFAULT_MAX_LINE_LEN;
use std::fs;
use std::path::{Path, PathBuf};

// =============================================================================
// Helpers
// =============================================================================

fn date(s: &str) -> DateKey {
    s.parse().unwrap()
}

fn write_log(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("app.log");
    fs::write(&path, content).unwrap();
    path
}

/// Run an extraction with the default line-length bound and return the
/// outcome plus the output directory used.
fn extract(log: &Path, out_dir: &Path, target: &str) -> ExtractOutcome {
    run_extraction(log, out_dir, &date(target), DEFAULT_MAX_LINE_LEN).unwrap()
}

fn read_output(out_dir: &Path, target: &str) -> String {
    fs::read_to_string(output_path(out_dir, &date(target))).unwrap()
}

/// Reference extraction: every line starting with the date, in file order.
fn naive_filter(content: &str, target: &str) -> String {
    content
        .lines()
        .filter(|l| l.starts_with(target))
        .map(|l| format!("{l}\n"))
        .collect()
}

// =============================================================================
// Concrete scenario
// =============================================================================

const FOUR_LINES: &str = "2023-01-01 A\n2023-01-01 B\n2023-01-02 C\n2023-01-03 D\n";

#[test]
fn e2e_four_line_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), FOUR_LINES);
    let out = dir.path().join("out");

    match extract(&log, &out, "2023-01-01") {
        ExtractOutcome::Written { summary, .. } => assert_eq!(summary.lines_written, 2),
        other => panic!("expected Written, got {other:?}"),
    }
    assert_eq!(read_output(&out, "2023-01-01"), "2023-01-01 A\n2023-01-01 B\n");

    extract(&log, &out, "2023-01-02");
    assert_eq!(read_output(&out, "2023-01-02"), "2023-01-02 C\n");

    match extract(&log, &out, "2023-06-01") {
        ExtractOutcome::NotFound => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(!output_path(&out, &date("2023-06-01")).exists());
}

// =============================================================================
// Boundary dates
// =============================================================================

#[test]
fn e2e_first_and_last_dates_found() {
    let dir = tempfile::tempdir().unwrap();
    let mut content = String::new();
    for day in 1..=9 {
        for i in 0..40 {
            content.push_str(&format!("2023-05-0{day} event {i} from generator\n"));
        }
    }
    let log = write_log(dir.path(), &content);
    let out = dir.path().join("out");

    extract(&log, &out, "2023-05-01");
    assert_eq!(
        read_output(&out, "2023-05-01"),
        naive_filter(&content, "2023-05-01")
    );

    extract(&log, &out, "2023-05-09");
    assert_eq!(
        read_output(&out, "2023-05-09"),
        naive_filter(&content, "2023-05-09")
    );
}

// =============================================================================
// Variable-length lines across a large log
// =============================================================================

#[test]
fn e2e_every_date_extracts_exactly_its_run() {
    let dir = tempfile::tempdir().unwrap();
    let dates: Vec<String> = (1..=28).map(|d| format!("2023-02-{d:02}")).collect();

    let mut content = String::new();
    for (i, d) in dates.iter().enumerate() {
        for j in 0..(10 + (i * 13) % 50) {
            let padding = "payload ".repeat(1 + (i + j) % 12);
            content.push_str(&format!("{d} {padding}#{j}\n"));
        }
    }
    let log = write_log(dir.path(), &content);
    let out = dir.path().join("out");

    for d in &dates {
        extract(&log, &out, d);
        assert_eq!(read_output(&out, d), naive_filter(&content, d), "date {d}");
    }
}

// =============================================================================
// Degenerate inputs
// =============================================================================

#[test]
fn e2e_empty_file_yields_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), "");
    let out = dir.path().join("out");

    assert!(matches!(
        extract(&log, &out, "2023-01-01"),
        ExtractOutcome::NotFound
    ));
    // Not-found creates neither the output file nor the directory.
    assert!(!out.exists());
}

#[test]
fn e2e_single_line_file() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), "2023-01-01 the only line\n");
    let out = dir.path().join("out");

    extract(&log, &out, "2023-01-01");
    assert_eq!(read_output(&out, "2023-01-01"), "2023-01-01 the only line\n");

    assert!(matches!(
        extract(&log, &out, "2023-01-02"),
        ExtractOutcome::NotFound
    ));
}

#[test]
fn e2e_final_line_without_terminator() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), "2023-01-01 A\n2023-01-02 unterminated");
    let out = dir.path().join("out");

    extract(&log, &out, "2023-01-02");
    assert_eq!(read_output(&out, "2023-01-02"), "2023-01-02 unterminated\n");
}

#[test]
fn e2e_missing_log_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = run_extraction(
        &dir.path().join("no_such.log"),
        &dir.path().join("out"),
        &date("2023-01-01"),
        DEFAULT_MAX_LINE_LEN,
    );
    assert!(result.is_err());
}

// =============================================================================
// Emission-phase robustness
// =============================================================================

#[test]
fn e2e_blank_lines_inside_run_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(
        dir.path(),
        "2023-01-01 A\n\n2023-01-01 B\n   \n2023-01-01 C\n2023-01-02 D\n",
    );
    let out = dir.path().join("out");

    match extract(&log, &out, "2023-01-01") {
        ExtractOutcome::Written { summary, .. } => {
            assert_eq!(summary.lines_written, 3);
            assert_eq!(summary.skipped_blank, 2);
        }
        other => panic!("expected Written, got {other:?}"),
    }
    assert_eq!(
        read_output(&out, "2023-01-01"),
        "2023-01-01 A\n2023-01-01 B\n2023-01-01 C\n"
    );
}

#[test]
fn e2e_undecodable_line_is_skipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("app.log");
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"2023-01-01 good one\n");
    bytes.extend_from_slice(b"2023-01-01 broken \xff\xfe payload\n");
    bytes.extend_from_slice(b"2023-01-01 good two\n");
    bytes.extend_from_slice(b"2023-01-02 next day\n");
    fs::write(&log, &bytes).unwrap();
    let out = dir.path().join("out");

    match extract(&log, &out, "2023-01-01") {
        ExtractOutcome::Written { summary, .. } => {
            assert_eq!(summary.lines_written, 2);
            assert_eq!(summary.skipped_undecodable, 1);
        }
        other => panic!("expected Written, got {other:?}"),
    }
    assert_eq!(
        read_output(&out, "2023-01-01"),
        "2023-01-01 good one\n2023-01-01 good two\n"
    );
}

// =============================================================================
// Idempotence and output handling
// =============================================================================

#[test]
fn e2e_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), FOUR_LINES);
    let out = dir.path().join("out");

    extract(&log, &out, "2023-01-01");
    let first = fs::read(output_path(&out, &date("2023-01-01"))).unwrap();

    extract(&log, &out, "2023-01-01");
    let second = fs::read(output_path(&out, &date("2023-01-01"))).unwrap();

    assert_eq!(first, second);
}

#[test]
fn e2e_output_directory_is_created_nested() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), FOUR_LINES);
    let out = dir.path().join("deep").join("nested").join("out");

    match extract(&log, &out, "2023-01-03") {
        ExtractOutcome::Written { path, .. } => {
            assert_eq!(path, out.join("output_2023-01-03.txt"));
            assert!(path.exists());
        }
        other => panic!("expected Written, got {other:?}"),
    }
}
