// logslice - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Target date validation (before any file access)
// 3. Logging initialisation (debug mode support)
// 4. Config loading and the single extraction run

use clap::Parser;
use logslice::app::runner::{self, ExtractOutcome};
use logslice::core::model::DateKey;
use logslice::platform;
use logslice::util;
use logslice::util::constants;
use std::path::PathBuf;
use std::process::ExitCode;

/// logslice - extract one day's lines from a date-sorted log file.
///
/// Binary-searches a memory-mapped, date-sorted log for the first line of
/// the target date and copies the whole run to an output file, without
/// scanning the rest of the file.
#[derive(Parser, Debug)]
#[command(name = constants::APP_NAME, version, about)]
struct Cli {
    /// Target date in YYYY-MM-DD form.
    date: String,

    /// Log file to search.
    #[arg(short = 'f', long = "log-file", default_value = constants::DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Directory for extracted output files (created if absent).
    #[arg(short = 'o', long = "output-dir", default_value = constants::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Upper bound on log line length in bytes (the alignment margin).
    /// Overrides [extraction] max_line_len from config.toml.
    #[arg(long = "max-line-len")]
    max_line_len: Option<usize>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Validate the date before touching the filesystem or config.
    let target: DateKey = match cli.date.parse() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Resolve config before logging init so [logging] level can apply.
    // Priority: RUST_LOG env var > --debug > config level > default.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!(
        version = constants::APP_VERSION,
        date = %target,
        file = %cli.log_file.display(),
        "logslice starting"
    );

    let max_line_len = cli.max_line_len.unwrap_or(config.max_line_len);
    if !(constants::MIN_MAX_LINE_LEN..=constants::ABSOLUTE_MAX_LINE_LEN).contains(&max_line_len) {
        eprintln!(
            "Error: --max-line-len {max_line_len} is out of range ({}-{})",
            constants::MIN_MAX_LINE_LEN,
            constants::ABSOLUTE_MAX_LINE_LEN
        );
        return ExitCode::FAILURE;
    }

    match runner::run_extraction(&cli.log_file, &cli.output_dir, &target, max_line_len) {
        Ok(ExtractOutcome::Written { path, summary }) => {
            tracing::info!(
                output = %path.display(),
                lines = summary.lines_written,
                "Done"
            );
            println!(
                "Logs for {} have been saved to {}",
                target,
                path.display()
            );
            ExitCode::SUCCESS
        }
        Ok(ExtractOutcome::NotFound) => {
            // A normal outcome, not an error: report and exit cleanly.
            println!("No logs found for date {target}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Extraction failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
