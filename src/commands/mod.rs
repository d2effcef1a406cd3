pub mod analyze;
pub mod init;
pub mod record;
pub mod sentiment;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;
pub use record::{handle_record, RecordConfig};
pub use sentiment::{handle_sentiment, SentimentRunConfig};

use crate::cli;
use crate::config::LeadmapConfig;

/// Default head-of-table summary size.
const DEFAULT_SUMMARY_ROWS: usize = 20;

/// Size the global rayon pool; 0 keeps the default (all cores).
/// Repeated configuration is harmless and ignored.
pub(crate) fn configure_thread_pool(jobs: usize) {
    if jobs == 0 {
        return;
    }
    if rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build_global()
        .is_err()
    {
        log::debug!("rayon pool already initialized, --jobs ignored");
    }
}

/// Resolve the output format: CLI flag, then config file, then terminal.
pub(crate) fn resolve_format(
    flag: Option<cli::OutputFormat>,
    config: &LeadmapConfig,
) -> cli::OutputFormat {
    flag.or_else(|| {
        config
            .output
            .as_ref()
            .and_then(|output| output.default_format.as_deref())
            .and_then(parse_format)
    })
    .unwrap_or(cli::OutputFormat::Terminal)
}

/// Resolve the summary size: CLI flag, then config file, then default.
pub(crate) fn resolve_summary_rows(flag: Option<usize>, config: &LeadmapConfig) -> usize {
    flag.or_else(|| config.output.as_ref().and_then(|output| output.summary_rows))
        .unwrap_or(DEFAULT_SUMMARY_ROWS)
}

/// Spinner shown while a table is being scored; hidden unless the user
/// asked for verbosity.
pub(crate) fn progress_spinner(verb: &str, rows: usize, verbosity: u8) -> indicatif::ProgressBar {
    if verbosity == 0 {
        return indicatif::ProgressBar::hidden();
    }
    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_message(format!("{} {} rows", verb, rows));
    spinner
}

fn parse_format(name: &str) -> Option<cli::OutputFormat> {
    match name.to_ascii_lowercase().as_str() {
        "json" => Some(cli::OutputFormat::Json),
        "csv" => Some(cli::OutputFormat::Csv),
        "terminal" => Some(cli::OutputFormat::Terminal),
        other => {
            log::warn!("unknown default_format '{}' in config, ignored", other);
            None
        }
    }
}
