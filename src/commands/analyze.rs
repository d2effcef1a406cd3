use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli;
use crate::config;
use crate::io;
use crate::scoring;

pub struct AnalyzeConfig {
    pub leads: PathBuf,
    pub format: Option<cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub selection: scoring::ScorerSelection,
    pub top: Option<usize>,
    pub parallel: bool,
    pub jobs: usize,
    pub verbosity: u8,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    if config.selection.is_empty() {
        anyhow::bail!("no scorers selected");
    }

    super::configure_thread_pool(config.jobs);
    let file_config = config::load_config(config.config.as_deref());
    let scoring_config = file_config.scoring();
    let format = super::resolve_format(config.format, &file_config);
    let summary_rows = super::resolve_summary_rows(config.top, &file_config);

    let required = config.selection.required_columns();
    let leads = io::read_leads(&config.leads, &required)
        .with_context(|| format!("failed to read leads from {}", config.leads.display()))?;
    log::info!("loaded {} leads from {}", leads.len(), config.leads.display());

    let spinner = super::progress_spinner("Scoring", leads.len(), config.verbosity);
    let report = scoring::run_analysis(leads, &config.selection, &scoring_config, config.parallel);
    spinner.finish_and_clear();

    if report.excluded_rows > 0 {
        log::info!(
            "excluded {} rows with out-of-order milestones",
            report.excluded_rows
        );
    }

    let mut writer = io::create_writer(format.into(), config.output.as_deref(), summary_rows)?;
    writer.write_analysis(&report)?;
    Ok(())
}
