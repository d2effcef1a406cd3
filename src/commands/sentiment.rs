use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli;
use crate::config;
use crate::io;
use crate::scoring::{self, LexiconModel};

pub struct SentimentRunConfig {
    pub messages: PathBuf,
    pub format: Option<cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub policy: Option<cli::PolicyArg>,
    pub threshold: Option<f64>,
    pub top: Option<usize>,
    pub parallel: bool,
    pub jobs: usize,
    pub verbosity: u8,
}

pub fn handle_sentiment(config: SentimentRunConfig) -> Result<()> {
    super::configure_thread_pool(config.jobs);

    let file_config = config::load_config(config.config.as_deref());
    let format = super::resolve_format(config.format, &file_config);
    let summary_rows = super::resolve_summary_rows(config.top, &file_config);

    let mut sentiment_config = file_config.scoring().sentiment;
    // CLI overrides beat the config file
    if let Some(policy) = config.policy {
        sentiment_config.policy = policy.into();
    }
    if let Some(threshold) = config.threshold {
        sentiment_config.threshold = threshold;
    }

    let messages = io::read_messages(&config.messages)
        .with_context(|| format!("failed to read messages from {}", config.messages.display()))?;
    log::info!(
        "loaded {} messages from {}",
        messages.len(),
        config.messages.display()
    );

    let model = LexiconModel::new();
    let spinner = super::progress_spinner("Scoring", messages.len(), config.verbosity);
    let report = scoring::analyze_messages(messages, &model, &sentiment_config, config.parallel);
    spinner.finish_and_clear();

    let mut writer = io::create_writer(format.into(), config.output.as_deref(), summary_rows)?;
    writer.write_sentiment(&report)?;
    Ok(())
}
