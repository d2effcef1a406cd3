use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

use crate::config;
use crate::history::HistoryStore;
use crate::io::CsvHistoryStore;
use crate::scoring::{self, LexiconModel, PolarityModel};

pub struct RecordConfig {
    pub history: PathBuf,
    pub messages: Vec<String>,
    pub config: Option<PathBuf>,
    pub threshold: Option<f64>,
}

/// Append one conversation to the history table and report how the
/// lead reads: mean polarity, potentiality percentage, and the
/// potential/not-potential call.
pub fn handle_record(config: RecordConfig) -> Result<()> {
    let mut sentiment_config = config::load_config(config.config.as_deref())
        .scoring()
        .sentiment;
    if let Some(threshold) = config.threshold {
        sentiment_config.threshold = threshold;
    }

    let store = CsvHistoryStore::new(&config.history);
    let history = store
        .load()
        .with_context(|| format!("failed to load history from {}", config.history.display()))?;
    let (history, lead_id) = history.append_conversation(config.messages.iter().cloned());
    store
        .save(&history)
        .with_context(|| format!("failed to save history to {}", config.history.display()))?;

    let model = LexiconModel::new();
    let polarities: Vec<f64> = config
        .messages
        .iter()
        .map(|text| model.polarity(text))
        .collect();
    let mean = scoring::mean_polarity(&polarities);
    let potentiality = scoring::potentiality(mean, &sentiment_config);
    let potential = scoring::sentiment::classify(mean, &sentiment_config);

    println!(
        "Lead {} recorded ({} messages, {} total in history)",
        lead_id.to_string().bold(),
        config.messages.len(),
        history.len(),
    );
    println!("Average sentiment score: {:.2}", mean);
    println!("Potentiality: {}", potentiality);
    println!(
        "Potential lead: {}",
        if potential {
            "yes".green().to_string()
        } else {
            "no".yellow().to_string()
        }
    );
    Ok(())
}
