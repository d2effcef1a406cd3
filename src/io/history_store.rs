//! CSV-backed persistence for the conversation history.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::core::Result;
use crate::history::{HistoryStore, MessageHistory};
use crate::io::reader::read_messages;

/// Persists the history as a messages CSV next to the other exports.
///
/// A missing file loads as an empty history; saving rewrites the whole
/// file from the snapshot.
#[derive(Debug, Clone)]
pub struct CsvHistoryStore {
    path: PathBuf,
}

impl CsvHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for CsvHistoryStore {
    fn load(&self) -> Result<MessageHistory> {
        if !self.path.exists() {
            return Ok(MessageHistory::new());
        }
        Ok(MessageHistory::from_records(read_messages(&self.path)?))
    }

    fn save(&self, history: &MessageHistory) -> Result<()> {
        let mut writer = csv::Writer::from_writer(File::create(&self.path)?);
        writer.write_record(["lead_id", "lead_message", "timestamp", "lead_source"])?;
        for record in history.records() {
            writer.write_record([
                record.lead_id.to_string(),
                record.text.clone(),
                record
                    .timestamp
                    .map(|t| t.to_string())
                    .unwrap_or_default(),
                record.channel.clone().unwrap_or_default(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}
