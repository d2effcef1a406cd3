pub mod history_store;
pub mod output;
pub mod reader;

pub use history_store::CsvHistoryStore;
pub use output::{create_writer, OutputFormat, ReportWriter};
pub use reader::{read_leads, read_messages};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
