//! CSV input: leads and messages tables.
//!
//! Columns are resolved by header name, not position. A required column
//! missing from the header is fatal and names the column; a cell that
//! fails to parse degrades to `None` (dates) or drops the row with a
//! warning (ids), mirroring how the historical exports were consumed.

use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};

use crate::core::{Error, LeadRecord, MessageRecord, Result};

/// Header-name to column-index map for one CSV file.
struct HeaderMap {
    columns: HashMap<String, usize>,
    path: PathBuf,
}

impl HeaderMap {
    fn new(headers: &csv::StringRecord, path: &Path) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.trim().to_string(), index))
            .collect();
        Self {
            columns,
            path: path.to_path_buf(),
        }
    }

    /// Fail fast on any absent required column.
    fn require(&self, names: &[&str]) -> Result<()> {
        for name in names {
            if !self.columns.contains_key(*name) {
                return Err(Error::missing_column(*name, self.path.clone()));
            }
        }
        Ok(())
    }

    /// Trimmed cell value; absent columns and empty cells are `None`.
    fn get<'r>(&self, record: &'r csv::StringRecord, name: &str) -> Option<&'r str> {
        self.columns
            .get(name)
            .and_then(|&index| record.get(index))
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// Parse a date cell. Unparseable dates coerce to `None` rather than
/// failing the row; the historical exports mix a few formats.
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%m/%d/%Y"))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date())
        })
        .ok()
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| parse_date(value).and_then(|d| d.and_hms_opt(0, 0, 0)))
}

fn date_cell(map: &HeaderMap, record: &csv::StringRecord, name: &str, row: usize) -> Option<NaiveDate> {
    let value = map.get(record, name)?;
    let parsed = parse_date(value);
    if parsed.is_none() {
        log::debug!("row {}: unparseable {} '{}', coerced to null", row, name, value);
    }
    parsed
}

/// Read the leads table, requiring the columns the selected scorers
/// need on top of `lead_id`.
pub fn read_leads(path: &Path, required: &[&str]) -> Result<Vec<LeadRecord>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let map = HeaderMap::new(reader.headers()?, path);
    map.require(required)?;
    map.require(&["lead_id"])?;

    let mut leads = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let Some(id_cell) = map.get(&record, "lead_id") else {
            log::warn!("{}: row {} has no lead_id, skipped", path.display(), row);
            continue;
        };
        let Ok(lead_id) = id_cell.parse::<u64>() else {
            log::warn!(
                "{}: row {} has non-numeric lead_id '{}', skipped",
                path.display(),
                row,
                id_cell
            );
            continue;
        };

        leads.push(LeadRecord {
            lead_id,
            lead_name: map.get(&record, "lead_name").map(String::from),
            lead_profession: map.get(&record, "lead_profession").map(String::from),
            lead_age: map
                .get(&record, "lead_age")
                .and_then(|v| v.parse().ok()),
            lead_status: map.get(&record, "lead_status").map(String::from),
            number_of_interactions: map
                .get(&record, "number_of_interactions")
                .and_then(|v| v.parse().ok()),
            zip_code: map.get(&record, "zip_code").map(String::from),
            city: map.get(&record, "city").map(String::from),
            state: map.get(&record, "state").map(String::from),
            country: map.get(&record, "country").map(String::from),
            pre_engaged_date: date_cell(&map, &record, "pre_engaged_date", row),
            engaged_date: date_cell(&map, &record, "engaged_date", row),
            warm_date: date_cell(&map, &record, "warm_date", row),
            cold_date: date_cell(&map, &record, "cold_date", row),
            customer_date: date_cell(&map, &record, "customer_date", row),
        });
    }
    Ok(leads)
}

/// Read the chat messages table. `lead_id` and `lead_message` are
/// required; `timestamp` and `lead_source` are carried when present.
pub fn read_messages(path: &Path) -> Result<Vec<MessageRecord>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let map = HeaderMap::new(reader.headers()?, path);
    map.require(&["lead_id", "lead_message"])?;

    let mut messages = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let Some(id_cell) = map.get(&record, "lead_id") else {
            log::warn!("{}: row {} has no lead_id, skipped", path.display(), row);
            continue;
        };
        let Ok(lead_id) = id_cell.parse::<u64>() else {
            log::warn!(
                "{}: row {} has non-numeric lead_id '{}', skipped",
                path.display(),
                row,
                id_cell
            );
            continue;
        };

        messages.push(MessageRecord {
            lead_id,
            // malformed text is forwarded as-is; the polarity model
            // accepts arbitrary strings
            text: map
                .get(&record, "lead_message")
                .unwrap_or_default()
                .to_string(),
            timestamp: map
                .get(&record, "timestamp")
                .and_then(parse_datetime),
            channel: map.get(&record, "lead_source").map(String::from),
        });
    }
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_leads_with_optional_cells() {
        let file = write_csv(indoc! {"
            lead_id,lead_status,zip_code,customer_date
            1,Active,10001,2024-03-05
            2,,,
        "});
        let leads = read_leads(file.path(), &["lead_id"]).unwrap();
        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].lead_status.as_deref(), Some("Active"));
        assert!(leads[0].is_converted());
        assert_eq!(leads[1].lead_status, None);
        assert!(!leads[1].is_converted());
    }

    #[test]
    fn missing_required_column_is_fatal_and_named() {
        let file = write_csv("lead_id,zip_code\n1,10001\n");
        let err = read_leads(file.path(), &["customer_date"]).unwrap_err();
        assert!(err.to_string().contains("customer_date"));
    }

    #[test]
    fn unparseable_dates_coerce_to_null() {
        let file = write_csv(indoc! {"
            lead_id,customer_date
            1,not-a-date
        "});
        let leads = read_leads(file.path(), &[]).unwrap();
        assert_eq!(leads[0].customer_date, None);
    }

    #[test]
    fn bad_lead_id_drops_the_row_only() {
        let file = write_csv(indoc! {"
            lead_id,customer_date
            oops,2024-01-01
            7,2024-01-01
        "});
        let leads = read_leads(file.path(), &[]).unwrap();
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].lead_id, 7);
    }

    #[test]
    fn reads_messages_with_timestamps() {
        let file = write_csv(indoc! {"
            lead_id,lead_message,timestamp,lead_source
            3,Looks promising!,2024-02-01 10:30:00,Website
        "});
        let messages = read_messages(file.path()).unwrap();
        assert_eq!(messages[0].lead_id, 3);
        assert_eq!(messages[0].text, "Looks promising!");
        assert!(messages[0].timestamp.is_some());
        assert_eq!(messages[0].channel.as_deref(), Some("Website"));
    }

    #[test]
    fn messages_without_text_column_fail_by_name() {
        let file = write_csv("lead_id,timestamp\n1,2024-01-01 00:00:00\n");
        let err = read_messages(file.path()).unwrap_err();
        assert!(err.to_string().contains("lead_message"));
    }

    #[test]
    fn slash_dates_are_accepted() {
        assert_eq!(
            parse_date("03/05/2024"),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
    }
}
