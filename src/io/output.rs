//! Report writers: JSON, CSV, and terminal summaries.

use colored::*;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::{AnalysisReport, Likelihood, ScoredLead};
use crate::scoring::sentiment::SentimentReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
    Terminal,
}

pub trait ReportWriter {
    fn write_analysis(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
    fn write_sentiment(&mut self, report: &SentimentReport) -> anyhow::Result<()>;
}

/// Build a writer for the requested format, targeting a file when
/// `output` is given and stdout otherwise.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
    summary_rows: usize,
) -> anyhow::Result<Box<dyn ReportWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Csv => Box::new(CsvWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink, summary_rows)),
    })
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_analysis(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn write_sentiment(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

/// Score cell: `{}` on f64 prints the shortest representation that
/// round-trips, so re-reading the file reproduces the score exactly.
fn score_cell(score: Option<Likelihood>) -> String {
    score.map(|s| format!("{}", s.value())).unwrap_or_default()
}

fn opt_cell<T: std::fmt::Display>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

/// Column order of the analysis CSV: the original lead columns first,
/// derived columns after.
pub const ANALYSIS_COLUMNS: &[&str] = &[
    "lead_id",
    "lead_name",
    "lead_profession",
    "lead_age",
    "age_group",
    "lead_status",
    "number_of_interactions",
    "zip_code",
    "city",
    "state",
    "country",
    "pre_engaged_date",
    "engaged_date",
    "warm_date",
    "cold_date",
    "customer_date",
    "zip_score",
    "country_score",
    "state_score",
    "geographic_score",
    "lifecycle_score",
    "engagement_score",
];

fn analysis_row(scored: &ScoredLead) -> Vec<String> {
    let lead = &scored.lead;
    vec![
        lead.lead_id.to_string(),
        opt_cell(&lead.lead_name),
        opt_cell(&lead.lead_profession),
        opt_cell(&lead.lead_age),
        scored
            .age_group
            .map(|g| g.label().to_string())
            .unwrap_or_default(),
        opt_cell(&lead.lead_status),
        opt_cell(&lead.number_of_interactions),
        opt_cell(&lead.zip_code),
        opt_cell(&lead.city),
        opt_cell(&lead.state),
        opt_cell(&lead.country),
        opt_cell(&lead.pre_engaged_date),
        opt_cell(&lead.engaged_date),
        opt_cell(&lead.warm_date),
        opt_cell(&lead.cold_date),
        opt_cell(&lead.customer_date),
        score_cell(scored.zip_score),
        score_cell(scored.country_score),
        score_cell(scored.state_score),
        score_cell(scored.geographic_score),
        score_cell(scored.lifecycle_score),
        score_cell(scored.engagement_score),
    ]
}

impl<W: Write> ReportWriter for CsvWriter<W> {
    fn write_analysis(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let mut out = csv::Writer::from_writer(&mut self.writer);
        out.write_record(ANALYSIS_COLUMNS)?;
        for scored in &report.scored {
            out.write_record(analysis_row(scored))?;
        }
        out.flush()?;
        Ok(())
    }

    fn write_sentiment(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        let mut out = csv::Writer::from_writer(&mut self.writer);
        out.write_record([
            "lead_id",
            "lead_message",
            "timestamp",
            "lead_source",
            "polarity",
            "lead_mean_polarity",
            "lead_normalized_score",
            "potential_lead",
        ])?;
        for row in &report.messages {
            out.write_record([
                row.message.lead_id.to_string(),
                row.message.text.clone(),
                opt_cell(&row.message.timestamp),
                opt_cell(&row.message.channel),
                format!("{}", row.polarity),
                format!("{}", row.lead_mean_polarity),
                format!("{}", row.lead_normalized_score.value()),
                row.potential_lead.to_string(),
            ])?;
        }
        out.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    summary_rows: usize,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, summary_rows: usize) -> Self {
        Self {
            writer,
            summary_rows,
        }
    }

    fn score_column(score: Option<Likelihood>) -> String {
        score
            .map(|s| format!("{:.3}", s.value()))
            .unwrap_or_else(|| "-".to_string())
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_analysis(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Lead likelihood analysis".bold())?;
        writeln!(self.writer)?;

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "lead_id",
                "zip",
                "state",
                "country",
                "geo",
                "lifecycle",
                "engagement",
            ]);
        for scored in report.scored.iter().take(self.summary_rows) {
            table.add_row(vec![
                scored.lead.lead_id.to_string(),
                opt_cell(&scored.lead.zip_code),
                opt_cell(&scored.lead.state),
                opt_cell(&scored.lead.country),
                Self::score_column(scored.geographic_score),
                Self::score_column(scored.lifecycle_score),
                Self::score_column(scored.engagement_score),
            ]);
        }
        writeln!(self.writer, "{}", table)?;
        writeln!(
            self.writer,
            "{} leads scored, {} rows excluded by milestone validation",
            report.scored.len().to_string().green(),
            report.excluded_rows.to_string().yellow(),
        )?;
        Ok(())
    }

    fn write_sentiment(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Lead sentiment analysis".bold())?;
        writeln!(self.writer)?;

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "lead_id",
                "messages",
                "mean polarity",
                "score",
                "potential",
            ]);
        for lead in report.leads.iter().take(self.summary_rows) {
            table.add_row(vec![
                lead.lead_id.to_string(),
                lead.message_count.to_string(),
                format!("{:.3}", lead.mean_polarity),
                format!("{:.3}", lead.normalized_score.value()),
                if lead.potential {
                    "yes".green().to_string()
                } else {
                    "no".normal().to_string()
                },
            ]);
        }
        writeln!(self.writer, "{}", table)?;

        let potential = report.leads.iter().filter(|l| l.potential).count();
        writeln!(
            self.writer,
            "{} of {} leads classified as potential",
            potential.to_string().green(),
            report.leads.len(),
        )?;
        Ok(())
    }
}
