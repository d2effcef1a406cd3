// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod history;
pub mod io;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    AgeGroup, AnalysisReport, Error, LeadRecord, Likelihood, MessageRecord, Milestone,
    Potentiality, Result, ScoredLead,
};

pub use crate::config::{
    LeadmapConfig, ScoringConfig, SentimentConfig, SentimentPolicy,
};

pub use crate::scoring::{
    analyze_messages, mean_polarity, normalize_polarity, potentiality, run_analysis,
    ConversionRates, LeadSentiment, LexiconModel, PolarityModel, ProfessionRates,
    ScorerSelection, SentimentReport,
};

pub use crate::history::{HistoryStore, MessageHistory, MemoryHistoryStore};

pub use crate::io::{create_writer, CsvHistoryStore, OutputFormat, ReportWriter};
