//! Scoring pipelines: sentiment, geographic, lifecycle, engagement.

pub mod engagement;
pub mod geographic;
pub mod lifecycle;
pub mod pipeline;
pub mod polarity;
pub mod sentiment;

pub use engagement::ProfessionRates;
pub use geographic::{ConversionRates, GeographicScores};
pub use pipeline::{run_analysis, ScorerSelection};
pub use polarity::{LexiconModel, PolarityModel};
pub use sentiment::{
    analyze_messages, mean_polarity, normalize_polarity, potentiality, LeadSentiment,
    MergedMessage, ScoredMessage, SentimentReport,
};
