//! Core domain types shared by every pipeline.

pub mod errors;
pub mod score_types;
pub mod types;

pub use errors::{Error, Result};
pub use score_types::{Likelihood, Potentiality};
pub use types::{
    AgeGroup, AnalysisReport, LeadRecord, MessageRecord, Milestone, ScoredLead,
};
