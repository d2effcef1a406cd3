//! Common type definitions used across the codebase

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::score_types::Likelihood;

/// Funnel milestones in canonical order.
///
/// The variant order is the funnel order; `Ord` on this enum is what
/// the lifecycle validator compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Milestone {
    PreEngaged,
    Engaged,
    Warm,
    Cold,
    Customer,
}

impl Milestone {
    /// All milestones in funnel order.
    pub const ALL: [Milestone; 5] = [
        Milestone::PreEngaged,
        Milestone::Engaged,
        Milestone::Warm,
        Milestone::Cold,
        Milestone::Customer,
    ];

    /// CSV column carrying this milestone's date.
    pub fn column_name(&self) -> &'static str {
        match self {
            Milestone::PreEngaged => "pre_engaged_date",
            Milestone::Engaged => "engaged_date",
            Milestone::Warm => "warm_date",
            Milestone::Cold => "cold_date",
            Milestone::Customer => "customer_date",
        }
    }
}

/// Age buckets used in the engagement report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "18-30")]
    From18To30,
    #[serde(rename = "31-45")]
    From31To45,
    #[serde(rename = "46-60")]
    From46To60,
    #[serde(rename = "60+")]
    Over60,
}

impl AgeGroup {
    /// Bucket an age; under-18 ages fall outside every bucket.
    pub fn from_age(age: u32) -> Option<Self> {
        match age {
            18..=29 => Some(AgeGroup::From18To30),
            30..=44 => Some(AgeGroup::From31To45),
            45..=59 => Some(AgeGroup::From46To60),
            60.. => Some(AgeGroup::Over60),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::From18To30 => "18-30",
            AgeGroup::From31To45 => "31-45",
            AgeGroup::From46To60 => "46-60",
            AgeGroup::Over60 => "60+",
        }
    }
}

/// One row of the leads table.
///
/// Every attribute beyond the id is optional: a scorer that needs a
/// column which the CSV lacks fails at load time, but individual cells
/// may still be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeadRecord {
    pub lead_id: u64,
    pub lead_name: Option<String>,
    pub lead_profession: Option<String>,
    pub lead_age: Option<u32>,
    pub lead_status: Option<String>,
    pub number_of_interactions: Option<u32>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub pre_engaged_date: Option<NaiveDate>,
    pub engaged_date: Option<NaiveDate>,
    pub warm_date: Option<NaiveDate>,
    pub cold_date: Option<NaiveDate>,
    pub customer_date: Option<NaiveDate>,
}

impl LeadRecord {
    /// Date at which the lead reached a milestone, if it did.
    pub fn milestone(&self, milestone: Milestone) -> Option<NaiveDate> {
        match milestone {
            Milestone::PreEngaged => self.pre_engaged_date,
            Milestone::Engaged => self.engaged_date,
            Milestone::Warm => self.warm_date,
            Milestone::Cold => self.cold_date,
            Milestone::Customer => self.customer_date,
        }
    }

    /// A lead counts as converted once the customer milestone is set.
    pub fn is_converted(&self) -> bool {
        self.customer_date.is_some()
    }

    /// Age bucket for reporting, if the age is present and in range.
    pub fn age_group(&self) -> Option<AgeGroup> {
        self.lead_age.and_then(AgeGroup::from_age)
    }
}

/// One row of the chat messages table. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRecord {
    pub lead_id: u64,
    pub text: String,
    pub timestamp: Option<NaiveDateTime>,
    pub channel: Option<String>,
}

/// A lead row augmented with whichever scores were computed this run.
///
/// `None` means the corresponding scorer was not selected, not that it
/// failed; rows the lifecycle validator rejects never appear here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredLead {
    #[serde(flatten)]
    pub lead: LeadRecord,
    pub age_group: Option<AgeGroup>,
    pub zip_score: Option<Likelihood>,
    pub country_score: Option<Likelihood>,
    pub state_score: Option<Likelihood>,
    pub geographic_score: Option<Likelihood>,
    pub lifecycle_score: Option<Likelihood>,
    pub engagement_score: Option<Likelihood>,
}

impl ScoredLead {
    pub fn new(lead: LeadRecord) -> Self {
        let age_group = lead.age_group();
        Self {
            lead,
            age_group,
            zip_score: None,
            country_score: None,
            state_score: None,
            geographic_score: None,
            lifecycle_score: None,
            engagement_score: None,
        }
    }
}

/// Full result of an analyze run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub scored: Vec<ScoredLead>,
    /// Rows dropped by lifecycle order validation.
    pub excluded_rows: usize,
}
