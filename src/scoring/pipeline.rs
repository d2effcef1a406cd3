//! Composite analysis over the leads table.
//!
//! Group aggregates (conversion rates) are computed sequentially over
//! the complete input table first; the per-row scoring map then runs on
//! the rayon pool. Lifecycle order validation filters rows out of the
//! scored output, but never out of the historical aggregates.

use chrono::Utc;
use rayon::prelude::*;

use crate::config::ScoringConfig;
use crate::core::{AnalysisReport, LeadRecord, Milestone, ScoredLead};
use crate::scoring::{engagement, geographic, lifecycle};

/// Which scorers an analyze run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScorerSelection {
    pub geographic: bool,
    pub lifecycle: bool,
    pub engagement: bool,
}

impl Default for ScorerSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl ScorerSelection {
    pub fn all() -> Self {
        Self {
            geographic: true,
            lifecycle: true,
            engagement: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.geographic || self.lifecycle || self.engagement)
    }

    /// Columns the selected scorers cannot run without.
    pub fn required_columns(&self) -> Vec<&'static str> {
        let mut columns = vec!["lead_id"];
        if self.geographic {
            columns.extend(["zip_code", "country", "state", "customer_date"]);
        }
        if self.lifecycle {
            columns.extend(Milestone::ALL.iter().map(|m| m.column_name()));
        }
        if self.engagement {
            columns.extend([
                "lead_status",
                "number_of_interactions",
                "lead_profession",
                "customer_date",
            ]);
        }
        columns.sort_unstable();
        columns.dedup();
        columns
    }
}

/// Run the selected scorers over the leads table.
pub fn run_analysis(
    leads: Vec<LeadRecord>,
    selection: &ScorerSelection,
    config: &ScoringConfig,
    parallel: bool,
) -> AnalysisReport {
    // Aggregates come from the full table, including rows the lifecycle
    // validator later drops.
    let conversion_rates = selection
        .geographic
        .then(|| geographic::ConversionRates::from_leads(&leads));
    let profession_rates = selection
        .engagement
        .then(|| engagement::ProfessionRates::from_leads(&leads));

    let (leads, excluded_rows) = if selection.lifecycle {
        let before = leads.len();
        let valid: Vec<LeadRecord> = leads
            .into_iter()
            .filter(lifecycle::has_valid_order)
            .collect();
        let excluded = before - valid.len();
        if excluded > 0 {
            log::debug!("dropped {} rows with out-of-order milestones", excluded);
        }
        (valid, excluded)
    } else {
        (leads, 0)
    };

    let score_one = |lead: LeadRecord| {
        let mut scored = ScoredLead::new(lead);
        if let Some(rates) = &conversion_rates {
            let scores = geographic::score_lead(&scored.lead, rates, &config.geographic);
            scored.zip_score = Some(scores.zip);
            scored.country_score = Some(scores.country);
            scored.state_score = Some(scores.state);
            scored.geographic_score = Some(scores.composite);
        }
        if selection.lifecycle {
            scored.lifecycle_score = Some(lifecycle::ladder_score(&scored.lead, &config.lifecycle));
        }
        if let Some(rates) = &profession_rates {
            scored.engagement_score =
                Some(engagement::score_lead(&scored.lead, rates, &config.engagement));
        }
        scored
    };

    let scored: Vec<ScoredLead> = if parallel {
        leads.into_par_iter().map(score_one).collect()
    } else {
        leads.into_iter().map(score_one).collect()
    };

    AnalysisReport {
        generated_at: Utc::now(),
        scored,
        excluded_rows,
    }
}
