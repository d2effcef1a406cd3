//! Engagement pipeline: status base score, interaction bonus, and
//! profession conversion rate, averaged and capped at 1.0.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::EngagementConfig;
use crate::core::{LeadRecord, Likelihood};

/// Historical conversion rate per profession, computed once over the
/// whole table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfessionRates(HashMap<String, f64>);

impl ProfessionRates {
    pub fn from_leads(leads: &[LeadRecord]) -> Self {
        let mut tallies: HashMap<&str, (usize, usize)> = HashMap::new();
        for lead in leads {
            if let Some(profession) = lead.lead_profession.as_deref() {
                let (converted, total) = tallies.entry(profession).or_insert((0, 0));
                *total += 1;
                if lead.is_converted() {
                    *converted += 1;
                }
            }
        }
        Self(
            tallies
                .into_iter()
                .map(|(profession, (converted, total))| {
                    (profession.to_string(), converted as f64 / total as f64)
                })
                .collect(),
        )
    }

    pub fn get(&self, profession: &str) -> Option<f64> {
        self.0.get(profession).copied()
    }
}

/// Base score from the lead status. Unknown or missing statuses take
/// the neutral fallback.
pub fn status_score(status: Option<&str>, config: &EngagementConfig) -> f64 {
    match status {
        Some("Active") => config.status_active,
        Some("Inactive") => config.status_inactive,
        Some("Closed") => config.status_closed,
        _ => config.status_other,
    }
}

/// Bonus from the interaction count. Missing counts earn nothing.
pub fn interaction_score(interactions: Option<u32>, config: &EngagementConfig) -> f64 {
    match interactions {
        Some(n) if n > 20 => config.interaction_high,
        Some(n) if n > 10 => config.interaction_mid,
        Some(n) if n > 5 => config.interaction_low,
        _ => 0.0,
    }
}

/// Profession score: the historical conversion rate, or the neutral
/// fallback for professions with no history.
pub fn profession_score(
    profession: Option<&str>,
    rates: &ProfessionRates,
    config: &EngagementConfig,
) -> f64 {
    profession
        .and_then(|p| rates.get(p))
        .unwrap_or(config.profession_fallback)
}

/// Combine the three components: their mean, capped at 1.0.
pub fn score_lead(
    lead: &LeadRecord,
    rates: &ProfessionRates,
    config: &EngagementConfig,
) -> Likelihood {
    let base = status_score(lead.lead_status.as_deref(), config);
    let interaction = interaction_score(lead.number_of_interactions, config);
    let profession = profession_score(lead.lead_profession.as_deref(), rates, config);
    Likelihood::new((base + interaction + profession) / 3.0)
}
