//! Geographic likelihood pipeline.
//!
//! Historical conversion rates are computed once per distinct attribute
//! value over the whole table, then broadcast to each row as a tier
//! weight. The composite divides by a fixed 3 regardless of how many
//! dimensions resolved; a lookup miss contributes 0.0 to the numerator
//! without shrinking the denominator.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::{DimensionWeights, GeographicConfig, TierBreakpoints};
use crate::core::{LeadRecord, Likelihood};

/// The three categorical dimensions the composite averages over.
pub const DIMENSION_COUNT: f64 = 3.0;

/// Historical conversion rates per attribute value, one map per
/// dimension. Rows with an empty attribute cell do not contribute to
/// that dimension's rates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionRates {
    pub by_zip: HashMap<String, f64>,
    pub by_country: HashMap<String, f64>,
    pub by_state: HashMap<String, f64>,
}

impl ConversionRates {
    /// Compute rates from the full input table. Must run over the
    /// complete partition before any row is scored.
    pub fn from_leads(leads: &[LeadRecord]) -> Self {
        Self {
            by_zip: rates_for(leads, |lead| lead.zip_code.as_deref()),
            by_country: rates_for(leads, |lead| lead.country.as_deref()),
            by_state: rates_for(leads, |lead| lead.state.as_deref()),
        }
    }
}

fn rates_for<'a, F>(leads: &'a [LeadRecord], attribute: F) -> HashMap<String, f64>
where
    F: Fn(&'a LeadRecord) -> Option<&'a str>,
{
    let mut tallies: HashMap<&str, (usize, usize)> = HashMap::new();
    for lead in leads {
        if let Some(value) = attribute(lead) {
            let (converted, total) = tallies.entry(value).or_insert((0, 0));
            *total += 1;
            if lead.is_converted() {
                *converted += 1;
            }
        }
    }
    tallies
        .into_iter()
        .map(|(value, (converted, total))| {
            (value.to_string(), converted as f64 / total as f64)
        })
        .collect()
}

/// Map a conversion rate into its tier weight.
///
/// `rate > high` takes the high weight; otherwise `rate > mid` takes
/// the mid weight; everything else, the low weight. A rate of exactly
/// `high` lands in the mid tier.
pub fn tier_weight(rate: f64, breakpoints: &TierBreakpoints, weights: &DimensionWeights) -> f64 {
    if rate > breakpoints.high {
        weights.high
    } else if rate > breakpoints.mid {
        weights.mid
    } else {
        weights.low
    }
}

/// Score one dimension of one lead: look up the value's historical
/// rate and resolve its tier. Absent values and unseen values score 0.
pub fn dimension_score(
    value: Option<&str>,
    rates: &HashMap<String, f64>,
    breakpoints: &TierBreakpoints,
    weights: &DimensionWeights,
) -> f64 {
    value
        .and_then(|v| rates.get(v))
        .map(|&rate| tier_weight(rate, breakpoints, weights))
        .unwrap_or(0.0)
}

/// Per-dimension and composite geographic scores for one lead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeographicScores {
    pub zip: Likelihood,
    pub country: Likelihood,
    pub state: Likelihood,
    pub composite: Likelihood,
}

/// Score a single lead against the precomputed rates.
pub fn score_lead(
    lead: &LeadRecord,
    rates: &ConversionRates,
    config: &GeographicConfig,
) -> GeographicScores {
    let breakpoints = &config.breakpoints;
    let zip = dimension_score(
        lead.zip_code.as_deref(),
        &rates.by_zip,
        breakpoints,
        &config.zip,
    );
    let country = dimension_score(
        lead.country.as_deref(),
        &rates.by_country,
        breakpoints,
        &config.country,
    );
    let state = dimension_score(
        lead.state.as_deref(),
        &rates.by_state,
        breakpoints,
        &config.state,
    );

    GeographicScores {
        zip: Likelihood::new(zip),
        country: Likelihood::new(country),
        state: Likelihood::new(state),
        composite: Likelihood::new((zip + country + state) / DIMENSION_COUNT),
    }
}
