//! Lifecycle date pipeline: milestone order validation and the
//! decision ladder.
//!
//! Each rule of the ladder compares a milestone against the *previous*
//! milestone's date, not a fixed baseline; the increments accumulate
//! independently and the sum is floored at zero then clamped to the
//! unit interval.

use crate::config::LifecycleLadder;
use crate::core::{LeadRecord, Likelihood, Milestone};

/// Check that the non-null milestone dates occur in non-decreasing
/// funnel order. Records failing this are dropped before scoring.
pub fn has_valid_order(lead: &LeadRecord) -> bool {
    let mut previous = None;
    for milestone in Milestone::ALL {
        if let Some(date) = lead.milestone(milestone) {
            if let Some(prior) = previous {
                if date < prior {
                    return false;
                }
            }
            previous = Some(date);
        }
    }
    true
}

/// Run the decision ladder over one validated record.
pub fn ladder_score(lead: &LeadRecord, ladder: &LifecycleLadder) -> Likelihood {
    let pre_engaged = lead.pre_engaged_date;
    let engaged = lead.engaged_date;
    let warm = lead.warm_date;
    let cold = lead.cold_date;
    let customer = lead.customer_date;

    let mut score = 0.0;

    if pre_engaged.is_some() {
        score += ladder.pre_engaged;
    }

    if let (Some(engaged), Some(pre_engaged)) = (engaged, pre_engaged) {
        if engaged > pre_engaged {
            score += ladder.engaged;
        }
    }

    if let (Some(warm), Some(engaged)) = (warm, engaged) {
        if warm > engaged {
            score += ladder.warm;
        }
    }

    if let Some(cold) = cold {
        match warm {
            Some(warm) if cold > warm => {
                score += ladder.decline;
                if let Some(customer) = customer {
                    if customer > cold {
                        score += ladder.recovery;
                    }
                }
            }
            // cold without a later warm date reads as a data-quality
            // anomaly rather than a decline
            _ => score += ladder.anomaly,
        }
    } else if let (Some(customer), Some(warm)) = (customer, warm) {
        if customer > warm {
            score += ladder.direct_conversion;
        }
    }

    Likelihood::new(score.max(0.0))
}

/// Validate and score one record; `None` means the record was dropped.
pub fn score_lead(lead: &LeadRecord, ladder: &LifecycleLadder) -> Option<Likelihood> {
    has_valid_order(lead).then(|| ladder_score(lead, ladder))
}
