//! Sentiment pipeline: per-message polarity, per-lead aggregates,
//! potential-lead classification.
//!
//! The pipeline is a pure function of the message table, the polarity
//! model, and the sentiment configuration. Aggregation happens over the
//! complete table before classification; per-message scoring is
//! row-independent and runs on the rayon pool when enabled.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{SentimentConfig, SentimentPolicy};
use crate::core::{Likelihood, MessageRecord, Potentiality};
use crate::scoring::polarity::PolarityModel;

/// A message with its polarity attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMessage {
    #[serde(flatten)]
    pub message: MessageRecord,
    pub polarity: f64,
}

/// Per-lead sentiment aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadSentiment {
    pub lead_id: u64,
    pub message_count: usize,
    /// Arithmetic mean of the lead's message polarities; 0.0 for leads
    /// with no messages.
    pub mean_polarity: f64,
    /// `(mean + 1) / 2`, the potential-lead score on the unit scale.
    pub normalized_score: Likelihood,
    pub potential: bool,
}

/// Message row merged with its lead's aggregate, for tabular output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergedMessage {
    #[serde(flatten)]
    pub message: MessageRecord,
    pub polarity: f64,
    pub lead_mean_polarity: f64,
    pub lead_normalized_score: Likelihood,
    pub potential_lead: bool,
}

/// Full result of a sentiment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentReport {
    pub generated_at: DateTime<Utc>,
    pub leads: Vec<LeadSentiment>,
    pub messages: Vec<MergedMessage>,
}

/// Mean of a polarity sequence; empty input is neutral, not an error.
pub fn mean_polarity(polarities: &[f64]) -> f64 {
    if polarities.is_empty() {
        return 0.0;
    }
    polarities.iter().sum::<f64>() / polarities.len() as f64
}

/// Rescale a [-1, 1] polarity onto the unit interval.
pub fn normalize_polarity(polarity: f64) -> Likelihood {
    Likelihood::new((polarity + 1.0) / 2.0)
}

/// Apply the configured classification policy to a lead's mean polarity.
pub fn classify(mean: f64, config: &SentimentConfig) -> bool {
    match config.policy {
        SentimentPolicy::Raw => mean > config.threshold,
        SentimentPolicy::Normalized => normalize_polarity(mean).value() > config.normalized_cutoff,
    }
}

/// Potentiality percentage of a live message sequence: the mean
/// polarity scaled against the threshold, clamped to [0, 100].
pub fn potentiality(mean: f64, config: &SentimentConfig) -> Potentiality {
    Potentiality::new(mean / config.threshold * 100.0)
}

/// Score every message through the polarity model.
pub fn score_messages(
    messages: Vec<MessageRecord>,
    model: &dyn PolarityModel,
    parallel: bool,
) -> Vec<ScoredMessage> {
    let score = |message: MessageRecord| {
        let polarity = model.polarity(&message.text);
        ScoredMessage { message, polarity }
    };
    if parallel {
        messages.into_par_iter().map(score).collect()
    } else {
        messages.into_iter().map(score).collect()
    }
}

/// Group scored messages by lead and compute aggregates.
///
/// Output is ordered by lead id. Aggregation runs over the complete
/// table; classification reuses the same config on every lead.
pub fn aggregate_by_lead(scored: &[ScoredMessage], config: &SentimentConfig) -> Vec<LeadSentiment> {
    let mut by_lead: BTreeMap<u64, Vec<f64>> = BTreeMap::new();
    for message in scored {
        by_lead
            .entry(message.message.lead_id)
            .or_default()
            .push(message.polarity);
    }

    by_lead
        .into_iter()
        .map(|(lead_id, polarities)| {
            let mean = mean_polarity(&polarities);
            LeadSentiment {
                lead_id,
                message_count: polarities.len(),
                mean_polarity: mean,
                normalized_score: normalize_polarity(mean),
                potential: classify(mean, config),
            }
        })
        .collect()
}

/// Run the full sentiment pipeline and merge aggregates back onto the
/// message rows.
pub fn analyze_messages(
    messages: Vec<MessageRecord>,
    model: &dyn PolarityModel,
    config: &SentimentConfig,
    parallel: bool,
) -> SentimentReport {
    let scored = score_messages(messages, model, parallel);
    let leads = aggregate_by_lead(&scored, config);

    let by_lead: BTreeMap<u64, &LeadSentiment> =
        leads.iter().map(|lead| (lead.lead_id, lead)).collect();

    let messages = scored
        .into_iter()
        .map(|scored| {
            // a message without an aggregate reads as neutral
            let (mean, normalized, potential) = by_lead
                .get(&scored.message.lead_id)
                .map(|a| (a.mean_polarity, a.normalized_score, a.potential))
                .unwrap_or((0.0, normalize_polarity(0.0), false));
            MergedMessage {
                polarity: scored.polarity,
                lead_mean_polarity: mean,
                lead_normalized_score: normalized,
                potential_lead: potential,
                message: scored.message,
            }
        })
        .collect();

    SentimentReport {
        generated_at: Utc::now(),
        leads,
        messages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct FixedModel(f64);

    impl PolarityModel for FixedModel {
        fn polarity(&self, _text: &str) -> f64 {
            self.0
        }
    }

    /// Maps each text to a preset polarity, for aggregate tests.
    struct TableModel;

    impl PolarityModel for TableModel {
        fn polarity(&self, text: &str) -> f64 {
            match text {
                "up" => 0.6,
                "down" => -0.4,
                _ => 0.0,
            }
        }
    }

    fn message(lead_id: u64, text: &str) -> MessageRecord {
        MessageRecord {
            lead_id,
            text: text.to_string(),
            timestamp: None,
            channel: None,
        }
    }

    #[test]
    fn empty_sequence_aggregates_to_zero() {
        assert_eq!(mean_polarity(&[]), 0.0);
    }

    #[test]
    fn mean_is_arithmetic_mean() {
        assert!((mean_polarity(&[0.2, 0.4, 0.6]) - 0.4).abs() < 1e-12);
        assert_eq!(mean_polarity(&[-1.0, 1.0]), 0.0);
    }

    #[test]
    fn raw_policy_uses_threshold() {
        let config = SentimentConfig::default();
        assert!(classify(0.21, &config));
        assert!(!classify(0.2, &config));
        assert!(!classify(-0.5, &config));
    }

    #[test]
    fn normalized_policy_uses_cutoff() {
        let config = SentimentConfig {
            policy: SentimentPolicy::Normalized,
            ..Default::default()
        };
        // (0.1 + 1) / 2 = 0.55 > 0.5
        assert!(classify(0.1, &config));
        // (0.0 + 1) / 2 = 0.5, not strictly greater
        assert!(!classify(0.0, &config));
    }

    #[test]
    fn potentiality_scales_and_clamps() {
        let config = SentimentConfig::default();
        assert_eq!(potentiality(0.2, &config).value(), 100.0);
        assert_eq!(potentiality(0.4, &config).value(), 100.0);
        assert_eq!(potentiality(0.1, &config).value(), 50.0);
        assert_eq!(potentiality(-0.3, &config).value(), 0.0);
    }

    #[test]
    fn aggregates_group_by_lead_in_id_order() {
        let messages = vec![
            message(2, "up"),
            message(1, "down"),
            message(2, "up"),
            message(1, "up"),
        ];
        let scored = score_messages(messages, &TableModel, false);
        let leads = aggregate_by_lead(&scored, &SentimentConfig::default());

        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].lead_id, 1);
        assert_eq!(leads[0].message_count, 2);
        assert!((leads[0].mean_polarity - 0.1).abs() < 1e-12);
        assert_eq!(leads[1].lead_id, 2);
        assert!((leads[1].mean_polarity - 0.6).abs() < 1e-12);
        assert!(leads[1].potential);
        assert!(!leads[0].potential);
    }

    #[test]
    fn merge_back_carries_lead_aggregate_onto_each_row() {
        let messages = vec![message(1, "up"), message(1, "down")];
        let report = analyze_messages(
            messages,
            &TableModel,
            &SentimentConfig::default(),
            false,
        );

        assert_eq!(report.messages.len(), 2);
        for row in &report.messages {
            assert!((row.lead_mean_polarity - 0.1).abs() < 1e-12);
            assert!(!row.potential_lead);
        }
        // per-message polarity is preserved alongside the aggregate
        assert_eq!(report.messages[0].polarity, 0.6);
        assert_eq!(report.messages[1].polarity, -0.4);
    }

    #[test]
    fn identical_input_yields_identical_scores() {
        let build = || vec![message(1, "up"), message(2, "down")];
        let first = analyze_messages(build(), &TableModel, &SentimentConfig::default(), false);
        let second = analyze_messages(build(), &TableModel, &SentimentConfig::default(), false);
        assert_eq!(first.leads.len(), second.leads.len());
        for (a, b) in first.leads.iter().zip(&second.leads) {
            assert_eq!(a.mean_polarity, b.mean_polarity);
            assert_eq!(a.potential, b.potential);
        }
    }

    #[test]
    fn parallel_and_serial_scoring_agree() {
        let build = || (1..=50).map(|i| message(i % 5, "up")).collect::<Vec<_>>();
        let serial = score_messages(build(), &FixedModel(0.3), false);
        let parallel = score_messages(build(), &FixedModel(0.3), true);
        let serial_sum: f64 = serial.iter().map(|m| m.polarity).sum();
        let parallel_sum: f64 = parallel.iter().map(|m| m.polarity).sum();
        assert_eq!(serial_sum, parallel_sum);
    }
}
