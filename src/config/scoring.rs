//! Scoring configuration for lead likelihood pipelines
//!
//! This module contains all scoring-related configuration types including:
//! - Sentiment classification policy and thresholds
//! - Conversion-rate tier breakpoints and per-dimension tier weights
//! - Lifecycle ladder increments
//! - Engagement status/interaction/profession scoring constants
//!
//! Every constant the historical scorers hard-coded lives here so each
//! tier boundary can be unit tested in isolation.

use serde::{Deserialize, Serialize};

/// How a per-lead mean polarity is turned into a potential/not-potential call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentPolicy {
    /// Compare the raw mean polarity against `threshold`.
    Raw,
    /// Rescale to `(mean + 1) / 2` and compare against `normalized_cutoff`.
    Normalized,
}

/// Sentiment scorer configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SentimentConfig {
    /// Classification policy
    #[serde(default = "default_sentiment_policy")]
    pub policy: SentimentPolicy,

    /// Raw-polarity threshold; also the divisor of the potentiality percentage
    #[serde(default = "default_sentiment_threshold")]
    pub threshold: f64,

    /// Cutoff applied to the rescaled score under the normalized policy
    #[serde(default = "default_normalized_cutoff")]
    pub normalized_cutoff: f64,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            policy: default_sentiment_policy(),
            threshold: default_sentiment_threshold(),
            normalized_cutoff: default_normalized_cutoff(),
        }
    }
}

/// Conversion-rate breakpoints shared by every geographic dimension.
///
/// The high boundary is exclusive and the mid boundary is exclusive on
/// the low side: `rate > high` is high tier, else `rate > mid` is mid
/// tier, else low tier. A rate of exactly `high` resolves to mid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TierBreakpoints {
    #[serde(default = "default_high_breakpoint")]
    pub high: f64,

    #[serde(default = "default_mid_breakpoint")]
    pub mid: f64,
}

impl Default for TierBreakpoints {
    fn default() -> Self {
        Self {
            high: default_high_breakpoint(),
            mid: default_mid_breakpoint(),
        }
    }
}

/// Tier weights for one geographic dimension.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DimensionWeights {
    pub high: f64,
    pub mid: f64,
    pub low: f64,
}

impl DimensionWeights {
    // Pure function: check every weight is a valid unit-interval value
    pub fn is_valid(&self) -> bool {
        [self.high, self.mid, self.low]
            .iter()
            .all(|w| (0.0..=1.0).contains(w))
    }
}

/// Geographic scorer configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeographicConfig {
    #[serde(default)]
    pub breakpoints: TierBreakpoints,

    #[serde(default = "default_zip_weights")]
    pub zip: DimensionWeights,

    #[serde(default = "default_country_weights")]
    pub country: DimensionWeights,

    #[serde(default = "default_state_weights")]
    pub state: DimensionWeights,
}

impl Default for GeographicConfig {
    fn default() -> Self {
        Self {
            breakpoints: TierBreakpoints::default(),
            zip: default_zip_weights(),
            country: default_country_weights(),
            state: default_state_weights(),
        }
    }
}

impl GeographicConfig {
    /// Validate tier weights and breakpoint ordering.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.breakpoints.high)
            || !(0.0..=1.0).contains(&self.breakpoints.mid)
        {
            return Err("tier breakpoints must be between 0.0 and 1.0".to_string());
        }
        if self.breakpoints.mid >= self.breakpoints.high {
            return Err(format!(
                "mid breakpoint {} must be below high breakpoint {}",
                self.breakpoints.mid, self.breakpoints.high
            ));
        }
        for (name, dim) in [
            ("zip", &self.zip),
            ("country", &self.country),
            ("state", &self.state),
        ] {
            if !dim.is_valid() {
                return Err(format!("{} tier weights must be between 0.0 and 1.0", name));
            }
        }
        Ok(())
    }
}

/// Lifecycle ladder increments
///
/// Each field is one rule of the date decision ladder; the scorer adds
/// them independently and clamps the sum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LifecycleLadder {
    /// Initial interest shown
    #[serde(default = "default_pre_engaged_bonus")]
    pub pre_engaged: f64,

    /// Active engagement after pre-engagement
    #[serde(default = "default_engaged_bonus")]
    pub engaged: f64,

    /// Serious consideration
    #[serde(default = "default_warm_bonus")]
    pub warm: f64,

    /// Decline in interest (cold after warm)
    #[serde(default = "default_decline_penalty")]
    pub decline: f64,

    /// Recovery and conversion after going cold
    #[serde(default = "default_recovery_bonus")]
    pub recovery: f64,

    /// Cold date not after warm: data-quality anomaly
    #[serde(default = "default_anomaly_penalty")]
    pub anomaly: f64,

    /// Conversion without a cold stage
    #[serde(default = "default_direct_conversion_bonus")]
    pub direct_conversion: f64,
}

impl Default for LifecycleLadder {
    fn default() -> Self {
        Self {
            pre_engaged: default_pre_engaged_bonus(),
            engaged: default_engaged_bonus(),
            warm: default_warm_bonus(),
            decline: default_decline_penalty(),
            recovery: default_recovery_bonus(),
            anomaly: default_anomaly_penalty(),
            direct_conversion: default_direct_conversion_bonus(),
        }
    }
}

/// Engagement scorer configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EngagementConfig {
    #[serde(default = "default_status_active")]
    pub status_active: f64,

    #[serde(default = "default_status_inactive")]
    pub status_inactive: f64,

    #[serde(default = "default_status_closed")]
    pub status_closed: f64,

    /// Base score for statuses outside the known set (or missing)
    #[serde(default = "default_status_other")]
    pub status_other: f64,

    /// Interaction-count bonus tiers, highest first: more than 20
    /// interactions, more than 10, more than 5.
    #[serde(default = "default_interaction_high")]
    pub interaction_high: f64,

    #[serde(default = "default_interaction_mid")]
    pub interaction_mid: f64,

    #[serde(default = "default_interaction_low")]
    pub interaction_low: f64,

    /// Score for professions with no historical rows
    #[serde(default = "default_profession_fallback")]
    pub profession_fallback: f64,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            status_active: default_status_active(),
            status_inactive: default_status_inactive(),
            status_closed: default_status_closed(),
            status_other: default_status_other(),
            interaction_high: default_interaction_high(),
            interaction_mid: default_interaction_mid(),
            interaction_low: default_interaction_low(),
            profession_fallback: default_profession_fallback(),
        }
    }
}

/// Resolved scoring configuration handed to every pipeline.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub sentiment: SentimentConfig,

    #[serde(default)]
    pub geographic: GeographicConfig,

    #[serde(default)]
    pub lifecycle: LifecycleLadder,

    #[serde(default)]
    pub engagement: EngagementConfig,
}

pub fn default_sentiment_policy() -> SentimentPolicy {
    SentimentPolicy::Raw
}
pub fn default_sentiment_threshold() -> f64 {
    0.2
}
pub fn default_normalized_cutoff() -> f64 {
    0.5
}
pub fn default_high_breakpoint() -> f64 {
    0.7
}
pub fn default_mid_breakpoint() -> f64 {
    0.4
}
pub fn default_zip_weights() -> DimensionWeights {
    DimensionWeights {
        high: 0.5,
        mid: 0.3,
        low: 0.1,
    }
}
pub fn default_country_weights() -> DimensionWeights {
    DimensionWeights {
        high: 0.3,
        mid: 0.2,
        low: 0.05,
    }
}
pub fn default_state_weights() -> DimensionWeights {
    DimensionWeights {
        high: 0.2,
        mid: 0.1,
        low: 0.05,
    }
}
pub fn default_pre_engaged_bonus() -> f64 {
    0.1
}
pub fn default_engaged_bonus() -> f64 {
    0.2
}
pub fn default_warm_bonus() -> f64 {
    0.3
}
pub fn default_decline_penalty() -> f64 {
    -0.2
}
pub fn default_recovery_bonus() -> f64 {
    0.6
}
pub fn default_anomaly_penalty() -> f64 {
    -0.1
}
pub fn default_direct_conversion_bonus() -> f64 {
    0.4
}
pub fn default_status_active() -> f64 {
    0.7
}
pub fn default_status_inactive() -> f64 {
    0.3
}
pub fn default_status_closed() -> f64 {
    0.1
}
pub fn default_status_other() -> f64 {
    0.5
}
pub fn default_interaction_high() -> f64 {
    0.3
}
pub fn default_interaction_mid() -> f64 {
    0.2
}
pub fn default_interaction_low() -> f64 {
    0.1
}
pub fn default_profession_fallback() -> f64 {
    0.5
}
