use serde::{Deserialize, Serialize};

use super::scoring::{
    EngagementConfig, GeographicConfig, LifecycleLadder, ScoringConfig, SentimentConfig,
};

/// Root configuration structure for leadmap
///
/// Every section is optional in `leadmap.toml`; absent sections resolve
/// to the historical defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LeadmapConfig {
    /// Sentiment scorer thresholds and policy
    #[serde(default)]
    pub sentiment: Option<SentimentConfig>,

    /// Geographic tier breakpoints and weights
    #[serde(default)]
    pub geographic: Option<GeographicConfig>,

    /// Lifecycle ladder increments
    #[serde(default)]
    pub lifecycle: Option<LifecycleLadder>,

    /// Engagement scoring constants
    #[serde(default)]
    pub engagement: Option<EngagementConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl LeadmapConfig {
    /// Resolve the scoring configuration, filling absent sections with
    /// defaults.
    pub fn scoring(&self) -> ScoringConfig {
        ScoringConfig {
            sentiment: self.sentiment.unwrap_or_default(),
            geographic: self.geographic.unwrap_or_default(),
            lifecycle: self.lifecycle.unwrap_or_default(),
            engagement: self.engagement.unwrap_or_default(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Default output format when `--format` is not given
    #[serde(default)]
    pub default_format: Option<String>,

    /// Default head-of-table summary size
    #[serde(default)]
    pub summary_rows: Option<usize>,
}
