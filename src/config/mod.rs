// Sub-modules
mod core;
mod loader;
mod scoring;

// Re-export configuration types
pub use core::{LeadmapConfig, OutputConfig};
pub use loader::{load_config, parse_and_validate_config, CONFIG_FILE_NAME};
pub use scoring::{
    default_anomaly_penalty, default_country_weights, default_decline_penalty,
    default_direct_conversion_bonus, default_engaged_bonus, default_high_breakpoint,
    default_interaction_high, default_interaction_low, default_interaction_mid,
    default_mid_breakpoint, default_normalized_cutoff, default_pre_engaged_bonus,
    default_profession_fallback, default_recovery_bonus, default_sentiment_policy,
    default_sentiment_threshold, default_state_weights, default_status_active,
    default_status_closed, default_status_inactive, default_status_other, default_warm_bonus,
    default_zip_weights, DimensionWeights, EngagementConfig, GeographicConfig, LifecycleLadder,
    ScoringConfig, SentimentConfig, SentimentPolicy, TierBreakpoints,
};
