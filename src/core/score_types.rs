//! Type-safe score scales for lead scoring.
//!
//! Likelihood scores travel on a normalized 0-1 scale; the chat
//! potentiality metric is reported on a 0-100 scale. Encoding the scale
//! in the type prevents the two from being mixed, and construction
//! clamps so no pipeline can emit an out-of-range score.
//!
//! # Examples
//!
//! ```rust
//! use leadmap::core::score_types::{Likelihood, Potentiality};
//!
//! // Out-of-bounds values are clamped, not rejected
//! let score = Likelihood::new(1.4);
//! assert_eq!(score.value(), 1.0);
//!
//! // Conversion to the percentage scale is explicit
//! let pct = score.as_percent();
//! assert_eq!(pct.value(), 100.0);
//! ```

use serde::{Deserialize, Serialize};

/// Conversion likelihood on the normalized 0-1 scale.
///
/// Every scorer in the crate emits this scale. Values are clamped to
/// [0.0, 1.0] on construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Likelihood(f64);

impl Likelihood {
    /// Create a new likelihood, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw score value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to the 0-100 percentage scale.
    pub fn as_percent(self) -> Potentiality {
        Potentiality(self.0 * 100.0)
    }
}

/// Potentiality percentage on the 0-100 scale.
///
/// Used for the chat potentiality metric, where the historical reports
/// quote percentages. Values are clamped to [0.0, 100.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Potentiality(f64);

impl Potentiality {
    /// Create a new percentage, clamping to [0.0, 100.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 100.0))
    }

    /// Get the raw percentage value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to the normalized 0-1 scale.
    pub fn as_likelihood(self) -> Likelihood {
        Likelihood(self.0 / 100.0)
    }
}

impl std::fmt::Display for Likelihood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl std::fmt::Display for Potentiality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn likelihood_clamps_upper_bound() {
        let score = Likelihood::new(1.4);
        assert_eq!(score.value(), 1.0);
    }

    #[test]
    fn likelihood_clamps_lower_bound() {
        let score = Likelihood::new(-0.3);
        assert_eq!(score.value(), 0.0);
    }

    #[test]
    fn potentiality_clamps_both_bounds() {
        assert_eq!(Potentiality::new(120.0).value(), 100.0);
        assert_eq!(Potentiality::new(-5.0).value(), 0.0);
    }

    #[test]
    fn percent_conversion_scales_by_100() {
        let score = Likelihood::new(0.35);
        assert_eq!(score.as_percent().value(), 35.0);
    }

    #[test]
    fn roundtrip_conversion_is_identity() {
        let original = Likelihood::new(0.755);
        let roundtrip = original.as_percent().as_likelihood();
        assert!((original.value() - roundtrip.value()).abs() < 1e-12);
    }

    #[test]
    fn ordering_follows_raw_values() {
        assert!(Likelihood::new(0.2) < Likelihood::new(0.7));
        assert_eq!(Likelihood::new(0.5), Likelihood::new(0.5));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn likelihood_always_in_bounds(value in -100.0..100.0f64) {
            let score = Likelihood::new(value);
            assert!(score.value() >= 0.0 && score.value() <= 1.0);
        }

        #[test]
        fn potentiality_always_in_bounds(value in -1000.0..1000.0f64) {
            let pct = Potentiality::new(value);
            assert!(pct.value() >= 0.0 && pct.value() <= 100.0);
        }

        #[test]
        fn percent_conversion_preserves_ordering(a in 0.0..1.0f64, b in 0.0..1.0f64) {
            let la = Likelihood::new(a);
            let lb = Likelihood::new(b);
            if a < b {
                assert!(la.as_percent() < lb.as_percent());
            } else if a > b {
                assert!(la.as_percent() > lb.as_percent());
            }
        }
    }
}
