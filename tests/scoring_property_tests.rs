//! Property tests over the scoring invariants.

use leadmap::config::{GeographicConfig, LifecycleLadder, ScoringConfig, SentimentConfig};
use leadmap::core::LeadRecord;
use leadmap::scoring::geographic::tier_weight;
use leadmap::scoring::lifecycle::score_lead;
use leadmap::scoring::{mean_polarity, normalize_polarity, potentiality};

use chrono::NaiveDate;
use proptest::prelude::*;

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(offset)
}

proptest! {
    #[test]
    fn aggregate_is_the_arithmetic_mean(polarities in prop::collection::vec(-1.0..1.0f64, 1..50)) {
        let mean = mean_polarity(&polarities);
        let expected = polarities.iter().sum::<f64>() / polarities.len() as f64;
        prop_assert!((mean - expected).abs() < 1e-12);
        prop_assert!((-1.0..=1.0).contains(&mean));
    }

    #[test]
    fn normalized_score_stays_in_unit_interval(polarity in -1.0..1.0f64) {
        let normalized = normalize_polarity(polarity).value();
        prop_assert!((0.0..=1.0).contains(&normalized));
    }

    #[test]
    fn potentiality_stays_in_percentage_range(mean in -1.0..1.0f64, threshold in 0.01..1.0f64) {
        let config = SentimentConfig { threshold, ..Default::default() };
        let pct = potentiality(mean, &config).value();
        prop_assert!((0.0..=100.0).contains(&pct));
    }

    #[test]
    fn tier_weight_is_one_of_the_three_weights(rate in 0.0..=1.0f64) {
        let config = GeographicConfig::default();
        let weight = tier_weight(rate, &config.breakpoints, &config.zip);
        prop_assert!(
            weight == config.zip.high || weight == config.zip.mid || weight == config.zip.low
        );
    }

    #[test]
    fn lifecycle_scores_are_clamped(
        offsets in prop::collection::vec(prop::option::of(0i64..30), 5)
    ) {
        let lead = LeadRecord {
            lead_id: 1,
            pre_engaged_date: offsets[0].map(day),
            engaged_date: offsets[1].map(day),
            warm_date: offsets[2].map(day),
            cold_date: offsets[3].map(day),
            customer_date: offsets[4].map(day),
            ..Default::default()
        };
        // arbitrary date combinations either get dropped or score in [0, 1]
        if let Some(score) = score_lead(&lead, &LifecycleLadder::default()) {
            prop_assert!((0.0..=1.0).contains(&score.value()));
        }
    }

    #[test]
    fn monotone_funnels_are_never_dropped(start in 0i64..10, step in 1i64..5) {
        let lead = LeadRecord {
            lead_id: 1,
            pre_engaged_date: Some(day(start)),
            engaged_date: Some(day(start + step)),
            warm_date: Some(day(start + 2 * step)),
            cold_date: None,
            customer_date: Some(day(start + 3 * step)),
            ..Default::default()
        };
        let score = score_lead(&lead, &LifecycleLadder::default());
        prop_assert!(score.is_some());
        // strict progression earns the full direct-conversion ladder
        prop_assert!((score.unwrap().value() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn geographic_composite_is_bounded_by_max_weights(
        zip_converted in prop::collection::vec(any::<bool>(), 1..30)
    ) {
        use leadmap::scoring::{run_analysis, ScorerSelection};

        let leads: Vec<LeadRecord> = zip_converted
            .iter()
            .enumerate()
            .map(|(i, &converted)| LeadRecord {
                lead_id: i as u64 + 1,
                zip_code: Some("10001".to_string()),
                state: Some("New York".to_string()),
                country: Some("USA".to_string()),
                customer_date: converted.then(|| day(5)),
                ..Default::default()
            })
            .collect();

        let selection = ScorerSelection { geographic: true, lifecycle: false, engagement: false };
        let config = ScoringConfig::default();
        let report = run_analysis(leads, &selection, &config, false);

        let geo = config.geographic;
        let bound = (geo.zip.high + geo.country.high + geo.state.high) / 3.0;
        for scored in &report.scored {
            let composite = scored.geographic_score.unwrap().value();
            prop_assert!(composite <= bound + 1e-12);
            prop_assert!(composite >= 0.0);
        }
    }
}
