//! Benchmark for the composite scoring pipeline.
//!
//! Tracks the cost of the aggregate-then-broadcast pattern and the
//! serial/parallel row map as table sizes grow.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use leadmap::config::ScoringConfig;
use leadmap::core::LeadRecord;
use leadmap::scoring::{run_analysis, ScorerSelection};
use std::hint::black_box;

use chrono::NaiveDate;

fn synthetic_leads(count: usize) -> Vec<LeadRecord> {
    let day = |d: u32| NaiveDate::from_ymd_opt(2024, 1, 1 + (d % 28)).unwrap();
    (0..count)
        .map(|i| LeadRecord {
            lead_id: i as u64 + 1,
            lead_profession: Some(format!("profession-{}", i % 12)),
            lead_status: Some(
                match i % 4 {
                    0 => "Active",
                    1 => "Inactive",
                    2 => "Closed",
                    _ => "Paused",
                }
                .to_string(),
            ),
            number_of_interactions: Some((i % 30) as u32),
            zip_code: Some(format!("{:05}", i % 500)),
            state: Some(format!("state-{}", i % 50)),
            country: Some(format!("country-{}", i % 8)),
            pre_engaged_date: Some(day(1)),
            engaged_date: Some(day(3)),
            warm_date: Some(day(7)),
            customer_date: (i % 3 == 0).then(|| day(20)),
            ..Default::default()
        })
        .collect()
}

fn bench_composite_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite_scoring");
    let config = ScoringConfig::default();

    for size in [100, 1_000, 10_000] {
        let leads = synthetic_leads(size);

        group.bench_with_input(BenchmarkId::new("serial", size), &leads, |b, leads| {
            b.iter(|| {
                run_analysis(
                    black_box(leads.clone()),
                    &ScorerSelection::all(),
                    &config,
                    false,
                )
            })
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &leads, |b, leads| {
            b.iter(|| {
                run_analysis(
                    black_box(leads.clone()),
                    &ScorerSelection::all(),
                    &config,
                    true,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_composite_scoring);
criterion_main!(benches);
