//! Review queue performance benchmarks.
//!
//! Measures filtering, aggregation and a full dashboard recomputation over
//! generated queues of increasing size.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use docket::{
    ExtractedData, FilterCriteria, Priority, QueueConfig, ReviewItem, ReviewSession, ReviewStatus,
    Statistics, filter,
};

const CATEGORIES: [&str; 5] = ["Environnement", "Commerce", "Finance", "Justice", "Administration"];
const REVIEWERS: [&str; 4] = [
    "Dr. Amina Khelifi",
    "M. Karim Benaissa",
    "Dr. Leila Mansouri",
    "Mme. Fatima Benali",
];

/// Generate a reproducible queue of `n` items.
fn generate_items(n: usize) -> Vec<ReviewItem> {
    let mut rng = StdRng::seed_from_u64(42);

    (0..n)
        .map(|i| {
            let payload = if rng.gen_bool(0.6) {
                ExtractedData::legal_text("Loi", "Finance")
            } else {
                ExtractedData::procedure("Commerce", "Ministère du Commerce")
            };
            let status = *ReviewStatus::ALL.choose(&mut rng).unwrap_or(&ReviewStatus::Pending);
            let reviewer = status
                .allows_assignee()
                .then(|| *REVIEWERS.choose(&mut rng).unwrap_or(&REVIEWERS[0]));

            ReviewItem::new(format!("{}", i + 1), format!("Document extrait {}", i + 1), payload)
                .with_confidence(rng.gen_range(60..=100))
                .with_submitted_by("Système OCR-IA")
                .with_priority(*Priority::ALL.choose(&mut rng).unwrap_or(&Priority::Medium))
                .with_category(*CATEGORIES.choose(&mut rng).unwrap_or(&CATEGORIES[0]))
                .with_status(status, reviewer)
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    let criteria = FilterCriteria::new()
        .with_search("extrait 1")
        .with_category("Commerce")
        .with_priority(Priority::High);

    for size in [100, 1_000, 10_000] {
        let items = generate_items(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("faceted_search", size), &items, |b, items| {
            b.iter(|| filter(black_box(items), black_box(&criteria)))
        });
    }

    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for size in [100, 1_000, 10_000] {
        let items = generate_items(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("statistics", size), &items, |b, items| {
            b.iter(|| Statistics::aggregate(black_box(items)))
        });
    }

    group.finish();
}

fn bench_dashboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard");
    group.sample_size(20);

    for size in [1_000, 10_000] {
        let items = generate_items(size);
        group.bench_with_input(BenchmarkId::new("view", size), &items, |b, items| {
            let mut session = ReviewSession::from_items(items.clone(), QueueConfig::default())
                .expect("generated items are valid");
            session.set_search("document");
            session.set_page(3);
            b.iter(|| black_box(session.view()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter, bench_aggregate, bench_dashboard);
criterion_main!(benches);
