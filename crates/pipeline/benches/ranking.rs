//! Benchmarks for the ranking pipeline
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic corpus so the bench needs no data files on disk.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use data_loader::Review;
use pipeline::{FeatureSentiment, Ranker, SentimentKind};
use sentiment::LexiconScorer;

fn build_synthetic_reviews() -> Vec<Review> {
    let fragments = [
        "The camera is excellent and takes superb photos",
        "Terrible battery, it drains before lunch",
        "Display is average, nothing special",
        "Great performance, the processor never stutters",
        "The camera struggles badly in low light",
        "Battery easily lasts two days, very good",
        "Premium display with a smooth refresh rate",
        "Poor build quality, the design feels cheap",
    ];

    (0..800)
        .map(|i| Review {
            product_id: format!("product-{}", i % 40),
            review_text: fragments[i % fragments.len()].to_string(),
        })
        .collect()
}

fn bench_single_feature_rank(c: &mut Criterion) {
    let reviews = build_synthetic_reviews();
    let scorer = LexiconScorer::new();
    let ranker = Ranker::new(&scorer);

    c.bench_function("rank_single_feature", |b| {
        b.iter(|| {
            let ranked = ranker.rank(
                black_box(&reviews),
                black_box("camera"),
                SentimentKind::Positive,
                black_box(5),
            );
            black_box(ranked)
        })
    });
}

fn bench_combined_rank(c: &mut Criterion) {
    let reviews = build_synthetic_reviews();
    let scorer = LexiconScorer::new();
    let ranker = Ranker::new(&scorer);
    let requests = vec![
        FeatureSentiment {
            feature: "battery".to_string(),
            sentiment: SentimentKind::Negative,
        },
        FeatureSentiment {
            feature: "display".to_string(),
            sentiment: SentimentKind::Positive,
        },
    ];

    c.bench_function("rank_combined", |b| {
        b.iter(|| {
            let ranked = ranker.rank_combined(black_box(&reviews), black_box(&requests), black_box(5));
            black_box(ranked)
        })
    });
}

criterion_group!(benches, bench_single_feature_rank, bench_combined_rank);
criterion_main!(benches);
