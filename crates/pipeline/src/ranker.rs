//! Product ranking from filtered review sets.
//!
//! Two modes:
//! - Single feature: group the filtered rows by product, average, order.
//! - Combined: one aggregate per requested feature, inner-joined on the
//!   product id, summed into a total score.

use crate::filter::{ReviewFilter, ScoredReview, matches_kind};
use crate::matcher;
use crate::prompt::{FeatureSentiment, SentimentKind};
use data_loader::{ProductId, Review};
use sentiment::SentimentScorer;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Per-product aggregate used for ordering.
#[derive(Debug, Clone, PartialEq)]
struct ProductRanking {
    product_id: ProductId,
    average_sentiment: f32,
}

/// Ranks products by aggregated review sentiment.
pub struct Ranker<'a> {
    scorer: &'a dyn SentimentScorer,
}

impl<'a> Ranker<'a> {
    pub fn new(scorer: &'a dyn SentimentScorer) -> Self {
        Self { scorer }
    }

    /// Rank products for a single feature.
    ///
    /// ## Algorithm
    /// 1. Filter reviews for the feature and category
    /// 2. Group by product; average the signed polarity, except for the
    ///    negative category which averages the absolute severity
    /// 3. Sort: positive/neutral descending (strongest average first);
    ///    negative ascending (least average severity first)
    /// 4. Truncate to top_n
    ///
    /// Grouping preserves first-appearance order and the sort is stable, so
    /// products tied on the average keep corpus order.
    #[instrument(skip(self, reviews), fields(reviews = reviews.len()))]
    pub fn rank(
        &self,
        reviews: &[Review],
        feature: &str,
        kind: SentimentKind,
        top_n: usize,
    ) -> Vec<ProductId> {
        let rows = ReviewFilter::new(self.scorer).filter(reviews, feature, kind);
        let mut rankings = aggregate(&rows, kind);

        match kind {
            SentimentKind::Negative => rankings.sort_by(|a, b| {
                a.average_sentiment
                    .partial_cmp(&b.average_sentiment)
                    .unwrap_or(Ordering::Equal)
            }),
            _ => rankings.sort_by(|a, b| {
                b.average_sentiment
                    .partial_cmp(&a.average_sentiment)
                    .unwrap_or(Ordering::Equal)
            }),
        }
        rankings.truncate(top_n);

        debug!("Ranked {} product(s) for feature {:?}", rankings.len(), feature);
        rankings.into_iter().map(|r| r.product_id).collect()
    }

    /// Rank products across several features combined.
    ///
    /// ## Algorithm
    /// 1. For each (feature, category), group qualifying reviews by product
    ///    and take the signed mean polarity (signed even for negative
    ///    categories, unlike the single-feature mode)
    /// 2. Inner-join the per-feature aggregates: a product survives only if
    ///    it has at least one qualifying review for every feature
    /// 3. Sum the per-feature means into a total score, sort descending,
    ///    truncate to top_n
    ///
    /// Polarity depends only on the review text, so each row is scored at
    /// most once per call and the value is reused across features.
    #[instrument(skip(self, reviews, requests), fields(reviews = reviews.len(), features = requests.len()))]
    pub fn rank_combined(
        &self,
        reviews: &[Review],
        requests: &[FeatureSentiment],
        top_n: usize,
    ) -> Vec<ProductId> {
        let mut score_cache: Vec<Option<f32>> = vec![None; reviews.len()];
        // (product, running total), ordered by the first feature's grouping.
        let mut combined: Vec<(ProductId, f32)> = Vec::new();

        for (i, request) in requests.iter().enumerate() {
            let per_feature = self.feature_means(reviews, request, &mut score_cache);
            debug!(
                "Feature {:?}/{:?}: {} product(s) qualify",
                request.feature,
                request.sentiment,
                per_feature.len()
            );

            if i == 0 {
                combined = per_feature;
            } else {
                // Inner join: products missing from this feature's aggregate
                // drop out entirely.
                let lookup: HashMap<ProductId, f32> = per_feature.into_iter().collect();
                combined = combined
                    .into_iter()
                    .filter_map(|(product_id, total)| {
                        lookup.get(&product_id).map(|mean| (product_id, total + mean))
                    })
                    .collect();
            }

            if combined.is_empty() {
                break; // No product can survive the remaining joins
            }
        }

        combined.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        combined.truncate(top_n);

        debug!("Combined ranking holds {} product(s)", combined.len());
        combined.into_iter().map(|(product_id, _)| product_id).collect()
    }

    /// Per-product signed mean polarity for one feature request.
    ///
    /// Returned in first-appearance order of the qualifying products.
    fn feature_means(
        &self,
        reviews: &[Review],
        request: &FeatureSentiment,
        score_cache: &mut [Option<f32>],
    ) -> Vec<(ProductId, f32)> {
        // (product, sum, count), with a position index for O(1) lookups
        let mut agg: Vec<(ProductId, f32, u32)> = Vec::new();
        let mut positions: HashMap<ProductId, usize> = HashMap::new();

        for (row, review) in reviews.iter().enumerate() {
            if !matcher::mentions(&review.review_text, &request.feature) {
                continue;
            }
            let polarity =
                *score_cache[row].get_or_insert_with(|| self.scorer.score(&review.review_text));
            if !matches_kind(polarity, request.sentiment) {
                continue;
            }

            let i = *positions.entry(review.product_id.clone()).or_insert_with(|| {
                agg.push((review.product_id.clone(), 0.0, 0));
                agg.len() - 1
            });
            agg[i].1 += polarity;
            agg[i].2 += 1;
        }

        agg.into_iter()
            .map(|(product_id, sum, count)| (product_id, sum / count as f32))
            .collect()
    }
}

/// Group filtered rows by product and average them.
///
/// The averaged column depends on the category: negative rankings average
/// the absolute severity, everything else the signed polarity.
fn aggregate(rows: &[ScoredReview], kind: SentimentKind) -> Vec<ProductRanking> {
    let mut agg: Vec<(ProductId, f32, u32)> = Vec::new();
    let mut positions: HashMap<ProductId, usize> = HashMap::new();

    for row in rows {
        let value = match kind {
            SentimentKind::Negative => row.abs_sentiment,
            _ => row.related_sentiment,
        };

        let i = *positions.entry(row.product_id.clone()).or_insert_with(|| {
            agg.push((row.product_id.clone(), 0.0, 0));
            agg.len() - 1
        });
        agg[i].1 += value;
        agg[i].2 += 1;
    }

    agg.into_iter()
        .map(|(product_id, sum, count)| ProductRanking {
            product_id,
            average_sentiment: sum / count as f32,
        })
        .collect()
}
