//! Review filtering by feature mention and sentiment category.

use crate::matcher;
use crate::prompt::SentimentKind;
use data_loader::{ProductId, Review};
use sentiment::SentimentScorer;
use tracing::debug;

/// Half-width of the neutral polarity band; both bounds are inclusive.
pub const NEUTRAL_BAND: f32 = 0.1;

/// A review that passed the filter, annotated with its polarity.
///
/// Derived and ephemeral: rows own their data, so producing them never
/// touches the input table.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredReview {
    pub product_id: ProductId,
    /// Polarity of the review text in [-1, 1]
    pub related_sentiment: f32,
    /// Absolute polarity, kept alongside for severity ranking
    pub abs_sentiment: f32,
}

/// Selects the reviews mentioning a feature whose polarity matches a
/// sentiment category.
pub struct ReviewFilter<'a> {
    scorer: &'a dyn SentimentScorer,
}

impl<'a> ReviewFilter<'a> {
    pub fn new(scorer: &'a dyn SentimentScorer) -> Self {
        Self { scorer }
    }

    /// Filter reviews for one feature and category.
    ///
    /// ## Algorithm
    /// For every review, in order:
    /// 1. Skip rows that do not mention the feature; they carry no
    ///    polarity and are excluded from every category
    /// 2. Score the text and keep the row if the polarity falls in the
    ///    requested category
    /// 3. Annotate kept rows with the absolute polarity
    ///
    /// Pure with respect to the input: calling this twice with the same
    /// arguments yields the same rows and scores.
    pub fn filter(
        &self,
        reviews: &[Review],
        feature: &str,
        kind: SentimentKind,
    ) -> Vec<ScoredReview> {
        let selected: Vec<ScoredReview> = reviews
            .iter()
            .filter_map(|review| {
                if !matcher::mentions(&review.review_text, feature) {
                    return None;
                }
                let polarity = self.scorer.score(&review.review_text);
                matches_kind(polarity, kind).then(|| ScoredReview {
                    product_id: review.product_id.clone(),
                    related_sentiment: polarity,
                    abs_sentiment: polarity.abs(),
                })
            })
            .collect();

        debug!(
            "Filter {:?}/{:?}: {} of {} reviews selected",
            feature,
            kind,
            selected.len(),
            reviews.len()
        );
        selected
    }
}

/// Category membership for a polarity value.
///
/// Positive and negative are strict (a 0.0 polarity is in neither); the
/// neutral band includes both of its bounds.
pub(crate) fn matches_kind(polarity: f32, kind: SentimentKind) -> bool {
    match kind {
        SentimentKind::Positive => polarity > 0.0,
        SentimentKind::Negative => polarity < 0.0,
        SentimentKind::Neutral => (-NEUTRAL_BAND..=NEUTRAL_BAND).contains(&polarity),
    }
}
