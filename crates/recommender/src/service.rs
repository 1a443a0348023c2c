//! # Recommendation Service
//!
//! This module coordinates the whole recommendation pipeline:
//! 1. Parse the prompt into feature/sentiment requests
//! 2. Route to single- or multi-feature ranking
//! 3. Wrap the ordered product ids into a Recommendation outcome

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use data_loader::ReviewCorpus;
use pipeline::{PromptParser, Ranker, Vocabulary};
use sentiment::{LexiconScorer, SentimentScorer};

use crate::recommendation::Recommendation;

/// Number of products returned when the caller does not ask for a count.
pub const DEFAULT_TOP_N: usize = 5;

/// Main service that coordinates the recommendation pipeline.
pub struct RecommendationService {
    corpus: Arc<ReviewCorpus>,
    parser: PromptParser,
    scorer: Box<dyn SentimentScorer>,
}

impl RecommendationService {
    /// Create a service over a loaded corpus, with the default vocabulary
    /// and the lexicon scorer.
    pub fn new(corpus: Arc<ReviewCorpus>) -> Self {
        Self {
            corpus,
            parser: PromptParser::new(),
            scorer: Box::new(LexiconScorer::new()),
        }
    }

    /// Replace the vocabulary (builder pattern).
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.parser = PromptParser::with_vocabulary(vocabulary);
        self
    }

    /// Replace the scorer (builder pattern).
    pub fn with_scorer(mut self, scorer: impl SentimentScorer + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    /// The vocabulary the service parses prompts against.
    pub fn vocabulary(&self) -> &Vocabulary {
        self.parser.vocabulary()
    }

    /// Main entry point: recommend products for a free-text prompt.
    ///
    /// # Arguments
    /// * `prompt` - Free-text user preferences (e.g. "best camera")
    /// * `top_n` - Maximum number of products to return
    ///
    /// # Returns
    /// A `Recommendation` outcome; never an error for ordinary text.
    pub fn recommend(&self, prompt: &str, top_n: usize) -> Recommendation {
        let start = Instant::now();

        // Parse the prompt
        let requests = self.parser.parse(prompt);
        info!("Parsed {} feature request(s) from prompt", requests.len());
        if requests.is_empty() {
            return Recommendation::NoFeatureRecognized;
        }

        // Rank: one feature goes through the single-feature path, several
        // through the combined inner-join path
        let ranker = Ranker::new(self.scorer.as_ref());
        let reviews = self.corpus.reviews();
        let ranked = if requests.len() == 1 {
            let request = &requests[0];
            ranker.rank(reviews, &request.feature, request.sentiment, top_n)
        } else {
            ranker.rank_combined(reviews, &requests, top_n)
        };

        info!(
            "Ranked {} product(s) for {} feature(s) in {:.2?}",
            ranked.len(),
            requests.len(),
            start.elapsed()
        );

        if ranked.is_empty() {
            Recommendation::NoQualifyingProducts
        } else {
            Recommendation::Ranked(ranked)
        }
    }

    /// Recommend with the default top-N.
    pub fn recommend_default(&self, prompt: &str) -> Recommendation {
        self.recommend(prompt, DEFAULT_TOP_N)
    }
}
