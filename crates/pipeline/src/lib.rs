//! Core feature-sentiment pipeline for product recommendations.
//!
//! This crate provides:
//! - Vocabulary: injected feature/phrase word lists
//! - PromptParser for turning free text into (feature, sentiment) requests
//! - ReviewFilter for selecting reviews by feature mention and polarity
//! - Ranker for ordering products by aggregated sentiment
//!
//! ## Architecture
//! The pipeline processes a request in stages:
//! 1. PromptParser extracts the requested features and desired sentiment
//! 2. ReviewFilter selects the qualifying reviews per feature
//! 3. Ranker aggregates per product and orders the results, either for a
//!    single feature or across several features combined
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{PromptParser, Ranker, SentimentKind};
//! use sentiment::LexiconScorer;
//!
//! let scorer = LexiconScorer::new();
//! let requests = PromptParser::new().parse("best camera");
//!
//! let ranker = Ranker::new(&scorer);
//! let top = ranker.rank(corpus.reviews(), &requests[0].feature,
//!                       requests[0].sentiment, 5);
//! ```

pub mod vocabulary;
pub mod prompt;
pub mod matcher;
pub mod filter;
pub mod ranker;

// Re-export main types
pub use vocabulary::Vocabulary;
pub use prompt::{FeatureSentiment, PromptParser, SentimentKind};
pub use filter::{NEUTRAL_BAND, ReviewFilter, ScoredReview};
pub use ranker::Ranker;
