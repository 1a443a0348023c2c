//! Sentiment scoring for review and prompt text.
//!
//! This crate is the scoring seam of the engine: the pipeline is written
//! against the `SentimentScorer` trait, and the default implementation
//! delegates to the VADER lexicon analyzer. It handles:
//! - Polarity scoring of free text into [-1.0, 1.0]
//! - Degrading gracefully on empty or unanalyzable input
//!
//! Swapping in a different scorer (a remote model, a test stub) only
//! requires implementing the trait.

use vader_sentiment::SentimentIntensityAnalyzer;

/// Assigns a polarity score to a piece of text.
///
/// ## Contract
/// - The score is in [-1.0, 1.0]: positive means favorable tone, negative
///   unfavorable, 0.0 neutral.
/// - Deterministic for identical input text.
/// - Empty or unanalyzable text scores 0.0; scoring never fails.
///
/// ## Design Note
/// `Send + Sync` allows scorers to be shared behind an `Arc` or boxed into
/// a service that may be used from concurrent contexts.
pub trait SentimentScorer: Send + Sync {
    /// Score a piece of text.
    fn score(&self, text: &str) -> f32;
}

/// Default scorer backed by the VADER sentiment lexicon.
///
/// VADER's compound score is already normalized to [-1, 1]; it is clamped
/// anyway so the trait contract holds regardless of the analyzer version.
pub struct LexiconScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl LexiconScorer {
    /// Create a new scorer with the built-in lexicon.
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f32 {
        if text.trim().is_empty() {
            return 0.0;
        }

        let scores = self.analyzer.polarity_scores(text);
        let compound = scores.get("compound").copied().unwrap_or(0.0);
        (compound as f32).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorable_text_scores_positive() {
        let scorer = LexiconScorer::new();
        let score = scorer.score("The camera is excellent, I love this phone");
        assert!(score > 0.0, "expected positive polarity, got {}", score);
    }

    #[test]
    fn test_unfavorable_text_scores_negative() {
        let scorer = LexiconScorer::new();
        let score = scorer.score("Terrible battery, worst phone I have ever owned");
        assert!(score < 0.0, "expected negative polarity, got {}", score);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.score(""), 0.0);
        assert_eq!(scorer.score("   \t\n"), 0.0);
    }

    #[test]
    fn test_score_is_deterministic() {
        let scorer = LexiconScorer::new();
        let text = "average camera quality";
        assert_eq!(scorer.score(text), scorer.score(text));
    }

    #[test]
    fn test_score_stays_in_range() {
        let scorer = LexiconScorer::new();
        for text in [
            "best best best amazing wonderful excellent",
            "worst worst awful horrible terrible",
            "the phone has a screen",
            "1234 !!!",
        ] {
            let score = scorer.score(text);
            assert!(
                (-1.0..=1.0).contains(&score),
                "score {} for {:?} out of range",
                score,
                text
            );
        }
    }
}
