//! Prompt parsing: free text to (feature, desired sentiment) requests.

use crate::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Desired sentiment category for a requested feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentKind {
    Positive,
    Negative,
    Neutral,
}

/// One requested feature with its desired sentiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSentiment {
    pub feature: String,
    pub sentiment: SentimentKind,
}

/// Extracts feature/sentiment requests from a free-text prompt.
pub struct PromptParser {
    vocabulary: Vocabulary,
}

impl PromptParser {
    /// Create a parser with the default vocabulary.
    pub fn new() -> Self {
        Self {
            vocabulary: Vocabulary::default(),
        }
    }

    /// Create a parser with an injected vocabulary.
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// The vocabulary this parser matches against.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Parse a prompt into requested features, in vocabulary order.
    ///
    /// ## Algorithm
    /// 1. Lower-case the prompt and split it into clauses (on commas,
    ///    semicolons and the word "and")
    /// 2. For each vocabulary feature mentioned anywhere in the prompt,
    ///    classify the clause containing it: the first phrase category with
    ///    a match wins, positive before negative before neutral
    /// 3. A clause with no sentiment phrase falls back to the whole prompt;
    ///    a feature with no phrase match anywhere is dropped, not defaulted
    ///
    /// Each feature appears at most once, and result order is vocabulary
    /// order rather than prompt order.
    pub fn parse(&self, prompt: &str) -> Vec<FeatureSentiment> {
        let prompt_lower = prompt.to_lowercase();
        let clauses = split_clauses(&prompt_lower);

        let mut requests = Vec::new();
        for feature in &self.vocabulary.features {
            let feature_lower = feature.to_lowercase();
            if !prompt_lower.contains(&feature_lower) {
                continue;
            }

            // Classify against the feature's own clause first, the whole
            // prompt second.
            let scope = clauses.iter().find(|clause| clause.contains(&feature_lower));
            let sentiment = scope
                .and_then(|clause| self.classify(clause))
                .or_else(|| self.classify(&prompt_lower));

            if let Some(sentiment) = sentiment {
                requests.push(FeatureSentiment {
                    feature: feature.clone(),
                    sentiment,
                });
            }
        }

        debug!(
            "Parsed {} feature request(s) from prompt ({} clause(s))",
            requests.len(),
            clauses.len()
        );
        requests
    }

    /// First phrase category present in the text wins:
    /// positive beats negative beats neutral.
    fn classify(&self, text: &str) -> Option<SentimentKind> {
        if contains_any(text, &self.vocabulary.positive_phrases) {
            Some(SentimentKind::Positive)
        } else if contains_any(text, &self.vocabulary.negative_phrases) {
            Some(SentimentKind::Negative)
        } else if contains_any(text, &self.vocabulary.neutral_phrases) {
            Some(SentimentKind::Neutral)
        } else {
            None
        }
    }
}

impl Default for PromptParser {
    fn default() -> Self {
        Self::new()
    }
}

fn contains_any(text: &str, phrases: &[String]) -> bool {
    phrases.iter().any(|phrase| text.contains(&phrase.to_lowercase()))
}

/// Split a lower-cased prompt into clauses.
fn split_clauses(prompt: &str) -> Vec<String> {
    prompt
        .replace(" and ", ",")
        .split([',', ';'])
        .map(|clause| clause.trim().to_string())
        .filter(|clause| !clause.is_empty())
        .collect()
}
