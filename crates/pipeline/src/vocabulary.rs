//! Feature and sentiment-phrase vocabularies.
//!
//! The prompt parser works off fixed word lists: the product features it can
//! recognize and the phrases that signal what the user wants from them. They
//! are injected configuration rather than embedded constants, so tests and
//! deployments can swap in alternate vocabularies.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Word lists driving prompt interpretation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Product feature names recognized in prompts and review text
    pub features: Vec<String>,
    /// Phrases indicating the user wants the feature to be good
    pub positive_phrases: Vec<String>,
    /// Phrases indicating the user wants to avoid bad examples
    pub negative_phrases: Vec<String>,
    /// Phrases asking for middle-of-the-road behavior
    pub neutral_phrases: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            features: words(&[
                "camera",
                "battery",
                "display",
                "performance",
                "design",
                "mobile",
                "phone",
                "RAM",
                "storage",
                "charger",
                "processor",
                "5G",
                "refresh rate",
                "build quality",
            ]),
            positive_phrases: words(&[
                "best", "good", "high", "quality", "excellent", "superior", "premium",
            ]),
            negative_phrases: words(&["worst", "bad", "poor", "low", "terrible", "underwhelming"]),
            neutral_phrases: words(&["average", "medium", "normal", "decent", "adequate"]),
        }
    }
}

impl Vocabulary {
    /// Load an alternate vocabulary from a JSON file.
    ///
    /// Expected shape mirrors the struct:
    /// `{"features": [...], "positive_phrases": [...], ...}`
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read vocabulary file {}", path.display()))?;
        let vocabulary = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse vocabulary file {}", path.display()))?;
        Ok(vocabulary)
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}
