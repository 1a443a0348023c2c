//! Core domain types for the review corpus.
//!
//! This module defines the fundamental data structures used throughout the
//! system: the review record, per-product statistics, and the ReviewCorpus
//! that owns the loaded data and its indices.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of a product as it appears in the corpus.
///
/// Not unique per row: many reviews share one product id.
pub type ProductId = String;

// =============================================================================
// Review Type
// =============================================================================

/// A single product review.
///
/// Immutable input: the pipeline only ever reads these and derives
/// annotated copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub product_id: ProductId,
    pub review_text: String,
}

// =============================================================================
// Statistics Types
// =============================================================================

/// Precomputed statistics for a product.
///
/// These are computed once when loading data for fast lookups later
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProductStats {
    pub review_count: u32,
}

// =============================================================================
// ReviewCorpus - The Core In-Memory Table
// =============================================================================

/// Main data structure that holds the loaded reviews and indices.
///
/// Reviews keep their on-disk order; the product index maps each product id
/// to the row positions of its reviews (also in on-disk order).
#[derive(Debug)]
pub struct ReviewCorpus {
    /// All reviews, in corpus order
    pub(crate) reviews: Vec<Review>,

    /// Row positions of each product's reviews
    pub(crate) product_rows: HashMap<ProductId, Vec<usize>>,

    // Precomputed statistics
    pub(crate) product_stats: HashMap<ProductId, ProductStats>,
}

impl ReviewCorpus {
    /// Creates a new, empty ReviewCorpus
    pub fn new() -> Self {
        Self {
            reviews: Vec::new(),
            product_rows: HashMap::new(),
            product_stats: HashMap::new(),
        }
    }

    // Getters - these return references, not owned values

    /// All reviews in corpus order
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Row positions of a product's reviews
    ///
    /// Returns an empty slice if the product is unknown
    pub fn product_rows(&self, product_id: &str) -> &[usize] {
        self.product_rows
            .get(product_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Get precomputed statistics for a product
    pub fn get_product_stats(&self, product_id: &str) -> Option<&ProductStats> {
        self.product_stats.get(product_id)
    }

    /// Distinct product ids, in first-appearance order
    pub fn product_ids(&self) -> Vec<&ProductId> {
        let mut seen = std::collections::HashSet::new();
        self.reviews
            .iter()
            .map(|r| &r.product_id)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    // Mutators - used during data loading

    /// Insert a review and update the product index
    pub fn insert_review(&mut self, review: Review) {
        let row = self.reviews.len();
        self.product_rows
            .entry(review.product_id.clone())
            .or_default()
            .push(row);
        self.reviews.push(review);
    }

    /// Get counts for debugging/validation: (reviews, distinct products)
    pub fn counts(&self) -> (usize, usize) {
        (self.reviews.len(), self.product_rows.len())
    }
}

// Implement Default trait for convenience
impl Default for ReviewCorpus {
    fn default() -> Self {
        Self::new()
    }
}
