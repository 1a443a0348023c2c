//! ReviewCorpus building and indexing logic.
//!
//! This module builds the ReviewCorpus from parsed data:
//! - Insert reviews, building the product index
//! - Compute aggregate statistics per product
//! - Validate corpus integrity

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::path::Path;

impl ReviewCorpus {
    /// Load the review corpus from a CSV file.
    ///
    /// This is the main entry point for loading data.
    ///
    /// Steps:
    /// 1. Parse the file into Review records
    /// 2. Insert them, building the product index as we go
    /// 3. Compute per-product statistics
    /// 4. Validate corpus integrity
    pub fn load_from_csv(path: &Path) -> Result<Self> {
        println!("Loading review corpus from {:?}", path);

        let reviews = parser::parse_reviews(path)?;
        println!("Parsed {} reviews", reviews.len());

        let mut corpus = ReviewCorpus::new();
        for review in reviews {
            corpus.insert_review(review);
        }

        corpus.compute_product_stats();
        corpus.validate()?;

        let (review_count, product_count) = corpus.counts();
        println!(
            "ReviewCorpus successfully built: {} reviews across {} products",
            review_count, product_count
        );
        Ok(corpus)
    }

    /// Compute aggregate statistics for all products.
    ///
    /// The per-product work is independent, so it runs in parallel with
    /// Rayon's par_iter.
    pub fn compute_product_stats(&mut self) {
        let product_stats = self
            .product_rows
            .par_iter()
            .map(|(product_id, rows)| {
                (
                    product_id.clone(),
                    ProductStats {
                        review_count: rows.len() as u32,
                    },
                )
            })
            .collect();
        self.product_stats = product_stats;
    }

    /// Validate corpus integrity.
    ///
    /// Check that:
    /// - No product id is empty
    /// - Every indexed row position points at an existing review
    ///
    /// Returns Ok(()) if valid, Err if any issues found
    pub fn validate(&self) -> Result<()> {
        for (product_id, rows) in &self.product_rows {
            if product_id.trim().is_empty() {
                return Err(DataLoadError::InvalidValue {
                    field: "product_id".to_string(),
                    value: product_id.clone(),
                });
            }
            for &row in rows {
                if row >= self.reviews.len() {
                    return Err(DataLoadError::ValidationError(format!(
                        "Product {} references row {} beyond corpus size {}",
                        product_id,
                        row,
                        self.reviews.len()
                    )));
                }
            }
        }
        Ok(())
    }
}
