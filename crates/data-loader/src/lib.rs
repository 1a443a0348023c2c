//! # Data Loader Crate
//!
//! This crate handles loading and indexing the phone review corpus.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Review, ProductStats, ReviewCorpus)
//! - **parser**: Parse the corpus CSV into Rust structs
//! - **index**: Build the product index and statistics
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::ReviewCorpus;
//! use std::path::Path;
//!
//! // Load the entire corpus
//! let corpus = ReviewCorpus::load_from_csv(Path::new("data/reviews.csv"))?;
//!
//! // Query data
//! let rows = corpus.product_rows("Pixel 6a");
//! let stats = corpus.get_product_stats("Pixel 6a").unwrap();
//!
//! println!("{} reviews for this product", stats.review_count);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    ProductId,
    // Core types
    Review,
    ReviewCorpus,
    ProductStats,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_corpus_creation() {
        // Test that we can create an empty ReviewCorpus
        let corpus = ReviewCorpus::new();
        let (reviews, products) = corpus.counts();

        assert_eq!(reviews, 0);
        assert_eq!(products, 0);
    }

    #[test]
    fn test_insert_review() {
        let mut corpus = ReviewCorpus::new();

        corpus.insert_review(Review {
            product_id: "Galaxy S21".to_string(),
            review_text: "The camera is excellent".to_string(),
        });

        let (reviews, products) = corpus.counts();
        assert_eq!(reviews, 1);
        assert_eq!(products, 1);
        assert_eq!(corpus.product_rows("Galaxy S21"), &[0]);
    }

    #[test]
    fn test_many_reviews_per_product() {
        let mut corpus = ReviewCorpus::new();

        for text in ["good camera", "bad battery", "great display"] {
            corpus.insert_review(Review {
                product_id: "Galaxy S21".to_string(),
                review_text: text.to_string(),
            });
        }
        corpus.insert_review(Review {
            product_id: "Pixel 6a".to_string(),
            review_text: "decent phone".to_string(),
        });

        let (reviews, products) = corpus.counts();
        assert_eq!(reviews, 4);
        assert_eq!(products, 2);
        assert_eq!(corpus.product_rows("Galaxy S21"), &[0, 1, 2]);
        assert_eq!(corpus.product_rows("Pixel 6a"), &[3]);
    }

    #[test]
    fn test_product_ids_first_appearance_order() {
        let mut corpus = ReviewCorpus::new();
        for id in ["b", "a", "b", "c", "a"] {
            corpus.insert_review(Review {
                product_id: id.to_string(),
                review_text: "ok".to_string(),
            });
        }

        let ids: Vec<&str> = corpus.product_ids().iter().map(|s| s.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_queries() {
        let corpus = ReviewCorpus::new();

        // Querying non-existent data should return None or empty slices
        assert!(corpus.reviews().is_empty());
        assert!(corpus.product_rows("missing").is_empty());
        assert!(corpus.get_product_stats("missing").is_none());
        assert!(corpus.product_ids().is_empty());
    }
}
