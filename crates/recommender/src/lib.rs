//! Recommender crate for the PhoneRecs engine.
//!
//! This crate contains the service that coordinates prompt parsing,
//! filtering and ranking into a recommendation outcome, and the outcome
//! type itself.

pub mod recommendation;
pub mod service;

pub use recommendation::Recommendation;
pub use service::{DEFAULT_TOP_N, RecommendationService};
