pub mod client;
pub mod error;
pub mod feed;
pub mod schema;

use async_trait::async_trait;

use crate::model::Comic;

pub use client::GeminiClient;
pub use feed::{RecommendationFeed, SearchState, Ticket};

/// Produces comic suggestions for a free-text query.
///
/// Never fails: every error is reported as an empty list.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(&self, query: &str) -> Vec<Comic>;
}
