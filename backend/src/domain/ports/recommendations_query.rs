//! Driving port for "people you may know" suggestions.

use async_trait::async_trait;

use crate::domain::{Error, Recommendation, RecommendationFilter};

/// Domain use-case port for listing recommendations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationsQuery: Send + Sync {
    /// Return recommendations passing `filter`, in their stored order.
    async fn list_recommendations(
        &self,
        filter: &RecommendationFilter,
    ) -> Result<Vec<Recommendation>, Error>;
}
