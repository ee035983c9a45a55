//! Driving port for whole-graph reads used by the graph view.

use async_trait::async_trait;

use crate::domain::{Error, GraphSnapshot, UserId};

/// Domain use-case port for graph snapshots and name lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SocialGraphQuery: Send + Sync {
    /// Copy of the roster and edges; pending edges only when asked for.
    async fn graph(&self, include_pending: bool) -> Result<GraphSnapshot, Error>;

    /// Display name for `user_id`, or the id itself when unknown.
    async fn resolve_user_name(&self, user_id: &UserId) -> Result<String, Error>;
}
