//! Driving port for the current user's connection list.

use async_trait::async_trait;

use crate::domain::{Connection, Error};

/// Domain use-case port for listing connections.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionsQuery: Send + Sync {
    /// Return connections, most recent invitation first.
    async fn list_connections(&self) -> Result<Vec<Connection>, Error>;
}
