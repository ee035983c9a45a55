//! Driving port for login/authentication use-cases.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! authenticate credentials without knowing (or importing) the backing
//! infrastructure. The in-memory store implements it today; an HTTP client
//! can replace it with the same call shape.

use async_trait::async_trait;

use crate::domain::{Error, Session};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and open a session for the current user.
    ///
    /// Missing email or password yields [`crate::domain::ErrorCode::InvalidRequest`].
    async fn authenticate(&self, email: &str, password: &str) -> Result<Session, Error>;
}
