//! Driving port for user profile queries.
//!
//! Inbound adapters use this port to load the signed-in user's profile
//! without importing storage details.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Domain use-case port for reading the current user's profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProfileQuery: Send + Sync {
    /// Return the full profile for the current user.
    async fn current_user(&self) -> Result<User, Error>;
}
