//! Driving port for profile edits.

use async_trait::async_trait;

use crate::domain::{Error, User, UserPatch};

/// Domain use-case port for updating the current user's profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProfileCommand: Send + Sync {
    /// Shallow-merge `patch` into the current user and return the result.
    async fn update_current_user(&self, patch: UserPatch) -> Result<User, Error>;
}
