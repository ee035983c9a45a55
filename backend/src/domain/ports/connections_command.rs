//! Driving port for relationship requests.
//!
//! Both commands acknowledge unconditionally: unknown ids degrade to no-ops
//! and an empty identifier to the placeholder name rather than errors.

use async_trait::async_trait;

use crate::domain::{Error, MutationAck, UserId};

/// Domain use-case port for sending and answering invitations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionsCommand: Send + Sync {
    /// Invite someone by email or invite code.
    async fn invite_friend(&self, identifier: &str) -> Result<MutationAck, Error>;

    /// Mark the relationship with `user_id` as accepted.
    async fn accept_invite(&self, user_id: &UserId) -> Result<MutationAck, Error>;
}
