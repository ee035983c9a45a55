//! Current-user-centric view of relationship requests.

use serde::{Deserialize, Serialize};

use crate::domain::{DisplayName, UserId};

/// Request state between the current user and a peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    /// Both sides are connected.
    Accepted,
    /// The peer asked; the current user has not answered.
    PendingIn,
    /// The current user asked; the peer has not answered.
    PendingOut,
}

/// One peer in the current user's connection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: UserId,
    pub name: DisplayName,
    pub status: ConnectionStatus,
}

/// Acknowledgement returned by fire-and-forget mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationAck {
    pub ok: bool,
}

impl MutationAck {
    /// The only acknowledgement the in-memory store produces.
    pub const OK: Self = Self { ok: true };
}
