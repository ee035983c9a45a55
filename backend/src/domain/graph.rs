//! Relationship graph: edges between any two users and snapshot views.
//!
//! Edges are the single source of truth for relationships. The current
//! user's [`Connection`] list is derived from them, never stored separately.

use serde::{Deserialize, Serialize};

use crate::domain::{ConnectionStatus, User, UserId, UserSummary};

/// Relationship state of an [`Edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeStatus {
    Accepted,
    Pending,
}

/// Undirected relationship between two users.
///
/// Storage is asymmetric: for a pending edge `a` is the requester and `b`
/// the recipient. Accepted edges carry no direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub a: UserId,
    pub b: UserId,
    pub status: EdgeStatus,
}

impl Edge {
    /// Build an edge.
    pub fn new(a: UserId, b: UserId, status: EdgeStatus) -> Self {
        Self { a, b, status }
    }

    /// Whether `user` is one of the endpoints.
    pub fn touches(&self, user: &UserId) -> bool {
        &self.a == user || &self.b == user
    }

    /// The endpoint opposite `user`, if `user` is on this edge.
    pub fn peer_of(&self, user: &UserId) -> Option<&UserId> {
        if &self.a == user {
            Some(&self.b)
        } else if &self.b == user {
            Some(&self.a)
        } else {
            None
        }
    }

    /// Whether this edge joins `x` and `y`, in either direction.
    pub fn joins(&self, x: &UserId, y: &UserId) -> bool {
        (&self.a == x && &self.b == y) || (&self.a == y && &self.b == x)
    }

    /// Connection status of this edge as seen from `viewer`.
    ///
    /// Returns `None` when `viewer` is not an endpoint.
    pub fn status_for(&self, viewer: &UserId) -> Option<ConnectionStatus> {
        if !self.touches(viewer) {
            return None;
        }
        let status = match self.status {
            EdgeStatus::Accepted => ConnectionStatus::Accepted,
            EdgeStatus::Pending if &self.a == viewer => ConnectionStatus::PendingOut,
            EdgeStatus::Pending => ConnectionStatus::PendingIn,
        };
        Some(status)
    }
}

/// Point-in-time copy of the graph handed to callers.
///
/// Every collection is owned; mutating a snapshot never reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSnapshot {
    pub me: UserSummary,
    pub users: Vec<User>,
    pub edges: Vec<Edge>,
}
