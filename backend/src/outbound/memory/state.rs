//! Mutable graph state owned by [`super::SocialGraphStore`].
//!
//! All methods are synchronous; the store serialises access with a lock and
//! applies latency before calling in here.

use crate::domain::{
    Connection, DisplayName, Edge, EdgeStatus, GraphSnapshot, Recommendation,
    RecommendationFilter, SocialGraphSeed, User, UserId, UserPatch, UserValidationError,
};

/// Name given to invitees when the caller supplies no identifier.
pub const INVITED_FRIEND_NAME: &str = "Invited Friend";

#[derive(Debug, Clone)]
pub(crate) struct SocialGraphState {
    current_user_id: UserId,
    users: Vec<User>,
    edges: Vec<Edge>,
    recommendations: Vec<Recommendation>,
}

impl SocialGraphState {
    pub(crate) fn from_seed(seed: SocialGraphSeed) -> Self {
        let (current_user_id, users, edges, recommendations) = seed.into_parts();
        Self {
            current_user_id,
            users,
            edges,
            recommendations,
        }
    }

    pub(crate) fn current_user_id(&self) -> &UserId {
        &self.current_user_id
    }

    fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    /// Seeds guarantee the current user is in the roster.
    pub(crate) fn current_user(&self) -> Option<&User> {
        self.user(&self.current_user_id)
    }

    pub(crate) fn update_current_user(&mut self, patch: UserPatch) -> Option<User> {
        let me = self
            .users
            .iter_mut()
            .find(|user| user.id() == &self.current_user_id)?;
        me.apply_patch(patch);
        Some(me.clone())
    }

    /// Project edges touching the current user into connections.
    pub(crate) fn connections(&self) -> Vec<Connection> {
        let me = &self.current_user_id;
        self.edges
            .iter()
            .filter_map(|edge| {
                let status = edge.status_for(me)?;
                let peer = edge.peer_of(me)?;
                let name = match self.user(peer) {
                    Some(user) => user.name().clone(),
                    None => DisplayName::new(peer.as_ref()).ok()?,
                };
                Some(Connection {
                    id: peer.clone(),
                    name,
                    status,
                })
            })
            .collect()
    }

    pub(crate) fn recommendations(&self, filter: &RecommendationFilter) -> Vec<Recommendation> {
        self.recommendations
            .iter()
            .filter(|rec| filter.matches(rec))
            .cloned()
            .collect()
    }

    /// Add an invitee to the roster and put a pending request from the
    /// current user at the head of the edge list.
    pub(crate) fn invite(&mut self, identifier: &str) -> Result<UserId, UserValidationError> {
        let name = DisplayName::new(identifier)
            .or_else(|_| DisplayName::new(INVITED_FRIEND_NAME))?;
        let id = UserId::random();
        self.users.push(User::new(id.clone(), name));
        self.edges.insert(
            0,
            Edge::new(self.current_user_id.clone(), id.clone(), EdgeStatus::Pending),
        );
        Ok(id)
    }

    /// Accept every edge between the current user and `peer`.
    ///
    /// Returns `false` when no such edge exists; nothing changes then.
    pub(crate) fn accept(&mut self, peer: &UserId) -> bool {
        let me = &self.current_user_id;
        let mut matched = false;
        for edge in self.edges.iter_mut().filter(|edge| edge.joins(me, peer)) {
            edge.status = EdgeStatus::Accepted;
            matched = true;
        }
        matched
    }

    pub(crate) fn snapshot(&self, include_pending: bool) -> Option<GraphSnapshot> {
        let me = self.current_user()?.summary();
        let edges = self
            .edges
            .iter()
            .filter(|edge| include_pending || edge.status == EdgeStatus::Accepted)
            .cloned()
            .collect();
        Some(GraphSnapshot {
            me,
            users: self.users.clone(),
            edges,
        })
    }

    pub(crate) fn resolve_name(&self, id: &UserId) -> String {
        self.user(id)
            .map_or_else(|| id.to_string(), |user| user.name().to_string())
    }
}
