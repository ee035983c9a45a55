//! In-memory social graph store.
//!
//! Holds one current user, a roster, the relationship edges, and seeded
//! recommendations for the lifetime of the handle. Every port call first
//! awaits [`SimulatedLatency`], then takes the state lock and applies its
//! read or write in one synchronous step. Concurrent writers therefore
//! resolve last-write-wins in completion order, each write atomic.

mod latency;
mod state;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::ports::{
    ConnectionsCommand, ConnectionsQuery, LoginService, RecommendationsQuery, SocialGraphQuery,
    UserProfileCommand, UserProfileQuery,
};
use crate::domain::{
    Connection, Error, GraphSnapshot, LoginCredentials, MutationAck, Recommendation,
    RecommendationFilter, Session, SocialGraphSeed, User, UserId, UserPatch,
};

pub use latency::SimulatedLatency;
pub use state::INVITED_FRIEND_NAME;

use state::SocialGraphState;

/// Opaque token handed out by [`LoginService::authenticate`].
pub const MOCK_SESSION_TOKEN: &str = "mock_token_123";

/// Cloneable handle to one in-memory graph; clones share state.
///
/// # Examples
/// ```
/// use six_degree_backend::domain::SocialGraphSeed;
/// use six_degree_backend::domain::ports::ConnectionsQuery;
/// use six_degree_backend::outbound::memory::{SimulatedLatency, SocialGraphStore};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let store = SocialGraphStore::new(SocialGraphSeed::builtin().unwrap())
///     .with_latency(SimulatedLatency::NONE);
/// let connections = store.list_connections().await.unwrap();
/// assert_eq!(connections.len(), 3);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SocialGraphStore {
    state: Arc<RwLock<SocialGraphState>>,
    latency: SimulatedLatency,
}

impl SocialGraphStore {
    /// Build a store from `seed` with the default latency.
    pub fn new(seed: SocialGraphSeed) -> Self {
        Self {
            state: Arc::new(RwLock::new(SocialGraphState::from_seed(seed))),
            latency: SimulatedLatency::default(),
        }
    }

    /// Override the simulated latency.
    #[must_use]
    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    /// Latency applied before every operation.
    pub fn latency(&self) -> SimulatedLatency {
        self.latency
    }

    fn missing_current_user(id: &UserId) -> Error {
        Error::internal(format!("current user '{id}' is missing from the roster"))
    }
}

#[async_trait]
impl LoginService for SocialGraphStore {
    async fn authenticate(&self, email: &str, password: &str) -> Result<Session, Error> {
        self.latency.wait().await;
        let credentials = LoginCredentials::try_from_parts(email, password)?;

        let state = self.state.read().await;
        let me = state
            .current_user()
            .ok_or_else(|| Self::missing_current_user(state.current_user_id()))?;
        debug!(email = credentials.email(), user_id = %me.id(), "session issued");
        Ok(Session {
            token: MOCK_SESSION_TOKEN.to_owned(),
            user: me.summary(),
        })
    }
}

#[async_trait]
impl UserProfileQuery for SocialGraphStore {
    async fn current_user(&self) -> Result<User, Error> {
        self.latency.wait().await;
        let state = self.state.read().await;
        state
            .current_user()
            .cloned()
            .ok_or_else(|| Self::missing_current_user(state.current_user_id()))
    }
}

#[async_trait]
impl UserProfileCommand for SocialGraphStore {
    async fn update_current_user(&self, patch: UserPatch) -> Result<User, Error> {
        self.latency.wait().await;
        let mut state = self.state.write().await;
        let updated = state
            .update_current_user(patch)
            .ok_or_else(|| Self::missing_current_user(state.current_user_id()))?;
        info!(user_id = %updated.id(), "profile updated");
        Ok(updated)
    }
}

#[async_trait]
impl ConnectionsQuery for SocialGraphStore {
    async fn list_connections(&self) -> Result<Vec<Connection>, Error> {
        self.latency.wait().await;
        let connections = self.state.read().await.connections();
        debug!(count = connections.len(), "connections listed");
        Ok(connections)
    }
}

#[async_trait]
impl ConnectionsCommand for SocialGraphStore {
    async fn invite_friend(&self, identifier: &str) -> Result<MutationAck, Error> {
        self.latency.wait().await;
        let invited = self
            .state
            .write()
            .await
            .invite(identifier)
            .map_err(|err| Error::internal(format!("invalid invitee name: {err}")))?;
        info!(user_id = %invited, "invitation sent");
        Ok(MutationAck::OK)
    }

    async fn accept_invite(&self, user_id: &UserId) -> Result<MutationAck, Error> {
        self.latency.wait().await;
        if self.state.write().await.accept(user_id) {
            info!(user_id = %user_id, "invitation accepted");
        } else {
            debug!(user_id = %user_id, "no relationship to accept; ignoring");
        }
        Ok(MutationAck::OK)
    }
}

#[async_trait]
impl RecommendationsQuery for SocialGraphStore {
    async fn list_recommendations(
        &self,
        filter: &RecommendationFilter,
    ) -> Result<Vec<Recommendation>, Error> {
        self.latency.wait().await;
        let recommendations = self.state.read().await.recommendations(filter);
        debug!(
            max_degrees = filter.max_degrees,
            city = filter.city.as_deref(),
            count = recommendations.len(),
            "recommendations listed"
        );
        Ok(recommendations)
    }
}

#[async_trait]
impl SocialGraphQuery for SocialGraphStore {
    async fn graph(&self, include_pending: bool) -> Result<GraphSnapshot, Error> {
        self.latency.wait().await;
        let state = self.state.read().await;
        state
            .snapshot(include_pending)
            .ok_or_else(|| Self::missing_current_user(state.current_user_id()))
    }

    async fn resolve_user_name(&self, user_id: &UserId) -> Result<String, Error> {
        self.latency.wait().await;
        Ok(self.state.read().await.resolve_name(user_id))
    }
}

#[cfg(test)]
mod tests;
