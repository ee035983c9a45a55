//! Service facade grouping the social graph ports.
//!
//! Callers hold one [`SocialGraphApi`] and reach operations through its
//! `auth`, `graph`, and `profile` groups. Swapping the in-memory store for a
//! remote client only changes how [`SocialGraphPorts`] is built.

use std::sync::Arc;

use crate::domain::ports::{
    ConnectionsCommand, ConnectionsQuery, LoginService, RecommendationsQuery, SocialGraphQuery,
    UserProfileCommand, UserProfileQuery,
};
use crate::domain::{
    Connection, Error, GraphSnapshot, MutationAck, Recommendation, RecommendationFilter, Session,
    User, UserId, UserPatch,
};
use crate::outbound::memory::SocialGraphStore;

/// Parameter object bundling all port implementations.
#[derive(Clone)]
pub struct SocialGraphPorts {
    /// Credential exchange.
    pub login: Arc<dyn LoginService>,
    /// Current-user profile reads.
    pub profile: Arc<dyn UserProfileQuery>,
    /// Current-user profile writes.
    pub profile_command: Arc<dyn UserProfileCommand>,
    /// Connection list projection.
    pub connections: Arc<dyn ConnectionsQuery>,
    /// Invitations and acceptances.
    pub connections_command: Arc<dyn ConnectionsCommand>,
    /// Seeded suggestions.
    pub recommendations: Arc<dyn RecommendationsQuery>,
    /// Graph snapshots and name lookups.
    pub graph: Arc<dyn SocialGraphQuery>,
}

impl SocialGraphPorts {
    /// Back every port with the same store.
    pub fn in_memory(store: SocialGraphStore) -> Self {
        let store = Arc::new(store);
        Self {
            login: store.clone(),
            profile: store.clone(),
            profile_command: store.clone(),
            connections: store.clone(),
            connections_command: store.clone(),
            recommendations: store.clone(),
            graph: store,
        }
    }
}

/// Session operations.
#[derive(Clone)]
pub struct AuthApi {
    login: Arc<dyn LoginService>,
}

impl AuthApi {
    /// Exchange credentials for a session token.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, Error> {
        self.login.authenticate(email, password).await
    }
}

/// Relationship and discovery operations.
#[derive(Clone)]
pub struct GraphApi {
    connections: Arc<dyn ConnectionsQuery>,
    connections_command: Arc<dyn ConnectionsCommand>,
    recommendations: Arc<dyn RecommendationsQuery>,
    graph: Arc<dyn SocialGraphQuery>,
}

impl GraphApi {
    /// Recommendations passing `filter`, in seed order.
    pub async fn recommendations(
        &self,
        filter: &RecommendationFilter,
    ) -> Result<Vec<Recommendation>, Error> {
        self.recommendations.list_recommendations(filter).await
    }

    /// Connections projected from the current user's edges.
    pub async fn connections(&self) -> Result<Vec<Connection>, Error> {
        self.connections.list_connections().await
    }

    /// Send a friend request to `identifier` (name, email, or handle).
    pub async fn invite_friend(&self, identifier: &str) -> Result<MutationAck, Error> {
        self.connections_command.invite_friend(identifier).await
    }

    /// Accept the request between the current user and `user_id`.
    pub async fn accept_invite(&self, user_id: &UserId) -> Result<MutationAck, Error> {
        self.connections_command.accept_invite(user_id).await
    }

    /// Whole-graph snapshot for the graph view.
    pub async fn graph(&self, include_pending: bool) -> Result<GraphSnapshot, Error> {
        self.graph.graph(include_pending).await
    }

    /// Display name for `user_id`, or the raw id when unknown.
    pub async fn user_name(&self, user_id: &UserId) -> Result<String, Error> {
        self.graph.resolve_user_name(user_id).await
    }
}

/// Current-user profile operations.
#[derive(Clone)]
pub struct ProfileApi {
    query: Arc<dyn UserProfileQuery>,
    command: Arc<dyn UserProfileCommand>,
}

impl ProfileApi {
    /// Full profile of the signed-in user.
    pub async fn me(&self) -> Result<User, Error> {
        self.query.current_user().await
    }

    /// Shallow-merge `patch` into the current profile.
    pub async fn update_me(&self, patch: UserPatch) -> Result<User, Error> {
        self.command.update_current_user(patch).await
    }
}

/// Entry point handed to UI and transport layers.
#[derive(Clone)]
pub struct SocialGraphApi {
    /// Sign-in.
    pub auth: AuthApi,
    /// Connections, recommendations, and the graph view.
    pub graph: GraphApi,
    /// Current-user profile.
    pub profile: ProfileApi,
}

impl SocialGraphApi {
    /// Group `ports` into the facade.
    pub fn new(ports: SocialGraphPorts) -> Self {
        let SocialGraphPorts {
            login,
            profile,
            profile_command,
            connections,
            connections_command,
            recommendations,
            graph,
        } = ports;
        Self {
            auth: AuthApi { login },
            graph: GraphApi {
                connections,
                connections_command,
                recommendations,
                graph,
            },
            profile: ProfileApi {
                query: profile,
                command: profile_command,
            },
        }
    }

    /// Facade over a single in-memory store.
    pub fn in_memory(store: SocialGraphStore) -> Self {
        Self::new(SocialGraphPorts::in_memory(store))
    }
}

impl From<SocialGraphPorts> for SocialGraphApi {
    fn from(ports: SocialGraphPorts) -> Self {
        Self::new(ports)
    }
}
