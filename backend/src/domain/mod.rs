//! Domain primitives and aggregates.
//!
//! Purpose: Define strongly typed values for the social graph: users,
//! relationship edges, the connection projection derived from them, and
//! seeded recommendations. Document invariants and serialisation contracts
//! (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — transport-agnostic error payload.
//! - User / UserPatch — profile record and its shallow-merge update.
//! - Edge / GraphSnapshot — authoritative relationship graph.
//! - Connection — current-user view of edges.
//! - Recommendation / RecommendationFilter — seeded suggestions.
//! - SocialGraphSeed — initial state injected into stores.

pub mod auth;
pub mod connection;
pub mod error;
pub mod graph;
pub mod ports;
pub mod recommendation;
pub mod seed;
pub mod user;

pub use self::auth::{LoginCredentials, LoginValidationError, Session};
pub use self::connection::{Connection, ConnectionStatus, MutationAck};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::graph::{Edge, EdgeStatus, GraphSnapshot};
pub use self::recommendation::{
    Recommendation, RecommendationFilter, RecommendationValidationError,
};
pub use self::seed::{SeedError, SocialGraphSeed};
pub use self::user::{DisplayName, User, UserId, UserPatch, UserSummary, UserValidationError};
