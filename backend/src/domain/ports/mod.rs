//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Every port is implemented by
//! [`crate::outbound::memory::SocialGraphStore`]; transport adapters depend
//! only on these traits.

mod connections_command;
mod connections_query;
mod login_service;
mod recommendations_query;
mod social_graph_query;
mod user_profile_command;
mod user_profile_query;

pub use connections_command::ConnectionsCommand;
#[cfg(test)]
pub use connections_command::MockConnectionsCommand;
pub use connections_query::ConnectionsQuery;
#[cfg(test)]
pub use connections_query::MockConnectionsQuery;
pub use login_service::LoginService;
#[cfg(test)]
pub use login_service::MockLoginService;
#[cfg(test)]
pub use recommendations_query::MockRecommendationsQuery;
pub use recommendations_query::RecommendationsQuery;
#[cfg(test)]
pub use social_graph_query::MockSocialGraphQuery;
pub use social_graph_query::SocialGraphQuery;
#[cfg(test)]
pub use user_profile_command::MockUserProfileCommand;
pub use user_profile_command::UserProfileCommand;
#[cfg(test)]
pub use user_profile_query::MockUserProfileQuery;
pub use user_profile_query::UserProfileQuery;
