//! Backend library for the Six Degree social graph.
//!
//! The domain types and ports live in [`domain`]; [`outbound::memory`]
//! provides the in-memory store that implements every port, and
//! [`inbound::facade`] groups the ports for UI and transport callers.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod settings;

pub use inbound::SocialGraphApi;
pub use outbound::memory::SocialGraphStore;
pub use settings::StoreSettings;
