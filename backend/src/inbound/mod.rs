//! Inbound adapters that translate caller requests into domain port calls
//! while keeping transport details at the edge.
//!
//! The [`facade`] groups ports the way UI and transport layers consume them;
//! an HTTP or RPC adapter is expected to sit alongside it.

pub mod facade;

pub use facade::{AuthApi, GraphApi, ProfileApi, SocialGraphApi, SocialGraphPorts};
