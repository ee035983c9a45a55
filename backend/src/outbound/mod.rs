//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-lifetime social graph store with simulated latency,
//!   standing in for the remote API until one exists.
//!
//! Adapters translate between domain types and their backing representation.
//! Relationship rules live in the domain types they call.

pub mod memory;
