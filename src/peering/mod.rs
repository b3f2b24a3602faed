//! Peering derivation module.
//!
//! Turns the ordered cluster list into the structures the Terraform renderer
//! consumes: one provider binding per distinct Consul address, and the
//! directed acceptor/dialer relationships between clusters.

pub mod types;
pub mod providers;
pub mod enumerate;

// Re-export key types and functions for easier access
pub use types::{PeeringRelationship, PeeringRole, ProviderBinding};
pub use providers::{derive_providers, normalize_address};
pub use enumerate::{enumerate_acceptors, enumerate_dialers, first_role_bound, peering_pairs};
