//! Shared utilities: configuration consistency checks.

pub mod validation;

pub use validation::{validate_cluster_fields, validate_peer_name_uniqueness};
