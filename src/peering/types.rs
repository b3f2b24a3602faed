//! Derived peering data types.

use std::fmt;

/// A named `consul` provider configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderBinding {
    /// Address exactly as written in the first cluster that used it
    pub address: String,
    /// Normalized address used as the provider alias
    pub alias: String,
}

/// Which side of a peering a relationship describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeeringRole {
    /// Generates the peering token
    Acceptor,
    /// Establishes the peering using the acceptor's token
    Dialer,
}

impl fmt::Display for PeeringRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Acceptor => write!(f, "acceptor"),
            Self::Dialer => write!(f, "dialer"),
        }
    }
}

/// A directed peering from `source` to `target`.
///
/// The resource is created in the source cluster, through the source's
/// provider alias and in the source's partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeeringRelationship {
    pub role: PeeringRole,
    pub source: String,
    pub target: String,
    pub provider: String,
    pub partition: Option<String>,
}

impl PeeringRelationship {
    /// Terraform resource name, `{source}-to-{target}`
    pub fn resource_name(&self) -> String {
        format!("{}-to-{}", self.source, self.target)
    }

    /// Name of the relationship in the opposite direction, `{target}-to-{source}`.
    ///
    /// For a dialer this is the peering token resource it consumes.
    pub fn reverse_resource_name(&self) -> String {
        format!("{}-to-{}", self.target, self.source)
    }
}
