use serde::{Deserialize, Serialize};

use crate::utils::validation::{validate_cluster_fields, validate_peer_name_uniqueness};

/// One cluster taking part in the peering mesh
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClusterDescriptor {
    /// Name other clusters use to refer to this one as a peer
    pub peer_name: String,
    /// Consul API address, e.g. `consul-a.internal:8500`
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
}

impl ClusterDescriptor {
    pub fn new(peer_name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            peer_name: peer_name.into(),
            address: address.into(),
            partition: None,
        }
    }

    pub fn with_partition(mut self, partition: impl Into<String>) -> Self {
        self.partition = Some(partition.into());
        self
    }

    /// Admin partition of this cluster, `None` when absent or empty
    pub fn partition(&self) -> Option<&str> {
        self.partition.as_deref().filter(|p| !p.is_empty())
    }
}

/// Ordered list of clusters as read from the config file.
///
/// Order is significant: it decides which side of each pair acts as acceptor.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Config {
    pub clusters: Vec<ClusterDescriptor>,
}

impl Config {
    pub fn new(clusters: Vec<ClusterDescriptor>) -> Self {
        Self { clusters }
    }

    /// Validate the configuration.
    ///
    /// Problems such as repeated peer names are only reported as warnings;
    /// generation always proceeds with the clusters exactly as given.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_cluster_fields(&self.clusters);
        validate_peer_name_uniqueness(&self.clusters);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid cluster configuration: {0}")]
    InvalidCluster(String),
}
