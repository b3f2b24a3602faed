//! Configuration validation utilities.
//!
//! These checks never reject a configuration. They only report problems that
//! are likely to produce Terraform that fails to apply, so the generated
//! output stays identical for any config that parses.

use crate::config::ClusterDescriptor;
use std::collections::HashMap;

/// Warn about clusters with an empty peer name or address.
///
/// Returns the number of problems found.
pub fn validate_cluster_fields(clusters: &[ClusterDescriptor]) -> usize {
    let mut problems = 0;

    for (index, cluster) in clusters.iter().enumerate() {
        if cluster.peer_name.trim().is_empty() {
            log::warn!("Cluster at index {} has an empty peer_name", index);
            problems += 1;
        }
        if cluster.address.trim().is_empty() {
            log::warn!(
                "Cluster '{}' (index {}) has an empty address; its provider alias will be empty",
                cluster.peer_name, index
            );
            problems += 1;
        }
    }

    problems
}

/// Warn about peer names used by more than one cluster.
///
/// Repeated names produce Terraform resources with colliding addresses.
/// Returns the repeated names in order of first appearance.
///
/// # Examples
/// ```
/// use consul_peering_setup::config::ClusterDescriptor;
/// use consul_peering_setup::utils::validation::validate_peer_name_uniqueness;
///
/// let clusters = vec![
///     ClusterDescriptor::new("dc1", "10.0.0.1"),
///     ClusterDescriptor::new("dc2", "10.0.0.2"),
///     ClusterDescriptor::new("dc1", "10.0.0.3"),
/// ];
/// assert_eq!(validate_peer_name_uniqueness(&clusters), vec!["dc1".to_string()]);
/// ```
pub fn validate_peer_name_uniqueness(clusters: &[ClusterDescriptor]) -> Vec<String> {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut duplicates = Vec::new();

    for (index, cluster) in clusters.iter().enumerate() {
        match first_seen.get(cluster.peer_name.as_str()) {
            Some(&first) => {
                log::warn!(
                    "Peer name '{}' is used by clusters at index {} and {}",
                    cluster.peer_name, first, index
                );
                if !duplicates.contains(&cluster.peer_name) {
                    duplicates.push(cluster.peer_name.clone());
                }
            }
            None => {
                first_seen.insert(cluster.peer_name.as_str(), index);
            }
        }
    }

    duplicates
}
