//! Provider alias derivation.

use crate::config::ClusterDescriptor;
use crate::peering::types::ProviderBinding;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> = LazyLock::new(||
    Regex::new(r"[^0-9A-Za-z_]").expect("Invalid non-word regex")
);

/// Strip every character that is not an ASCII letter, digit or underscore.
///
/// # Examples
/// ```
/// use consul_peering_setup::peering::normalize_address;
///
/// assert_eq!(normalize_address("host.name:99"), "hostname99");
/// assert_eq!(normalize_address("10.0.0.1"), normalize_address("10-0-0-1"));
/// ```
pub fn normalize_address(address: &str) -> String {
    NON_WORD.replace_all(address, "").into_owned()
}

/// Build one provider binding per distinct normalized address.
///
/// Bindings keep the order in which their alias first appears, and the first
/// cluster's address string is the one kept for display.
pub fn derive_providers(clusters: &[ClusterDescriptor]) -> Vec<ProviderBinding> {
    let mut seen = HashSet::new();
    let mut providers = Vec::new();

    for cluster in clusters {
        let alias = normalize_address(&cluster.address);
        if seen.insert(alias.clone()) {
            providers.push(ProviderBinding {
                address: cluster.address.clone(),
                alias,
            });
        } else {
            log::debug!(
                "Cluster '{}' reuses provider alias '{}'",
                cluster.peer_name, alias
            );
        }
    }

    providers
}
