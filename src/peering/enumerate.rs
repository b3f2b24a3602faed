//! Acceptor/dialer relationship enumeration.
//!
//! Pairs are taken in index order. Only indices below `first_role_bound(n)`
//! act as acceptors, each paired with every later cluster as dialer. For
//! `n > 4` this leaves out pairs between the trailing clusters; existing
//! deployments depend on that shape, so it is reproduced as is.

use crate::config::ClusterDescriptor;
use crate::peering::providers::normalize_address;
use crate::peering::types::{PeeringRelationship, PeeringRole};

/// Number of leading clusters that act as acceptors: `n / 2 + 1`, capped at `n`
pub fn first_role_bound(n: usize) -> usize {
    (n / 2 + 1).min(n)
}

/// Index pairs `(acceptor, dialer)` with `acceptor < first_role_bound(n)` and
/// `dialer > acceptor`, in generation order.
///
/// # Examples
/// ```
/// use consul_peering_setup::peering::peering_pairs;
///
/// assert_eq!(peering_pairs(3), vec![(0, 1), (0, 2), (1, 2)]);
/// assert!(peering_pairs(1).is_empty());
/// ```
pub fn peering_pairs(n: usize) -> Vec<(usize, usize)> {
    (0..first_role_bound(n))
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .collect()
}

/// Relationships for the token-generating side of each pair
pub fn enumerate_acceptors(clusters: &[ClusterDescriptor]) -> Vec<PeeringRelationship> {
    peering_pairs(clusters.len())
        .into_iter()
        .map(|(i, j)| relationship(PeeringRole::Acceptor, &clusters[i], &clusters[j]))
        .collect()
}

/// Relationships for the token-consuming side of each pair
pub fn enumerate_dialers(clusters: &[ClusterDescriptor]) -> Vec<PeeringRelationship> {
    peering_pairs(clusters.len())
        .into_iter()
        .map(|(i, j)| relationship(PeeringRole::Dialer, &clusters[j], &clusters[i]))
        .collect()
}

fn relationship(
    role: PeeringRole,
    source: &ClusterDescriptor,
    target: &ClusterDescriptor,
) -> PeeringRelationship {
    PeeringRelationship {
        role,
        source: source.peer_name.clone(),
        target: target.peer_name.clone(),
        provider: normalize_address(&source.address),
        partition: source.partition().map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clusters(names: &[&str]) -> Vec<ClusterDescriptor> {
        names
            .iter()
            .map(|name| ClusterDescriptor::new(*name, format!("{}.consul:8500", name)))
            .collect()
    }

    #[test]
    fn test_bound() {
        assert_eq!(first_role_bound(0), 0);
        assert_eq!(first_role_bound(1), 1);
        assert_eq!(first_role_bound(2), 2);
        assert_eq!(first_role_bound(4), 3);
        assert_eq!(first_role_bound(5), 3);
        assert_eq!(first_role_bound(7), 4);
    }

    #[test]
    fn test_no_pairs_below_two() {
        assert!(enumerate_acceptors(&[]).is_empty());
        assert!(enumerate_dialers(&[]).is_empty());

        let one = clusters(&["a"]);
        assert!(enumerate_acceptors(&one).is_empty());
        assert!(enumerate_dialers(&one).is_empty());
    }

    #[test]
    fn test_two_clusters() {
        let mut list = clusters(&["a", "b"]);
        list[0].partition = Some("pa".to_string());

        let acceptors = enumerate_acceptors(&list);
        assert_eq!(acceptors, vec![PeeringRelationship {
            role: PeeringRole::Acceptor,
            source: "a".to_string(),
            target: "b".to_string(),
            provider: "aconsul8500".to_string(),
            partition: Some("pa".to_string()),
        }]);

        let dialers = enumerate_dialers(&list);
        assert_eq!(dialers, vec![PeeringRelationship {
            role: PeeringRole::Dialer,
            source: "b".to_string(),
            target: "a".to_string(),
            provider: "bconsul8500".to_string(),
            partition: None,
        }]);
    }

    #[test]
    fn test_four_clusters_is_complete() {
        assert_eq!(
            peering_pairs(4),
            vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        );
    }

    #[test]
    fn test_five_clusters_skips_trailing_pair() {
        let pairs = peering_pairs(5);
        assert_eq!(pairs, vec![
            (0, 1), (0, 2), (0, 3), (0, 4),
            (1, 2), (1, 3), (1, 4),
            (2, 3), (2, 4),
        ]);
        assert!(!pairs.contains(&(3, 4)));

        let names: Vec<_> = enumerate_acceptors(&clusters(&["a", "b", "c", "d", "e"]))
            .iter()
            .map(PeeringRelationship::resource_name)
            .collect();
        assert!(!names.contains(&"d-to-e".to_string()));
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn test_dialers_mirror_acceptors() {
        let list = clusters(&["a", "b", "c", "d", "e", "f"]);
        let acceptors = enumerate_acceptors(&list);
        let dialers = enumerate_dialers(&list);

        assert_eq!(acceptors.len(), dialers.len());
        for (acceptor, dialer) in acceptors.iter().zip(&dialers) {
            assert_eq!(acceptor.source, dialer.target);
            assert_eq!(acceptor.target, dialer.source);
            assert_eq!(dialer.reverse_resource_name(), acceptor.resource_name());
        }
    }
}
