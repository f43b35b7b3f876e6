// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Property tests for diff reconciliation: roundtrip, idempotence, and
//! referential completeness of reconstructed snapshots.
use proptest::prelude::*;
use strata_core::layer::{Phy, PhyIfaceDetail, PhyNodeDetail};
use strata_core::{
    reconcile, reconcile_layer, ChangeRecord, CollectionDiff, Coordinates, HasRecord, IfaceRecord,
    LayerDiff, LayerSnapshot, LinkRecord, NodeRecord, NodeStatus,
};

type PhyNode = NodeRecord<PhyNodeDetail>;
type PhyIface = IfaceRecord<PhyIfaceDetail>;

fn node(id: &str, status: NodeStatus) -> PhyNode {
    NodeRecord {
        id: id.into(),
        name: id.to_owned(),
        status,
        coords: Coordinates::default(),
        detail: PhyNodeDetail::default(),
    }
}

fn iface(id: &str) -> PhyIface {
    IfaceRecord {
        id: id.into(),
        name: id.to_owned(),
        status: NodeStatus::Ok,
        detail: PhyIfaceDetail::default(),
    }
}

fn has(id: &str, from: &str, to: &str) -> HasRecord {
    HasRecord {
        id: id.into(),
        from: from.into(),
        to: to.into(),
        status: None,
    }
}

fn link(id: &str, from: &str, to: &str) -> LinkRecord {
    LinkRecord {
        id: id.into(),
        from: from.into(),
        to: to.into(),
        weight: None,
    }
}

fn sorted_nodes(mut nodes: Vec<PhyNode>) -> Vec<PhyNode> {
    nodes.sort_by(|a, b| a.id.cmp(&b.id));
    nodes
}

fn sorted_has(mut edges: Vec<HasRecord>) -> Vec<HasRecord> {
    edges.sort_by(|a, b| a.id.cmp(&b.id));
    edges
}

fn sorted_links(mut edges: Vec<LinkRecord>) -> Vec<LinkRecord> {
    edges.sort_by(|a, b| a.id.cmp(&b.id));
    edges
}

fn sorted_ifaces(mut ifaces: Vec<PhyIface>) -> Vec<PhyIface> {
    ifaces.sort_by(|a, b| a.id.cmp(&b.id));
    ifaces
}

// Entity fates in the forward evolution backup → current; any other tag
// means unchanged.
const DELETED: u8 = 1;
const CHANGED: u8 = 2;

proptest! {
    /// Forward-apply a synthetic diff to a backup collection, then check
    /// that reconciliation of the evolved collection recovers the backup
    /// under identity.
    #[test]
    fn roundtrip_recovers_backup_collection(
        base in prop::collection::hash_map(0u32..40, 0u8..3, 0..16),
        added in prop::collection::hash_set(40u32..60, 0..8),
    ) {
        let mut backup = Vec::new();
        let mut current = Vec::new();
        let mut diff = CollectionDiff::empty();

        for (&id, &fate) in &base {
            let label = format!("n{id}");
            match fate {
                DELETED => {
                    let old = node(&label, NodeStatus::Ok);
                    backup.push(old.clone());
                    diff.deleted.push(old);
                }
                CHANGED => {
                    let old = node(&label, NodeStatus::Unknown);
                    let new = node(&label, NodeStatus::Ok);
                    backup.push(old.clone());
                    current.push(new.clone());
                    diff.changed.push(ChangeRecord { old, new });
                }
                _ => {
                    let same = node(&label, NodeStatus::Ok);
                    backup.push(same.clone());
                    current.push(same);
                }
            }
        }
        for &id in &added {
            let fresh = node(&format!("n{id}"), NodeStatus::Ok);
            current.push(fresh.clone());
            diff.added.push(fresh);
        }

        let reconstructed = reconcile(&current, &diff);
        prop_assert_eq!(sorted_nodes(reconstructed), sorted_nodes(backup));
    }

    /// Reconciling against a diff that describes no change returns the
    /// current collection unchanged (duplicates included).
    #[test]
    fn empty_diff_is_identity(ids in prop::collection::vec(0u32..20, 0..24)) {
        let current: Vec<PhyNode> = ids
            .iter()
            .map(|id| node(&format!("n{id}"), NodeStatus::Ok))
            .collect();
        let out = reconcile(&current, &CollectionDiff::empty());
        prop_assert_eq!(out, current);
    }

    /// Build a referentially complete backup, evolve it by adding a
    /// subgraph, and sprinkle stray current edges that reference the
    /// freshly added endpoints without being recorded in any diff set.
    /// The cascade must exclude the strays: the reconstruction equals the
    /// backup and is referentially complete.
    #[test]
    fn cascade_keeps_reconstruction_referentially_complete(
        node_count in 1usize..5,
        added_count in 1usize..4,
        link_pairs in prop::collection::vec((0usize..16, 0usize..16), 0..6),
        stray_picks in prop::collection::vec((0usize..16, 0usize..8), 0..4),
    ) {
        // Backup: each node owns two interfaces; links wire arbitrary
        // interface pairs.
        let mut backup = LayerSnapshot::<Phy>::empty();
        let mut iface_ids = Vec::new();
        for n in 0..node_count {
            backup.nodes.push(node(&format!("n{n}"), NodeStatus::Ok));
            for side in ["a", "b"] {
                let iid = format!("i{n}{side}");
                backup.interfaces.push(iface(&iid));
                backup
                    .has
                    .push(has(&format!("h{n}{side}"), &format!("n{n}"), &iid));
                iface_ids.push(iid);
            }
        }
        for (k, (a, b)) in link_pairs.iter().enumerate() {
            backup.links.push(link(
                &format!("l{k}"),
                &iface_ids[a % iface_ids.len()],
                &iface_ids[b % iface_ids.len()],
            ));
        }
        prop_assert!(backup.referentially_complete());

        // Forward evolution: added_count fresh nodes, one interface each,
        // wired back into the old graph.
        let mut diff = LayerDiff::<Phy>::empty();
        let mut current = backup.clone();
        for j in 0..added_count {
            let n = node(&format!("x{j}"), NodeStatus::Ok);
            let i = iface(&format!("xi{j}"));
            let h = has(&format!("xh{j}"), &format!("x{j}"), &format!("xi{j}"));
            let l = link(&format!("xl{j}"), &format!("xi{j}"), &iface_ids[j % iface_ids.len()]);
            current.nodes.push(n.clone());
            current.interfaces.push(i.clone());
            current.has.push(h.clone());
            current.links.push(l.clone());
            diff.nodes.added.push(n);
            diff.interfaces.added.push(i);
            diff.has.added.push(h);
            diff.links.added.push(l);
        }

        // Strays: current edges touching added endpoints that the diff
        // never mentions. Only the cascade can keep them out of history.
        for (k, (a, j)) in stray_picks.iter().enumerate() {
            current.links.push(link(
                &format!("sl{k}"),
                &iface_ids[a % iface_ids.len()],
                &format!("xi{}", j % added_count),
            ));
        }
        current
            .has
            .push(has("sh0", "x0", &iface_ids[0]));

        let reconstructed = reconcile_layer(&current, &diff);
        prop_assert!(reconstructed.referentially_complete());
        prop_assert_eq!(sorted_nodes(reconstructed.nodes), sorted_nodes(backup.nodes));
        prop_assert_eq!(
            sorted_ifaces(reconstructed.interfaces),
            sorted_ifaces(backup.interfaces)
        );
        prop_assert_eq!(sorted_has(reconstructed.has), sorted_has(backup.has));
        prop_assert_eq!(sorted_links(reconstructed.links), sorted_links(backup.links));
    }
}
