// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Diff reconciliation: reverse-applying a discovery diff to recover the
//! snapshot that existed at an earlier backup.
//!
//! Reconciliation contract
//! - Entities that were *added* since the backup are removed (they did not
//!   exist then).
//! - Entities that were *deleted* since the backup are restored.
//! - Entities with a *change record* are rolled back to the record's `old`
//!   version.
//! - Edge collections additionally drop any current edge whose endpoint
//!   was added since the backup, so a reconstructed snapshot never carries
//!   an edge pointing at an entity that did not exist at that time
//!   (referential completeness).
//!
//! Every function here is a pure transform over caller-owned slices: no
//! I/O, no shared state, no interior mutability. Lookups go through
//! identity-index maps built once per call rather than repeated linear
//! scans, since snapshots can carry thousands of entities.
use rustc_hash::{FxHashMap, FxHashSet};

use crate::diff::{CollectionDiff, LayerDiff};
use crate::ident::{EdgeEnds, Identity, IfaceId, NodeId};
use crate::layer::Layer;
use crate::snapshot::LayerSnapshot;

/// Shared reverse-apply core over an already-filtered entity stream.
fn reconcile_from<'a, T, I>(current: I, diff: &CollectionDiff<T>) -> Vec<T>
where
    T: Identity + Clone + 'a,
    I: Iterator<Item = &'a T>,
{
    let added: FxHashSet<&T::Id> = diff.added.iter().map(Identity::ident).collect();

    // Rollback index keyed by the old version's identity. Two change
    // records sharing one identity is a programmer error upstream; the
    // release-mode behavior (last record wins) is undefined, not
    // supported.
    let mut rollback: FxHashMap<&T::Id, &T> = FxHashMap::default();
    for change in &diff.changed {
        let _previous = rollback.insert(change.old.ident(), &change.old);
        debug_assert!(
            _previous.is_none(),
            "duplicate change record for one identity"
        );
    }

    let mut out: Vec<T> = current
        .filter(|entity| !added.contains(entity.ident()))
        .cloned()
        .collect();
    out.extend(diff.deleted.iter().cloned());

    if !rollback.is_empty() {
        for entity in &mut out {
            if let Some(old) = rollback.get(entity.ident()).copied() {
                *entity = old.clone();
            }
        }
    }
    out
}

/// Reconstructs the historical entries of one collection.
///
/// Result order is current entities (minus added) followed by restored
/// deleted entities; callers must not rely on order beyond that. The
/// result is not deduplicated: duplicate identities in `current` or in
/// `diff.deleted` propagate unchanged.
#[must_use]
pub fn reconcile<T>(current: &[T], diff: &CollectionDiff<T>) -> Vec<T>
where
    T: Identity + Clone,
{
    reconcile_from(current.iter(), diff)
}

/// Reconstructs the historical entries of an edge collection, cascading
/// exclusions from the endpoint collections.
///
/// On top of the base reverse-apply, a current edge is excluded when its
/// `from` endpoint is in the upstream collection's added set or its `to`
/// endpoint is in the interface collection's added set — such an edge
/// cannot have existed at backup time because its endpoint did not.
///
/// The exclusion is computed against the already-materialized added sets
/// of the adjacent collections, not recursively against reconstructed
/// history. Restored (deleted) edges are trusted as-is: a diff that
/// deletes an endpoint without deleting the edge is malformed upstream
/// input and is not detected here; projection later degrades by dropping
/// the unresolvable edge.
#[must_use]
pub fn reconcile_edges<E>(
    current: &[E],
    diff: &CollectionDiff<E>,
    from_added: &FxHashSet<&E::FromId>,
    to_added: &FxHashSet<&E::ToId>,
) -> Vec<E>
where
    E: Identity + EdgeEnds + Clone,
{
    let kept = current
        .iter()
        .filter(|edge| !from_added.contains(edge.from_id()) && !to_added.contains(edge.to_id()));
    reconcile_from(kept, diff)
}

/// Reconstructs the historical snapshot of one layer.
///
/// Nodes and interfaces reconcile plainly; has-edges cascade from the
/// node and interface added sets, link-edges from the interface added set
/// on both ends. The same code path runs for every layer — the layers
/// differ only in detail payloads, never in algorithm.
#[must_use]
pub fn reconcile_layer<L: Layer>(
    current: &LayerSnapshot<L>,
    diff: &LayerDiff<L>,
) -> LayerSnapshot<L> {
    let node_added: FxHashSet<&NodeId> = diff.nodes.added.iter().map(|n| &n.id).collect();
    let iface_added: FxHashSet<&IfaceId> = diff.interfaces.added.iter().map(|i| &i.id).collect();

    LayerSnapshot {
        nodes: reconcile(&current.nodes, &diff.nodes),
        has: reconcile_edges(&current.has, &diff.has, &node_added, &iface_added),
        interfaces: reconcile(&current.interfaces, &diff.interfaces),
        links: reconcile_edges(&current.links, &diff.links, &iface_added, &iface_added),
    }
}
