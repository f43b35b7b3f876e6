// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Diff model: how a collection differs between two points in time.
//!
//! A diff is always read *backwards* here: topology discovery describes how
//! the current snapshot evolved out of an earlier backup, and the
//! reconciler applies that description in reverse to recover the backup.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layer::{collection_key, CollectionKind, Layer};
use crate::record::{HasRecord, IfaceRecord, LinkRecord, NodeRecord};

/// A property mutation of one logical entity between two points in time.
///
/// `old` and `new` share the same identity and differ in other fields. At
/// most one change record per identity may appear in a diff; violating
/// this is a programmer error upstream and the reconciled result is
/// undefined (guarded by a debug assertion when the rollback index is
/// built).
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ChangeRecord<T> {
    /// Version of the entity in the earlier (backup) snapshot.
    pub old: T,
    /// Version of the entity in the current snapshot.
    pub new: T,
}

/// Added/changed/deleted description for one collection.
///
/// Relative to the backup snapshot: `added` entities exist only currently,
/// `deleted` entities existed only in the backup, `changed` entities exist
/// in both with differing fields, and entities absent from all three sets
/// are unchanged.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct CollectionDiff<T> {
    /// Entities that exist only in the current snapshot.
    #[serde(default)]
    pub added: Vec<T>,
    /// Entities that exist in both snapshots with differing fields.
    #[serde(default)]
    pub changed: Vec<ChangeRecord<T>>,
    /// Entities that existed only in the backup snapshot.
    #[serde(default)]
    pub deleted: Vec<T>,
}

impl<T> CollectionDiff<T> {
    /// Creates a diff describing "nothing changed".
    #[must_use]
    pub fn empty() -> Self {
        Self {
            added: Vec::new(),
            changed: Vec::new(),
            deleted: Vec::new(),
        }
    }

    /// Returns `true` if the diff describes no change at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.changed.is_empty() && self.deleted.is_empty()
    }

    /// Per-kind entry counts.
    #[must_use]
    pub fn stats(&self) -> CollectionStats {
        CollectionStats {
            added: self.added.len(),
            changed: self.changed.len(),
            deleted: self.deleted.len(),
        }
    }
}

impl<T> Default for CollectionDiff<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// The four collection diffs of one layer.
///
/// One generic shape for every layer — the closed per-layer union the
/// wire format suggests (`PhyDiff | NetDiff | ...`) is deliberately not
/// modeled; see [`Layer`].
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct LayerDiff<L: Layer> {
    /// Node collection diff.
    pub nodes: CollectionDiff<NodeRecord<L::NodeDetail>>,
    /// Has-edge collection diff.
    pub has: CollectionDiff<HasRecord>,
    /// Interface collection diff.
    pub interfaces: CollectionDiff<IfaceRecord<L::IfaceDetail>>,
    /// Link-edge collection diff.
    pub links: CollectionDiff<LinkRecord>,
}

impl<L: Layer> LayerDiff<L> {
    /// Creates a diff describing "nothing changed" for every collection.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            nodes: CollectionDiff::empty(),
            has: CollectionDiff::empty(),
            interfaces: CollectionDiff::empty(),
            links: CollectionDiff::empty(),
        }
    }

    /// Returns `true` if no collection changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
            && self.has.is_empty()
            && self.interfaces.is_empty()
            && self.links.is_empty()
    }

    /// Per-collection entry counts, for inspection tooling.
    #[must_use]
    pub fn stats(&self) -> DiffStats {
        DiffStats {
            nodes: self.nodes.stats(),
            has: self.has.stats(),
            interfaces: self.interfaces.stats(),
            links: self.links.stats(),
        }
    }
}

impl<L: Layer> Default for LayerDiff<L> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Raw per-layer diff as delivered by topology discovery.
///
/// The wire payload is keyed by layer-qualified collection name and any
/// collection may be absent. Missing a required *collection* is fatal
/// (fail fast at this boundary, never partial output); missing a
/// *referenced entity inside* a collection is tolerated downstream.
#[derive(Clone, PartialEq, Debug)]
pub struct LayerDiffEnvelope<L: Layer> {
    /// Node collection diff, if the payload carried it.
    pub nodes: Option<CollectionDiff<NodeRecord<L::NodeDetail>>>,
    /// Has-edge collection diff, if present.
    pub has: Option<CollectionDiff<HasRecord>>,
    /// Interface collection diff, if present.
    pub interfaces: Option<CollectionDiff<IfaceRecord<L::IfaceDetail>>>,
    /// Link-edge collection diff, if present.
    pub links: Option<CollectionDiff<LinkRecord>>,
}

impl<L: Layer> LayerDiffEnvelope<L> {
    /// Promotes the raw payload to a [`LayerDiff`], failing fast on the
    /// first missing collection.
    pub fn into_diff(self) -> Result<LayerDiff<L>, ReconcileError> {
        let missing = |kind| ReconcileError::MissingCollection {
            layer: L::NAME,
            collection: collection_key::<L>(kind),
        };
        Ok(LayerDiff {
            nodes: self.nodes.ok_or_else(|| missing(CollectionKind::Device))?,
            has: self.has.ok_or_else(|| missing(CollectionKind::Has))?,
            interfaces: self
                .interfaces
                .ok_or_else(|| missing(CollectionKind::Interface))?,
            links: self.links.ok_or_else(|| missing(CollectionKind::Link))?,
        })
    }
}

impl<L: Layer> Default for LayerDiffEnvelope<L> {
    fn default() -> Self {
        Self {
            nodes: None,
            has: None,
            interfaces: None,
            links: None,
        }
    }
}

/// Entry counts for one collection diff.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CollectionStats {
    /// Count of added entities.
    pub added: usize,
    /// Count of change records.
    pub changed: usize,
    /// Count of deleted entities.
    pub deleted: usize,
}

/// Entry counts across the four collections of one layer diff.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DiffStats {
    /// Node collection counts.
    pub nodes: CollectionStats,
    /// Has-edge collection counts.
    pub has: CollectionStats,
    /// Interface collection counts.
    pub interfaces: CollectionStats,
    /// Link-edge collection counts.
    pub links: CollectionStats,
}

/// Errors emitted at the reconciliation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// The diff payload lacked a required collection.
    #[error("missing required collection `{collection}` in {layer} layer diff")]
    MissingCollection {
        /// Layer whose diff was incomplete.
        layer: &'static str,
        /// Layer-qualified key of the missing collection.
        collection: String,
    },
}
