// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Layer snapshot: the four collections of one layer at one point in time.
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::ident::{IfaceId, NodeId};
use crate::layer::Layer;
use crate::record::{HasRecord, IfaceRecord, LinkRecord, NodeRecord};

/// A named bundle of the four collections of one layer.
///
/// Snapshots are immutable inputs and outputs of reconciliation; no entity
/// in them has independent persistence. Collection order is preserved
/// as supplied by the caller — the engine neither sorts nor deduplicates.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct LayerSnapshot<L: Layer> {
    /// Device/network nodes.
    pub nodes: Vec<NodeRecord<L::NodeDetail>>,
    /// Node→interface ownership edges.
    pub has: Vec<HasRecord>,
    /// Interfaces.
    pub interfaces: Vec<IfaceRecord<L::IfaceDetail>>,
    /// Interface→interface adjacency edges.
    pub links: Vec<LinkRecord>,
}

impl<L: Layer> LayerSnapshot<L> {
    /// Creates a snapshot with no entities.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            has: Vec::new(),
            interfaces: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Returns `true` if every collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
            && self.has.is_empty()
            && self.interfaces.is_empty()
            && self.links.is_empty()
    }

    /// Checks referential completeness: every has-edge endpoint and every
    /// link-edge endpoint is present in this snapshot's node/interface
    /// collections.
    ///
    /// Reconciliation guarantees this holds for its output whenever the
    /// supplied diff is internally consistent; the check is primarily a
    /// test and debugging aid.
    #[must_use]
    pub fn referentially_complete(&self) -> bool {
        let nodes: FxHashSet<&NodeId> = self.nodes.iter().map(|n| &n.id).collect();
        let ifaces: FxHashSet<&IfaceId> = self.interfaces.iter().map(|i| &i.id).collect();
        self.has
            .iter()
            .all(|h| nodes.contains(&h.from) && ifaces.contains(&h.to))
            && self
                .links
                .iter()
                .all(|l| ifaces.contains(&l.from) && ifaces.contains(&l.to))
    }
}

impl<L: Layer> Default for LayerSnapshot<L> {
    fn default() -> Self {
        Self::empty()
    }
}
