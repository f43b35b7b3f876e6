// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Renderable graph representation consumed by the topology query layer.
//! Pure data (nodes, edges, payloads) with deterministic hashing.
use blake3::Hash;
use ciborium::ser::into_writer;
use serde::{Deserialize, Serialize};
use strata_core::{Coordinates, EdgeId, IfaceId, NodeId, NodeStatus};

/// Blake3 (or equivalent) state hash (32 bytes).
pub type Hash32 = [u8; 32];

/// Interface summary attached to a rendered node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfaceSummary {
    /// Interface identity.
    pub id: IfaceId,
    /// Display name.
    pub name: String,
    /// Operational status.
    pub status: NodeStatus,
}

/// One resolved end of a rendered edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointRef {
    /// Node the endpoint interface belongs to.
    pub node: NodeId,
    /// Endpoint interface.
    pub iface: IfaceId,
    /// Endpoint interface display name.
    pub iface_name: String,
}

/// Renderable node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderNode {
    /// Opaque graph id (`"{layer}:{node-id}"`).
    pub id: String,
    /// Persisted inventory device id this node was joined to.
    pub device_id: String,
    /// Display name.
    pub name: String,
    /// Operational status.
    pub status: NodeStatus,
    /// Layout coordinates.
    pub coords: Coordinates,
    /// Interfaces owned by this node, in snapshot order.
    pub interfaces: Vec<IfaceSummary>,
}

/// Renderable edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderEdge {
    /// Edge identity.
    pub id: EdgeId,
    /// Resolved source endpoint.
    pub source: EndpointRef,
    /// Resolved target endpoint.
    pub target: EndpointRef,
    /// Optional routing weight or metric.
    #[serde(default)]
    pub weight: Option<i64>,
}

/// Renderable graph: the projector's output for one layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderGraph {
    /// All nodes in the graph.
    pub nodes: Vec<RenderNode>,
    /// All edges in the graph.
    pub edges: Vec<RenderEdge>,
}

impl RenderGraph {
    /// Canonical serialization (sorted by id) for hashing/comparison.
    pub fn to_canonical_bytes(&self) -> Vec<u8> {
        let mut g = self.clone();
        g.nodes.sort_by(|a, b| a.id.cmp(&b.id));
        g.edges.sort_by(|a, b| {
            (&a.source.node, &a.target.node, &a.id).cmp(&(&b.source.node, &b.target.node, &b.id))
        });
        let mut bytes = Vec::new();
        into_writer(&g, &mut bytes).expect("canonical serialize");
        bytes
    }

    /// Compute blake3 hash of the canonical form.
    pub fn compute_hash(&self) -> Hash32 {
        let h: Hash = blake3::hash(&self.to_canonical_bytes());
        h.into()
    }
}
