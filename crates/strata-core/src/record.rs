// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Topology entity records.
//!
//! All records are read-only value objects: reconciliation never mutates an
//! entity in place, it only recomputes whole collections from the current
//! snapshot and the diff. Records are generic over the layer-specific detail
//! payload where the four layers differ in shape (see [`crate::layer`]).
use serde::{Deserialize, Serialize};

use crate::ident::{EdgeEnds, EdgeId, Identity, IfaceId, NodeId};

/// Operational status reported by topology discovery.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    /// The entity is reachable and healthy.
    Ok,
    /// Discovery could not determine the entity's state.
    Unknown,
}

/// Layout coordinates assigned to a node for rendering.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Coordinates {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

/// A device or network node in one topology layer.
///
/// `D` is the layer's node detail payload ([`crate::layer::Layer::NodeDetail`]).
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct NodeRecord<D> {
    /// Stable opaque identity.
    pub id: NodeId,
    /// Display name; the projector joins against the inventory device
    /// directory by this name.
    pub name: String,
    /// Operational status.
    pub status: NodeStatus,
    /// Layout coordinates.
    pub coords: Coordinates,
    /// Layer-specific payload.
    pub detail: D,
}

/// An interface belonging to exactly one node (via a [`HasRecord`]).
///
/// `D` is the layer's interface detail payload
/// ([`crate::layer::Layer::IfaceDetail`]).
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct IfaceRecord<D> {
    /// Stable opaque identity.
    pub id: IfaceId,
    /// Display name, used to decorate projected edges.
    pub name: String,
    /// Operational status.
    pub status: NodeStatus,
    /// Layer-specific payload.
    pub detail: D,
}

/// Ownership edge connecting a node to one of its interfaces.
///
/// Invariant (referential completeness): in any well-formed snapshot both
/// the `from` node and the `to` interface are present in that same snapshot.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct HasRecord {
    /// Stable opaque identity.
    pub id: EdgeId,
    /// Owning node.
    pub from: NodeId,
    /// Owned interface.
    pub to: IfaceId,
    /// Optional status of the ownership relation itself.
    #[serde(default)]
    pub status: Option<NodeStatus>,
}

/// Adjacency edge connecting two interfaces.
///
/// Invariant (referential completeness): both endpoint interfaces are
/// present in the same snapshot.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Stable opaque identity.
    pub id: EdgeId,
    /// Source interface.
    pub from: IfaceId,
    /// Target interface.
    pub to: IfaceId,
    /// Optional routing weight or metric.
    #[serde(default)]
    pub weight: Option<i64>,
}

impl<D> Identity for NodeRecord<D> {
    type Id = NodeId;

    fn ident(&self) -> &NodeId {
        &self.id
    }
}

impl<D> Identity for IfaceRecord<D> {
    type Id = IfaceId;

    fn ident(&self) -> &IfaceId {
        &self.id
    }
}

impl Identity for HasRecord {
    type Id = EdgeId;

    fn ident(&self) -> &EdgeId {
        &self.id
    }
}

impl Identity for LinkRecord {
    type Id = EdgeId;

    fn ident(&self) -> &EdgeId {
        &self.id
    }
}

impl EdgeEnds for HasRecord {
    type FromId = NodeId;
    type ToId = IfaceId;

    fn from_id(&self) -> &NodeId {
        &self.from
    }

    fn to_id(&self) -> &IfaceId {
        &self.to
    }
}

impl EdgeEnds for LinkRecord {
    type FromId = IfaceId;
    type ToId = IfaceId;

    fn from_id(&self) -> &IfaceId {
        &self.from
    }

    fn to_id(&self) -> &IfaceId {
        &self.to
    }
}
