// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Identifier types and the identity-extraction seams.
use std::fmt;
use std::hash::Hash;

/// Strongly typed identifier for a topology node (device or network node).
///
/// Ids are opaque strings minted by the topology-discovery collaborator.
/// They are stable across time: the same value denotes the same real-world
/// entity in every snapshot, and property edits never reassign an id. A
/// dedicated wrapper prevents accidental mixing with interface or edge ids.
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Strongly typed identifier for an interface.
///
/// Interface ids live in their own id space, distinct from node ids: a
/// has-edge's `from` is always a [`NodeId`] and its `to` always an `IfaceId`.
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct IfaceId(pub String);

impl IfaceId {
    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IfaceId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Identifier for an edge (has-edge or link-edge).
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub String);

impl EdgeId {
    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EdgeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Identity extraction for reconcilable entities.
///
/// The reconciler matches entities across snapshots purely by identity,
/// never by field equality: two records with the same id are the same
/// logical entity at different points in time.
pub trait Identity {
    /// The id type this entity is keyed by.
    type Id: Eq + Hash;

    /// Returns the entity's identity.
    fn ident(&self) -> &Self::Id;
}

/// Endpoint extraction for edge-shaped entities.
///
/// Edge collections reconcile like any other collection, but additionally
/// participate in cascading exclusion: an edge cannot survive into a
/// reconstructed snapshot if either endpoint did not exist at that time.
/// The endpoint id spaces differ per edge kind (a has-edge points node →
/// interface, a link-edge interface → interface), hence the two associated
/// types.
pub trait EdgeEnds {
    /// Id space of the `from` endpoint.
    type FromId: Eq + Hash;
    /// Id space of the `to` endpoint.
    type ToId: Eq + Hash;

    /// Returns the `from` endpoint id.
    fn from_id(&self) -> &Self::FromId;
    /// Returns the `to` endpoint id.
    fn to_id(&self) -> &Self::ToId;
}
