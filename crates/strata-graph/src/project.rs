// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Graph projection: turning a layer's collections (current or
//! reconciled) into the renderable node/edge graph.
//!
//! Projection degrades, it never fails: a topology node missing from the
//! inventory directory is omitted, and an edge whose endpoints cannot be
//! resolved through iface → owner → rendered node is dropped while every
//! resolvable edge is still emitted. Partial topology data yields a
//! smaller graph, not an error.
use rustc_hash::{FxHashMap, FxHashSet};

use strata_core::{HasRecord, IfaceId, IfaceRecord, Layer, LayerSnapshot, NodeId};

use crate::directory::DeviceDirectory;
use crate::graph::{EndpointRef, IfaceSummary, RenderEdge, RenderGraph, RenderNode};

/// Interface → owning node index derived from the has-edges.
///
/// Tie-break: when multiple has-edges claim the same interface, the last
/// writer in iteration order wins. This is a defined, tested behavior of
/// the projection, not an accident of map construction.
fn iface_owner_index(has: &[HasRecord]) -> FxHashMap<&IfaceId, &NodeId> {
    let mut owner_of = FxHashMap::default();
    for edge in has {
        owner_of.insert(&edge.to, &edge.from);
    }
    owner_of
}

/// Resolves a link endpoint down to a rendered node, or `None` when any
/// step of the chain (owner, rendered set, interface record) is missing.
fn resolve_endpoint<D>(
    iface: &IfaceId,
    owner_of: &FxHashMap<&IfaceId, &NodeId>,
    ifaces: &FxHashMap<&IfaceId, &IfaceRecord<D>>,
    rendered: &FxHashSet<&NodeId>,
) -> Option<EndpointRef> {
    let owner = owner_of.get(iface).copied()?;
    if !rendered.contains(owner) {
        return None;
    }
    let record = ifaces.get(iface).copied()?;
    Some(EndpointRef {
        node: owner.clone(),
        iface: iface.clone(),
        iface_name: record.name.clone(),
    })
}

/// Projects a layer snapshot into the renderable graph, joining topology
/// nodes to inventory devices by display name.
///
/// The same function serves present-day views (projecting the current
/// snapshot) and historical views (projecting a reconciled one).
#[must_use]
pub fn project<L: Layer>(snapshot: &LayerSnapshot<L>, directory: &DeviceDirectory) -> RenderGraph {
    let owner_of = iface_owner_index(&snapshot.has);
    let iface_by_id: FxHashMap<&IfaceId, &IfaceRecord<L::IfaceDetail>> =
        snapshot.interfaces.iter().map(|i| (&i.id, i)).collect();

    // Group each interface under its owning node, preserving snapshot
    // order inside each group. Interfaces without an owner decorate
    // nothing and resolve no edges.
    let mut summaries: FxHashMap<&NodeId, Vec<IfaceSummary>> = FxHashMap::default();
    for record in &snapshot.interfaces {
        if let Some(owner) = owner_of.get(&record.id).copied() {
            summaries.entry(owner).or_default().push(IfaceSummary {
                id: record.id.clone(),
                name: record.name.clone(),
                status: record.status,
            });
        }
    }

    let mut rendered: FxHashSet<&NodeId> = FxHashSet::default();
    let mut nodes = Vec::with_capacity(snapshot.nodes.len());
    for record in &snapshot.nodes {
        let Some(device) = directory.by_name(&record.name) else {
            continue;
        };
        rendered.insert(&record.id);
        nodes.push(RenderNode {
            id: format!("{}:{}", L::NAME, record.id),
            device_id: device.device_id.clone(),
            name: record.name.clone(),
            status: record.status,
            coords: record.coords,
            interfaces: summaries.remove(&record.id).unwrap_or_default(),
        });
    }

    let mut edges = Vec::new();
    for link in &snapshot.links {
        let Some(source) = resolve_endpoint(&link.from, &owner_of, &iface_by_id, &rendered) else {
            continue;
        };
        let Some(target) = resolve_endpoint(&link.to, &owner_of, &iface_by_id, &rendered) else {
            continue;
        };
        edges.push(RenderEdge {
            id: link.id.clone(),
            source,
            target,
            weight: link.weight,
        });
    }

    RenderGraph { nodes, edges }
}
