// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Canonical renderable graph for strata topology views.
//!
//! Takes a layer's collections — current or reconciled — and projects
//! them into the `{nodes, edges}` structure the topology query layer
//! serves, joined against the inventory device directory. Pure data plus
//! deterministic hashing; no I/O.

mod directory;
mod graph;
mod project;

pub use directory::{DeviceDirectory, DeviceRecord};
pub use graph::{EndpointRef, Hash32, IfaceSummary, RenderEdge, RenderGraph, RenderNode};
pub use project::project;
