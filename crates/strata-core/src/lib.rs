// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! strata-core: multi-layer topology diff reconciliation engine.
//!
//! Given the *current* snapshot of one topology layer and the diff that
//! describes how it evolved out of an earlier backup, this crate
//! reconstructs the snapshot as it existed at that backup — a pure,
//! stateless reverse-apply over four mutually-referencing collections
//! (nodes, has-edges, interfaces, link-edges), with cascading
//! referential-integrity rules for the edge collections.
//!
//! The four layers (physical, IP/OSPF, PTP, SyncE) share one generic code
//! path; see [`layer::Layer`].
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::use_self
)]

mod diff;
mod ident;
/// Layer markers and per-layer detail payloads.
pub mod layer;
mod reconcile;
mod record;
mod snapshot;

// Re-exports for stable public API
/// Diff model: per-collection added/changed/deleted plus per-layer bundles.
pub use diff::{
    ChangeRecord, CollectionDiff, CollectionStats, DiffStats, LayerDiff, LayerDiffEnvelope,
    ReconcileError,
};
/// Identifier newtypes and identity/endpoint extraction traits.
pub use ident::{EdgeEnds, EdgeId, Identity, IfaceId, NodeId};
/// Layer seam: marker types and wire-key helpers.
pub use layer::{collection_key, CollectionKind, Layer, Net, Phy, Ptp, Synce};
/// Reverse-apply reconciliation over collections, edges, and whole layers.
pub use reconcile::{reconcile, reconcile_edges, reconcile_layer};
/// Entity value objects shared by every layer.
pub use record::{Coordinates, HasRecord, IfaceRecord, LinkRecord, NodeRecord, NodeStatus};
/// Immutable per-layer snapshot bundle.
pub use snapshot::LayerSnapshot;
