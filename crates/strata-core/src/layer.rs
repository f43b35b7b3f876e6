// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Topology layers and their detail payloads.
//!
//! The four layers (physical cabling, IP/OSPF, PTP timing, SyncE timing)
//! carry structurally identical Node/Interface/Has/Link collections and
//! differ only in payload fields. A layer is therefore a compile-time
//! marker implementing [`Layer`], and every algorithm in this crate is one
//! generic function instantiated per marker — never four hand-written
//! copies.
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A topology layer: wire-name prefix plus the layer's detail payloads.
pub trait Layer: fmt::Debug + Copy + Clone + PartialEq + Eq + 'static {
    /// Prefix used in layer-qualified collection keys (`"Phy"`, `"Net"`,
    /// `"Ptp"`, `"Synce"`).
    const NAME: &'static str;

    /// Node detail payload for this layer.
    type NodeDetail: Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned;
    /// Interface detail payload for this layer.
    type IfaceDetail: Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned;
}

/// The collection kinds of one layer, in cascade order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CollectionKind {
    /// Node collection (`{layer}Device` on the wire).
    Device,
    /// Node→interface ownership edges (`{layer}Has`).
    Has,
    /// Interface collection (`{layer}Interface`).
    Interface,
    /// Interface→interface adjacency edges (`{layer}Link`).
    Link,
}

impl CollectionKind {
    /// Returns the wire-key suffix for this collection kind.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Device => "Device",
            Self::Has => "Has",
            Self::Interface => "Interface",
            Self::Link => "Link",
        }
    }
}

/// Returns the layer-qualified collection key used by topology discovery,
/// e.g. `PhyDevice`, `SynceLink`.
#[must_use]
pub fn collection_key<L: Layer>(kind: CollectionKind) -> String {
    format!("{}{}", L::NAME, kind.suffix())
}

/// Physical-cabling layer marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phy {}

/// IP/OSPF layer marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Net {}

/// PTP timing layer marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ptp {}

/// SyncE timing layer marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Synce {}

/// Node payload for the physical layer.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct PhyNodeDetail {
    /// Software version reported by the device.
    #[serde(default)]
    pub sw_version: Option<String>,
    /// Hardware model string.
    #[serde(default)]
    pub device_model: Option<String>,
}

/// Interface payload for the physical layer (no extra fields today).
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct PhyIfaceDetail {}

/// Node payload for the IP/OSPF layer.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct NetNodeDetail {
    /// OSPF router id.
    #[serde(default)]
    pub router_id: Option<String>,
}

/// Interface payload for the IP/OSPF layer.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct NetIfaceDetail {
    /// Interface IP address.
    #[serde(default)]
    pub ip_address: Option<String>,
    /// OSPF cost configured on the interface.
    #[serde(default)]
    pub ospf_cost: Option<u32>,
}

/// Node payload for the PTP timing layer.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct PtpNodeDetail {
    /// PTP clock identity.
    #[serde(default)]
    pub clock_id: Option<String>,
    /// PTP domain number.
    #[serde(default)]
    pub domain: Option<u16>,
    /// PTP profile name.
    #[serde(default)]
    pub profile: Option<String>,
}

/// Interface payload for the PTP timing layer.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct PtpIfaceDetail {
    /// PTP port state (master/slave/passive/...).
    #[serde(default)]
    pub port_state: Option<String>,
}

/// Node payload for the SyncE timing layer.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct SynceNodeDetail {
    /// Reference currently selected for synchronization.
    #[serde(default)]
    pub selected_reference: Option<String>,
}

/// Interface payload for the SyncE timing layer.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct SynceIfaceDetail {
    /// SSM quality level received on the interface.
    #[serde(default)]
    pub quality_level: Option<String>,
}

impl Layer for Phy {
    const NAME: &'static str = "Phy";

    type NodeDetail = PhyNodeDetail;
    type IfaceDetail = PhyIfaceDetail;
}

impl Layer for Net {
    const NAME: &'static str = "Net";

    type NodeDetail = NetNodeDetail;
    type IfaceDetail = NetIfaceDetail;
}

impl Layer for Ptp {
    const NAME: &'static str = "Ptp";

    type NodeDetail = PtpNodeDetail;
    type IfaceDetail = PtpIfaceDetail;
}

impl Layer for Synce {
    const NAME: &'static str = "Synce";

    type NodeDetail = SynceNodeDetail;
    type IfaceDetail = SynceIfaceDetail;
}
