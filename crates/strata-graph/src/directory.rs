// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Inventory device directory: the authoritative list of known devices
//! the projector joins topology nodes against.
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One device registered in the inventory store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Persisted inventory id.
    pub device_id: String,
    /// Display name; topology nodes join on this.
    pub name: String,
    /// Free-form inventory labels.
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Device lookup keyed by display name.
///
/// Devices known to topology discovery but not registered here are not
/// rendered; that is the projector's silent-omission rule, not an error.
#[derive(Debug, Clone, Default)]
pub struct DeviceDirectory {
    by_name: FxHashMap<String, DeviceRecord>,
}

impl DeviceDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a device, replacing any existing entry with the same
    /// name. Returns the replaced entry, if any.
    pub fn insert(&mut self, device: DeviceRecord) -> Option<DeviceRecord> {
        self.by_name.insert(device.name.clone(), device)
    }

    /// Looks up a device by display name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&DeviceRecord> {
        self.by_name.get(name)
    }

    /// Returns the number of registered devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns `true` if no devices are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl FromIterator<DeviceRecord> for DeviceDirectory {
    fn from_iter<I: IntoIterator<Item = DeviceRecord>>(iter: I) -> Self {
        let mut dir = Self::new();
        for device in iter {
            dir.insert(device);
        }
        dir
    }
}
