// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON file boundary: decoding topology files keyed by layer-qualified
//! collection names, and writing results back out.
//!
//! JSON lives only in this tool; the engine crates stay format-agnostic.
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use strata_core::{
    collection_key, CollectionKind, Layer, LayerDiff, LayerDiffEnvelope, LayerSnapshot,
};
use strata_graph::{DeviceDirectory, DeviceRecord};

fn load_object(path: &Path) -> Result<Map<String, Value>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading topology file {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("parsing JSON in {}", path.display()))?;
    match value {
        Value::Object(obj) => Ok(obj),
        _ => bail!("{} is not a JSON object", path.display()),
    }
}

fn take_collection<T: DeserializeOwned>(
    obj: &mut Map<String, Value>,
    key: &str,
) -> Result<Option<T>> {
    obj.remove(key)
        .map(|v| {
            serde_json::from_value(v).with_context(|| format!("decoding collection `{key}`"))
        })
        .transpose()
}

fn required_collection<T: DeserializeOwned>(
    obj: &mut Map<String, Value>,
    path: &Path,
    key: &str,
) -> Result<T> {
    take_collection(obj, key)?
        .with_context(|| format!("snapshot {} is missing collection `{key}`", path.display()))
}

/// Loads a snapshot file; every collection key is required.
pub fn load_snapshot<L: Layer>(path: &Path) -> Result<LayerSnapshot<L>> {
    let mut obj = load_object(path)?;
    Ok(LayerSnapshot {
        nodes: required_collection(&mut obj, path, &collection_key::<L>(CollectionKind::Device))?,
        has: required_collection(&mut obj, path, &collection_key::<L>(CollectionKind::Has))?,
        interfaces: required_collection(
            &mut obj,
            path,
            &collection_key::<L>(CollectionKind::Interface),
        )?,
        links: required_collection(&mut obj, path, &collection_key::<L>(CollectionKind::Link))?,
    })
}

/// Loads a diff file into the raw envelope and promotes it, failing fast
/// on the first missing collection.
pub fn load_diff<L: Layer>(path: &Path) -> Result<LayerDiff<L>> {
    let mut obj = load_object(path)?;
    let envelope = LayerDiffEnvelope::<L> {
        nodes: take_collection(&mut obj, &collection_key::<L>(CollectionKind::Device))?,
        has: take_collection(&mut obj, &collection_key::<L>(CollectionKind::Has))?,
        interfaces: take_collection(&mut obj, &collection_key::<L>(CollectionKind::Interface))?,
        links: take_collection(&mut obj, &collection_key::<L>(CollectionKind::Link))?,
    };
    envelope
        .into_diff()
        .with_context(|| format!("promoting diff {}", path.display()))
}

/// Loads the inventory device list (a JSON array of device records).
pub fn load_devices(path: &Path) -> Result<DeviceDirectory> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading device file {}", path.display()))?;
    let devices: Vec<DeviceRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing device records in {}", path.display()))?;
    Ok(devices.into_iter().collect())
}

/// Serializes a snapshot back to the layer-qualified wire shape.
pub fn snapshot_to_value<L: Layer>(snapshot: &LayerSnapshot<L>) -> Result<Value> {
    let mut obj = Map::new();
    obj.insert(
        collection_key::<L>(CollectionKind::Device),
        serde_json::to_value(&snapshot.nodes)?,
    );
    obj.insert(
        collection_key::<L>(CollectionKind::Has),
        serde_json::to_value(&snapshot.has)?,
    );
    obj.insert(
        collection_key::<L>(CollectionKind::Interface),
        serde_json::to_value(&snapshot.interfaces)?,
    );
    obj.insert(
        collection_key::<L>(CollectionKind::Link),
        serde_json::to_value(&snapshot.links)?,
    );
    Ok(Value::Object(obj))
}

/// Writes pretty-printed JSON to `out`, or to stdout when absent.
pub fn write_output(out: Option<&Path>, value: &Value) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => fs::write(path, rendered + "\n")
            .with_context(|| format!("writing output to {}", path.display())),
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}
