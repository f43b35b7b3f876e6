// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! End-to-end CLI tests over JSON fixture files.
use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const SNAPSHOT: &str = r#"{
  "PhyDevice": [
    {"id":"A","name":"rtr-a","status":"ok","coords":{"x":0.0,"y":0.0},"detail":{}},
    {"id":"B","name":"rtr-b","status":"ok","coords":{"x":1.0,"y":0.0},"detail":{}}
  ],
  "PhyHas": [
    {"id":"hA","from":"A","to":"i1"},
    {"id":"hB","from":"B","to":"i2"}
  ],
  "PhyInterface": [
    {"id":"i1","name":"eth0","status":"ok","detail":{}},
    {"id":"i2","name":"eth1","status":"ok","detail":{}}
  ],
  "PhyLink": [
    {"id":"l1","from":"i1","to":"i2","weight":10}
  ]
}"#;

const DIFF: &str = r#"{
  "PhyDevice": {
    "added": [{"id":"B","name":"rtr-b","status":"ok","coords":{"x":1.0,"y":0.0},"detail":{}}],
    "deleted": [{"id":"C","name":"rtr-c","status":"unknown","coords":{"x":2.0,"y":2.0},"detail":{}}]
  },
  "PhyHas": {
    "added": [{"id":"hB","from":"B","to":"i2"}]
  },
  "PhyInterface": {
    "added": [{"id":"i2","name":"eth1","status":"ok","detail":{}}]
  },
  "PhyLink": {}
}"#;

const DEVICES: &str = r#"[
  {"device_id":"d1","name":"rtr-a"},
  {"device_id":"d3","name":"rtr-c"}
]"#;

fn write(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path.display().to_string()
}

fn cli() -> Command {
    Command::cargo_bin("strata-cli").expect("binary builds")
}

#[test]
fn reconcile_restores_deleted_and_removes_added() {
    let dir = tempfile::tempdir().expect("tempdir");
    let snapshot = write(dir.path(), "snapshot.json", SNAPSHOT);
    let diff = write(dir.path(), "diff.json", DIFF);
    let out = dir.path().join("historical.json");
    let out_arg = out.display().to_string();

    cli()
        .args([
            "reconcile",
            "--layer",
            "phy",
            "--snapshot",
            snapshot.as_str(),
            "--diff",
            diff.as_str(),
            "--out",
            out_arg.as_str(),
        ])
        .assert()
        .success();

    let historical: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("output written"))
            .expect("output parses");
    let ids: Vec<&str> = historical["PhyDevice"]
        .as_array()
        .expect("node array")
        .iter()
        .map(|n| n["id"].as_str().expect("id"))
        .collect();
    assert_eq!(ids, vec!["A", "C"]);
    // The l1 link targets the freshly added i2: the cascade drops it.
    assert_eq!(historical["PhyLink"].as_array().expect("link array").len(), 0);
    assert_eq!(historical["PhyHas"].as_array().expect("has array").len(), 1);
}

#[test]
fn reconcile_fails_fast_when_diff_lacks_a_collection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let snapshot = write(dir.path(), "snapshot.json", SNAPSHOT);
    let partial = write(
        dir.path(),
        "partial.json",
        r#"{"PhyDevice": {}, "PhyHas": {}, "PhyInterface": {}}"#,
    );

    cli()
        .args([
            "reconcile",
            "--layer",
            "phy",
            "--snapshot",
            snapshot.as_str(),
            "--diff",
            partial.as_str(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PhyLink"));
}

#[test]
fn inspect_tabulates_per_collection_counts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let diff = write(dir.path(), "diff.json", DIFF);

    cli()
        .args(["inspect", "--layer", "phy", "--diff", diff.as_str()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("PhyDevice")
                .and(predicate::str::contains("PhyLink"))
                .and(predicate::str::contains("added")),
        );
}

#[test]
fn project_joins_inventory_and_drops_unresolvable_edges() {
    let dir = tempfile::tempdir().expect("tempdir");
    let snapshot = write(dir.path(), "snapshot.json", SNAPSHOT);
    let devices = write(dir.path(), "devices.json", DEVICES);

    let output = cli()
        .args([
            "project",
            "--layer",
            "phy",
            "--snapshot",
            snapshot.as_str(),
            "--devices",
            devices.as_str(),
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let graph: serde_json::Value =
        serde_json::from_slice(&output).expect("graph output parses");
    // rtr-b is not in inventory: its node and the edge into it vanish.
    let nodes = graph["nodes"].as_array().expect("nodes");
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0]["id"], "Phy:A");
    assert_eq!(nodes[0]["device_id"], "d1");
    assert_eq!(graph["edges"].as_array().expect("edges").len(), 0);
}

#[test]
fn project_with_diff_renders_the_historical_view() {
    let dir = tempfile::tempdir().expect("tempdir");
    let snapshot = write(dir.path(), "snapshot.json", SNAPSHOT);
    let diff = write(dir.path(), "diff.json", DIFF);
    let devices = write(dir.path(), "devices.json", DEVICES);

    let output = cli()
        .args([
            "project",
            "--layer",
            "phy",
            "--snapshot",
            snapshot.as_str(),
            "--devices",
            devices.as_str(),
            "--diff",
            diff.as_str(),
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let graph: serde_json::Value =
        serde_json::from_slice(&output).expect("graph output parses");
    let names: Vec<&str> = graph["nodes"]
        .as_array()
        .expect("nodes")
        .iter()
        .map(|n| n["name"].as_str().expect("name"))
        .collect();
    // Historically C existed (restored) and B did not (added since).
    assert_eq!(names, vec!["rtr-a", "rtr-c"]);
}
