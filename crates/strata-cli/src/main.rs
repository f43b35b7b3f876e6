// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Strata developer CLI.
//!
//! Reverse-applies topology diffs, projects renderable graphs, and
//! inspects diff contents, over JSON files shaped like the topology
//! discovery payloads. One generic code path serves all four layers.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use comfy_table::Table;
use strata_core::{
    collection_key, reconcile_layer, CollectionKind, CollectionStats, Layer, Net, Phy, Ptp, Synce,
};
use strata_graph::project;
use tracing::info;

mod files;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Command to execute
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Reconstruct the historical snapshot behind a backup diff
    Reconcile {
        /// Topology layer to operate on
        #[clap(long, value_enum)]
        layer: LayerArg,
        /// Current snapshot file (layer-qualified collection keys)
        #[clap(long)]
        snapshot: PathBuf,
        /// Backup diff file (layer-qualified collection keys)
        #[clap(long)]
        diff: PathBuf,
        /// Output file; stdout when omitted
        #[clap(long)]
        out: Option<PathBuf>,
    },
    /// Project a snapshot into the renderable node/edge graph
    Project {
        /// Topology layer to operate on
        #[clap(long, value_enum)]
        layer: LayerArg,
        /// Snapshot file to project
        #[clap(long)]
        snapshot: PathBuf,
        /// Inventory device list (JSON array)
        #[clap(long)]
        devices: PathBuf,
        /// Optional backup diff: reconcile first, then project the
        /// historical view
        #[clap(long)]
        diff: Option<PathBuf>,
        /// Output file; stdout when omitted
        #[clap(long)]
        out: Option<PathBuf>,
    },
    /// Summarize a diff's per-collection added/changed/deleted counts
    Inspect {
        /// Topology layer to operate on
        #[clap(long, value_enum)]
        layer: LayerArg,
        /// Backup diff file to summarize
        #[clap(long)]
        diff: PathBuf,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum LayerArg {
    Phy,
    Net,
    Ptp,
    Synce,
}

/// Dispatches one generic function over the four layer markers.
macro_rules! for_layer {
    ($layer:expr, $run:ident($($arg:expr),* $(,)?)) => {
        match $layer {
            LayerArg::Phy => $run::<Phy>($($arg),*),
            LayerArg::Net => $run::<Net>($($arg),*),
            LayerArg::Ptp => $run::<Ptp>($($arg),*),
            LayerArg::Synce => $run::<Synce>($($arg),*),
        }
    };
}

fn main() -> Result<()> {
    // Keep stdout clean for JSON output; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    match args.cmd {
        Command::Reconcile {
            layer,
            snapshot,
            diff,
            out,
        } => for_layer!(layer, run_reconcile(&snapshot, &diff, out.as_deref())),
        Command::Project {
            layer,
            snapshot,
            devices,
            diff,
            out,
        } => for_layer!(
            layer,
            run_project(&snapshot, &devices, diff.as_deref(), out.as_deref())
        ),
        Command::Inspect { layer, diff } => for_layer!(layer, run_inspect(&diff)),
    }
}

fn run_reconcile<L: Layer>(snapshot: &Path, diff: &Path, out: Option<&Path>) -> Result<()> {
    let current = files::load_snapshot::<L>(snapshot)?;
    let diff = files::load_diff::<L>(diff)?;
    let historical = reconcile_layer(&current, &diff);
    info!(
        layer = L::NAME,
        nodes = historical.nodes.len(),
        has = historical.has.len(),
        interfaces = historical.interfaces.len(),
        links = historical.links.len(),
        "reconstructed historical snapshot"
    );
    files::write_output(out, &files::snapshot_to_value::<L>(&historical)?)
}

fn run_project<L: Layer>(
    snapshot: &Path,
    devices: &Path,
    diff: Option<&Path>,
    out: Option<&Path>,
) -> Result<()> {
    let mut view = files::load_snapshot::<L>(snapshot)?;
    if let Some(diff) = diff {
        view = reconcile_layer(&view, &files::load_diff::<L>(diff)?);
    }
    let directory = files::load_devices(devices)?;
    let graph = project::<L>(&view, &directory);
    info!(
        layer = L::NAME,
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        known_devices = directory.len(),
        "projected renderable graph"
    );
    files::write_output(out, &serde_json::to_value(&graph)?)
}

fn run_inspect<L: Layer>(diff: &Path) -> Result<()> {
    let diff = files::load_diff::<L>(diff)?;
    let stats = diff.stats();

    let mut table = Table::new();
    table.set_header(vec!["collection", "added", "changed", "deleted"]);
    let mut row = |kind: CollectionKind, s: CollectionStats| {
        table.add_row(vec![
            collection_key::<L>(kind),
            s.added.to_string(),
            s.changed.to_string(),
            s.deleted.to_string(),
        ]);
    };
    row(CollectionKind::Device, stats.nodes);
    row(CollectionKind::Has, stats.has);
    row(CollectionKind::Interface, stats.interfaces);
    row(CollectionKind::Link, stats.links);
    println!("{table}");
    Ok(())
}
