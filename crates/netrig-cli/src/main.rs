//! Netrig CLI application
//!
//! Command-line entry point for the single-shot network provisioner: resolve
//! the inventory, visit every device in order, render each transcript as it
//! completes, and always finish the run.

mod args;
mod renderer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use jiff::Timestamp;
use log::info;
use netrig_core::{Inventory, Provisioner, RunSummary, SshTransport};
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { inventory, no_color } = Args::parse();

    let inventory = load_inventory(inventory)?;
    let renderer = TerminalRenderer::new(!no_color);

    info!("netrig started with {} device(s)", inventory.len());
    let started_at = Timestamp::now();

    let provisioner = Provisioner::new(SshTransport::new());

    let mut reports = Vec::with_capacity(inventory.len());
    for device in inventory.iter() {
        let report = provisioner.provision_device(device).await;
        renderer.render(&report.to_string());
        reports.push(report);
    }

    let summary = RunSummary::new(&reports);
    renderer.render(&format!("{summary}\n"));

    let elapsed = Timestamp::now().duration_since(started_at);
    info!(
        "run finished: {} device(s) attempted, {} failed, elapsed {elapsed:#}",
        summary.attempted(),
        summary.failed()
    );

    // Per-device failures are part of a normal run; only startup problems
    // change the exit code.
    Ok(())
}

/// Resolves the inventory: explicit flag, then the XDG config file, then the
/// built-in lab.
fn load_inventory(flag: Option<PathBuf>) -> Result<Inventory> {
    if let Some(path) = flag {
        return Inventory::from_json_file(&path)
            .with_context(|| format!("Failed to load inventory from {}", path.display()));
    }
    if let Some(path) = Inventory::default_path() {
        return Inventory::from_json_file(&path)
            .with_context(|| format!("Failed to load inventory from {}", path.display()));
    }
    Ok(Inventory::lab_default())
}
