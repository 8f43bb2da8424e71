use std::path::PathBuf;

use clap::Parser;

/// Command-line interface for the netrig provisioning tool
///
/// Netrig is a single-shot network provisioner: it connects to every device
/// in the inventory over SSH, in order, pushes the device's configuration
/// plan, runs its verification commands and prints every transcript. A
/// failing device is reported and never stops the run.
#[derive(Parser)]
#[command(version, about, name = "netrig")]
pub struct Args {
    /// Path to the inventory JSON file. Defaults to
    /// $XDG_CONFIG_HOME/netrig/inventory.json, falling back to the built-in
    /// lab inventory
    #[arg(long)]
    pub inventory: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,
}
