//! Core library for the netrig network provisioning tool.
//!
//! This crate provides the domain model and engine for single-shot device
//! provisioning: a fixed [`Inventory`] of switches and routers, a
//! [`Transport`] seam over SSH, and a sequential [`Provisioner`] that pushes
//! each device's command plan, runs its verification commands, and collects
//! a [`DeviceReport`] transcript per device.
//!
//! Failures are classified (connection timeout, authentication rejection, or
//! unclassified session failure), surfaced in the report, and never abort
//! the run: every device in the inventory is attempted exactly once.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use netrig_core::{Inventory, Provisioner, SshTransport};
//!
//! # async fn example() {
//! let inventory = Inventory::lab_default();
//! let provisioner = Provisioner::new(SshTransport::new());
//!
//! for report in provisioner.run(&inventory).await {
//!     println!("{report}");
//! }
//! # }
//! ```

pub mod display;
pub mod error;
pub mod inventory;
pub mod models;
pub mod runner;
pub mod transport;

// Re-export commonly used types
pub use display::{FailureLine, RunSummary};
pub use error::{ProvisionerError, Result};
pub use inventory::{Device, Inventory};
pub use models::{
    CommandOutput, CommandPlan, ConfigTranscript, Credentials, DeviceDescriptor, DeviceKind,
    DeviceReport, VerificationPlan,
};
pub use runner::Provisioner;
pub use transport::{Session, SshTransport, Transport};
