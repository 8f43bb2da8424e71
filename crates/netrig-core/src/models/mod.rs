//! Data models for devices, command plans, and execution transcripts.
//!
//! This module contains the core domain models of the provisioner. All of
//! them are immutable once constructed: descriptors and plans are defined at
//! startup, and [`DeviceReport`] transcripts are built during execution,
//! rendered once, and discarded.
//!
//! Display implementations for the transcript types live in
//! [`crate::display`] to keep data structures separate from presentation.

pub mod device;
pub mod kind;
pub mod plan;
pub mod report;


// Re-export all public types at the models level
pub use device::{Credentials, DeviceDescriptor};
pub use kind::DeviceKind;
pub use plan::{CommandPlan, VerificationPlan};
pub use report::{CommandOutput, ConfigTranscript, DeviceReport};
