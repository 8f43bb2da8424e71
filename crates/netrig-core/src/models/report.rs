//! Per-device execution transcripts.

use jiff::Timestamp;

use crate::error::ProvisionerError;

/// One issued command together with the raw text the device returned.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub command: String,
    pub output: String,
}

/// Transcript of the configuration phase for one device.
#[derive(Debug)]
pub enum ConfigTranscript {
    /// Whole plan submitted as one transaction; combined output captured
    Bulk { output: String },

    /// Commands issued one at a time; output captured per command
    PerCommand { entries: Vec<CommandOutput> },
}

/// Ephemeral result of provisioning a single device.
///
/// Created during execution, rendered once, then discarded; never persisted.
/// The `failure` field carries the terminal error classification when the
/// device could not be fully processed.
#[derive(Debug)]
pub struct DeviceReport {
    /// Device name from the inventory
    pub name: String,

    /// Management address, repeated here for diagnostics
    pub host: String,

    /// When the provisioner reached this device (UTC)
    pub started_at: Timestamp,

    /// True once a session was opened and the configuration phase started
    pub config_attempted: bool,

    /// Captured configuration output; absent when the connection failed or
    /// a bulk push died before returning anything
    pub config: Option<ConfigTranscript>,

    /// True once the verification phase was entered
    pub verification_attempted: bool,

    /// Verification exchanges, in plan order
    pub verification: Vec<CommandOutput>,

    /// Terminal error classification, if the device failed
    pub failure: Option<ProvisionerError>,
}

impl DeviceReport {
    /// Creates an empty report for a device about to be visited.
    pub fn new(name: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            started_at: Timestamp::now(),
            config_attempted: false,
            config: None,
            verification_attempted: false,
            verification: Vec::new(),
            failure: None,
        }
    }

    /// True when the device was fully configured and verified.
    pub fn succeeded(&self) -> bool {
        self.failure.is_none()
    }
}
