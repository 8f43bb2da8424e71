//! Device descriptor and credential types.

use serde::{Deserialize, Serialize};

use super::DeviceKind;

/// Login credentials for a managed device.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Connection descriptor for a single managed device.
///
/// Immutable, defined at startup, keyed by a name that is unique within its
/// inventory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceDescriptor {
    /// Unique device name within the inventory
    pub name: String,

    /// Device family; selects transport parameters and push strategy
    pub kind: DeviceKind,

    /// Management address
    pub host: String,

    /// SSH port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Login credentials
    #[serde(flatten)]
    pub credentials: Credentials,
}

fn default_port() -> u16 {
    22
}
