//! Device inventory: the fixed set of managed devices with their plans.
//!
//! An [`Inventory`] is an explicit, immutable configuration structure
//! constructed at startup and passed into the provisioner as a parameter.
//! Enumeration order is definition order and is the provisioning order.
//!
//! The tool ships with a built-in lab inventory ([`Inventory::lab_default`])
//! and can load an externalized one from a JSON file carrying the recognized
//! fields `{name, kind, host, port?, username, password, commands,
//! verify_commands}` per device.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ProvisionerError, Result};
use crate::models::{CommandPlan, DeviceDescriptor, DeviceKind, VerificationPlan};

mod builtin;

/// One inventory entry: a device descriptor plus its plans.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Device {
    #[serde(flatten)]
    pub descriptor: DeviceDescriptor,

    /// Ordered configuration commands pushed to the device
    #[serde(default)]
    pub commands: CommandPlan,

    /// Ordered read-only commands run after configuration
    #[serde(default)]
    pub verify_commands: VerificationPlan,
}

impl Device {
    /// Device name, unique within its inventory.
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// Management address.
    pub fn host(&self) -> &str {
        &self.descriptor.host
    }

    /// Device family.
    pub fn kind(&self) -> DeviceKind {
        self.descriptor.kind
    }
}

/// Ordered collection of managed devices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Inventory {
    pub devices: Vec<Device>,
}

impl Inventory {
    /// Builds an inventory from a device list, validating it.
    ///
    /// # Errors
    ///
    /// Returns `ProvisionerError::InvalidInput` when a device name or host is
    /// empty, or when two devices share a name.
    pub fn new(devices: Vec<Device>) -> Result<Self> {
        let inventory = Self { devices };
        inventory.validate()?;
        Ok(inventory)
    }

    /// The built-in four-device lab inventory.
    pub fn lab_default() -> Self {
        builtin::lab_inventory()
    }

    /// Parses and validates an inventory from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let inventory: Self = serde_json::from_str(json)?;
        inventory.validate()?;
        Ok(inventory)
    }

    /// Loads and validates an inventory from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).map_err(|e| ProvisionerError::file_system(path, e))?;
        Self::from_json_str(&contents)
    }

    /// Returns the default inventory file if one exists, following the XDG
    /// Base Directory specification:
    /// `$XDG_CONFIG_HOME/netrig/inventory.json` or
    /// `~/.config/netrig/inventory.json`.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("netrig").find_config_file("inventory.json")
    }

    /// Looks up a device by name.
    pub fn get(&self, name: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.name() == name)
    }

    /// Devices in enumeration (provisioning) order.
    pub fn iter(&self) -> std::slice::Iter<'_, Device> {
        self.devices.iter()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for device in &self.devices {
            if device.name().is_empty() {
                return Err(ProvisionerError::invalid_input(
                    "name",
                    "device name must not be empty",
                ));
            }
            if device.host().is_empty() {
                return Err(ProvisionerError::invalid_input(
                    "host",
                    format!("device '{}' has an empty host", device.name()),
                ));
            }
            if !seen.insert(device.name().to_string()) {
                return Err(ProvisionerError::invalid_input(
                    "devices",
                    format!("duplicate device name '{}'", device.name()),
                ));
            }
        }
        Ok(())
    }
}
