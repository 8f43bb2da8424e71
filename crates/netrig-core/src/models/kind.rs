//! Device family enumeration and capability dispatch.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of supported device families.
///
/// The family selects the push strategy and the transport parameters for a
/// device, replacing string comparison on a type-name field with exhaustive,
/// checked dispatch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    /// Cisco IOS switch family; supports bulk configuration transactions
    CiscoIos,

    /// MikroTik RouterOS router family; commands are issued one at a time
    MikrotikRouteros,
}

impl FromStr for DeviceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cisco_ios" => Ok(DeviceKind::CiscoIos),
            "mikrotik_routeros" => Ok(DeviceKind::MikrotikRouteros),
            _ => Err(format!("Invalid device kind: {s}")),
        }
    }
}

impl DeviceKind {
    /// Convert to the wire string representation used in inventory files.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceKind::CiscoIos => "cisco_ios",
            DeviceKind::MikrotikRouteros => "mikrotik_routeros",
        }
    }

    /// Whether the family accepts an entire command plan as one
    /// configuration transaction.
    ///
    /// Families without bulk support get their plan issued one command at a
    /// time, each awaiting its own response.
    pub fn supports_bulk_config(&self) -> bool {
        matches!(self, DeviceKind::CiscoIos)
    }

    /// Commands that enter configuration mode before a bulk push.
    pub fn config_mode_enter(&self) -> &'static [&'static str] {
        match self {
            DeviceKind::CiscoIos => &["configure terminal"],
            DeviceKind::MikrotikRouteros => &[],
        }
    }

    /// Commands that leave configuration mode after a bulk push.
    pub fn config_mode_exit(&self) -> &'static [&'static str] {
        match self {
            DeviceKind::CiscoIos => &["end"],
            DeviceKind::MikrotikRouteros => &[],
        }
    }
}
