//! Built-in lab inventory.
//!
//! The fixed four-device mapping the tool ships with: two Cisco IOS access
//! switches (SW1, SW2) and two MikroTik routers (R1 as router-on-a-stick
//! with NAT and DHCP, R2 as a remote bridge). Plans are kept as data tables.

use super::{Device, Inventory};
use crate::models::{CommandPlan, Credentials, DeviceDescriptor, DeviceKind, VerificationPlan};

const SW1_COMMANDS: &[&str] = &[
    "vlan 110",
    "name VENTAS",
    "vlan 120",
    "name TECNICA",
    "vlan 130",
    "name VISITANTES",
    // VLANs ya creadas: 1299 (gestion), 239 (nativa trunk)
    // Puertos access
    "interface Ethernet0/1",
    " switchport mode access",
    " switchport access vlan 110",
    " no shutdown",
    "exit",
    "interface Ethernet0/2",
    " switchport mode access",
    " switchport access vlan 120",
    " no shutdown",
    "exit",
    "interface Ethernet0/3",
    " switchport mode access",
    " switchport access vlan 130",
    " no shutdown",
    "exit",
    // Trunk hacia R1
    "interface Ethernet0/0",
    " switchport trunk encapsulation dot1q",
    " switchport mode trunk",
    " switchport trunk native vlan 239",
    " switchport trunk allowed vlan 239,110,120,130,1299",
    " no shutdown",
    "exit",
];

// SW2: solo trunk + puerto usuario remoto
const SW2_COMMANDS: &[&str] = &[
    "vlan 110",
    "name VENTAS",
    "vlan 120",
    "name TECNICA",
    "vlan 130",
    "name VISITANTES",
    "interface Ethernet0/1",
    " switchport mode access",
    " switchport access vlan 110",
    " no shutdown",
    "exit",
    "interface Ethernet0/0",
    " switchport trunk encapsulation dot1q",
    " switchport mode trunk",
    " switchport trunk native vlan 239",
    " switchport trunk allowed vlan 239,110,120,130,1299",
    " no shutdown",
    "exit",
];

// R1: router-on-a-stick + NAT + DHCP. La VLAN de gestion 1299 ya esta
// configurada con IP 10.10.12.1/29.
const R1_COMMANDS: &[&str] = &[
    // Subinterfaces para las VLANs de usuario
    "/interface vlan add name=VLAN110 vlan-id=110 interface=ether2",
    "/interface vlan add name=VLAN120 vlan-id=120 interface=ether2",
    "/interface vlan add name=VLAN130 vlan-id=130 interface=ether2",
    // Direccionamiento VLSM
    "/ip address add address=10.10.12.33/27 interface=VLAN110",
    "/ip address add address=10.10.12.65/28 interface=VLAN120",
    "/ip address add address=10.10.12.81/29 interface=VLAN130",
    // NAT solo para Ventas y Tecnica
    "/ip firewall nat add chain=srcnat src-address=10.10.12.32/27 action=masquerade out-interface=ether1",
    "/ip firewall nat add chain=srcnat src-address=10.10.12.64/28 action=masquerade out-interface=ether1",
    // DHCP para Ventas y Tecnica
    "/ip pool add name=POOL_VLAN110 ranges=10.10.12.34-10.10.12.62",
    "/ip dhcp-server add name=DHCP110 interface=VLAN110 lease-time=1h address-pool=POOL_VLAN110",
    "/ip dhcp-server network add address=10.10.12.32/27 gateway=10.10.12.33 dns-server=8.8.8.8",
    "/ip pool add name=POOL_VLAN120 ranges=10.10.12.66-10.10.12.78",
    "/ip dhcp-server add name=DHCP120 interface=VLAN120 lease-time=1h address-pool=POOL_VLAN120",
    "/ip dhcp-server network add address=10.10.12.64/28 gateway=10.10.12.65 dns-server=8.8.8.8",
];

// R2: remoto, solo gestion + trunk sobre el bridge
const R2_COMMANDS: &[&str] = &[
    "/interface bridge vlan add bridge=br-remote vlan-ids=239 untagged=ether1,ether2",
    "/interface bridge vlan add bridge=br-remote vlan-ids=1299 tagged=br-remote,ether1,ether2",
    "/interface bridge vlan add bridge=br-remote vlan-ids=110 tagged=ether1,ether2",
    "/interface bridge vlan add bridge=br-remote vlan-ids=120 tagged=ether1,ether2",
    "/interface bridge vlan add bridge=br-remote vlan-ids=130 tagged=ether1,ether2",
];

const SWITCH_VERIFY: &[&str] = &["show vlan brief", "show ip interface brief"];

const R1_VERIFY: &[&str] = &[
    "/ip address print",
    "/ip route print",
    "/ip dhcp-server print",
    "/interface vlan print",
];

const R2_VERIFY: &[&str] = &["/ip address print", "/ip route print", "/interface vlan print"];

fn device(
    name: &str,
    kind: DeviceKind,
    host: &str,
    commands: &[&str],
    verify_commands: &[&str],
) -> Device {
    Device {
        descriptor: DeviceDescriptor {
            name: name.to_string(),
            kind,
            host: host.to_string(),
            port: 22,
            credentials: Credentials {
                username: "admin".to_string(),
                password: "1234".to_string(),
            },
        },
        commands: CommandPlan::new(commands.iter().copied()),
        verify_commands: VerificationPlan::new(verify_commands.iter().copied()),
    }
}

pub(super) fn lab_inventory() -> Inventory {
    Inventory {
        devices: vec![
            device(
                "SW1",
                DeviceKind::CiscoIos,
                "10.10.12.2",
                SW1_COMMANDS,
                SWITCH_VERIFY,
            ),
            device(
                "SW2",
                DeviceKind::CiscoIos,
                "10.10.12.3",
                SW2_COMMANDS,
                SWITCH_VERIFY,
            ),
            device(
                "R1",
                DeviceKind::MikrotikRouteros,
                "10.10.12.1",
                R1_COMMANDS,
                R1_VERIFY,
            ),
            device(
                "R2",
                DeviceKind::MikrotikRouteros,
                "10.10.12.4",
                R2_COMMANDS,
                R2_VERIFY,
            ),
        ],
    }
}
