//! Remote management transport seam.
//!
//! The provisioner consumes this contract and never reimplements device
//! protocol handling: [`Transport::open`] yields a scoped [`Session`] for one
//! device, sessions push configuration and run read-only commands, and
//! [`Session::close`] releases the handle. Open failures carry the error
//! classification ([`ConnectionTimeout`] or [`AuthenticationFailure`] where
//! recognized) instead of unwinding.
//!
//! [`ConnectionTimeout`]: crate::error::ProvisionerError::ConnectionTimeout
//! [`AuthenticationFailure`]: crate::error::ProvisionerError::AuthenticationFailure

use async_trait::async_trait;

use crate::error::Result;
use crate::inventory::Device;

pub mod ssh;

pub use ssh::SshTransport;

/// An open remote management session on one device.
#[async_trait]
pub trait Session: Send {
    /// Submits an ordered command list as one configuration transaction and
    /// returns the combined output.
    async fn send_config_set(&mut self, commands: &[String]) -> Result<String>;

    /// Issues a single command and returns its raw output.
    async fn send_command(&mut self, command: &str) -> Result<String>;

    /// Releases the session. The provisioner calls this exactly once per
    /// opened session, on every exit path.
    async fn close(&mut self) -> Result<()>;
}

/// Factory for device sessions.
#[async_trait]
pub trait Transport: Send + Sync {
    type Session: Session;

    /// Opens a session to the device described by the inventory entry.
    async fn open(&self, device: &Device) -> Result<Self::Session>;
}
