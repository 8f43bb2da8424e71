//! SSH transport backed by russh.
//!
//! Thin by contract: password authentication, lab-grade host key acceptance,
//! one exec channel per command, one shell channel per bulk configuration
//! push. Device protocol parsing stays out of scope; bulk output is drained
//! until the channel closes or goes quiet.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use russh::client::{self, Handle};
use russh::keys::ssh_key;
use russh::{ChannelMsg, Disconnect};
use tokio::time::{timeout, timeout_at, Instant};

use super::{Session, Transport};
use crate::error::{ProvisionerError, Result};
use crate::inventory::Device;
use crate::models::DeviceKind;

/// Accepts any host key. The tool provisions freshly imaged lab devices
/// whose keys are not pinned anywhere.
struct AcceptHostKey;

impl client::Handler for AcceptHostKey {
    type Error = russh::Error;

    async fn check_server_key(
        &mut self,
        _server_public_key: &ssh_key::PublicKey,
    ) -> std::result::Result<bool, Self::Error> {
        Ok(true)
    }
}

/// SSH transport with tunable timeouts.
///
/// `connect_timeout` bounds the TCP/handshake phase and classifies as
/// [`ProvisionerError::ConnectionTimeout`]; `command_timeout` is the hard
/// ceiling on any single exchange; `quiet_period` ends the bulk-push drain
/// once a configuration shell stops producing output.
#[derive(Debug, Clone)]
pub struct SshTransport {
    connect_timeout: Duration,
    command_timeout: Duration,
    quiet_period: Duration,
}

impl SshTransport {
    /// Creates a transport with the default timeouts.
    pub fn new() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            command_timeout: Duration::from_secs(60),
            quiet_period: Duration::from_secs(2),
        }
    }

    /// Sets the connect/handshake timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the per-exchange hard ceiling.
    pub fn with_command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }

    /// Sets the quiet period that ends a bulk-push drain.
    pub fn with_quiet_period(mut self, period: Duration) -> Self {
        self.quiet_period = period;
        self
    }
}

impl Default for SshTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for SshTransport {
    type Session = SshSession;

    async fn open(&self, device: &Device) -> Result<SshSession> {
        let host = device.descriptor.host.clone();
        let port = device.descriptor.port;
        debug!("opening SSH session to {host}:{port}");

        let config = Arc::new(client::Config::default());
        let connect = client::connect(config, (host.as_str(), port), AcceptHostKey);
        let mut handle = match timeout(self.connect_timeout, connect).await {
            Ok(Ok(handle)) => handle,
            Ok(Err(err)) => return Err(classify_connect_error(&host, err)),
            Err(_) => return Err(ProvisionerError::connection_timeout(&host)),
        };

        let auth = handle
            .authenticate_password(
                device.descriptor.credentials.username.clone(),
                device.descriptor.credentials.password.clone(),
            )
            .await
            .map_err(|err| ProvisionerError::session(&host, err))?;
        if !auth.success() {
            return Err(ProvisionerError::authentication_failure(&host));
        }

        Ok(SshSession {
            handle,
            host,
            kind: device.descriptor.kind,
            command_timeout: self.command_timeout,
            quiet_period: self.quiet_period,
        })
    }
}

/// Maps transport-level connect failures onto the error taxonomy.
///
/// Only a genuine timeout classifies as `ConnectionTimeout`; everything else
/// (refused, unreachable, handshake errors) stays unclassified.
fn classify_connect_error(host: &str, err: russh::Error) -> ProvisionerError {
    match err {
        russh::Error::IO(ref io) if io.kind() == std::io::ErrorKind::TimedOut => {
            ProvisionerError::connection_timeout(host)
        }
        other => ProvisionerError::session(host, other),
    }
}

/// One open SSH session on a device.
pub struct SshSession {
    handle: Handle<AcceptHostKey>,
    host: String,
    kind: DeviceKind,
    command_timeout: Duration,
    quiet_period: Duration,
}

impl SshSession {
    fn session_err(&self, err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> ProvisionerError {
        ProvisionerError::session(&self.host, err)
    }

    /// Runs one command on its own exec channel and collects the output
    /// until the server closes the channel.
    async fn exec(&mut self, command: &str) -> Result<String> {
        let mut channel = self
            .handle
            .channel_open_session()
            .await
            .map_err(|err| self.session_err(err))?;
        channel
            .exec(true, command)
            .await
            .map_err(|err| self.session_err(err))?;

        let deadline = Instant::now() + self.command_timeout;
        let mut output = String::new();
        loop {
            let msg = match timeout_at(deadline, channel.wait()).await {
                Ok(Some(msg)) => msg,
                Ok(None) => break,
                Err(_) => {
                    return Err(self.session_err(format!("command timed out: {command}")));
                }
            };
            match msg {
                ChannelMsg::Data { ref data } => {
                    output.push_str(&String::from_utf8_lossy(data));
                }
                ChannelMsg::ExtendedData { ref data, .. } => {
                    output.push_str(&String::from_utf8_lossy(data));
                }
                _ => {}
            }
        }
        Ok(output)
    }

    /// Pushes an entire plan through one interactive shell, wrapped in the
    /// device kind's configuration-mode enter/exit sequences, and drains the
    /// combined output.
    async fn shell_push(&mut self, commands: &[String]) -> Result<String> {
        let payload = config_set_payload(self.kind, commands);

        let mut channel = self
            .handle
            .channel_open_session()
            .await
            .map_err(|err| self.session_err(err))?;
        channel
            .request_pty(false, "vt100", 80, 24, 0, 0, &[])
            .await
            .map_err(|err| self.session_err(err))?;
        channel
            .request_shell(true)
            .await
            .map_err(|err| self.session_err(err))?;
        channel
            .data(payload.as_bytes())
            .await
            .map_err(|err| self.session_err(err))?;
        channel.eof().await.map_err(|err| self.session_err(err))?;

        let deadline = Instant::now() + self.command_timeout;
        let mut output = String::new();
        loop {
            match timeout_at(deadline, timeout(self.quiet_period, channel.wait())).await {
                Ok(Ok(Some(ChannelMsg::Data { ref data }))) => {
                    output.push_str(&String::from_utf8_lossy(data));
                }
                Ok(Ok(Some(ChannelMsg::ExtendedData { ref data, .. }))) => {
                    output.push_str(&String::from_utf8_lossy(data));
                }
                Ok(Ok(Some(_))) => {}
                // Channel closed, or output went quiet: the push settled
                Ok(Ok(None)) | Ok(Err(_)) => break,
                Err(_) => {
                    return Err(self.session_err("configuration push timed out"));
                }
            }
        }
        Ok(output)
    }
}

#[async_trait]
impl Session for SshSession {
    async fn send_config_set(&mut self, commands: &[String]) -> Result<String> {
        debug!("{}: pushing {} configuration commands", self.host, commands.len());
        self.shell_push(commands).await
    }

    async fn send_command(&mut self, command: &str) -> Result<String> {
        debug!("{}: exec {command}", self.host);
        self.exec(command).await
    }

    async fn close(&mut self) -> Result<()> {
        debug!("{}: closing session", self.host);
        self.handle
            .disconnect(Disconnect::ByApplication, "", "en")
            .await
            .map_err(|err| ProvisionerError::session(&self.host, err))
    }
}

/// Builds the byte stream for a bulk configuration push: the device kind's
/// configuration-mode entry, the plan, then the exit sequence.
fn config_set_payload(kind: DeviceKind, commands: &[String]) -> String {
    let mut payload = String::new();
    for line in kind.config_mode_enter() {
        payload.push_str(line);
        payload.push('\n');
    }
    for command in commands {
        payload.push_str(command);
        payload.push('\n');
    }
    for line in kind.config_mode_exit() {
        payload.push_str(line);
        payload.push('\n');
    }
    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(commands: &[&str]) -> Vec<String> {
        commands.iter().map(|c| (*c).to_string()).collect()
    }

    #[test]
    fn test_cisco_payload_wrapped_in_config_mode() {
        let payload = config_set_payload(DeviceKind::CiscoIos, &plan(&["vlan 110", "name VENTAS"]));
        assert_eq!(
            payload,
            "configure terminal\nvlan 110\nname VENTAS\nend\n"
        );
    }

    #[test]
    fn test_routeros_payload_has_no_wrapping() {
        let payload =
            config_set_payload(DeviceKind::MikrotikRouteros, &plan(&["/ip address print"]));
        assert_eq!(payload, "/ip address print\n");
    }

    #[test]
    fn test_payload_preserves_indented_subcommands() {
        let payload = config_set_payload(
            DeviceKind::CiscoIos,
            &plan(&["interface Ethernet0/1", " switchport mode access"]),
        );
        assert!(payload.contains("\n switchport mode access\n"));
    }

    #[test]
    fn test_transport_timeout_tuning() {
        let transport = SshTransport::new()
            .with_connect_timeout(Duration::from_secs(1))
            .with_command_timeout(Duration::from_secs(5))
            .with_quiet_period(Duration::from_millis(100));
        assert_eq!(transport.connect_timeout, Duration::from_secs(1));
        assert_eq!(transport.command_timeout, Duration::from_secs(5));
        assert_eq!(transport.quiet_period, Duration::from_millis(100));
    }
}
