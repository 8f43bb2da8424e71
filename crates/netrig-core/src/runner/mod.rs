//! Sequential provisioning engine.
//!
//! The [`Provisioner`] visits every inventory device in enumeration order,
//! one session at a time: open, configure (as one bulk transaction or one
//! command at a time, by device family), verify, release. Each device yields
//! a [`DeviceReport`]; a failure on one device never prevents processing of
//! the next, and an opened session is released exactly once on every exit
//! path.
//!
//! There is no cross-device state and nothing is retried: every transport
//! failure is recorded in the report with its classification and the run
//! moves on.

use log::{debug, info, warn};

use crate::inventory::{Device, Inventory};
use crate::models::{CommandOutput, ConfigTranscript, DeviceReport};
use crate::transport::{Session, Transport};


/// Sequential per-device provisioning engine, generic over the transport.
pub struct Provisioner<T: Transport> {
    transport: T,
}

impl<T: Transport> Provisioner<T> {
    /// Creates a provisioner over the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Provisions every device in enumeration order and returns one report
    /// per device. Never aborts early.
    pub async fn run(&self, inventory: &Inventory) -> Vec<DeviceReport> {
        let mut reports = Vec::with_capacity(inventory.len());
        for device in inventory.iter() {
            reports.push(self.provision_device(device).await);
        }
        reports
    }

    /// Provisions a single device: open, configure, verify, release.
    ///
    /// Exactly one connection attempt is made. When the session cannot be
    /// opened, the classified error lands in the report and neither
    /// configuration nor verification is attempted.
    pub async fn provision_device(&self, device: &Device) -> DeviceReport {
        let mut report = DeviceReport::new(device.name(), device.host());
        info!("connecting to {} ({})", device.name(), device.host());

        let mut session = match self.transport.open(device).await {
            Ok(session) => session,
            Err(err) => {
                warn!("{}: session open failed: {err}", device.name());
                report.failure = Some(err);
                return report;
            }
        };

        self.configure_and_verify(device, &mut session, &mut report)
            .await;

        if let Err(err) = session.close().await {
            warn!("{}: session close failed: {err}", device.name());
        }
        report
    }

    async fn configure_and_verify(
        &self,
        device: &Device,
        session: &mut T::Session,
        report: &mut DeviceReport,
    ) {
        if !self.apply_config(device, session, report).await {
            return;
        }
        self.verify(device, session, report).await;
    }

    /// Applies the device's command plan. Returns false when the session
    /// failed at the transport level and must be abandoned; command output
    /// is never interpreted, only captured.
    async fn apply_config(
        &self,
        device: &Device,
        session: &mut T::Session,
        report: &mut DeviceReport,
    ) -> bool {
        report.config_attempted = true;
        if device.kind().supports_bulk_config() {
            info!("{}: bulk push of {} commands", device.name(), device.commands.len());
            match session.send_config_set(device.commands.commands()).await {
                Ok(output) => {
                    report.config = Some(ConfigTranscript::Bulk { output });
                    true
                }
                Err(err) => {
                    warn!("{}: configuration push failed: {err}", device.name());
                    report.failure = Some(err);
                    false
                }
            }
        } else {
            let mut entries = Vec::with_capacity(device.commands.len());
            for command in device.commands.commands() {
                debug!("{}: executing {command}", device.name());
                match session.send_command(command).await {
                    Ok(output) => entries.push(CommandOutput {
                        command: command.clone(),
                        output,
                    }),
                    Err(err) => {
                        warn!("{}: command failed: {err}", device.name());
                        report.failure = Some(err);
                        report.config = Some(ConfigTranscript::PerCommand { entries });
                        return false;
                    }
                }
            }
            report.config = Some(ConfigTranscript::PerCommand { entries });
            true
        }
    }

    /// Runs the verification plan. A transport failure stops further
    /// verification for this device only.
    async fn verify(&self, device: &Device, session: &mut T::Session, report: &mut DeviceReport) {
        report.verification_attempted = true;
        for command in device.verify_commands.commands() {
            debug!("{}: verifying with {command}", device.name());
            match session.send_command(command).await {
                Ok(output) => report.verification.push(CommandOutput {
                    command: command.clone(),
                    output,
                }),
                Err(err) => {
                    warn!("{}: verification failed: {err}", device.name());
                    report.failure = Some(err);
                    return;
                }
            }
        }
    }
}
