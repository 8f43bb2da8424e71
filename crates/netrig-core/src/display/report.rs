//! Display implementations for per-device transcripts.

use std::fmt;

use crate::error::ProvisionerError;
use crate::models::{ConfigTranscript, DeviceReport};

impl fmt::Display for DeviceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "###### Conectando a {} ({}) ######", self.name, self.host)?;

        if self.config_attempted {
            writeln!(f, "--- Aplicando configuración a {} ---", self.name)?;
        }
        match &self.config {
            Some(ConfigTranscript::Bulk { output }) => {
                writeln!(f, "{output}")?;
            }
            Some(ConfigTranscript::PerCommand { entries }) => {
                for entry in entries {
                    writeln!(f, "Ejecutando: {}", entry.command)?;
                    if !entry.output.is_empty() {
                        writeln!(f, "Output: {}", entry.output)?;
                    }
                }
            }
            None => {}
        }

        if self.verification_attempted {
            writeln!(f)?;
            writeln!(f, "-- Verificación en {} --", self.name)?;
            for entry in &self.verification {
                writeln!(f)?;
                writeln!(f, "{}# {}", self.name, entry.command)?;
                writeln!(f, "{}", entry.output)?;
                writeln!(f)?;
            }
        }

        if let Some(failure) = &self.failure {
            writeln!(
                f,
                "{}",
                FailureLine {
                    name: &self.name,
                    host: &self.host,
                    failure,
                }
            )?;
        }
        Ok(())
    }
}

/// One human-readable diagnostic line for a failing device.
///
/// Each error classification maps to its own line; the catch-all carries the
/// underlying error text.
pub struct FailureLine<'a> {
    pub name: &'a str,
    pub host: &'a str,
    pub failure: &'a ProvisionerError,
}

impl fmt::Display for FailureLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.failure {
            ProvisionerError::ConnectionTimeout { .. } => write!(
                f,
                "ERROR: Timeout al conectar con {} ({}). Verifique la conectividad y las credenciales.",
                self.name, self.host
            ),
            ProvisionerError::AuthenticationFailure { .. } => write!(
                f,
                "ERROR: Autenticación fallida para {} ({}). Verifique el usuario y la contraseña.",
                self.name, self.host
            ),
            other => write!(
                f,
                "ERROR: Ocurrió un error inesperado al conectar o configurar {}: {}",
                self.name, other
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CommandOutput;

    fn base_report() -> DeviceReport {
        DeviceReport::new("SW1", "10.10.12.2")
    }

    #[test]
    fn test_connect_header_always_present() {
        let output = format!("{}", base_report());
        assert!(output.contains("###### Conectando a SW1 (10.10.12.2) ######"));
        assert!(!output.contains("Aplicando configuración"));
    }

    #[test]
    fn test_bulk_transcript_rendering() {
        let mut report = base_report();
        report.config_attempted = true;
        report.config = Some(ConfigTranscript::Bulk {
            output: "SW1(config)# vlan 110".to_string(),
        });

        let output = format!("{report}");
        assert!(output.contains("--- Aplicando configuración a SW1 ---"));
        assert!(output.contains("SW1(config)# vlan 110"));
    }

    #[test]
    fn test_per_command_transcript_surfaces_nonempty_output_only() {
        let mut report = DeviceReport::new("R1", "10.10.12.1");
        report.config_attempted = true;
        report.config = Some(ConfigTranscript::PerCommand {
            entries: vec![
                CommandOutput {
                    command: "/ip pool add name=POOL".to_string(),
                    output: String::new(),
                },
                CommandOutput {
                    command: "/ip address add address=10.10.12.33/27".to_string(),
                    output: "failure: already have such address".to_string(),
                },
            ],
        });

        let output = format!("{report}");
        assert!(output.contains("Ejecutando: /ip pool add name=POOL"));
        assert!(output.contains("Output: failure: already have such address"));
        // The empty-output command is echoed but produces no Output line
        assert_eq!(output.matches("Output:").count(), 1);
    }

    #[test]
    fn test_verification_section() {
        let mut report = base_report();
        report.config_attempted = true;
        report.config = Some(ConfigTranscript::Bulk {
            output: String::new(),
        });
        report.verification_attempted = true;
        report.verification.push(CommandOutput {
            command: "show vlan brief".to_string(),
            output: "110  VENTAS".to_string(),
        });

        let output = format!("{report}");
        assert!(output.contains("-- Verificación en SW1 --"));
        assert!(output.contains("SW1# show vlan brief"));
        assert!(output.contains("110  VENTAS"));
    }

    #[test]
    fn test_timeout_failure_line() {
        let mut report = DeviceReport::new("SW2", "10.10.12.3");
        report.failure = Some(ProvisionerError::connection_timeout("10.10.12.3"));

        let output = format!("{report}");
        assert!(output.contains(
            "ERROR: Timeout al conectar con SW2 (10.10.12.3). \
             Verifique la conectividad y las credenciales."
        ));
        assert!(!output.contains("Verificación"));
    }

    #[test]
    fn test_authentication_failure_line() {
        let mut report = DeviceReport::new("R2", "10.10.12.4");
        report.failure = Some(ProvisionerError::authentication_failure("10.10.12.4"));

        let output = format!("{report}");
        assert!(output.contains(
            "ERROR: Autenticación fallida para R2 (10.10.12.4). \
             Verifique el usuario y la contraseña."
        ));
    }

    #[test]
    fn test_unclassified_failure_line_carries_source_text() {
        let mut report = base_report();
        report.failure = Some(ProvisionerError::session("10.10.12.2", "broken pipe"));

        let output = format!("{report}");
        assert!(output.contains(
            "ERROR: Ocurrió un error inesperado al conectar o configurar SW1:"
        ));
        assert!(output.contains("broken pipe"));
    }
}
