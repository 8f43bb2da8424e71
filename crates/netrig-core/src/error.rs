//! Error types for the provisioning library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all provisioning operations.
///
/// The first three variants are the per-device session classifications: they
/// are caught at the per-device boundary, surfaced as a diagnostic line, and
/// never abort the run. The remaining variants cover startup concerns
/// (inventory loading and validation).
#[derive(Error, Debug)]
pub enum ProvisionerError {
    /// Transport-level timeout while reaching a device
    #[error("Connection to {host} timed out")]
    ConnectionTimeout { host: String },
    /// Credential rejection by a device
    #[error("Authentication failed for {host}")]
    AuthenticationFailure { host: String },
    /// Any other failure during session use
    #[error("Session failure on {host}: {source}")]
    Session {
        host: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl ProvisionerError {
    /// Creates a connection-timeout classification for a host.
    pub fn connection_timeout(host: impl Into<String>) -> Self {
        Self::ConnectionTimeout { host: host.into() }
    }

    /// Creates an authentication-failure classification for a host.
    pub fn authentication_failure(host: impl Into<String>) -> Self {
        Self::AuthenticationFailure { host: host.into() }
    }

    /// Creates an unclassified session error for a host.
    pub fn session(
        host: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Session {
            host: host.into(),
            source: source.into(),
        }
    }

    /// Creates an input validation error.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a file system error with the offending path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// True for the transport-timeout classification.
    pub fn is_connection_timeout(&self) -> bool {
        matches!(self, Self::ConnectionTimeout { .. })
    }

    /// True for the credential-rejection classification.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::AuthenticationFailure { .. })
    }
}

/// Result type alias for provisioning operations
pub type Result<T> = std::result::Result<T, ProvisionerError>;
