//! Domain error types
//!
//! This module defines the error hierarchy for medsync. All errors are
//! domain-specific and don't expose third-party types: presentation code
//! observes only the local store, and even internally the remote transport
//! is reduced to the taxonomy below.

use thiserror::Error;

/// Main medsync error type
///
/// This is the primary error type used throughout the crate. It wraps the
/// remote-store error family and provides context for error handling at the
/// coordinator and transition-manager boundaries, where most variants are
/// logged and swallowed rather than surfaced.
#[derive(Debug, Error)]
pub enum MedSyncError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Remote store gateway errors
    #[error("Remote store error: {0}")]
    Remote(#[from] RemoteStoreError),

    /// A record or patient is absent locally or remotely
    #[error("Not found: {0}")]
    NotFound(String),

    /// Non-retryable anomaly detected by the consistency verifier
    #[error("Inconsistent result: {0}")]
    Inconsistent(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Remote store gateway errors
///
/// Errors that occur when talking to the remote relational store over REST.
/// These don't expose the HTTP client's types; transport failures and
/// rejected writes stay distinguishable for the logging policy in the sync
/// coordinator and status transition manager.
#[derive(Debug, Error)]
pub enum RemoteStoreError {
    /// Failed to reach the remote store
    #[error("Failed to connect to remote store: {0}")]
    ConnectionFailed(String),

    /// Request timed out at the transport
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Remote store answered with a non-success status code
    #[error("Remote store rejected request: {status} - {message}")]
    Rejected { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Invalid response from remote store: {0}")]
    InvalidResponse(String),

    /// Query construction or execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl RemoteStoreError {
    /// Returns `true` for transport-level failures (network, timeout)
    ///
    /// Distinguishes "the store never saw the request" from "the store saw
    /// and rejected it"; both are logged, but with different events.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::Timeout(_))
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for MedSyncError {
    fn from(err: std::io::Error) -> Self {
        MedSyncError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for MedSyncError {
    fn from(err: serde_json::Error) -> Self {
        MedSyncError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for MedSyncError {
    fn from(err: toml::de::Error) -> Self {
        MedSyncError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medsync_error_display() {
        let err = MedSyncError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_remote_error_conversion() {
        let remote_err = RemoteStoreError::ConnectionFailed("Network error".to_string());
        let err: MedSyncError = remote_err.into();
        assert!(matches!(err, MedSyncError::Remote(_)));
    }

    #[test]
    fn test_rejected_display_carries_status() {
        let err = RemoteStoreError::Rejected {
            status: 409,
            message: "conflict".to_string(),
        };
        assert!(err.to_string().contains("409"));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_transport_classification() {
        assert!(RemoteStoreError::Timeout("30s".to_string()).is_transport());
        assert!(RemoteStoreError::ConnectionFailed("refused".to_string()).is_transport());
        assert!(!RemoteStoreError::InvalidResponse("bad json".to_string()).is_transport());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: MedSyncError = io_err.into();
        assert!(matches!(err, MedSyncError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: MedSyncError = json_err.into();
        assert!(matches!(err, MedSyncError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: MedSyncError = toml_err.into();
        assert!(matches!(err, MedSyncError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let err = MedSyncError::NotFound("apt-1".to_string());
        let _: &dyn std::error::Error = &err;

        let err = RemoteStoreError::QueryFailed("bad filter".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
