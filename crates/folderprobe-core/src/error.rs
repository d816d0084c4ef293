//! Shared error type across folderprobe crates.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Stable error codes; logged as `code` and mapped onto probe outcome labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Probe request without a usable `target`.
    BadRequest,
    /// Filesystem error while scanning the target.
    ScanFailed,
    /// Configuration rejected at startup.
    InvalidConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::ScanFailed => "SCAN_FAILED",
            ClientCode::InvalidConfig => "INVALID_CONFIG",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Parameter 'target' is missing")]
    MissingTarget,
    #[error("{}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl ProbeError {
    /// Wrap an I/O error with the path that produced it.
    pub fn scan(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ProbeError::Scan {
            path: path.into(),
            source,
        }
    }

    /// Map internal error to a stable code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            ProbeError::MissingTarget => ClientCode::BadRequest,
            ProbeError::Scan { .. } => ClientCode::ScanFailed,
            ProbeError::InvalidConfig(_) => ClientCode::InvalidConfig,
            ProbeError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            ProbeError::Internal(_) => ClientCode::Internal,
        }
    }
}
