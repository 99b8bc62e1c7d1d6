//! Shared error type across hostgauge crates.

use thiserror::Error;

/// Stable error codes (used in log fields and tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid configuration value.
    Config,
    /// Listener could not be bound.
    Bind,
    /// An OS metric query failed.
    Sample,
    /// The HTTP server stopped with an I/O error.
    Server,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG",
            ErrorCode::Bind => "BIND",
            ErrorCode::Sample => "SAMPLE",
            ErrorCode::Server => "SERVER",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, HostGaugeError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum HostGaugeError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("metric sample failed: {0}")]
    Sample(String),
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

impl HostGaugeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            HostGaugeError::Config(_) => ErrorCode::Config,
            HostGaugeError::Bind { .. } => ErrorCode::Bind,
            HostGaugeError::Sample(_) => ErrorCode::Sample,
            HostGaugeError::Server(_) => ErrorCode::Server,
        }
    }
}
