//! Error types for the iSchool site

use thiserror::Error;

/// Main error type for the iSchool site
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IschoolError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request to {endpoint} failed with status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("Malformed response from {endpoint}: {message}")]
    Malformed { endpoint: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Coarse classification used when deciding how a failure is surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NetworkFailure,
    MalformedResponse,
    Config,
    InvalidInput,
}

impl IschoolError {
    pub fn malformed(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) | Self::Status { .. } => ErrorKind::NetworkFailure,
            Self::Malformed { .. } => ErrorKind::MalformedResponse,
            Self::Config(_) => ErrorKind::Config,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }
}

/// Result type alias for iSchool operations
pub type Result<T> = std::result::Result<T, IschoolError>;
