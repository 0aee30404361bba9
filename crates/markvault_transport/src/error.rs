//! Error types for remote transports.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur while talking to a remote file store.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The remote rejected the credentials.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The remote answered with an unexpected HTTP status.
    #[error("remote error: HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body or status text.
        message: String,
    },

    /// The request never reached the remote (DNS, TCP, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// The transport configuration cannot be used to build a request.
    #[error("invalid transport configuration: {0}")]
    InvalidConfig(String),

    /// The remote returned a body that is not valid UTF-8.
    #[error("remote object {name} is not valid UTF-8")]
    InvalidBody {
        /// Name of the remote object.
        name: String,
    },
}

impl TransportError {
    /// Maps an HTTP status to the matching error variant.
    ///
    /// 401 and 403 are credential problems; everything else is a plain
    /// HTTP error carrying the status text.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => TransportError::AuthFailed(message),
            _ => TransportError::Http { status, message },
        }
    }
}
