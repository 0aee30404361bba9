//! Error types for the synchronization engine.

use markvault_transport::TransportError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur during a synchronization pass.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The remote transport failed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The local store failed.
    #[error("local store error: {0}")]
    Local(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_convert() {
        let err: EngineError = TransportError::Network("timeout".into()).into();
        assert!(err.to_string().contains("timeout"));
    }
}
