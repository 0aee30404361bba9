//! Error types for profile bootstrap.

use markvault_transport::TransportError;
use thiserror::Error;

/// Result type for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors that abort a profile bootstrap.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The transport failed while building the handle or reading the
    /// sentinel. Propagated unmodified; this layer does not retry.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Writing the sentinel failed. This is fatal: the caller must not
    /// hand an unverified handle to the engine.
    #[error("failed to write sentinel {name}: {source}")]
    Sentinel {
        /// Name of the sentinel object.
        name: String,
        /// The underlying transport failure.
        #[source]
        source: TransportError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_error_names_the_object() {
        let err = ProfileError::Sentinel {
            name: "warning.md".into(),
            source: TransportError::Network("offline".into()),
        };
        assert!(err.to_string().contains("warning.md"));
    }
}
