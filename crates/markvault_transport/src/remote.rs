//! Remote file store abstraction.

use crate::error::TransportResult;
use tracing::Span;

/// A handle to a remote file store.
///
/// This trait is the contract between a sync target's transport layer
/// and everything above it (sentinel checking, the synchronization
/// engine). Implementations cover real protocols ([`crate::WebdavStore`])
/// as well as in-memory loopbacks for testing ([`crate::MemoryStore`]).
///
/// A handle represents one open session; it is owned by the caller
/// that built it and is not shared across concurrent bootstraps.
pub trait RemoteStore: Send + Sync {
    /// Reads a remote object by name.
    ///
    /// Returns `Ok(None)` if the object does not exist. Absence is a
    /// normal answer, not an error.
    fn get(&self, name: &str) -> TransportResult<Option<String>>;

    /// Writes a remote object, creating or replacing it.
    fn put(&self, name: &str, content: &str) -> TransportResult<()>;

    /// Lists the object names at the remote root.
    fn list(&self) -> TransportResult<Vec<String>>;

    /// Deletes a remote object. Deleting a missing object is not an
    /// error.
    fn delete(&self, name: &str) -> TransportResult<()>;

    /// Attaches a diagnostic span to the handle.
    ///
    /// Subsequent operations are recorded inside this span, so that
    /// transport traffic can be attributed to the profile that opened
    /// the session.
    fn attach_span(&self, span: Span);
}

impl std::fmt::Debug for dyn RemoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn RemoteStore")
    }
}
