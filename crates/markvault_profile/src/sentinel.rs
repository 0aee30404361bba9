//! The self-healing integrity sentinel.
//!
//! Synced vaults are plain Markdown files, and remote stores are
//! browsable through other clients (the Nextcloud web UI, random DAV
//! file managers). The sentinel is a fixed, loudly named file warning
//! people not to edit the Markdown directly. Each bootstrap verifies
//! it and repairs it if missing or altered.

use crate::error::{ProfileError, ProfileResult};
use markvault_transport::RemoteStore;

/// Fixed name of the sentinel object. Existing deployments depend on
/// this exact string.
pub const SENTINEL_NAME: &str = "_⚠️_IMPORTANT_READ_FIRST_⚠️_.md";

/// Fixed content of the sentinel object.
pub const SENTINEL_CONTENT: &str = "WARNING DO NOT EDIT ANY MARKDOWN FILE";

/// Which path the sentinel check took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentinelOutcome {
    /// The sentinel was absent and has been written.
    Created,
    /// The sentinel had the wrong content and has been overwritten.
    Repaired,
    /// The sentinel was present with the exact expected content; no
    /// write was performed.
    Verified,
}

/// Verifies the sentinel on a fresh transport handle, healing it if
/// needed.
///
/// Three-way reconciliation, not a transaction: the read and the
/// write are not atomic with respect to other devices bootstrapping
/// against the same remote. Last writer wins; since every writer
/// writes the same bytes, the race is harmless. Absence or mismatch
/// is the expected self-healing path, never an error. A failed write
/// is fatal and aborts the bootstrap.
pub fn ensure_sentinel(remote: &dyn RemoteStore) -> ProfileResult<SentinelOutcome> {
    let existing = remote.get(SENTINEL_NAME)?;
    match existing.as_deref() {
        None => {
            tracing::info!(name = SENTINEL_NAME, "sentinel missing, adding");
            write_sentinel(remote)?;
            Ok(SentinelOutcome::Created)
        }
        Some(content) if content != SENTINEL_CONTENT => {
            tracing::info!(name = SENTINEL_NAME, "sentinel has wrong content, updating");
            write_sentinel(remote)?;
            Ok(SentinelOutcome::Repaired)
        }
        Some(_) => {
            tracing::info!(name = SENTINEL_NAME, "sentinel present and correct");
            Ok(SentinelOutcome::Verified)
        }
    }
}

fn write_sentinel(remote: &dyn RemoteStore) -> ProfileResult<()> {
    remote
        .put(SENTINEL_NAME, SENTINEL_CONTENT)
        .map_err(|source| ProfileError::Sentinel {
            name: SENTINEL_NAME.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use markvault_transport::{MemoryStore, RemoteCall};

    #[test]
    fn absent_sentinel_is_created() {
        let remote = MemoryStore::new();
        let outcome = ensure_sentinel(&remote).unwrap();

        assert_eq!(outcome, SentinelOutcome::Created);
        assert_eq!(
            remote.content(SENTINEL_NAME).as_deref(),
            Some(SENTINEL_CONTENT)
        );
        assert_eq!(remote.put_count(), 1);
    }

    #[test]
    fn wrong_content_is_repaired() {
        let remote = MemoryStore::new();
        remote.seed(SENTINEL_NAME, "old text");

        let outcome = ensure_sentinel(&remote).unwrap();
        assert_eq!(outcome, SentinelOutcome::Repaired);
        assert_eq!(
            remote.content(SENTINEL_NAME).as_deref(),
            Some(SENTINEL_CONTENT)
        );
        assert_eq!(remote.put_count(), 1);
    }

    #[test]
    fn correct_sentinel_is_not_rewritten() {
        let remote = MemoryStore::new();
        remote.seed(SENTINEL_NAME, SENTINEL_CONTENT);

        let outcome = ensure_sentinel(&remote).unwrap();
        assert_eq!(outcome, SentinelOutcome::Verified);
        assert_eq!(remote.put_count(), 0);
        assert_eq!(
            remote.calls(),
            vec![RemoteCall::Get(SENTINEL_NAME.to_string())]
        );
    }

    #[test]
    fn comparison_is_byte_exact() {
        let remote = MemoryStore::new();
        // Trailing whitespace counts as a mismatch.
        remote.seed(SENTINEL_NAME, format!("{} ", SENTINEL_CONTENT));

        assert_eq!(ensure_sentinel(&remote).unwrap(), SentinelOutcome::Repaired);
    }

    #[test]
    fn read_failure_propagates_as_transport_error() {
        let remote = MemoryStore::new();
        remote.set_fail_gets(true);

        assert!(matches!(
            ensure_sentinel(&remote),
            Err(ProfileError::Transport(_))
        ));
    }

    #[test]
    fn write_failure_is_fatal() {
        let remote = MemoryStore::new();
        remote.set_fail_puts(true);

        let err = ensure_sentinel(&remote).unwrap_err();
        assert!(matches!(err, ProfileError::Sentinel { .. }));
    }

    #[test]
    fn sentinel_literals_are_fixed() {
        assert_eq!(SENTINEL_NAME, "_⚠️_IMPORTANT_READ_FIRST_⚠️_.md");
        assert_eq!(SENTINEL_CONTENT, "WARNING DO NOT EDIT ANY MARKDOWN FILE");
    }
}
