//! End-to-end bootstrap and synchronization flow.

use markvault_engine::{AppType, MemoryLocalStore, SyncState};
use markvault_profile::{
    MemorySettings, NextcloudProfile, ProfileBootstrap, SyncProfile, WebdavProfile,
    APP_TYPE_KEY, SENTINEL_CONTENT, SENTINEL_NAME,
};
use markvault_transport::{MemoryStore, RemoteCall, RemoteStore, TransportResult};
use std::sync::Arc;
use tracing::Span;

/// Remote handle that keeps the backing store observable.
struct SharedRemote(Arc<MemoryStore>);

impl RemoteStore for SharedRemote {
    fn get(&self, name: &str) -> TransportResult<Option<String>> {
        self.0.get(name)
    }
    fn put(&self, name: &str, content: &str) -> TransportResult<()> {
        self.0.put(name, content)
    }
    fn list(&self) -> TransportResult<Vec<String>> {
        self.0.list()
    }
    fn delete(&self, name: &str) -> TransportResult<()> {
        self.0.delete(name)
    }
    fn attach_span(&self, span: Span) {
        self.0.attach_span(span)
    }
}

#[test]
fn bootstrap_then_sync_against_empty_remote() {
    let store = Arc::new(MemoryStore::new());
    let settings = MemorySettings::new();
    settings.set(APP_TYPE_KEY, "cli");
    let boot = ProfileBootstrap::new(NextcloudProfile, settings);

    // Bootstrap: sentinel is created with exactly one put, no retries.
    let handle = boot
        .init_transport_with(Box::new(SharedRemote(Arc::clone(&store))))
        .unwrap();
    assert_eq!(
        store.calls(),
        vec![
            RemoteCall::Get(SENTINEL_NAME.to_string()),
            RemoteCall::Put(SENTINEL_NAME.to_string()),
        ]
    );
    assert_eq!(
        store.content(SENTINEL_NAME).as_deref(),
        Some(SENTINEL_CONTENT)
    );

    // Engine: local items flow to the remote, sentinel flows back as
    // a remote-only item (it lives under the vault like any other
    // object).
    let local = MemoryLocalStore::new();
    local.seed("first-note.md", "# First note");
    let engine = boot.init_engine(Box::new(local), handle);
    assert_eq!(engine.app_type(), AppType::Cli);

    let report = engine.sync().unwrap();
    assert_eq!(report.pushed, 1);
    assert_eq!(engine.state(), SyncState::Synced);
    assert_eq!(
        store.content("first-note.md").as_deref(),
        Some("# First note")
    );
}

#[test]
fn second_bootstrap_is_idempotent() {
    let store = Arc::new(MemoryStore::new());
    let boot = ProfileBootstrap::new(WebdavProfile, MemorySettings::new());

    boot.init_transport_with(Box::new(SharedRemote(Arc::clone(&store))))
        .unwrap();
    boot.init_transport_with(Box::new(SharedRemote(Arc::clone(&store))))
        .unwrap();

    // First bootstrap wrote the sentinel; the second only read it.
    assert_eq!(store.put_count(), 1);
}

#[test]
fn profiles_report_authenticated_without_any_settings() {
    assert!(NextcloudProfile.is_authenticated());
    assert!(WebdavProfile.is_authenticated());
}
