//! The synchronizer: one reconciliation pass per call.

use crate::error::EngineResult;
use crate::local::LocalStore;
use markvault_transport::RemoteStore;
use parking_lot::RwLock;
use std::collections::BTreeSet;

/// Which kind of application constructed the engine.
///
/// Recorded per session so the remote side of a deployment can tell
/// device classes apart in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppType {
    /// Desktop application.
    #[default]
    Desktop,
    /// Mobile application.
    Mobile,
    /// Command-line client.
    Cli,
}

impl AppType {
    /// Parses an application-type tag.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "desktop" => Some(AppType::Desktop),
            "mobile" => Some(AppType::Mobile),
            "cli" => Some(AppType::Cli),
            _ => None,
        }
    }

    /// Returns the canonical tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppType::Desktop => "desktop",
            AppType::Mobile => "mobile",
            AppType::Cli => "cli",
        }
    }
}

/// The current state of the synchronizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// No pass has run yet.
    Idle,
    /// A pass is in progress.
    Running,
    /// The last pass completed.
    Synced,
    /// The last pass failed.
    Error,
}

/// Statistics across synchronization passes.
#[derive(Debug, Clone, Default)]
pub struct SyncStats {
    /// Completed passes.
    pub cycles_completed: u64,
    /// Items pushed to the remote in total.
    pub items_pushed: u64,
    /// Items pulled from the remote in total.
    pub items_pulled: u64,
    /// Message of the last failure, if any.
    pub last_error: Option<String>,
}

/// Result of one synchronization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Items pushed to the remote.
    pub pushed: u64,
    /// Items pulled from the remote.
    pub pulled: u64,
}

/// Reconciles a local item store with a remote file store.
///
/// Construction performs no validation and no I/O; a synchronizer
/// built from a broken transport fails on the first [`Self::sync`]
/// call, not before.
pub struct Synchronizer {
    local: Box<dyn LocalStore>,
    remote: Box<dyn RemoteStore>,
    app_type: AppType,
    state: RwLock<SyncState>,
    stats: RwLock<SyncStats>,
}

impl Synchronizer {
    /// Creates a synchronizer from its three collaborators.
    pub fn new(local: Box<dyn LocalStore>, remote: Box<dyn RemoteStore>, app_type: AppType) -> Self {
        Self {
            local,
            remote,
            app_type,
            state: RwLock::new(SyncState::Idle),
            stats: RwLock::new(SyncStats::default()),
        }
    }

    /// Returns the application type this session was opened for.
    pub fn app_type(&self) -> AppType {
        self.app_type
    }

    /// Returns the current state.
    pub fn state(&self) -> SyncState {
        *self.state.read()
    }

    /// Returns a snapshot of the statistics.
    pub fn stats(&self) -> SyncStats {
        self.stats.read().clone()
    }

    /// Runs one reconciliation pass.
    ///
    /// Local-only items are pushed; remote-only items are pulled. An
    /// item present on both sides is left alone: this engine does not
    /// resolve content conflicts.
    pub fn sync(&self) -> EngineResult<SyncReport> {
        *self.state.write() = SyncState::Running;
        match self.cycle() {
            Ok(report) => {
                let mut stats = self.stats.write();
                stats.cycles_completed += 1;
                stats.items_pushed += report.pushed;
                stats.items_pulled += report.pulled;
                stats.last_error = None;
                *self.state.write() = SyncState::Synced;
                Ok(report)
            }
            Err(e) => {
                self.stats.write().last_error = Some(e.to_string());
                *self.state.write() = SyncState::Error;
                Err(e)
            }
        }
    }

    fn cycle(&self) -> EngineResult<SyncReport> {
        let remote_names: BTreeSet<String> = self.remote.list()?.into_iter().collect();
        let local_names: BTreeSet<String> = self.local.items()?.into_iter().collect();

        let mut pushed = 0;
        for name in local_names.difference(&remote_names) {
            if let Some(content) = self.local.content(name)? {
                self.remote.put(name, &content)?;
                pushed += 1;
            }
        }

        let mut pulled = 0;
        for name in remote_names.difference(&local_names) {
            // The item may have been deleted between list and get.
            if let Some(content) = self.remote.get(name)? {
                self.local.upsert(name, &content)?;
                pulled += 1;
            }
        }

        tracing::info!(
            app_type = self.app_type.as_str(),
            pushed,
            pulled,
            "sync pass complete"
        );
        Ok(SyncReport { pushed, pulled })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local::MemoryLocalStore;
    use markvault_transport::MemoryStore;

    fn synchronizer(local: MemoryLocalStore, remote: MemoryStore) -> Synchronizer {
        Synchronizer::new(Box::new(local), Box::new(remote), AppType::Cli)
    }

    #[test]
    fn app_type_parsing() {
        assert_eq!(AppType::parse("desktop"), Some(AppType::Desktop));
        assert_eq!(AppType::parse("cli"), Some(AppType::Cli));
        assert_eq!(AppType::parse("toaster"), None);
        assert_eq!(AppType::Mobile.as_str(), "mobile");
    }

    #[test]
    fn pushes_local_only_items() {
        let local = MemoryLocalStore::new();
        local.seed("a.md", "alpha");
        local.seed("b.md", "beta");
        let remote = MemoryStore::new();
        remote.seed("b.md", "beta");

        let sync = synchronizer(local, remote);
        let report = sync.sync().unwrap();
        assert_eq!(report, SyncReport { pushed: 1, pulled: 0 });
        assert_eq!(sync.state(), SyncState::Synced);
    }

    #[test]
    fn pulls_remote_only_items() {
        let local = MemoryLocalStore::new();
        let remote = MemoryStore::new();
        remote.seed("c.md", "gamma");

        let sync = synchronizer(local, remote);
        let report = sync.sync().unwrap();
        assert_eq!(report, SyncReport { pushed: 0, pulled: 1 });
        assert_eq!(
            sync.local.content("c.md").unwrap().as_deref(),
            Some("gamma")
        );
    }

    #[test]
    fn item_on_both_sides_is_untouched() {
        let local = MemoryLocalStore::new();
        local.seed("a.md", "local version");
        let remote = MemoryStore::new();
        remote.seed("a.md", "remote version");

        let sync = synchronizer(local, remote);
        let report = sync.sync().unwrap();
        assert_eq!(report, SyncReport { pushed: 0, pulled: 0 });
    }

    #[test]
    fn transport_failure_sets_error_state() {
        let local = MemoryLocalStore::new();
        local.seed("a.md", "alpha");
        let remote = MemoryStore::new();
        remote.set_fail_puts(true);

        let sync = synchronizer(local, remote);
        assert!(sync.sync().is_err());
        assert_eq!(sync.state(), SyncState::Error);
        assert!(sync.stats().last_error.is_some());
    }

    #[test]
    fn stats_accumulate_across_passes() {
        let local = MemoryLocalStore::new();
        local.seed("a.md", "alpha");
        let remote = MemoryStore::new();

        let sync = synchronizer(local, remote);
        sync.sync().unwrap();
        sync.sync().unwrap();

        let stats = sync.stats();
        assert_eq!(stats.cycles_completed, 2);
        assert_eq!(stats.items_pushed, 1);
    }
}
