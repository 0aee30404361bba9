//! Settings store abstraction.
//!
//! Profiles read their connection parameters through an explicit
//! [`SettingsStore`] passed in by the caller; there is no global
//! settings singleton. Key names are fixed for compatibility with
//! existing deployments.

use parking_lot::RwLock;
use std::collections::HashMap;

/// Settings key for the application-type tag.
pub const APP_TYPE_KEY: &str = "appType";

/// Settings key for the TLS-error tolerance flag (shared, not
/// per-profile).
pub const IGNORE_TLS_KEY: &str = "net.ignoreTlsErrors";

/// Builds a per-profile settings key: `sync.<id>.<field>`.
pub fn setting_key(profile_id: u32, field: &str) -> String {
    format!("sync.{}.{}", profile_id, field)
}

/// Read-only access to configuration values.
pub trait SettingsStore: Send + Sync {
    /// Returns the value for a key, if set.
    fn get(&self, key: &str) -> Option<String>;

    /// Returns a boolean value; unset or unparsable keys are `false`.
    fn get_bool(&self, key: &str) -> bool {
        matches!(self.get(key).as_deref(), Some("true") | Some("1"))
    }
}

/// An in-memory settings store for callers that assemble configuration
/// programmatically (the CLI, tests).
#[derive(Default)]
pub struct MemorySettings {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySettings {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values.write().insert(key.into(), value.into());
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }
}
