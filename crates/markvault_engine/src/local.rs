//! Local item store abstraction.

use crate::error::EngineResult;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// The local side of a synchronization session.
///
/// Items are named text documents; the engine only needs enumeration,
/// read, and write.
pub trait LocalStore: Send + Sync {
    /// Lists the names of all local items.
    fn items(&self) -> EngineResult<Vec<String>>;

    /// Reads an item's content, if present.
    fn content(&self, name: &str) -> EngineResult<Option<String>>;

    /// Creates or replaces an item.
    fn upsert(&self, name: &str, content: &str) -> EngineResult<()>;
}

/// An in-memory [`LocalStore`].
#[derive(Default)]
pub struct MemoryLocalStore {
    items: RwLock<BTreeMap<String, String>>,
}

impl MemoryLocalStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an item.
    pub fn seed(&self, name: impl Into<String>, content: impl Into<String>) {
        self.items.write().insert(name.into(), content.into());
    }
}

impl LocalStore for MemoryLocalStore {
    fn items(&self) -> EngineResult<Vec<String>> {
        Ok(self.items.read().keys().cloned().collect())
    }

    fn content(&self, name: &str) -> EngineResult<Option<String>> {
        Ok(self.items.read().get(name).cloned())
    }

    fn upsert(&self, name: &str, content: &str) -> EngineResult<()> {
        self.items
            .write()
            .insert(name.to_string(), content.to_string());
        Ok(())
    }
}
