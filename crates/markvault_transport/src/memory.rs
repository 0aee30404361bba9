//! In-memory remote store for tests and loopback use.

use crate::error::{TransportError, TransportResult};
use crate::remote::RemoteStore;
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::Span;

/// One recorded operation against a [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    /// A `get` for the named object.
    Get(String),
    /// A `put` for the named object.
    Put(String),
    /// A `list` of the root.
    List,
    /// A `delete` of the named object.
    Delete(String),
}

/// An in-memory [`RemoteStore`].
///
/// Every operation is appended to a call log so tests can assert on
/// exactly which traffic an algorithm produced. Failure switches allow
/// injecting transport errors on reads or writes.
pub struct MemoryStore {
    objects: Mutex<BTreeMap<String, String>>,
    calls: Mutex<Vec<RemoteCall>>,
    fail_gets: AtomicBool,
    fail_puts: AtomicBool,
    span: RwLock<Span>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            objects: Mutex::new(BTreeMap::new()),
            calls: Mutex::new(Vec::new()),
            fail_gets: AtomicBool::new(false),
            fail_puts: AtomicBool::new(false),
            span: RwLock::new(Span::none()),
        }
    }

    /// Seeds an object without recording a call.
    pub fn seed(&self, name: impl Into<String>, content: impl Into<String>) {
        self.objects.lock().insert(name.into(), content.into());
    }

    /// Returns the current content of an object, if present.
    pub fn content(&self, name: &str) -> Option<String> {
        self.objects.lock().get(name).cloned()
    }

    /// Returns the recorded call log.
    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().clone()
    }

    /// Returns how many `put` calls were recorded.
    pub fn put_count(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, RemoteCall::Put(_)))
            .count()
    }

    /// Makes subsequent `get` calls fail with a network error.
    pub fn set_fail_gets(&self, fail: bool) {
        self.fail_gets.store(fail, Ordering::SeqCst);
    }

    /// Makes subsequent `put` calls fail with a network error.
    pub fn set_fail_puts(&self, fail: bool) {
        self.fail_puts.store(fail, Ordering::SeqCst);
    }

    fn record(&self, call: RemoteCall) {
        self.calls.lock().push(call);
    }
}

impl RemoteStore for MemoryStore {
    fn get(&self, name: &str) -> TransportResult<Option<String>> {
        self.record(RemoteCall::Get(name.to_string()));
        if self.fail_gets.load(Ordering::SeqCst) {
            return Err(TransportError::Network("simulated read failure".into()));
        }
        Ok(self.objects.lock().get(name).cloned())
    }

    fn put(&self, name: &str, content: &str) -> TransportResult<()> {
        self.record(RemoteCall::Put(name.to_string()));
        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(TransportError::Network("simulated write failure".into()));
        }
        self.objects
            .lock()
            .insert(name.to_string(), content.to_string());
        Ok(())
    }

    fn list(&self) -> TransportResult<Vec<String>> {
        self.record(RemoteCall::List);
        Ok(self.objects.lock().keys().cloned().collect())
    }

    fn delete(&self, name: &str) -> TransportResult<()> {
        self.record(RemoteCall::Delete(name.to_string()));
        self.objects.lock().remove(name);
        Ok(())
    }

    fn attach_span(&self, span: Span) {
        *self.span.write() = span;
    }
}
