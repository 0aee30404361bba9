//! # Markvault Engine
//!
//! Reconciliation engine between a local item store and a remote file
//! store.
//!
//! The engine is deliberately simple: one [`Synchronizer::sync`] pass
//! pushes local-only items to the remote and pulls remote-only items
//! into the local store. It owns the transport handle it was built
//! with for the duration of a session and validates its own inputs
//! when it runs, not when it is constructed.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod local;
mod synchronizer;

pub use error::{EngineError, EngineResult};
pub use local::{LocalStore, MemoryLocalStore};
pub use synchronizer::{AppType, SyncReport, SyncState, SyncStats, Synchronizer};
