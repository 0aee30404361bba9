//! # Markvault Profile
//!
//! Named sync-target profiles: identity, configuration validation,
//! credential resolution, and the bootstrap sequence that turns a
//! profile plus a settings store into a ready transport handle and a
//! synchronization engine.
//!
//! The engineering core of this crate is the **sentinel check**: every
//! successful bootstrap self-heals a fixed warning file on the remote
//! so that people browsing the store through other clients see it
//! before touching the synced Markdown files.
//!
//! ## Bootstrap sequence
//!
//! 1. Resolve credentials from the settings store
//! 2. Build the transport handle for the profile's family
//! 3. Run the sentinel check against the fresh handle
//! 4. Hand the verified handle to the synchronization engine
//!
//! Steps run strictly in order within one call; nothing here retries,
//! locks, or runs concurrently.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod bootstrap;
mod credentials;
mod error;
mod identity;
mod profile;
mod sentinel;
mod settings;

pub use bootstrap::ProfileBootstrap;
pub use credentials::Credentials;
pub use error::{ProfileError, ProfileResult};
pub use identity::{ProfileIdentity, NEXTCLOUD, WEBDAV};
pub use profile::{NextcloudProfile, SyncProfile, WebdavProfile};
pub use sentinel::{ensure_sentinel, SentinelOutcome, SENTINEL_CONTENT, SENTINEL_NAME};
pub use settings::{setting_key, MemorySettings, SettingsStore, APP_TYPE_KEY, IGNORE_TLS_KEY};
