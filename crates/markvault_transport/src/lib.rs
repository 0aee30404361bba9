//! # Markvault Transport
//!
//! Remote file store abstraction for markvault sync targets.
//!
//! This crate provides:
//! - The [`RemoteStore`] trait: get/put/list/delete over a remote
//!   file store, plus diagnostic span attachment
//! - A WebDAV implementation ([`WebdavStore`]) over an abstract
//!   [`HttpClient`], with a real blocking client ([`ReqwestClient`])
//! - Configuration validation ([`check_webdav_config`]) that reports
//!   failures as data, never as errors
//! - An in-memory store ([`MemoryStore`]) with a recorded call log,
//!   used by tests and by anything that needs a loopback remote
//!
//! ## Key Invariants
//!
//! - An absent remote object is `Ok(None)`, never an error
//! - Network and authentication failures propagate unmodified as
//!   [`TransportError`]; no retry is performed at this layer
//! - `check_webdav_config` never returns `Err`

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod http;
mod memory;
mod remote;
mod webdav;

pub use config::{CheckResult, WebdavConfig};
pub use error::{TransportError, TransportResult};
pub use http::{HttpClient, HttpRequest, HttpResponse, ReqwestClient};
pub use memory::{MemoryStore, RemoteCall};
pub use remote::RemoteStore;
pub use webdav::{check_webdav_config, WebdavStore};
