//! Profile bootstrap: transport construction and engine wiring.

use crate::credentials::Credentials;
use crate::error::ProfileResult;
use crate::profile::SyncProfile;
use crate::sentinel::ensure_sentinel;
use crate::settings::{SettingsStore, APP_TYPE_KEY};
use markvault_engine::{AppType, LocalStore, Synchronizer};
use markvault_transport::{CheckResult, RemoteStore, WebdavConfig};

/// Composes a profile and a settings store into ready collaborators.
///
/// The caller assembles the settings store from whatever storage
/// backend it uses and owns it; the bootstrap only reads. One
/// bootstrap call runs strictly sequentially: resolve credentials,
/// build the handle, verify the sentinel, return. Nothing is shared
/// across concurrent bootstraps except the remote itself, where the
/// sentinel's last-writer-wins race is harmless.
pub struct ProfileBootstrap<P: SyncProfile, S: SettingsStore> {
    profile: P,
    settings: S,
}

impl<P: SyncProfile, S: SettingsStore> ProfileBootstrap<P, S> {
    /// Creates a bootstrap for a profile over a settings store.
    ///
    /// No I/O happens here; credentials are resolved when a transport
    /// is built, so later settings changes are picked up.
    pub fn new(profile: P, settings: S) -> Self {
        Self { profile, settings }
    }

    /// Returns the profile.
    pub fn profile(&self) -> &P {
        &self.profile
    }

    /// Builds a transport handle and runs the sentinel check on it.
    ///
    /// The returned handle is ready for ordinary synchronization
    /// traffic. Any transport failure, including a failed sentinel
    /// write, aborts the bootstrap; there is no retry.
    pub fn init_transport(&self) -> ProfileResult<Box<dyn RemoteStore>> {
        let credentials = Credentials::resolve(&self.settings, self.profile.identity().id());
        let remote = self.profile.build_remote(&credentials)?;
        ensure_sentinel(remote.as_ref())?;
        Ok(remote)
    }

    /// Runs the sentinel check on a caller-supplied handle.
    ///
    /// Same sequence as [`Self::init_transport`] minus the credential
    /// resolution and construction, for callers that already hold a
    /// handle (tests, loopback stores).
    pub fn init_transport_with(
        &self,
        remote: Box<dyn RemoteStore>,
    ) -> ProfileResult<Box<dyn RemoteStore>> {
        ensure_sentinel(remote.as_ref())?;
        Ok(remote)
    }

    /// Constructs the synchronization engine from a verified handle.
    ///
    /// No validation happens here; the engine checks its own inputs
    /// when it runs. The application-type tag is read from the
    /// settings store, defaulting to desktop.
    pub fn init_engine(&self, local: Box<dyn LocalStore>, remote: Box<dyn RemoteStore>) -> Synchronizer {
        let app_type = self
            .settings
            .get(APP_TYPE_KEY)
            .and_then(|value| AppType::parse(&value))
            .unwrap_or_default();
        Synchronizer::new(local, remote, app_type)
    }

    /// Whether the profile holds a valid session. Constantly `true`
    /// for the provided profiles; see [`SyncProfile::is_authenticated`].
    pub fn is_authenticated(&self) -> bool {
        self.profile.is_authenticated()
    }

    /// Validates a candidate configuration via the profile.
    pub fn check_config(&self, config: &WebdavConfig) -> CheckResult {
        self.profile.check_config(config)
    }
}
