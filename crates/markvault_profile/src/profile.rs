//! The sync-profile capability interface and its implementations.

use crate::credentials::Credentials;
use crate::error::ProfileResult;
use crate::identity::{ProfileIdentity, NEXTCLOUD, WEBDAV};
use markvault_transport::{
    check_webdav_config, CheckResult, ReqwestClient, RemoteStore, TransportError, WebdavConfig,
    WebdavStore,
};

/// A named, user-selectable sync target.
///
/// One implementation per transport family, each supplying identity
/// constants, configuration validation, and transport construction.
/// Profiles are stateless; everything varying lives in the settings
/// store the caller owns.
pub trait SyncProfile: Send + Sync {
    /// The profile's immutable identity.
    fn identity(&self) -> &'static ProfileIdentity;

    /// Whether the profile holds a valid session.
    ///
    /// Profiles over request-time credential presentation (all of the
    /// current ones) have no session state, so this is constantly
    /// `true` regardless of whether the stored credentials actually
    /// work. That is a weak guarantee kept for compatibility: callers
    /// needing a real answer must run [`SyncProfile::check_config`].
    fn is_authenticated(&self) -> bool {
        true
    }

    /// Validates a candidate configuration against the live remote.
    ///
    /// Pure forwarding to the transport layer's own validator; this
    /// layer interprets nothing and never fails. Malformed input (an
    /// empty endpoint, say) is forwarded as-is and reported by the
    /// transport in the result's message.
    fn check_config(&self, config: &WebdavConfig) -> CheckResult;

    /// Builds a transport handle from resolved credentials.
    ///
    /// The handle comes back with the profile's diagnostic span
    /// attached and is usable for raw transport operations, but its
    /// sentinel state is unverified. Callers must run
    /// [`crate::ensure_sentinel`] before ordinary synchronization
    /// traffic; [`crate::ProfileBootstrap::init_transport`] does both
    /// in order.
    fn build_remote(&self, credentials: &Credentials) -> ProfileResult<Box<dyn RemoteStore>>;
}

/// Builds a WebDAV store with the profile's span attached.
///
/// Shared by every profile in the WebDAV family.
fn build_webdav_remote(
    identity: &'static ProfileIdentity,
    credentials: &Credentials,
) -> ProfileResult<Box<dyn RemoteStore>> {
    let config = credentials.to_webdav_config();
    let client = ReqwestClient::new(config.ignore_tls_errors)
        .map_err(TransportError::InvalidConfig)?;
    let store = WebdavStore::new(config, client);
    store.attach_span(tracing::info_span!(
        "sync_target",
        profile = identity.target_name()
    ));
    Ok(Box::new(store))
}

/// Runs the WebDAV family's configuration check with a real client.
fn check_webdav_family(config: &WebdavConfig) -> CheckResult {
    match ReqwestClient::new(config.ignore_tls_errors) {
        Ok(client) => check_webdav_config(config, &client),
        Err(e) => CheckResult::fail(format!("could not build HTTP client: {}", e)),
    }
}

/// The plain WebDAV sync target.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebdavProfile;

impl SyncProfile for WebdavProfile {
    fn identity(&self) -> &'static ProfileIdentity {
        &WEBDAV
    }

    fn check_config(&self, config: &WebdavConfig) -> CheckResult {
        check_webdav_family(config)
    }

    fn build_remote(&self, credentials: &Credentials) -> ProfileResult<Box<dyn RemoteStore>> {
        build_webdav_remote(self.identity(), credentials)
    }
}

/// The Nextcloud sync target.
///
/// Nextcloud speaks stock WebDAV, so the profile is a wrapper over
/// the WebDAV family: distinct identity and settings namespace, same
/// transport and the same configuration check underneath.
#[derive(Debug, Default, Clone, Copy)]
pub struct NextcloudProfile;

impl SyncProfile for NextcloudProfile {
    fn identity(&self) -> &'static ProfileIdentity {
        &NEXTCLOUD
    }

    fn check_config(&self, config: &WebdavConfig) -> CheckResult {
        check_webdav_family(config)
    }

    fn build_remote(&self, credentials: &Credentials) -> ProfileResult<Box<dyn RemoteStore>> {
        build_webdav_remote(self.identity(), credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identities_match_the_statics() {
        assert_eq!(NextcloudProfile.identity().id(), 5);
        assert_eq!(WebdavProfile.identity().id(), 6);
    }

    #[test]
    fn is_authenticated_ignores_credential_validity() {
        // Deliberately broken credentials: the predicate is constant.
        assert!(NextcloudProfile.is_authenticated());
        assert!(WebdavProfile.is_authenticated());
    }

    #[test]
    fn check_config_forwards_to_the_webdav_validator() {
        // An unusable endpoint fails before any network traffic, so
        // the pass-through can be observed offline: both profiles and
        // the transport validator itself report the same failure.
        let config = WebdavConfig::new("");
        let from_transport = check_webdav_family(&config);
        assert!(!from_transport.success);

        assert_eq!(NextcloudProfile.check_config(&config), from_transport);
        assert_eq!(WebdavProfile.check_config(&config), from_transport);
    }

    #[test]
    fn build_remote_does_not_validate_credentials() {
        // Construction binds credentials without testing them; the
        // first real operation is where bad values surface.
        let credentials = Credentials {
            endpoint: "https://cloud.example.com/vault".into(),
            username: "nobody".into(),
            password: "wrong".into(),
            ignore_tls_errors: false,
        };
        assert!(NextcloudProfile.build_remote(&credentials).is_ok());
    }
}
