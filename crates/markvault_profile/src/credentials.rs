//! Credential resolution.

use crate::settings::{setting_key, SettingsStore, IGNORE_TLS_KEY};
use markvault_transport::WebdavConfig;

/// Connection parameters snapshotted from the settings store.
///
/// Resolution happens at the moment a transport is built, not when
/// the bootstrap object is constructed, so a profile always connects
/// with the values currently in the store. Unset keys resolve to
/// empty strings; whether that is acceptable is decided by the
/// transport's own validation, not here.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// Remote endpoint URL.
    pub endpoint: String,
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
    /// Whether to tolerate invalid TLS certificates.
    pub ignore_tls_errors: bool,
}

impl Credentials {
    /// Reads the four connection parameters for a profile.
    pub fn resolve(settings: &dyn SettingsStore, profile_id: u32) -> Self {
        Self {
            endpoint: settings
                .get(&setting_key(profile_id, "path"))
                .unwrap_or_default(),
            username: settings
                .get(&setting_key(profile_id, "username"))
                .unwrap_or_default(),
            password: settings
                .get(&setting_key(profile_id, "password"))
                .unwrap_or_default(),
            ignore_tls_errors: settings.get_bool(IGNORE_TLS_KEY),
        }
    }

    /// Converts the snapshot into a WebDAV transport configuration.
    pub fn to_webdav_config(&self) -> WebdavConfig {
        WebdavConfig::new(&self.endpoint)
            .with_credentials(&self.username, &self.password)
            .with_ignore_tls_errors(self.ignore_tls_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemorySettings;

    #[test]
    fn resolves_profile_keys() {
        let settings = MemorySettings::new();
        settings.set("sync.5.path", "https://cloud.example.com/vault");
        settings.set("sync.5.username", "alice");
        settings.set("sync.5.password", "s3cret");
        settings.set(IGNORE_TLS_KEY, "true");

        let credentials = Credentials::resolve(&settings, 5);
        assert_eq!(credentials.endpoint, "https://cloud.example.com/vault");
        assert_eq!(credentials.username, "alice");
        assert_eq!(credentials.password, "s3cret");
        assert!(credentials.ignore_tls_errors);
    }

    #[test]
    fn unset_keys_resolve_to_defaults() {
        let settings = MemorySettings::new();
        let credentials = Credentials::resolve(&settings, 5);
        assert!(credentials.endpoint.is_empty());
        assert!(!credentials.ignore_tls_errors);
    }

    #[test]
    fn profiles_do_not_share_keys() {
        let settings = MemorySettings::new();
        settings.set("sync.5.path", "https://nextcloud.example.com");
        settings.set("sync.6.path", "https://dav.example.com");

        assert_eq!(
            Credentials::resolve(&settings, 6).endpoint,
            "https://dav.example.com"
        );
    }

    #[test]
    fn webdav_config_conversion() {
        let credentials = Credentials {
            endpoint: "https://cloud.example.com/vault".into(),
            username: "alice".into(),
            password: "s3cret".into(),
            ignore_tls_errors: true,
        };
        let config = credentials.to_webdav_config();
        assert_eq!(config.endpoint, "https://cloud.example.com/vault");
        assert_eq!(config.username, "alice");
        assert!(config.ignore_tls_errors);
    }
}
