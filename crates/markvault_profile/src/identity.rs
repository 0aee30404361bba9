//! Profile identity constants.

/// Immutable identity of a sync target.
///
/// Identities are defined once as statics and never mutated; the
/// numeric id doubles as the namespace for the profile's settings keys
/// (`sync.<id>.path` and friends), so existing deployments depend on
/// these values staying fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileIdentity {
    id: u32,
    target_name: &'static str,
    label: &'static str,
    description: &'static str,
    requires_password: bool,
    supports_config_check: bool,
}

impl ProfileIdentity {
    /// Numeric identity, stable across releases.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Machine name used in settings and on the wire.
    pub fn target_name(&self) -> &'static str {
        self.target_name
    }

    /// Human-readable display label.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// One-line description for target pickers.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Whether this target cannot work without a password.
    pub fn requires_password(&self) -> bool {
        self.requires_password
    }

    /// Whether this target can validate a configuration before use.
    pub fn supports_config_check(&self) -> bool {
        self.supports_config_check
    }
}

/// The Nextcloud sync target.
///
/// Nextcloud is a thin wrapper over the WebDAV family; it exists as a
/// distinct, user-selectable target with its own identity.
pub static NEXTCLOUD: ProfileIdentity = ProfileIdentity {
    id: 5,
    target_name: "nextcloud",
    label: "Nextcloud",
    description: "A suite of client-server software for creating and using file hosting services.",
    requires_password: true,
    supports_config_check: true,
};

/// The plain WebDAV sync target.
pub static WEBDAV: ProfileIdentity = ProfileIdentity {
    id: 6,
    target_name: "webdav",
    label: "WebDAV",
    description: "A file hosting service that supports the WebDAV protocol.",
    requires_password: true,
    supports_config_check: true,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nextcloud_identity_constants() {
        assert_eq!(NEXTCLOUD.id(), 5);
        assert_eq!(NEXTCLOUD.target_name(), "nextcloud");
        assert_eq!(NEXTCLOUD.label(), "Nextcloud");
        assert!(NEXTCLOUD.requires_password());
        assert!(NEXTCLOUD.supports_config_check());
    }

    #[test]
    fn identities_are_distinct() {
        assert_ne!(NEXTCLOUD.id(), WEBDAV.id());
        assert_ne!(NEXTCLOUD.target_name(), WEBDAV.target_name());
    }
}
