//! WebDAV transport configuration.

use serde::{Deserialize, Serialize};

/// Connection parameters for a WebDAV remote.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebdavConfig {
    /// Base URL of the remote directory, e.g.
    /// `https://cloud.example.com/remote.php/webdav/vault`.
    pub endpoint: String,
    /// Username for HTTP basic auth.
    pub username: String,
    /// Password (or app password) for HTTP basic auth.
    pub password: String,
    /// Whether to accept invalid TLS certificates.
    pub ignore_tls_errors: bool,
}

impl WebdavConfig {
    /// Creates a configuration for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Sets the basic auth credentials.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Sets whether invalid TLS certificates are tolerated.
    pub fn with_ignore_tls_errors(mut self, ignore: bool) -> Self {
        self.ignore_tls_errors = ignore;
        self
    }

    /// Returns the endpoint with exactly one trailing slash.
    ///
    /// WebDAV servers treat `/vault` and `/vault/` differently for
    /// collection requests, so object URLs are always built against
    /// the slash-terminated form.
    pub fn base_url(&self) -> String {
        let trimmed = self.endpoint.trim_end_matches('/');
        format!("{}/", trimmed)
    }
}

/// Outcome of a configuration check.
///
/// Failures are carried in the value; checking a configuration never
/// raises an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether the remote accepted the configuration.
    pub success: bool,
    /// Diagnostic text for failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckResult {
    /// A passing check.
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// A failing check with diagnostic text.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}
