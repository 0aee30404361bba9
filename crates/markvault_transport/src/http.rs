//! HTTP client abstraction.
//!
//! The WebDAV store is generic over an [`HttpClient`] so that tests
//! can script responses without a network, and so the HTTP library can
//! be swapped without touching transport semantics.

use std::time::Duration;

/// A single HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method (`GET`, `PUT`, `DELETE`, `PROPFIND`, ...).
    pub method: String,
    /// Absolute URL.
    pub url: String,
    /// Extra headers as (name, value) pairs.
    pub headers: Vec<(String, String)>,
    /// Basic auth credentials, if any.
    pub basic_auth: Option<(String, String)>,
    /// Request body, if any.
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a request with no headers, auth, or body.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: Vec::new(),
            basic_auth: None,
            body: None,
        }
    }

    /// Adds a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets basic auth credentials.
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some((username.into(), password.into()));
        self
    }

    /// Sets the request body.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// A raw HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking HTTP client abstraction.
///
/// Errors are transport-level failures (DNS, TCP, TLS); a response
/// with a non-2xx status is still `Ok` and interpreted by the caller.
pub trait HttpClient: Send + Sync {
    /// Sends a request and returns the raw response.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, String>;
}

/// Real HTTP client backed by `reqwest`'s blocking API.
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Builds a client.
    ///
    /// When `ignore_tls_errors` is set, invalid certificates are
    /// accepted. Deployments behind self-signed certificates rely on
    /// this; everyone else should leave it off.
    pub fn new(ignore_tls_errors: bool) -> Result<Self, String> {
        let client = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(ignore_tls_errors)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| e.to_string())?;
        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, String> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|e| format!("invalid HTTP method {:?}: {}", request.method, e))?;
        let url =
            reqwest::Url::parse(&request.url).map_err(|e| format!("invalid URL: {}", e))?;

        let mut builder = self.client.request(method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some((username, password)) = &request.basic_auth {
            builder = builder.basic_auth(username, Some(password));
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(|e| e.to_string())?.to_vec();
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder() {
        let request = HttpRequest::new("PROPFIND", "https://dav.example.com/vault/")
            .with_header("Depth", "1")
            .with_basic_auth("alice", "s3cret")
            .with_body(b"<propfind/>".to_vec());

        assert_eq!(request.method, "PROPFIND");
        assert_eq!(request.headers, vec![("Depth".to_string(), "1".to_string())]);
        assert_eq!(
            request.basic_auth,
            Some(("alice".to_string(), "s3cret".to_string()))
        );
        assert!(request.body.is_some());
    }

    #[test]
    fn response_success_range() {
        assert!(HttpResponse { status: 204, body: vec![] }.is_success());
        assert!(HttpResponse { status: 207, body: vec![] }.is_success());
        assert!(!HttpResponse { status: 404, body: vec![] }.is_success());
        assert!(!HttpResponse { status: 301, body: vec![] }.is_success());
    }
}
