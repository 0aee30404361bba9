//! WebDAV implementation of the remote store.

use crate::config::{CheckResult, WebdavConfig};
use crate::error::{TransportError, TransportResult};
use crate::http::{HttpClient, HttpRequest, HttpResponse};
use crate::remote::RemoteStore;
use parking_lot::RwLock;
use tracing::Span;

/// PROPFIND body requesting the minimal properties needed for listing.
const PROPFIND_BODY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<d:propfind xmlns:d="DAV:">
  <d:prop>
    <d:resourcetype/>
  </d:prop>
</d:propfind>"#;

/// A remote store speaking WebDAV over an abstract HTTP client.
///
/// Object names are resolved against the configured endpoint; the
/// store itself keeps no cache and no session state beyond the
/// attached diagnostic span, so every call re-presents the configured
/// credentials.
pub struct WebdavStore<C: HttpClient> {
    config: WebdavConfig,
    client: C,
    span: RwLock<Span>,
}

impl<C: HttpClient> WebdavStore<C> {
    /// Creates a store for the given configuration.
    pub fn new(config: WebdavConfig, client: C) -> Self {
        Self {
            config,
            client,
            span: RwLock::new(Span::none()),
        }
    }

    /// Returns the configuration this store was built with.
    pub fn config(&self) -> &WebdavConfig {
        &self.config
    }

    fn object_url(&self, name: &str) -> String {
        format!("{}{}", self.config.base_url(), name)
    }

    fn request(&self, method: &str, url: &str) -> HttpRequest {
        let mut request = HttpRequest::new(method, url);
        if !self.config.username.is_empty() {
            request = request.with_basic_auth(&self.config.username, &self.config.password);
        }
        request
    }

    fn send(&self, request: &HttpRequest) -> TransportResult<HttpResponse> {
        self.client
            .send(request)
            .map_err(TransportError::Network)
    }
}

impl<C: HttpClient> RemoteStore for WebdavStore<C> {
    fn get(&self, name: &str) -> TransportResult<Option<String>> {
        let span = self.span.read().clone();
        let _guard = span.enter();

        let request = self.request("GET", &self.object_url(name));
        let response = self.send(&request)?;
        tracing::debug!(name, status = response.status, "webdav get");

        if response.status == 404 {
            return Ok(None);
        }
        if !response.is_success() {
            return Err(TransportError::from_status(
                response.status,
                status_text(&response),
            ));
        }
        let content = String::from_utf8(response.body)
            .map_err(|_| TransportError::InvalidBody { name: name.into() })?;
        Ok(Some(content))
    }

    fn put(&self, name: &str, content: &str) -> TransportResult<()> {
        let span = self.span.read().clone();
        let _guard = span.enter();

        let request = self
            .request("PUT", &self.object_url(name))
            .with_body(content.as_bytes().to_vec());
        let response = self.send(&request)?;
        tracing::debug!(name, status = response.status, "webdav put");

        if !response.is_success() {
            return Err(TransportError::from_status(
                response.status,
                status_text(&response),
            ));
        }
        Ok(())
    }

    fn list(&self) -> TransportResult<Vec<String>> {
        let span = self.span.read().clone();
        let _guard = span.enter();

        let request = self
            .request("PROPFIND", &self.config.base_url())
            .with_header("Depth", "1")
            .with_header("Content-Type", "application/xml")
            .with_body(PROPFIND_BODY.as_bytes().to_vec());
        let response = self.send(&request)?;
        tracing::debug!(status = response.status, "webdav propfind");

        if !response.is_success() {
            return Err(TransportError::from_status(
                response.status,
                status_text(&response),
            ));
        }
        let body = String::from_utf8_lossy(&response.body);
        Ok(names_from_propfind(&body, &self.config.base_url()))
    }

    fn delete(&self, name: &str) -> TransportResult<()> {
        let span = self.span.read().clone();
        let _guard = span.enter();

        let request = self.request("DELETE", &self.object_url(name));
        let response = self.send(&request)?;
        tracing::debug!(name, status = response.status, "webdav delete");

        // Deleting a missing object is a no-op.
        if response.status == 404 || response.is_success() {
            return Ok(());
        }
        Err(TransportError::from_status(
            response.status,
            status_text(&response),
        ))
    }

    fn attach_span(&self, span: Span) {
        *self.span.write() = span;
    }
}

/// Checks a WebDAV configuration against the live remote.
///
/// This is the transport layer's own validation routine: it performs a
/// PROPFIND round-trip against the configured endpoint and reports the
/// outcome as a [`CheckResult`]. It never returns an error; everything
/// that can go wrong, including a malformed endpoint, ends up in the
/// result's message.
pub fn check_webdav_config<C: HttpClient>(config: &WebdavConfig, client: &C) -> CheckResult {
    let url = config.base_url();
    let mut request = HttpRequest::new("PROPFIND", &url)
        .with_header("Depth", "0")
        .with_header("Content-Type", "application/xml")
        .with_body(PROPFIND_BODY.as_bytes().to_vec());
    if !config.username.is_empty() {
        request = request.with_basic_auth(&config.username, &config.password);
    }

    match client.send(&request) {
        Ok(response) if response.is_success() => CheckResult::ok(),
        Ok(response) if response.status == 401 || response.status == 403 => CheckResult::fail(
            format!(
                "authentication failed (HTTP {}): check username and password",
                response.status
            ),
        ),
        Ok(response) => CheckResult::fail(format!(
            "unexpected response from {} (HTTP {})",
            url, response.status
        )),
        Err(e) => CheckResult::fail(format!("could not connect to {}: {}", url, e)),
    }
}

fn status_text(response: &HttpResponse) -> String {
    let text = String::from_utf8_lossy(&response.body);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        "no response body".to_string()
    } else {
        // Servers return HTML error pages; keep the diagnostic short.
        trimmed.chars().take(200).collect()
    }
}

/// Extracts object names from a PROPFIND multistatus body.
///
/// The parser is deliberately narrow: it pulls `href` elements out of
/// the XML, decodes them, and strips the collection's own entry. It
/// handles the namespace prefixes real servers use (`d:`, `D:`, none)
/// without a full XML dependency.
fn names_from_propfind(body: &str, base_url: &str) -> Vec<String> {
    let base_path = url::Url::parse(base_url)
        .map(|u| u.path().to_string())
        .unwrap_or_else(|_| base_url.to_string());
    let base_path = base_path.trim_end_matches('/').to_string();

    let lower = body.to_ascii_lowercase();
    let mut names = Vec::new();
    let mut cursor = 0;
    while let Some(open) = lower[cursor..].find("href>") {
        let at = cursor + open;
        let start = at + "href>".len();
        cursor = start;
        // Closing tags (`</d:href>`) and other elements whose names
        // merely end in "href" are not element starts.
        if !is_href_open_tag(&lower, at) {
            continue;
        }
        let Some(close) = lower[start..].find("</") else {
            break;
        };
        let href = body[start..start + close].trim();
        cursor = start + close;

        let path = percent_decode(href);
        // Some servers return absolute URLs in hrefs.
        let path = if path.starts_with("http://") || path.starts_with("https://") {
            url::Url::parse(&path)
                .map(|u| u.path().to_string())
                .unwrap_or(path)
        } else {
            path
        };
        let path = path.trim_end_matches('/');
        // Skip the collection itself.
        if path.is_empty() || path == base_path {
            continue;
        }
        if let Some(name) = path.rsplit('/').next() {
            if !name.is_empty() {
                names.push(name.to_string());
            }
        }
    }
    names
}

/// Returns true when the `href>` match at `at` is the end of an
/// opening tag: `<href>` or `<prefix:href>`, any namespace prefix.
fn is_href_open_tag(lower: &str, at: usize) -> bool {
    let bytes = lower.as_bytes();
    if at == 0 {
        return false;
    }
    match bytes[at - 1] {
        b'<' => true,
        // Walk back over a namespace prefix (`d:`, `ns0:`, ...).
        b':' => {
            let mut i = at - 1;
            while i > 0 && bytes[i - 1].is_ascii_alphanumeric() {
                i -= 1;
            }
            i > 0 && bytes[i - 1] == b'<'
        }
        _ => false,
    }
}

/// Decodes percent-encoded bytes in an href.
///
/// A `%` not followed by two hex digits is passed through untouched;
/// hrefs come from the server, so nothing here may panic on arbitrary
/// input.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit()
        {
            // Both digits are ASCII, so the slice is boundary-safe.
            let hex = &input[i + 1..i + 3];
            if let Ok(byte) = u8::from_str_radix(hex, 16) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
