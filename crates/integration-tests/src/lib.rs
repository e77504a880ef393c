//! Integration test harness for Overland Parts.
//!
//! Tests drive the real routers in process rather than over a socket:
//! [`TestClient`] sends requests through `tower::ServiceExt::oneshot` and
//! carries cookies between them, so session flows (cart, login) behave as
//! they would in a browser.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p overland-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use secrecy::SecretString;
use tower::ServiceExt;

/// High-entropy signing secret for test sessions.
const TEST_SESSION_SECRET: &str = "k9Qw3Zx7Lm2Vt8Rp5Hn1Jd6Fb4Sy0Cg9Ue3Ia7Oq5Wl2Nv8Km4Xz6Tr1Pj3Dh5F";

/// Client IP sent on every request so the per-IP rate limiter has a key.
const TEST_CLIENT_IP: &str = "203.0.113.10";

/// A collected response: status, headers, and the full body as text.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header, if the response is a redirect.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers.get(header::LOCATION)?.to_str().ok()
    }

    /// Assert this response redirects to `path`.
    ///
    /// # Panics
    ///
    /// Panics when the status is not a redirect or the target differs.
    pub fn assert_redirect(&self, path: &str) {
        assert!(
            self.status.is_redirection(),
            "expected redirect, got {} with body: {}",
            self.status,
            self.body
        );
        assert_eq!(self.location(), Some(path));
    }
}

/// An in-process browser: a router plus a cookie jar.
///
/// Each test builds its own router (and therefore its own session store
/// and rate limiter), so tests never share state.
pub struct TestClient {
    router: Router,
    cookies: HashMap<String, String>,
}

impl TestClient {
    #[must_use]
    pub fn new(router: Router) -> Self {
        Self {
            router,
            cookies: HashMap::new(),
        }
    }

    /// Send a GET request.
    pub async fn get(&mut self, path: &str) -> TestResponse {
        self.send(Method::GET, path, None, false).await
    }

    /// Send a form POST, as a plain browser form submission would.
    pub async fn post_form(&mut self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        self.send(Method::POST, path, Some(encode_form(fields)), false)
            .await
    }

    /// Send a form POST with the `HX-Request` header set, as htmx does.
    pub async fn post_form_htmx(&mut self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        self.send(Method::POST, path, Some(encode_form(fields)), true)
            .await
    }

    /// Replace the stored session cookie with a tampered value.
    ///
    /// Signed cookies fail verification after this, which the routers must
    /// treat as "no session" rather than an error page.
    pub fn tamper_cookie(&mut self, name: &str) {
        if let Some(value) = self.cookies.get_mut(name) {
            value.push_str("tampered");
        }
    }

    /// Whether the jar currently holds a cookie with this name.
    #[must_use]
    pub fn has_cookie(&self, name: &str) -> bool {
        self.cookies.get(name).is_some_and(|v| !v.is_empty())
    }

    async fn send(
        &mut self,
        method: Method,
        path: &str,
        body: Option<String>,
        htmx: bool,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header("x-forwarded-for", TEST_CLIENT_IP);

        if let Some(cookie_header) = self.cookie_header() {
            builder = builder.header(header::COOKIE, cookie_header);
        }
        if htmx {
            builder = builder.header("hx-request", "true");
        }

        let request = match body {
            Some(form) => builder
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form)),
            None => builder.body(Body::empty()),
        }
        .expect("request construction cannot fail for test inputs");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router service is infallible");

        let (parts, body) = response.into_parts();
        self.store_cookies(&parts.headers);

        let bytes = body
            .collect()
            .await
            .expect("body collection cannot fail in process")
            .to_bytes();
        let body = String::from_utf8_lossy(&bytes).into_owned();

        TestResponse {
            status: parts.status,
            headers: parts.headers,
            body,
        }
    }

    fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        Some(
            self.cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    fn store_cookies(&mut self, headers: &HeaderMap) {
        for set_cookie in headers.get_all(header::SET_COOKIE) {
            let Ok(raw) = set_cookie.to_str() else {
                continue;
            };
            let pair = raw.split(';').next().unwrap_or_default();
            if let Some((name, value)) = pair.split_once('=') {
                if value.is_empty() {
                    self.cookies.remove(name);
                } else {
                    self.cookies.insert(name.to_owned(), value.to_owned());
                }
            }
        }
    }
}

/// Percent-encode form fields the way a browser submits them.
fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(name, value)| format!("{}={}", encode_component(name), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

// =============================================================================
// Application Builders
// =============================================================================

/// A storefront config for tests; nothing reads the network fields.
#[must_use]
pub fn storefront_config() -> overland_storefront::config::StorefrontConfig {
    overland_storefront::config::StorefrontConfig {
        host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
        port: 0,
        base_url: "http://localhost:3000".to_owned(),
        session_secret: SecretString::from(TEST_SESSION_SECRET),
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 1.0,
    }
}

/// An admin config for tests.
#[must_use]
pub fn admin_config() -> overland_admin::config::AdminConfig {
    overland_admin::config::AdminConfig {
        host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
        port: 0,
        base_url: "http://localhost:3001".to_owned(),
        session_secret: SecretString::from(TEST_SESSION_SECRET),
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 1.0,
    }
}

/// Build the full storefront router with the demo account seeded.
///
/// # Panics
///
/// Panics when the content directory cannot be loaded or the demo account
/// cannot be hashed.
#[must_use]
pub fn storefront_app() -> Router {
    let content_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../storefront/content");
    let state = overland_storefront::state::AppState::new(storefront_config(), &content_dir)
        .expect("storefront state builds from the checked-in content tree");
    overland_storefront::app(state)
}

/// Build the full admin router with the demo admin enrolled.
///
/// # Panics
///
/// Panics when the demo admin cannot be enrolled.
#[must_use]
pub fn admin_app() -> Router {
    let state = overland_admin::state::AppState::new(admin_config())
        .expect("admin state builds with the seeded directory");
    overland_admin::app(state)
}

/// The admin router plus handles on its injected stores, for tests that
/// inspect what a request changed.
#[must_use]
pub fn admin_app_with_settings() -> (Router, Arc<overland_admin::services::StoreSettings>) {
    let settings = Arc::new(overland_admin::services::StoreSettings::with_defaults());
    let directory = Arc::new(
        overland_admin::services::AdminDirectory::seeded()
            .expect("admin directory seeds the demo admin"),
    );
    let state = overland_admin::state::AppState::with_stores(
        admin_config(),
        directory,
        Arc::clone(&settings),
    );
    (overland_admin::app(state), settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_encoding_escapes_reserved_bytes() {
        let encoded = encode_form(&[("email", "customer@example.com"), ("note", "a b&c")]);
        assert_eq!(encoded, "email=customer%40example.com&note=a+b%26c");
    }
}
